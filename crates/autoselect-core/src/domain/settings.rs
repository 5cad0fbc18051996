//! User-configured automation preferences.
//!
//! Settings are owned by the configuration layer; the engine only reads them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ids::ChampionId;

/// Auto-select preferences.
///
/// Champion lists are ordered: position is the tie-break, first eligible wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoSelectSettings {
    /// Master switch for automated picking.
    #[serde(alias = "normalModeEnabled")]
    pub normal_mode_enabled: bool,

    /// Only auto-pick in simultaneous-pick sessions.
    #[serde(alias = "onlySimulMode")]
    pub only_simul_mode: bool,

    #[serde(alias = "expectedChampions")]
    pub expected_champions: Vec<ChampionId>,

    /// Allow picking a champion a teammate has declared as intent.
    #[serde(alias = "selectTeammateIntendedChampion")]
    pub select_teammate_intended_champion: bool,

    /// Declare the upcoming pick as intent before our turn.
    #[serde(alias = "showIntent")]
    pub show_intent: bool,

    /// Lock the pick in when submitting on our turn.
    pub completed: bool,

    #[serde(alias = "benchModeEnabled")]
    pub bench_mode_enabled: bool,

    #[serde(alias = "benchExpectedChampions")]
    pub bench_expected_champions: Vec<ChampionId>,

    /// Wait between arming a bench grab and executing it.
    #[serde(alias = "grabDelaySeconds")]
    pub grab_delay_seconds: f64,

    #[serde(alias = "banEnabled")]
    pub ban_enabled: bool,

    /// May contain `-1` meaning "submit an empty ban".
    #[serde(alias = "bannedChampions")]
    pub banned_champions: Vec<ChampionId>,

    #[serde(alias = "banTeammateIntendedChampion")]
    pub ban_teammate_intended_champion: bool,
}

impl Default for AutoSelectSettings {
    fn default() -> Self {
        Self {
            normal_mode_enabled: false,
            only_simul_mode: false,
            expected_champions: Vec::new(),
            select_teammate_intended_champion: false,
            show_intent: false,
            completed: false,
            bench_mode_enabled: false,
            bench_expected_champions: Vec::new(),
            grab_delay_seconds: 1.0,
            ban_enabled: false,
            banned_champions: Vec::new(),
            ban_teammate_intended_champion: false,
        }
    }
}

impl AutoSelectSettings {
    /// Grab delay as a Duration. Negative or non-finite values clamp to zero.
    pub fn grab_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.grab_delay_seconds).unwrap_or(Duration::ZERO)
    }
}

/// Eligibility policy applied on top of the server's pickable set.
///
/// `high_id_override_threshold` grants blanket eligibility to champion ids at
/// or above the threshold even when the server does not list them. Meant for
/// test realms where such ids are never reported as pickable; disabled unless
/// configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnginePolicy {
    pub high_id_override_threshold: Option<i64>,
}

impl EnginePolicy {
    pub fn overrides(&self, champion_id: ChampionId) -> bool {
        self.high_id_override_threshold
            .is_some_and(|threshold| champion_id.get() >= threshold)
    }
}
