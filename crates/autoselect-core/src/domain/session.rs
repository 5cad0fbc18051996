//! Champion-select session model.
//!
//! These types mirror the subset of the client's `/lol-champ-select/v1/session`
//! payload that the engine reads. Every field defaults when missing so a
//! partial payload degrades to "nothing decided" instead of a decode error.

use serde::{Deserialize, Serialize};

use super::ids::{ActionId, CellId, ChampionId, Puuid};

/// A player seated in champion select.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamMember {
    pub puuid: Puuid,
    pub cell_id: CellId,

    /// Locked or hovered champion. Unset until chosen.
    pub champion_id: ChampionId,

    /// Non-binding preview of the likely pick, visible to teammates.
    pub champion_pick_intent: ChampionId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Pick,
    Ban,

    /// Phase markers like `ten_bans_reveal`; ignored by every rule.
    #[default]
    #[serde(other)]
    Other,
}

/// A turn-scoped pick or ban a specific seat must complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Action {
    pub id: ActionId,
    pub actor_cell_id: CellId,
    pub champion_id: ChampionId,
    #[serde(rename = "type")]
    pub kind: ActionType,
    pub completed: bool,
    pub is_in_progress: bool,
}

impl Action {
    pub fn is_pick(&self) -> bool {
        self.kind == ActionType::Pick
    }

    pub fn is_ban(&self) -> bool {
        self.kind == ActionType::Ban
    }
}

/// Actions that may resolve simultaneously. Round order is turn order.
pub type ActionRound = Vec<Action>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bans {
    pub my_team_bans: Vec<ChampionId>,
    pub their_team_bans: Vec<ChampionId>,
}

impl Bans {
    pub fn all(&self) -> impl Iterator<Item = ChampionId> + '_ {
        self.my_team_bans
            .iter()
            .chain(self.their_team_bans.iter())
            .copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BenchChampion {
    pub champion_id: ChampionId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    pub my_team: Vec<TeamMember>,
    pub their_team: Vec<TeamMember>,
    pub actions: Vec<ActionRound>,
    pub bans: Bans,
    pub has_simultaneous_picks: bool,
    pub allow_duplicate_picks: bool,
    pub is_custom_game: bool,
    pub local_player_cell_id: CellId,
    pub bench_enabled: bool,
    pub bench_champions: Vec<BenchChampion>,
}

impl Session {
    /// Both teams, own team first.
    pub fn members(&self) -> impl Iterator<Item = &TeamMember> {
        self.my_team.iter().chain(self.their_team.iter())
    }

    /// Every action across every round, in round order.
    pub fn all_actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter().flatten()
    }

    pub fn my_member(&self, puuid: &Puuid) -> Option<&TeamMember> {
        self.my_team.iter().find(|m| &m.puuid == puuid)
    }

    pub fn is_on_bench(&self, champion_id: ChampionId) -> bool {
        self.bench_champions
            .iter()
            .any(|b| b.champion_id == champion_id)
    }
}

/// Turn status of the local seat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelfSummoner {
    pub cell_id: CellId,
    pub is_acting_now: bool,
}

impl SelfSummoner {
    /// Derive the local seat's status from the session: acting now means the
    /// seat owns an action that is in progress and not yet completed.
    pub fn from_session(session: &Session) -> Self {
        let cell_id = session.local_player_cell_id;
        let is_acting_now = session
            .all_actions()
            .any(|a| a.actor_cell_id == cell_id && a.is_in_progress && !a.completed);
        Self {
            cell_id,
            is_acting_now,
        }
    }
}
