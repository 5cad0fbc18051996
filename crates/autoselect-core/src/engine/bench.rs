//! Bench grab targeting.
//!
//! Picks the champion worth swapping in from the shared bench. The result is
//! what the driver arms the grab scheduler with.

use crate::context::ContextSnapshot;
use crate::domain::{AutoSelectSettings, ChampionId};

/// First preferred bench champion that ranks strictly better than what we
/// currently hold. A held champion missing from the list ranks last.
pub fn grab_target(snapshot: &ContextSnapshot, settings: &AutoSelectSettings) -> Option<ChampionId> {
    if !settings.bench_mode_enabled || settings.bench_expected_champions.is_empty() {
        return None;
    }

    let session = snapshot.session.as_ref()?;
    if !session.bench_enabled {
        return None;
    }

    let me = session.my_member(snapshot.puuid.as_ref()?)?;
    let preferences = &settings.bench_expected_champions;
    let current_rank = preferences
        .iter()
        .position(|c| *c == me.champion_id)
        .unwrap_or(preferences.len());

    preferences[..current_rank]
        .iter()
        .copied()
        .find(|c| session.is_on_bench(*c))
}
