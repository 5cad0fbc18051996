//! Upcoming pick derivation.

use std::collections::HashSet;

use crate::context::ContextSnapshot;
use crate::domain::{ActionRef, AutoSelectSettings, ChampionId, EnginePolicy, UpcomingAction};

use super::action_context::{SelfActionContext, self_action_context};

/// The champion we would pick next, or `None` when nothing should be picked.
///
/// The first entry of `expected_champions` that is neither unpickable nor
/// refused by the server wins; list order is the only tie-break.
pub fn upcoming_pick(
    snapshot: &ContextSnapshot,
    settings: &AutoSelectSettings,
    policy: &EnginePolicy,
) -> Option<UpcomingAction> {
    if !settings.normal_mode_enabled || settings.expected_champions.is_empty() {
        return None;
    }

    let ctx = self_action_context(snapshot)?;
    if ctx.pick_actions.is_empty() {
        return None;
    }

    let first = ctx.first_incomplete_pick()?;

    // already locked in
    if ctx.self_member.champion_id.is_set() {
        return None;
    }

    if settings.only_simul_mode && !ctx.session.has_simultaneous_picks {
        return None;
    }

    let unpickables = unpickable_champions(&ctx, settings);

    let champion_id = settings.expected_champions.iter().copied().find(|c| {
        !unpickables.contains(c) && (ctx.current_pickables.contains(c) || policy.overrides(*c))
    })?;

    Some(UpcomingAction {
        champion_id,
        is_acting_now: ctx.is_acting_now,
        action: ActionRef::from(first),
    })
}

/// Champions nobody at this seat may pick right now.
pub fn unpickable_champions(
    ctx: &SelfActionContext<'_>,
    settings: &AutoSelectSettings,
) -> HashSet<ChampionId> {
    let session = ctx.session;
    let mut unpickables = HashSet::new();

    // anything visible on the board, except our own hover
    for m in session.members() {
        if m.champion_id.is_set() && m.puuid != ctx.self_member.puuid {
            unpickables.insert(m.champion_id);
        }
    }

    for m in &session.my_team {
        unpickables.insert(m.champion_id);
    }

    if !session.allow_duplicate_picks {
        for a in session.all_actions().filter(|a| a.completed) {
            unpickables.insert(a.champion_id);
        }
    }

    for a in session.all_actions().filter(|a| a.is_ban() && a.completed) {
        unpickables.insert(a.champion_id);
    }

    if !settings.select_teammate_intended_champion {
        unpickables.extend(ctx.teammate_intents());
    }

    unpickables.extend(session.bans.all());

    unpickables
}
