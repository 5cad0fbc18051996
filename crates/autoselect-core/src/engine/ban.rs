//! Upcoming ban derivation.

use std::collections::HashSet;

use crate::context::ContextSnapshot;
use crate::domain::{ActionId, ActionRef, AutoSelectSettings, ChampionId, UpcomingAction};

use super::action_context::{SelfActionContext, self_action_context};

/// The champion we would ban next, or `None`.
///
/// `bannedChampions` may hold the empty-ban sentinel; it is only eligible
/// outside custom games, which reject empty bans.
pub fn upcoming_ban(
    snapshot: &ContextSnapshot,
    settings: &AutoSelectSettings,
) -> Option<UpcomingAction> {
    if !settings.ban_enabled {
        return None;
    }

    let ctx = self_action_context(snapshot)?;
    if ctx.ban_actions.is_empty() {
        return None;
    }

    let first = ctx.first_incomplete_ban()?;
    let unbannables = unbannable_champions(&ctx, settings);
    let is_custom_game = ctx.session.is_custom_game;

    let champion_id = settings.banned_champions.iter().copied().find(|c| {
        if c.is_empty_ban() {
            !is_custom_game
        } else {
            !unbannables.contains(c) && ctx.current_bannables.contains(c)
        }
    })?;

    Some(UpcomingAction {
        champion_id,
        is_acting_now: ctx.is_acting_now,
        action: ActionRef::from(first),
    })
}

pub fn unbannable_champions(
    ctx: &SelfActionContext<'_>,
    settings: &AutoSelectSettings,
) -> HashSet<ChampionId> {
    let session = ctx.session;
    let mut unbannables = HashSet::new();

    // an empty ban blocks nothing
    for a in session
        .all_actions()
        .filter(|a| a.is_ban() && a.completed && a.id != ActionId::NO_OP)
    {
        unbannables.insert(a.champion_id);
    }

    unbannables.extend(session.bans.all());

    if !settings.ban_teammate_intended_champion {
        unbannables.extend(ctx.teammate_intents());
    }

    unbannables
}
