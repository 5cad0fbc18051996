//! The local player's view of the session: their seat, their actions.

use std::collections::HashSet;

use crate::context::ContextSnapshot;
use crate::domain::{Action, ChampionId, Session, TeamMember};

/// Everything the pick/ban derivations need, borrowed from one snapshot.
#[derive(Debug, Clone)]
pub struct SelfActionContext<'a> {
    /// Own pick actions in round order.
    pub pick_actions: Vec<&'a Action>,
    /// Own ban actions in round order.
    pub ban_actions: Vec<&'a Action>,
    pub session: &'a Session,
    pub self_member: &'a TeamMember,
    pub is_acting_now: bool,
    pub current_pickables: &'a HashSet<ChampionId>,
    pub current_bannables: &'a HashSet<ChampionId>,
}

impl<'a> SelfActionContext<'a> {
    pub fn first_incomplete_pick(&self) -> Option<&'a Action> {
        self.pick_actions.iter().copied().find(|a| !a.completed)
    }

    pub fn first_incomplete_ban(&self) -> Option<&'a Action> {
        self.ban_actions.iter().copied().find(|a| !a.completed)
    }

    /// Declared intents of teammates, ignoring our own.
    pub fn teammate_intents(&self) -> impl Iterator<Item = ChampionId> + use<'a> {
        let me = self.self_member;
        self.session
            .my_team
            .iter()
            .filter(move |m| m.champion_pick_intent.is_set() && m.puuid != me.puuid)
            .map(|m| m.champion_pick_intent)
    }
}

/// Locate our seat and collect the actions it owns.
///
/// Returns `None` without a session, identity or self-summoner, or when the
/// identity is not seated on our team.
pub fn self_action_context(snapshot: &ContextSnapshot) -> Option<SelfActionContext<'_>> {
    let session = snapshot.session.as_ref()?;
    let self_summoner = snapshot.self_summoner.as_ref()?;
    let puuid = snapshot.puuid.as_ref()?;
    let self_member = session.my_member(puuid)?;

    let own_rounds = session
        .actions
        .iter()
        .map(|round| {
            round
                .iter()
                .filter(|a| a.actor_cell_id == self_member.cell_id)
                .collect::<Vec<_>>()
        })
        .filter(|round| !round.is_empty());

    let mut pick_actions = Vec::new();
    let mut ban_actions = Vec::new();
    for action in own_rounds.flatten() {
        if action.is_pick() {
            pick_actions.push(action);
        } else if action.is_ban() {
            ban_actions.push(action);
        }
    }

    Some(SelfActionContext {
        pick_actions,
        ban_actions,
        session,
        self_member,
        is_acting_now: self_summoner.is_acting_now,
        current_pickables: &snapshot.current_pickable_champions,
        current_bannables: &snapshot.current_bannable_champions,
    })
}
