//! Test fixtures shared across module tests.

use std::collections::HashSet;

use crate::context::ContextSnapshot;
use crate::domain::{
    Action, ActionId, ActionType, CellId, ChampionId, Puuid, SelfSummoner, Session, TeamMember,
};

pub const ME: &str = "me";

pub fn member(puuid: &str, cell: i64, champion: i64) -> TeamMember {
    TeamMember {
        puuid: Puuid::from(puuid),
        cell_id: CellId::new(cell),
        champion_id: ChampionId::new(champion),
        champion_pick_intent: ChampionId::UNSET,
    }
}

pub fn with_intent(mut m: TeamMember, intent: i64) -> TeamMember {
    m.champion_pick_intent = ChampionId::new(intent);
    m
}

pub fn pick(id: i64, cell: i64) -> Action {
    Action {
        id: ActionId::new(id),
        actor_cell_id: CellId::new(cell),
        champion_id: ChampionId::UNSET,
        kind: ActionType::Pick,
        completed: false,
        is_in_progress: false,
    }
}

pub fn ban(id: i64, cell: i64) -> Action {
    Action {
        kind: ActionType::Ban,
        ..pick(id, cell)
    }
}

pub fn done(mut a: Action, champion: i64) -> Action {
    a.champion_id = ChampionId::new(champion);
    a.completed = true;
    a
}

pub fn in_progress(mut a: Action) -> Action {
    a.is_in_progress = true;
    a
}

pub fn champs(ids: &[i64]) -> Vec<ChampionId> {
    ids.iter().copied().map(ChampionId::new).collect()
}

pub fn champ_set(ids: &[i64]) -> HashSet<ChampionId> {
    ids.iter().copied().map(ChampionId::new).collect()
}

/// A session with the local player ("me") in cell 0 and nobody else.
pub fn solo_session(actions: Vec<Vec<Action>>) -> Session {
    Session {
        my_team: vec![member(ME, 0, 0)],
        actions,
        ..Default::default()
    }
}

pub fn snapshot(session: Session, pickables: &[i64], bannables: &[i64]) -> ContextSnapshot {
    let self_summoner = SelfSummoner {
        cell_id: session
            .my_member(&Puuid::from(ME))
            .map(|m| m.cell_id)
            .unwrap_or_default(),
        is_acting_now: true,
    };
    ContextSnapshot {
        version: 1,
        session_epoch: 1,
        session: Some(session),
        self_summoner: Some(self_summoner),
        puuid: Some(Puuid::from(ME)),
        current_pickable_champions: champ_set(pickables),
        current_bannable_champions: champ_set(bannables),
    }
}
