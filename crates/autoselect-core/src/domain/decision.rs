//! Decision model: what the automation should do next.
//!
//! These are the values the engine derives and the actuator consumes.
//! They compare by value so an unchanged derivation is not reported twice.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ActionId, ChampionId};
use super::session::Action;

/// The action a decision refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRef {
    pub id: ActionId,
    pub is_in_progress: bool,
    pub completed: bool,
}

impl From<&Action> for ActionRef {
    fn from(action: &Action) -> Self {
        Self {
            id: action.id,
            is_in_progress: action.is_in_progress,
            completed: action.completed,
        }
    }
}

/// Next pick or ban to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingAction {
    pub champion_id: ChampionId,
    pub is_acting_now: bool,
    pub action: ActionRef,
}

impl UpcomingAction {
    /// Our turn and the action is open: submitting now takes effect.
    pub fn is_actionable(&self) -> bool {
        self.is_acting_now && self.action.is_in_progress && !self.action.completed
    }
}

/// A bench grab waiting for its delay window to elapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingGrab {
    pub champion_id: ChampionId,
    pub will_grab_at: DateTime<Utc>,
}

impl PendingGrab {
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now >= self.will_grab_at
    }
}
