//! Logging setup and status views.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::domain::{PendingGrab, UpcomingAction};
use crate::engine::Decisions;

/// Install a fmt subscriber writing to stderr. `RUST_LOG` wins over
/// `default_filter`.
///
/// Returns false when a global subscriber is already set.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Current engine outputs, for display and debugging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStatus {
    pub session_version: u64,
    pub upcoming_pick: Option<UpcomingAction>,
    pub upcoming_ban: Option<UpcomingAction>,
    pub upcoming_grab: Option<PendingGrab>,
}

impl EngineStatus {
    pub fn new(session_version: u64, decisions: Decisions, upcoming_grab: Option<PendingGrab>) -> Self {
        Self {
            session_version,
            upcoming_pick: decisions.upcoming_pick,
            upcoming_ban: decisions.upcoming_ban,
            upcoming_grab,
        }
    }
}
