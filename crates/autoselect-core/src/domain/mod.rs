//! Domain model (ids, session, settings, decisions, events).

pub mod decision;
pub mod events;
pub mod ids;
pub mod session;
pub mod settings;

pub use decision::{ActionRef, PendingGrab, UpcomingAction};
pub use events::AutoSelectEvent;
pub use ids::{ActionId, CellId, ChampionId, Puuid};
pub use session::{Action, ActionRound, ActionType, Bans, BenchChampion, SelfSummoner, Session, TeamMember};
pub use settings::{AutoSelectSettings, EnginePolicy};
