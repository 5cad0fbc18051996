//! Decision engine.
//!
//! The derivations in [`pick`], [`ban`] and [`bench`] are pure functions of a
//! [`ContextSnapshot`] and the settings. [`DecisionEngine`] memoizes them per
//! snapshot version and reports changes through an [`EventSink`].

pub mod action_context;
pub mod ban;
pub mod bench;
pub mod memo;
pub mod pick;

pub use action_context::{SelfActionContext, self_action_context};
pub use ban::upcoming_ban;
pub use bench::grab_target;
pub use memo::Memo;
pub use pick::upcoming_pick;

use crate::context::ContextSnapshot;
use crate::domain::{AutoSelectEvent, AutoSelectSettings, EnginePolicy, UpcomingAction};
use crate::ports::{EventSink, NoopEventSink};

/// Inputs a derivation depends on.
#[derive(Debug, Clone, PartialEq)]
struct EvalKey {
    version: u64,
    settings: AutoSelectSettings,
}

/// Current pick and ban decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decisions {
    pub upcoming_pick: Option<UpcomingAction>,
    pub upcoming_ban: Option<UpcomingAction>,
}

pub struct DecisionEngine<E = NoopEventSink> {
    policy: EnginePolicy,
    sink: E,
    pick: Memo<EvalKey, Option<UpcomingAction>>,
    ban: Memo<EvalKey, Option<UpcomingAction>>,
}

impl DecisionEngine<NoopEventSink> {
    pub fn new(policy: EnginePolicy) -> Self {
        Self::with_sink(policy, NoopEventSink)
    }
}

impl<E: EventSink> DecisionEngine<E> {
    pub fn with_sink(policy: EnginePolicy, sink: E) -> Self {
        Self {
            policy,
            sink,
            pick: Memo::new(),
            ban: Memo::new(),
        }
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    /// Re-derive against `snapshot` and emit an event for every value that
    /// changed. Cheap when neither the snapshot version nor the settings moved.
    pub fn refresh(&mut self, snapshot: &ContextSnapshot, settings: &AutoSelectSettings) -> Decisions {
        let key = EvalKey {
            version: snapshot.version,
            settings: settings.clone(),
        };

        let policy = &self.policy;
        if self
            .pick
            .evaluate(key.clone(), || upcoming_pick(snapshot, settings, policy))
        {
            self.sink
                .emit(&AutoSelectEvent::UpcomingPickChanged(*self.pick.value()));
        }
        if self.ban.evaluate(key, || upcoming_ban(snapshot, settings)) {
            self.sink
                .emit(&AutoSelectEvent::UpcomingBanChanged(*self.ban.value()));
        }

        self.decisions()
    }

    /// Last evaluated decisions.
    pub fn decisions(&self) -> Decisions {
        Decisions {
            upcoming_pick: *self.pick.value(),
            upcoming_ban: *self.ban.value(),
        }
    }

    pub fn upcoming_pick(&self) -> Option<UpcomingAction> {
        *self.pick.value()
    }

    pub fn upcoming_ban(&self) -> Option<UpcomingAction> {
        *self.ban.value()
    }
}
