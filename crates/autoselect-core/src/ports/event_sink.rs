//! EventSink port - イベント記録の抽象化
//!
//! - NoopEventSink: 何もしない
//! - TracingEventSink: tracing に流す

use std::sync::Mutex;

use crate::domain::AutoSelectEvent;

/// EventSink はドメインイベントを受け取る
///
/// UI や状態公開側はここを実装して決定値の変化を購読します。
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &AutoSelectEvent);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: &AutoSelectEvent) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &AutoSelectEvent) {
        match event {
            AutoSelectEvent::UpcomingPickChanged(Some(u))
            | AutoSelectEvent::UpcomingBanChanged(Some(u)) => {
                tracing::debug!(
                    event = event.name(),
                    champion_id = u.champion_id.get(),
                    action_id = u.action.id.get(),
                    acting_now = u.is_acting_now,
                    "decision changed"
                );
            }
            AutoSelectEvent::UpcomingGrabChanged(Some(g)) => {
                tracing::debug!(
                    event = event.name(),
                    champion_id = g.champion_id.get(),
                    will_grab_at = %g.will_grab_at,
                    "decision changed"
                );
            }
            _ => tracing::debug!(event = event.name(), "decision cleared"),
        }
    }
}

/// メモリに溜めるだけの EventSink（テスト・デバッグ用）
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<AutoSelectEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 溜まったイベントを取り出す
    pub fn drain(&self) -> Vec<AutoSelectEvent> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *events)
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: &AutoSelectEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
    }
}

impl<S: EventSink + ?Sized> EventSink for std::sync::Arc<S> {
    fn emit(&self, event: &AutoSelectEvent) {
        (**self).emit(event)
    }
}
