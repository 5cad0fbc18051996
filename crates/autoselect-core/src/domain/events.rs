//! Events - ドメインイベント
//!
//! 導出結果が「値として」変わったときだけ発行されます。
//! 同値の再計算ではイベントは出ません。

use serde::Serialize;

use super::decision::{PendingGrab, UpcomingAction};

/// AutoSelectEvent は決定値の変化を表す
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AutoSelectEvent {
    UpcomingPickChanged(Option<UpcomingAction>),
    UpcomingBanChanged(Option<UpcomingAction>),
    UpcomingGrabChanged(Option<PendingGrab>),
}

impl AutoSelectEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AutoSelectEvent::UpcomingPickChanged(_) => "upcoming_pick_changed",
            AutoSelectEvent::UpcomingBanChanged(_) => "upcoming_ban_changed",
            AutoSelectEvent::UpcomingGrabChanged(_) => "upcoming_grab_changed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_is_tagged() {
        let v = serde_json::to_value(AutoSelectEvent::UpcomingBanChanged(None)).unwrap();
        assert_eq!(v["kind"], "upcoming_ban_changed");
        assert!(v["value"].is_null());
    }
}
