//! GrabScheduler - 遅延実行する bench grab の保持
//!
//! タイマーは持ちません。値を保持するだけで、
//! `will_grab_at` を過ぎたら実行するのは外側（driver）の責務です。
//!
//! # 再 arm
//! 保留中でも無条件に上書きし、待ち時間もリセットします（キューはしない）。

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::domain::{ChampionId, PendingGrab};
use crate::ports::Clock;

pub struct GrabScheduler<C> {
    clock: C,
    pending: Option<PendingGrab>,
}

impl<C: Clock> GrabScheduler<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            pending: None,
        }
    }

    /// `now + delay` に grab を予約し、既存の予約を置き換える
    pub fn arm(&mut self, champion_id: ChampionId, delay: Duration) -> PendingGrab {
        let now = self.clock.now();
        let grab = PendingGrab {
            champion_id,
            will_grab_at: fire_time(now, delay),
        };
        self.pending = Some(grab);
        grab
    }

    pub fn disarm(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<PendingGrab> {
        self.pending
    }

    pub fn is_due(&self) -> bool {
        let now = self.clock.now();
        self.pending.is_some_and(|g| g.is_due(now))
    }

    /// 期限を過ぎた予約があれば取り出してクリアする
    pub fn take_due(&mut self) -> Option<PendingGrab> {
        if self.is_due() {
            self.pending.take()
        } else {
            None
        }
    }
}

fn fire_time(now: DateTime<Utc>, delay: Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(delay)
        .ok()
        .and_then(|d| now.checked_add_signed(d))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
