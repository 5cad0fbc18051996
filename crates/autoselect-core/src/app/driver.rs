//! AutoSelectDriver - 決定を実際の操作に変換する制御ループ 1 tick 分
//!
//! # 1 tick の流れ
//! 1. エンジンを最新スナップショットで再評価
//! 2. bench grab の予約を更新（新しい対象なら arm、対象なしなら disarm）
//! 3. 期限を過ぎた grab を実行
//! 4. ban、pick（または intent 表示）を送信
//!
//! 同じ内容の送信は連続しては行いません。actuator のエラーは warn に記録し、
//! tick は中断しません。

use std::sync::Arc;

use crate::context::SessionContext;
use crate::domain::{
    ActionId, AutoSelectEvent, AutoSelectSettings, ChampionId, PendingGrab, UpcomingAction,
};
use crate::engine::{DecisionEngine, Decisions, grab_target};
use crate::grab::GrabScheduler;
use crate::observability::EngineStatus;
use crate::ports::{ChampSelectActuator, Clock, EventSink, NoopEventSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Pick,
    Ban,
}

/// 送信した 1 操作
///
/// action id は試合ごとに振り直されるので、重複判定は
/// SessionContext の `session_epoch` と組で行います。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub kind: SubmissionKind,
    pub action_id: ActionId,
    pub champion_id: ChampionId,
    pub complete: bool,
}

/// step() の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    pub decisions: Decisions,
    pub upcoming_grab: Option<PendingGrab>,
    pub swapped: Option<ChampionId>,
    pub submitted: Vec<Submission>,
}

pub struct AutoSelectDriver<A, C, E = NoopEventSink> {
    context: Arc<SessionContext>,
    engine: DecisionEngine<E>,
    grab: GrabScheduler<C>,
    actuator: A,
    settings: AutoSelectSettings,
    session_epoch: u64,
    last_pick: Option<Submission>,
    last_ban: Option<Submission>,
}

impl<A, C, E> AutoSelectDriver<A, C, E>
where
    A: ChampSelectActuator,
    C: Clock,
    E: EventSink,
{
    pub fn new(
        context: Arc<SessionContext>,
        engine: DecisionEngine<E>,
        grab: GrabScheduler<C>,
        actuator: A,
        settings: AutoSelectSettings,
    ) -> Self {
        Self {
            context,
            engine,
            grab,
            actuator,
            settings,
            session_epoch: 0,
            last_pick: None,
            last_ban: None,
        }
    }

    pub fn settings(&self) -> &AutoSelectSettings {
        &self.settings
    }

    /// 次の step から新しい設定で評価する
    pub fn set_settings(&mut self, settings: AutoSelectSettings) {
        self.settings = settings;
    }

    pub fn engine(&self) -> &DecisionEngine<E> {
        &self.engine
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn status(&self) -> EngineStatus {
        EngineStatus::new(self.context.version(), self.engine.decisions(), self.grab.pending())
    }

    pub async fn step(&mut self) -> StepReport {
        let snapshot = self.context.snapshot();
        let decisions = self.engine.refresh(&snapshot, &self.settings);

        // 試合が終わった、または次の試合が始まったら送信履歴を捨てる
        if snapshot.session.is_none() || snapshot.session_epoch != self.session_epoch {
            self.session_epoch = snapshot.session_epoch;
            self.last_pick = None;
            self.last_ban = None;
        }

        self.update_grab(grab_target(&snapshot, &self.settings));
        let swapped = self.run_due_grab().await;

        let mut submitted = Vec::new();
        if let Some(ban) = decisions.upcoming_ban.filter(UpcomingAction::is_actionable) {
            let submission = Submission {
                kind: SubmissionKind::Ban,
                action_id: ban.action.id,
                champion_id: ban.champion_id,
                complete: true,
            };
            if self.submit(submission).await {
                submitted.push(submission);
            }
        }

        if let Some(pick) = decisions.upcoming_pick {
            let complete = if pick.is_actionable() {
                Some(self.settings.completed)
            } else if self.settings.show_intent {
                Some(false)
            } else {
                None
            };
            if let Some(complete) = complete {
                let submission = Submission {
                    kind: SubmissionKind::Pick,
                    action_id: pick.action.id,
                    champion_id: pick.champion_id,
                    complete,
                };
                if self.submit(submission).await {
                    submitted.push(submission);
                }
            }
        }

        StepReport {
            decisions,
            upcoming_grab: self.grab.pending(),
            swapped,
            submitted,
        }
    }

    fn update_grab(&mut self, target: Option<ChampionId>) {
        let pending = self.grab.pending();
        match target {
            Some(champion_id) if pending.map(|g| g.champion_id) == Some(champion_id) => {}
            Some(champion_id) => {
                let grab = self.grab.arm(champion_id, self.settings.grab_delay());
                tracing::debug!(
                    champion_id = champion_id.get(),
                    will_grab_at = %grab.will_grab_at,
                    "bench grab armed"
                );
                self.emit_grab(Some(grab));
            }
            None if pending.is_some() => {
                self.grab.disarm();
                self.emit_grab(None);
            }
            None => {}
        }
    }

    async fn run_due_grab(&mut self) -> Option<ChampionId> {
        let grab = self.grab.take_due()?;
        self.emit_grab(None);

        match self.actuator.bench_swap(grab.champion_id).await {
            Ok(()) => {
                tracing::info!(champion_id = grab.champion_id.get(), "bench swap");
                Some(grab.champion_id)
            }
            Err(e) => {
                tracing::warn!(champion_id = grab.champion_id.get(), error = %e, "bench swap failed");
                None
            }
        }
    }

    /// 送信したら true。直前と同じ送信はスキップする
    async fn submit(&mut self, submission: Submission) -> bool {
        let last = match submission.kind {
            SubmissionKind::Pick => self.last_pick,
            SubmissionKind::Ban => self.last_ban,
        };
        if last == Some(submission) {
            return false;
        }

        let Submission {
            kind,
            action_id,
            champion_id,
            complete,
        } = submission;
        let result = match kind {
            SubmissionKind::Pick => self.actuator.pick(action_id, champion_id, complete).await,
            SubmissionKind::Ban => self.actuator.ban(action_id, champion_id, complete).await,
        };

        match result {
            Ok(()) => {
                tracing::info!(
                    kind = ?kind,
                    action_id = action_id.get(),
                    champion_id = champion_id.get(),
                    complete,
                    "submitted"
                );
                match kind {
                    SubmissionKind::Pick => self.last_pick = Some(submission),
                    SubmissionKind::Ban => self.last_ban = Some(submission),
                }
                true
            }
            Err(e) => {
                tracing::warn!(
                    kind = ?kind,
                    action_id = action_id.get(),
                    champion_id = champion_id.get(),
                    error = %e,
                    "submission failed"
                );
                false
            }
        }
    }

    fn emit_grab(&self, grab: Option<PendingGrab>) {
        self.engine
            .sink()
            .emit(&AutoSelectEvent::UpcomingGrabChanged(grab));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ChampSelectUpdate;
    use crate::domain::{BenchChampion, EnginePolicy, Puuid, Session};
    use crate::ports::{ActuatorError, FixedClock, RecordingEventSink};
    use crate::testing::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Pick(i64, i64, bool),
        Ban(i64, i64, bool),
        Swap(i64),
    }

    #[derive(Default)]
    struct RecordingActuator {
        calls: Mutex<Vec<Call>>,
        fail: Mutex<bool>,
    }

    impl RecordingActuator {
        fn take(&self) -> Vec<Call> {
            std::mem::take(&mut *self.calls.lock().unwrap())
        }

        fn record(&self, call: Call) -> Result<(), ActuatorError> {
            self.calls.lock().unwrap().push(call);
            if *self.fail.lock().unwrap() {
                Err(ActuatorError::Rejected("action not in progress".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ChampSelectActuator for RecordingActuator {
        async fn pick(&self, a: ActionId, c: ChampionId, complete: bool) -> Result<(), ActuatorError> {
            self.record(Call::Pick(a.get(), c.get(), complete))
        }

        async fn ban(&self, a: ActionId, c: ChampionId, complete: bool) -> Result<(), ActuatorError> {
            self.record(Call::Ban(a.get(), c.get(), complete))
        }

        async fn bench_swap(&self, c: ChampionId) -> Result<(), ActuatorError> {
            self.record(Call::Swap(c.get()))
        }
    }

    type TestDriver =
        AutoSelectDriver<RecordingActuator, Arc<FixedClock>, Arc<RecordingEventSink>>;

    struct Harness {
        ctx: Arc<SessionContext>,
        clock: Arc<FixedClock>,
        sink: Arc<RecordingEventSink>,
        driver: TestDriver,
    }

    fn harness(settings: AutoSelectSettings) -> Harness {
        let ctx = Arc::new(SessionContext::new());
        ctx.set_identity(Some(Puuid::from(ME)));
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ));
        let sink = Arc::new(RecordingEventSink::new());
        let driver = AutoSelectDriver::new(
            ctx.clone(),
            DecisionEngine::with_sink(EnginePolicy::default(), sink.clone()),
            GrabScheduler::new(clock.clone()),
            RecordingActuator::default(),
            settings,
        );
        Harness {
            ctx,
            clock,
            sink,
            driver,
        }
    }

    fn apply(ctx: &SessionContext, session: Session, pickables: &[i64], bannables: &[i64]) {
        ctx.apply(ChampSelectUpdate::from_session(
            session,
            champ_set(pickables),
            champ_set(bannables),
        ));
    }

    fn draft_settings() -> AutoSelectSettings {
        AutoSelectSettings {
            normal_mode_enabled: true,
            expected_champions: champs(&[10, 20]),
            show_intent: true,
            completed: true,
            ban_enabled: true,
            banned_champions: champs(&[30]),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn bans_then_locks_in_without_resubmitting() {
        let mut h = harness(draft_settings());

        // ban phase: ban now, declare the pick as intent
        apply(
            &h.ctx,
            solo_session(vec![vec![in_progress(ban(1, 0))], vec![pick(2, 0)]]),
            &[10, 20],
            &[30],
        );
        let report = h.driver.step().await;
        assert_eq!(report.submitted.len(), 2);
        assert_eq!(
            h.driver.actuator().take(),
            vec![Call::Ban(1, 30, true), Call::Pick(2, 10, false)]
        );

        // nothing changed: nothing resubmitted
        h.driver.step().await;
        assert!(h.driver.actuator().take().is_empty());

        // pick phase: lock in
        apply(
            &h.ctx,
            solo_session(vec![vec![done(ban(1, 0), 30)], vec![in_progress(pick(2, 0))]]),
            &[10, 20],
            &[],
        );
        h.driver.step().await;
        assert_eq!(h.driver.actuator().take(), vec![Call::Pick(2, 10, true)]);
    }

    #[tokio::test]
    async fn hovers_when_lock_in_is_disabled() {
        let mut h = harness(AutoSelectSettings {
            completed: false,
            show_intent: false,
            ..draft_settings()
        });
        apply(&h.ctx, solo_session(vec![vec![in_progress(pick(2, 0))]]), &[20], &[]);

        h.driver.step().await;
        assert_eq!(h.driver.actuator().take(), vec![Call::Pick(2, 20, false)]);
    }

    #[tokio::test]
    async fn no_intent_outside_our_turn_without_show_intent() {
        let mut h = harness(AutoSelectSettings {
            show_intent: false,
            ..draft_settings()
        });
        apply(&h.ctx, solo_session(vec![vec![pick(2, 0)]]), &[10], &[]);

        let report = h.driver.step().await;
        assert!(report.decisions.upcoming_pick.is_some());
        assert!(h.driver.actuator().take().is_empty());
    }

    #[tokio::test]
    async fn failed_submission_is_retried_next_tick() {
        let mut h = harness(draft_settings());
        apply(&h.ctx, solo_session(vec![vec![in_progress(pick(2, 0))]]), &[10], &[]);

        *h.driver.actuator().fail.lock().unwrap() = true;
        let report = h.driver.step().await;
        assert!(report.submitted.is_empty());
        assert_eq!(h.driver.actuator().take(), vec![Call::Pick(2, 10, true)]);

        *h.driver.actuator().fail.lock().unwrap() = false;
        let report = h.driver.step().await;
        assert_eq!(report.submitted.len(), 1);
        assert_eq!(h.driver.actuator().take(), vec![Call::Pick(2, 10, true)]);
    }

    fn bench_session(current: i64, bench: &[i64]) -> Session {
        Session {
            my_team: vec![member(ME, 0, current)],
            bench_enabled: true,
            bench_champions: bench
                .iter()
                .map(|id| BenchChampion {
                    champion_id: ChampionId::new(*id),
                })
                .collect(),
            ..Default::default()
        }
    }

    fn bench_settings() -> AutoSelectSettings {
        AutoSelectSettings {
            bench_mode_enabled: true,
            bench_expected_champions: champs(&[10, 20]),
            grab_delay_seconds: 2.0,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn bench_grab_waits_for_delay() {
        let mut h = harness(bench_settings());
        apply(&h.ctx, bench_session(99, &[20]), &[], &[]);

        let report = h.driver.step().await;
        let armed = report.upcoming_grab.unwrap();
        assert_eq!(armed.champion_id, ChampionId::new(20));
        assert_eq!(
            h.sink.drain(),
            vec![AutoSelectEvent::UpcomingGrabChanged(Some(armed))]
        );

        // unchanged target keeps its fire time
        h.clock.advance(Duration::from_secs(1));
        let report = h.driver.step().await;
        assert_eq!(report.upcoming_grab, Some(armed));
        assert!(h.driver.actuator().take().is_empty());
        assert!(h.sink.drain().is_empty());

        h.clock.advance(Duration::from_secs(1));
        let report = h.driver.step().await;
        assert_eq!(report.swapped, Some(ChampionId::new(20)));
        assert_eq!(h.driver.actuator().take(), vec![Call::Swap(20)]);
        assert_eq!(h.sink.drain(), vec![AutoSelectEvent::UpcomingGrabChanged(None)]);
    }

    #[tokio::test]
    async fn better_target_rearms_and_vanished_target_disarms() {
        let mut h = harness(bench_settings());
        apply(&h.ctx, bench_session(99, &[20]), &[], &[]);
        h.driver.step().await;

        h.clock.advance(Duration::from_secs(1));
        apply(&h.ctx, bench_session(99, &[20, 10]), &[], &[]);
        let report = h.driver.step().await;
        let grab = report.upcoming_grab.unwrap();
        assert_eq!(grab.champion_id, ChampionId::new(10));
        assert_eq!(grab.will_grab_at, h.clock.now() + chrono::Duration::seconds(2));

        apply(&h.ctx, bench_session(99, &[]), &[], &[]);
        let report = h.driver.step().await;
        assert_eq!(report.upcoming_grab, None);
        assert_eq!(
            h.sink.drain().last(),
            Some(&AutoSelectEvent::UpcomingGrabChanged(None))
        );
        assert_eq!(h.driver.status().upcoming_grab, None);
    }

    #[tokio::test]
    async fn next_game_locks_in_again_after_session_clears() {
        let mut h = harness(draft_settings());
        let game = || solo_session(vec![vec![in_progress(pick(1, 0))]]);

        apply(&h.ctx, game(), &[10], &[]);
        h.driver.step().await;
        h.ctx.clear_session();
        h.driver.step().await;
        apply(&h.ctx, game(), &[10], &[]);
        h.driver.step().await;

        assert_eq!(
            h.driver.actuator().take(),
            vec![Call::Pick(1, 10, true), Call::Pick(1, 10, true)]
        );
    }

    #[tokio::test]
    async fn next_game_is_not_deduped_even_without_an_idle_tick() {
        let mut h = harness(draft_settings());
        let game = || solo_session(vec![vec![in_progress(pick(1, 0))]]);

        apply(&h.ctx, game(), &[10], &[]);
        h.driver.step().await;
        // the driver never observes the gap between the two games
        h.ctx.clear_session();
        apply(&h.ctx, game(), &[10], &[]);
        h.driver.step().await;

        assert_eq!(
            h.driver.actuator().take(),
            vec![Call::Pick(1, 10, true), Call::Pick(1, 10, true)]
        );
    }
}
