//! Actuator port - pick / ban / bench swap の実行
//!
//! エンジンは決定を出すだけで、実際のコマンド送信はこの trait の実装が行います。

use async_trait::async_trait;

use crate::domain::{ActionId, ChampionId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActuatorError {
    #[error("rejected by client: {0}")]
    Rejected(String),
}

/// ChampSelectActuator はクライアントへ操作を送る
///
/// `complete = false` は「選択表示（hover / intent）」、
/// `complete = true` は確定（lock in）を意味します。
#[async_trait]
pub trait ChampSelectActuator: Send + Sync {
    async fn pick(
        &self,
        action_id: ActionId,
        champion_id: ChampionId,
        complete: bool,
    ) -> Result<(), ActuatorError>;

    async fn ban(
        &self,
        action_id: ActionId,
        champion_id: ChampionId,
        complete: bool,
    ) -> Result<(), ActuatorError>;

    async fn bench_swap(&self, champion_id: ChampionId) -> Result<(), ActuatorError>;
}
