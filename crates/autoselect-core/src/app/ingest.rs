//! SessionIngestor - クライアント API から SessionContext を更新する
//!
//! セッション, 自分の席, pickable / bannable をまとめて取得し、
//! 1 回の `apply` で反映します。

use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;

use super::retry::{RetryPolicy, request_with_retries};
use crate::context::{ChampSelectUpdate, SessionContext};
use crate::domain::{ChampionId, Puuid, Session};
use crate::error::AutoSelectError;
use crate::ports::LcuTransport;

pub const CURRENT_SUMMONER: &str = "/lol-summoner/v1/current-summoner";
pub const SESSION: &str = "/lol-champ-select/v1/session";
pub const PICKABLE_CHAMPIONS: &str = "/lol-champ-select/v1/pickable-champion-ids";
pub const BANNABLE_CHAMPIONS: &str = "/lol-champ-select/v1/bannable-champion-ids";

#[derive(Debug, Deserialize)]
struct CurrentSummoner {
    puuid: Puuid,
}

/// 取り込み 1 回分の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// チャンピオン選択中で、セッションを反映した
    Updated { version: u64 },
    /// チャンピオン選択外（404）。セッションをクリアした
    NotInChampSelect { version: u64 },
}

pub struct SessionIngestor<T> {
    transport: T,
    context: Arc<SessionContext>,
    retry: RetryPolicy,
}

impl<T: LcuTransport> SessionIngestor<T> {
    pub fn new(transport: T, context: Arc<SessionContext>, retry: RetryPolicy) -> Self {
        Self {
            transport,
            context,
            retry,
        }
    }

    pub fn context(&self) -> &Arc<SessionContext> {
        &self.context
    }

    /// ログイン中のプレイヤーの puuid を取得して反映
    pub async fn sync_identity(&self) -> Result<Puuid, AutoSelectError> {
        let value = self.get(CURRENT_SUMMONER).await?;
        let summoner: CurrentSummoner = serde_json::from_value(value)
            .map_err(|e| AutoSelectError::decode("current summoner", e))?;
        self.context.set_identity(Some(summoner.puuid.clone()));
        Ok(summoner.puuid)
    }

    /// セッションを取り直して反映
    ///
    /// identity が未取得なら先に取得します。
    pub async fn sync(&self) -> Result<SyncOutcome, AutoSelectError> {
        if self.context.snapshot().puuid.is_none() {
            self.sync_identity().await?;
        }

        let session = match request_with_retries(&self.transport, SESSION, &self.retry).await {
            Ok(value) => value,
            Err(e) if e.is_not_found() => {
                let version = self.context.clear_session();
                return Ok(SyncOutcome::NotInChampSelect { version });
            }
            Err(e) => return Err(AutoSelectError::transport(SESSION, e)),
        };
        // 読めないセッションで古い決定が残らないようにクリアする
        let session: Session = match serde_json::from_value(session) {
            Ok(session) => session,
            Err(e) => {
                self.context.clear_session();
                return Err(AutoSelectError::decode("session", e));
            }
        };

        let pickables = self.champion_set(PICKABLE_CHAMPIONS).await?;
        let bannables = self.champion_set(BANNABLE_CHAMPIONS).await?;

        let version = self
            .context
            .apply(ChampSelectUpdate::from_session(session, pickables, bannables));
        tracing::debug!(version, "champ select session applied");
        Ok(SyncOutcome::Updated { version })
    }

    async fn champion_set(&self, path: &'static str) -> Result<HashSet<ChampionId>, AutoSelectError> {
        let value = self.get(path).await?;
        let ids: Vec<ChampionId> =
            serde_json::from_value(value).map_err(|e| AutoSelectError::decode(path, e))?;
        Ok(ids.into_iter().collect())
    }

    async fn get(&self, path: &str) -> Result<serde_json::Value, AutoSelectError> {
        request_with_retries(&self.transport, path, &self.retry)
            .await
            .map_err(|e| AutoSelectError::transport(path, e))
    }
}
