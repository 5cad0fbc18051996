//! SessionContext - 現在のチャンピオン選択状態
//!
//! 書き込みはセッション取り込み側だけが行います。
//! 複数フィールドの更新は `apply` で 1 回の差し替えとして反映されるため、
//! 読み手が「myTeam だけ新しい」ような中途半端な状態を見ることはありません。
//!
//! # 読み取り
//! `snapshot()` は `Arc<ContextSnapshot>` を返します。
//! 取得後に書き込みがあっても、手元のスナップショットは変わりません。

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::domain::{ChampionId, Puuid, SelfSummoner, Session};

/// ある時点の SessionContext の不変な写し
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextSnapshot {
    /// 更新ごとに単調増加
    pub version: u64,
    /// セッションなしからセッションありに変わるたびに増える（1 試合 = 1 epoch）
    pub session_epoch: u64,
    pub session: Option<Session>,
    pub self_summoner: Option<SelfSummoner>,
    pub puuid: Option<Puuid>,
    pub current_pickable_champions: HashSet<ChampionId>,
    pub current_bannable_champions: HashSet<ChampionId>,
}

/// 取り込み側が 1 回で反映する更新内容
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChampSelectUpdate {
    pub session: Option<Session>,
    pub self_summoner: Option<SelfSummoner>,
    pub pickables: HashSet<ChampionId>,
    pub bannables: HashSet<ChampionId>,
}

impl ChampSelectUpdate {
    /// セッションから自分の席の状態を導出して更新を作る
    pub fn from_session(
        session: Session,
        pickables: HashSet<ChampionId>,
        bannables: HashSet<ChampionId>,
    ) -> Self {
        let self_summoner = Some(SelfSummoner::from_session(&session));
        Self {
            session: Some(session),
            self_summoner,
            pickables,
            bannables,
        }
    }
}

#[derive(Debug, Default)]
pub struct SessionContext {
    inner: RwLock<Arc<ContextSnapshot>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Arc<ContextSnapshot> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    pub fn version(&self) -> u64 {
        self.snapshot().version
    }

    /// セッション関連のフィールドをまとめて差し替える
    pub fn apply(&self, update: ChampSelectUpdate) -> u64 {
        self.modify(|next| {
            if next.session.is_none() && update.session.is_some() {
                next.session_epoch += 1;
            }
            next.session = update.session;
            next.self_summoner = update.self_summoner;
            next.current_pickable_champions = update.pickables;
            next.current_bannable_champions = update.bannables;
        })
    }

    pub fn set_identity(&self, puuid: Option<Puuid>) -> u64 {
        self.modify(|next| next.puuid = puuid)
    }

    /// チャンピオン選択の終了。identity は残す
    pub fn clear_session(&self) -> u64 {
        self.modify(|next| {
            next.session = None;
            next.self_summoner = None;
            next.current_pickable_champions.clear();
            next.current_bannable_champions.clear();
        })
    }

    /// 写しを作って書き換え、ロック内で差し替える
    fn modify(&self, f: impl FnOnce(&mut ContextSnapshot)) -> u64 {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let mut next = ContextSnapshot::clone(&guard);
        f(&mut next);
        next.version = guard.version + 1;
        let version = next.version;
        *guard = Arc::new(next);
        version
    }
}
