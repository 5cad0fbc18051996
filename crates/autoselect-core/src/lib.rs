//! autoselect-core
//!
//! Champion-select auto pick / ban decision engine.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, session, settings, decision, events）
//! - **context**: SessionContext（バージョン付きの不変スナップショット）
//! - **engine**: upcoming pick / ban / bench grab の導出とメモ化
//! - **grab**: GrabScheduler（遅延 bench grab の保持）
//! - **ports**: 抽象化レイヤー（Clock, LcuTransport, ChampSelectActuator, EventSink）
//! - **app**: 取り込みと制御ループ（SessionIngestor, AutoSelectDriver）
//! - **config**: TOML 設定
//! - **observability**: tracing の初期化とステータス表示

pub mod app;
pub mod config;
pub mod context;
pub mod domain;
pub mod engine;
pub mod error;
pub mod grab;
pub mod observability;
pub mod ports;

#[cfg(test)]
mod testing;

pub use config::{AutoSelectConfig, ConfigError};
pub use context::{ChampSelectUpdate, ContextSnapshot, SessionContext};
pub use engine::{DecisionEngine, Decisions};
pub use error::AutoSelectError;
pub use grab::GrabScheduler;
pub use observability::EngineStatus;
