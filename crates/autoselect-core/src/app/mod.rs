//! App - アプリケーション層
//!
//! ports とエンジンを組み合わせて、クライアントとの往復を実装します。
//!
//! # 主要コンポーネント
//! - **SessionIngestor**: クライアント API から SessionContext を更新
//! - **AutoSelectDriver**: 決定を pick / ban / bench swap に変換する制御ループ
//! - **RetryPolicy**: 一時的な通信エラーの有限リトライ

pub mod driver;
pub mod ingest;
pub mod retry;

// 主要な型を再エクスポート
pub use self::driver::{AutoSelectDriver, StepReport, Submission, SubmissionKind};
pub use self::ingest::{SessionIngestor, SyncOutcome};
pub use self::retry::{RetryPolicy, request_with_retries};
