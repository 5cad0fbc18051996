//! LcuTransport port - ゲームクライアントのローカル API
//!
//! 実際の HTTP クライアント（TLS, 認証, lockfile 読み込み）は
//! このクレートの外で実装します。ここではリトライ判定に必要な
//! エラー分類だけを定義します。

use async_trait::async_trait;

/// TransportError はローカル API 呼び出しの失敗
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("client disconnected")]
    Disconnected,

    #[error("decode failed: {0}")]
    Decode(String),
}

impl TransportError {
    /// タイムアウトと 5xx はリトライ対象
    pub fn is_transient(&self) -> bool {
        match self {
            TransportError::Timeout => true,
            TransportError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TransportError::Status { status: 404, .. })
    }
}

/// LcuTransport はローカル API から JSON を取得する
#[async_trait]
pub trait LcuTransport: Send + Sync {
    async fn get(&self, path: &str) -> Result<serde_json::Value, TransportError>;
}

#[async_trait]
impl<T: LcuTransport + ?Sized> LcuTransport for std::sync::Arc<T> {
    async fn get(&self, path: &str) -> Result<serde_json::Value, TransportError> {
        (**self).get(path).await
    }
}
