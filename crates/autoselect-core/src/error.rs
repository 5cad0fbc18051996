use thiserror::Error;

use crate::config::ConfigError;
use crate::ports::TransportError;

#[derive(Debug, Error)]
pub enum AutoSelectError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: TransportError,
    },

    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl AutoSelectError {
    pub fn transport(path: impl Into<String>, source: TransportError) -> Self {
        AutoSelectError::Transport {
            path: path.into(),
            source,
        }
    }

    pub fn decode(what: &'static str, source: serde_json::Error) -> Self {
        AutoSelectError::Decode { what, source }
    }
}
