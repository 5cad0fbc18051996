//! TOML configuration.
//!
//! ```toml
//! [auto_select]
//! normal_mode_enabled = true
//! expected_champions = [103, 84]
//!
//! [engine]
//! high_id_override_threshold = 3000
//!
//! [transport]
//! max_retries = 3
//! retry_base_delay_ms = 0
//!
//! [log]
//! filter = "info"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app::RetryPolicy;
use crate::domain::{AutoSelectSettings, ChampionId, EnginePolicy};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config from {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoSelectConfig {
    pub auto_select: AutoSelectSettings,
    pub engine: EnginePolicy,
    pub transport: TransportConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Total attempts per request, including the first one.
    pub max_retries: u32,
    pub retry_base_delay_ms: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_base_delay_ms: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl AutoSelectConfig {
    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.auto_select;

        if !s.grab_delay_seconds.is_finite() || s.grab_delay_seconds < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "grab_delay_seconds must be a non-negative number, got {}",
                s.grab_delay_seconds
            )));
        }
        check_positive("expected_champions", &s.expected_champions)?;
        check_positive("bench_expected_champions", &s.bench_expected_champions)?;

        if let Some(id) = s
            .banned_champions
            .iter()
            .find(|id| id.get() <= 0 && !id.is_empty_ban())
        {
            return Err(ConfigError::Invalid(format!(
                "banned_champions entries must be positive or -1, got {id}"
            )));
        }
        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.transport.max_retries.max(1),
            base_delay: Duration::from_millis(self.transport.retry_base_delay_ms),
            ..Default::default()
        }
    }
}

fn check_positive(field: &str, ids: &[ChampionId]) -> Result<(), ConfigError> {
    match ids.iter().find(|id| id.get() <= 0) {
        Some(id) => Err(ConfigError::Invalid(format!(
            "{field} entries must be positive, got {id}"
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AutoSelectConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AutoSelectConfig::default());
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn loads_all_sections() {
        let file = write_config(
            r#"
[auto_select]
normal_mode_enabled = true
expected_champions = [103, 84]
ban_enabled = true
banned_champions = [-1]
grab_delay_seconds = 2.5

[engine]
high_id_override_threshold = 3000

[transport]
max_retries = 2
retry_base_delay_ms = 250

[log]
filter = "autoselect_core=debug"
"#,
        );
        let config = AutoSelectConfig::load_from(file.path()).unwrap();

        assert!(config.auto_select.normal_mode_enabled);
        assert_eq!(
            config.auto_select.expected_champions,
            vec![ChampionId::new(103), ChampionId::new(84)]
        );
        assert_eq!(config.auto_select.banned_champions, vec![ChampionId::EMPTY_BAN]);
        assert_eq!(config.engine.high_id_override_threshold, Some(3000));
        assert_eq!(config.log.filter, "autoselect_core=debug");

        let retry = config.retry_policy();
        assert_eq!(retry.max_attempts, 2);
        assert_eq!(retry.base_delay, Duration::from_millis(250));
    }

    #[test]
    fn default_transport_matches_default_retry_policy() {
        assert_eq!(AutoSelectConfig::default().retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn zero_retries_still_makes_one_attempt() {
        let config = AutoSelectConfig {
            transport: TransportConfig {
                max_retries: 0,
                retry_base_delay_ms: 0,
            },
            ..Default::default()
        };
        assert_eq!(config.retry_policy().max_attempts, 1);
    }

    #[test]
    fn accepts_camel_case_settings_keys() {
        let file = write_config(
            r#"
[auto_select]
normalModeEnabled = true
benchExpectedChampions = [7]
"#,
        );
        let config = AutoSelectConfig::load_from(file.path()).unwrap();
        assert!(config.auto_select.normal_mode_enabled);
        assert_eq!(config.auto_select.bench_expected_champions, vec![ChampionId::new(7)]);
    }

    #[test]
    fn parse_error_names_the_file() {
        let file = write_config("[auto_select\n");
        let err = AutoSelectConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[rstest]
    #[case("[auto_select]\ngrab_delay_seconds = -1.0")]
    #[case("[auto_select]\nexpected_champions = [0]")]
    #[case("[auto_select]\nbench_expected_champions = [-1]")]
    #[case("[auto_select]\nbanned_champions = [-2]")]
    #[case("[auto_select]\nbanned_champions = [0]")]
    fn rejects_invalid_values(#[case] contents: &str) {
        let file = write_config(contents);
        let err = AutoSelectConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }
}
