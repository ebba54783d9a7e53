//! Configuration loading and typed config structures for Tradewatch.
//!
//! The configuration lives in `tradewatch.yaml`. Every field has a
//! default, so an empty or missing file yields a working setup: records
//! go through `tracing` at `info` level.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::error::SinkError;
use crate::sink::{AuditSink, FileSink, RecordFormat, TracingSink};

/// Environment variable that redirects records to an append-only file.
pub const AUDIT_LOG_ENV: &str = "TRADEWATCH_AUDIT_LOG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuditConfig {
    /// Diagnostic logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Where audit records are written.
    #[serde(default)]
    pub sink: SinkConfig,
}

impl AuditConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `TRADEWATCH_AUDIT_LOG`, when set, overrides the sink with a file
    /// sink at that path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_audit_log_override(std::env::var(AUDIT_LOG_ENV).ok());
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Redirect records to `path` if one is given. Empty paths are ignored.
    pub fn apply_audit_log_override(&mut self, path: Option<String>) {
        if let Some(path) = path.filter(|p| !p.trim().is_empty()) {
            self.sink.kind = SinkKind::File;
            self.sink.path = PathBuf::from(path);
        }
    }
}

/// Diagnostic logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit diagnostics as JSON instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    String::from("info")
}

/// Which sink adapter receives records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Log through `tracing`.
    #[default]
    Tracing,
    /// Append to a file.
    File,
}

/// Audit sink configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SinkConfig {
    /// Sink adapter.
    #[serde(default)]
    pub kind: SinkKind,

    /// File path for [`SinkKind::File`].
    #[serde(default = "default_sink_path")]
    pub path: PathBuf,

    /// Line layout for [`SinkKind::File`].
    #[serde(default)]
    pub format: RecordFormat,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            kind: SinkKind::default(),
            path: default_sink_path(),
            format: RecordFormat::default(),
        }
    }
}

fn default_sink_path() -> PathBuf {
    PathBuf::from("tradewatch-audit.log")
}

impl SinkConfig {
    /// Build the configured sink.
    pub fn build(&self) -> Result<Arc<dyn AuditSink>, SinkError> {
        match self.kind {
            SinkKind::Tracing => Ok(Arc::new(TracingSink)),
            SinkKind::File => Ok(Arc::new(FileSink::open(&self.path, self.format)?)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_default() {
        let config = AuditConfig::parse("").unwrap();
        assert_eq!(config, AuditConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.sink.kind, SinkKind::Tracing);
    }

    #[test]
    fn parses_file_sink() {
        let yaml = r"
logging:
  level: debug
  json: true
sink:
  kind: file
  path: /var/log/trades.jsonl
  format: json
";
        let config = AuditConfig::parse(yaml).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(config.sink.kind, SinkKind::File);
        assert_eq!(config.sink.path, PathBuf::from("/var/log/trades.jsonl"));
        assert_eq!(config.sink.format, RecordFormat::Json);
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = AuditConfig::parse("sink:\n  kind: file\n").unwrap();
        assert_eq!(config.sink.path, PathBuf::from("tradewatch-audit.log"));
        assert_eq!(config.sink.format, RecordFormat::Text);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn unknown_sink_kind_is_rejected() {
        let err = AuditConfig::parse("sink:\n  kind: kafka\n");
        assert!(matches!(err, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn audit_log_override_switches_to_file() {
        let mut config = AuditConfig::default();
        config.apply_audit_log_override(Some(String::from("/tmp/audit.log")));
        assert_eq!(config.sink.kind, SinkKind::File);
        assert_eq!(config.sink.path, PathBuf::from("/tmp/audit.log"));

        let mut untouched = AuditConfig::default();
        untouched.apply_audit_log_override(Some(String::from("  ")));
        untouched.apply_audit_log_override(None);
        assert_eq!(untouched, AuditConfig::default());
    }

    #[test]
    fn file_sink_builds() {
        let dir = tempfile::tempdir().unwrap();
        let sink = SinkConfig {
            kind: SinkKind::File,
            path: dir.path().join("audit.log"),
            format: RecordFormat::Text,
        };
        assert!(sink.build().is_ok());
        assert!(dir.path().join("audit.log").exists());
    }
}
