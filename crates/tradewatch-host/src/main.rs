//! Host binary for Tradewatch.
//!
//! Reads newline-delimited JSON world events from standard input, feeds
//! them to an [`AuditService`], and writes trade and death records to the
//! configured sink. Runs until input ends or the process is interrupted.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `$TRADEWATCH_CONFIG` or `tradewatch.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Open the audit sink
//! 4. Start the service and run event intake
//! 5. Shut down, discarding open sessions

mod error;
mod intake;

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;
use tradewatch_core::{AUDIT_LOG_ENV, AuditConfig, AuditService, LoggingConfig};

use crate::error::HostError;

/// Environment variable naming the configuration file.
const CONFIG_ENV: &str = "TRADEWATCH_CONFIG";

/// Configuration file used when [`CONFIG_ENV`] is unset.
const DEFAULT_CONFIG_PATH: &str = "tradewatch.yaml";

/// Application entry point for the host.
///
/// # Errors
///
/// Returns an error if configuration, the sink, or the event stream fails.
#[tokio::main]
async fn main() -> Result<(), HostError> {
    // 1. Load configuration.
    let config_path = config_path();
    let (config, found) = load_config(&config_path)?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("tradewatch-host starting");
    if found {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }

    // 3. Open the sink.
    let sink = config.sink.build()?;
    info!(
        kind = ?config.sink.kind,
        path = %config.sink.path.display(),
        format = ?config.sink.format,
        "Audit sink ready"
    );

    // 4. Run intake.
    let service = AuditService::start(sink);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c, running until end of input");
            std::future::pending::<()>().await;
        }
    };
    let (end, stats) = intake::run(stdin, &service, shutdown).await?;

    // 5. Shut down.
    let discarded = service.shutdown();
    info!(
        end = ?end,
        lines = stats.lines,
        events = stats.events,
        records = stats.records,
        skipped = stats.skipped,
        sessions_discarded = discarded,
        "tradewatch-host shutdown complete"
    );

    Ok(())
}

/// Resolve the configuration path from [`CONFIG_ENV`], falling back to
/// [`DEFAULT_CONFIG_PATH`].
fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV).map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Load configuration, using defaults when the file does not exist.
///
/// Returns the configuration and whether the file was found.
fn load_config(path: &std::path::Path) -> Result<(AuditConfig, bool), HostError> {
    if path.exists() {
        Ok((AuditConfig::from_file(path)?, true))
    } else {
        let mut config = AuditConfig::default();
        config.apply_audit_log_override(std::env::var(AUDIT_LOG_ENV).ok());
        Ok((config, false))
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
