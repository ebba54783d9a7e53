//! Error types for the host binary.

/// Top-level error for the host binary.
///
/// Wraps every startup and intake failure so `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: tradewatch_core::ConfigError,
    },

    /// The configured sink could not be opened.
    #[error("sink error: {source}")]
    Sink {
        /// The underlying sink error.
        #[from]
        source: tradewatch_core::SinkError,
    },

    /// Reading the event stream failed.
    #[error("event stream error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
