//! Error types for the tradewatch-core crate.
//!
//! Event handling itself never fails: filtered events are no-ops and
//! missing correlation data becomes a placeholder. The only fallible
//! surfaces are writing records out and loading configuration.

/// Errors raised by an [`AuditSink`](crate::sink::AuditSink).
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The underlying writer failed.
    #[error("failed to write audit record: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A record could not be encoded as JSON.
    #[error("failed to encode audit record: {source}")]
    Encode {
        /// The underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}
