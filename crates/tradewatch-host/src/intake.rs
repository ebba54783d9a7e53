//! Event intake: newline-delimited JSON world events into the service.
//!
//! Each line is one [`WorldEvent`]. Blank lines are ignored. A line that
//! does not parse is logged and skipped; it never stops the stream.

use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt as _};
use tracing::{debug, info, warn};
use tradewatch_core::AuditService;
use tradewatch_types::WorldEvent;

/// Counters for one intake run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntakeStats {
    /// Non-blank lines read.
    pub lines: u64,
    /// Lines that parsed into an event.
    pub events: u64,
    /// Records emitted.
    pub records: u64,
    /// Lines skipped as malformed.
    pub skipped: u64,
}

/// Why an intake run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeEnd {
    /// The event stream reached end of input.
    Exhausted,
    /// The shutdown signal fired first.
    Interrupted,
}

/// Parse one line. Returns `None` for blank lines.
pub fn parse_line(line: &str) -> Option<Result<WorldEvent, serde_json::Error>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(serde_json::from_str(line))
}

/// Feed every event from `reader` into `service` until end of input or
/// until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error only if reading from `reader` fails.
pub async fn run<R, S>(
    reader: R,
    service: &AuditService,
    shutdown: S,
) -> Result<(IntakeEnd, IntakeStats), std::io::Error>
where
    R: AsyncBufRead + Unpin,
    S: Future<Output = ()>,
{
    let mut lines = reader.lines();
    let mut stats = IntakeStats::default();
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            () = &mut shutdown => {
                info!("Shutdown signal received");
                return Ok((IntakeEnd::Interrupted, stats));
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            return Ok((IntakeEnd::Exhausted, stats));
        };

        match parse_line(&line) {
            None => {}
            Some(Ok(event)) => {
                stats.lines = stats.lines.saturating_add(1);
                stats.events = stats.events.saturating_add(1);
                debug!(kind = event.kind(), "Event received");
                if service.handle(&event).is_some() {
                    stats.records = stats.records.saturating_add(1);
                }
            }
            Some(Err(e)) => {
                stats.lines = stats.lines.saturating_add(1);
                stats.skipped = stats.skipped.saturating_add(1);
                warn!(error = %e, line = stats.lines, "Skipping malformed event");
            }
        }
    }
}
