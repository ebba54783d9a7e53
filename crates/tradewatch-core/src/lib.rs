//! Trade and death auditing for trading agents.
//!
//! This crate is the logic layer: it turns host events into audit
//! records without touching the host itself. It sits between
//! `tradewatch-types` (the event data) and the host binary (event intake
//! and process lifecycle).
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration ([`AuditConfig`])
//! - [`death`] -- Killer resolution and death records ([`DeathAttributor`])
//! - [`error`] -- Error types ([`SinkError`])
//! - [`naming`] -- Display-name and killer-name rules
//! - [`record`] -- Trade and death records and their text layout
//! - [`service`] -- Event routing and lifecycle ([`AuditService`])
//! - [`session`] -- Actor-to-agent session correlation ([`SessionStore`])
//! - [`sink`] -- Record destinations ([`AuditSink`])
//! - [`trade`] -- Trade correlation and item formatting ([`TradeCorrelator`])
//! - [`tracker`] -- Session open/close from interaction events ([`InteractionTracker`])

pub mod config;
pub mod death;
pub mod error;
pub mod naming;
pub mod record;
pub mod service;
pub mod session;
pub mod sink;
pub mod tracker;
pub mod trade;

// Re-export primary types at crate root for convenience.
pub use config::{AUDIT_LOG_ENV, AuditConfig, ConfigError, LoggingConfig, SinkConfig, SinkKind};
pub use death::{DeathAttributor, resolve_killer};
pub use error::SinkError;
pub use record::{AgentDescriptor, AuditRecord, DeathRecord, KillerInfo, TradeRecord};
pub use service::AuditService;
pub use session::{SessionContext, SessionStore};
pub use sink::{AuditSink, FileSink, MemorySink, RecordFormat, TracingSink};
pub use trade::{ClickFilter, TradeCorrelator, format_item, format_payment};
pub use tracker::{InteractionOutcome, InteractionTracker};
