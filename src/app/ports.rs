//! Port traits — the hexagonal boundary between cooling logic and the bus.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ CoolingService (domain)
//! ```
//!
//! Driven adapters (fan command publisher, event sink, config source)
//! implement these traits.  The [`CoolingService`](super::service::CoolingService)
//! consumes them via generics, so the domain core never touches the
//! transport directly.

use crate::config::CoolingConfig;
use crate::messages::FanCommand;

// ───────────────────────────────────────────────────────────────
// Fan command port (driven adapter: domain → message bus)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain hands every fan command to this.
///
/// Publishing is fire-and-forget.  Implementations log delivery problems
/// themselves; nothing is reported back to the domain.
pub trait FanCommandPort {
    fn publish(&mut self, cmd: &FanCommand);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: startup config source)
// ───────────────────────────────────────────────────────────────

/// Loads controller configuration.
///
/// Implementations MUST run [`CoolingConfig::validate`] before returning
/// a config, and report failures as [`ConfigError::ValidationFailed`].
pub trait ConfigPort {
    fn load(&self) -> Result<CoolingConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found at the source.
    NotFound,
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the config source.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl core::error::Error for ConfigError {}
