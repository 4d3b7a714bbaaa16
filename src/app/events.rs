//! Outbound application events.
//!
//! The [`CoolingService`](super::service::CoolingService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  They are
//! diagnostics only; the fan command itself goes out through
//! [`FanCommandPort`](super::ports::FanCommandPort).

use crate::fans::FanBank;

use super::commands::Trigger;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started (carries the initial bank).
    Started(FanBank),

    /// First status report with a charger after being disconnected.
    ChargerConnected,

    /// First status report without a charger after being connected.
    ChargerDisconnected,

    /// A fan command was handed to the publisher.
    FansPublished { trigger: Trigger, fans: FanBank },
}
