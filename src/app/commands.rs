//! Inbound commands to the application service.
//!
//! One variant per subscribed topic.  The bus decodes a payload into one
//! of these and hands it to [`CoolingService`](super::service::CoolingService).

use crate::messages::{Status, Twist};

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppCommand {
    /// Latest MCU status report.
    ChargerStatus(Status),

    /// Latest commanded base velocity.
    VelocityCommand(Twist),
}

impl AppCommand {
    /// The input that produced this command, for event reporting.
    pub fn trigger(&self) -> Trigger {
        match self {
            Self::ChargerStatus(_) => Trigger::ChargerStatus,
            Self::VelocityCommand(_) => Trigger::VelocityCommand,
        }
    }
}

/// Which input caused a fan command to be published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    ChargerStatus,
    VelocityCommand,
}
