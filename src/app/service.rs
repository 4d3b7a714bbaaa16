//! Cooling service — the hexagonal core.
//!
//! [`CoolingService`] owns the controller state and motion thresholds.
//! Every inbound command runs the decision table to completion and then
//! publishes the whole bank, whether or not any slot changed.  All I/O
//! flows through port traits injected at call sites.
//!
//! ```text
//!  AppCommand ──▶ ┌────────────────────────┐ ──▶ FanCommandPort
//!                 │     CoolingService      │
//!                 │  decision table · state │ ──▶ EventSink
//!                 └────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::CoolingConfig;
use crate::cooling::{self, CoolingState, MotionThresholds};
use crate::fans::FanBank;
use crate::messages::FanCommand;

use super::commands::{AppCommand, Trigger};
use super::events::AppEvent;
use super::ports::{EventSink, FanCommandPort};

// ───────────────────────────────────────────────────────────────
// CoolingService
// ───────────────────────────────────────────────────────────────

/// Orchestrates the fan decision table and the publish side effect.
pub struct CoolingService {
    state: CoolingState,
    thresholds: MotionThresholds,
    publish_count: u64,
}

impl CoolingService {
    /// Construct the service from configuration.  All fans start LOW and
    /// the charger is treated as already disconnected.
    pub fn new(config: &CoolingConfig) -> Self {
        Self {
            state: CoolingState::default(),
            thresholds: MotionThresholds::from(config),
            publish_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Report the initial bank.  Nothing is published until the first
    /// inbound message arrives.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.state.fans));
        info!("CoolingService started with fans {}", self.state.fans);
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply one inbound command, then publish the full bank.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        fans: &mut impl FanCommandPort,
        sink: &mut impl EventSink,
    ) {
        let was_connected = self.state.charger_connected();

        self.state = match &cmd {
            AppCommand::ChargerStatus(status) => cooling::on_charger_status(self.state, status),
            AppCommand::VelocityCommand(twist) => {
                cooling::on_velocity_command(self.state, twist, &self.thresholds)
            }
        };

        match (was_connected, self.state.charger_connected()) {
            (false, true) => sink.emit(&AppEvent::ChargerConnected),
            (true, false) => sink.emit(&AppEvent::ChargerDisconnected),
            _ => {}
        }

        self.publish(cmd.trigger(), fans, sink);
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current fan bank.
    pub fn fans(&self) -> FanBank {
        self.state.fans
    }

    /// Full controller state.
    pub fn state(&self) -> CoolingState {
        self.state
    }

    /// Whether the last status report showed a charger.
    pub fn charger_connected(&self) -> bool {
        self.state.charger_connected()
    }

    /// Fan commands handed to the publisher since construction.
    pub fn publish_count(&self) -> u64 {
        self.publish_count
    }

    // ── Internal ──────────────────────────────────────────────

    fn publish(
        &mut self,
        trigger: Trigger,
        fans: &mut impl FanCommandPort,
        sink: &mut impl EventSink,
    ) {
        let cmd = FanCommand {
            fans: self.state.fans,
        };
        fans.publish(&cmd);
        self.publish_count += 1;
        debug!("Published fans {} ({:?})", cmd.fans, trigger);
        sink.emit(&AppEvent::FansPublished {
            trigger,
            fans: cmd.fans,
        });
    }
}
