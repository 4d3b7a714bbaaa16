//! Fan decision table.
//!
//! Two independent inputs drive the same bank:
//!
//! - charger status sets the charger bay slots (HIGH while connected,
//!   back to LOW once on the disconnect edge);
//! - velocity commands set every slot (HIGH while moving, LOW otherwise).
//!
//! There is no precedence between them.  Whichever input arrived last
//! owns the charger bay slots.
//!
//! Both transitions are pure `(CoolingState, &input) -> CoolingState`
//! functions; publishing is the caller's job.

use crate::config::CoolingConfig;
use crate::fans::{FanBank, FanSetting};
use crate::messages::{Status, Twist};

/// Everything the controller remembers between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoolingState {
    pub fans: FanBank,
    /// `false` only while the last status seen reported a charger.
    pub charger_disconnected: bool,
}

impl CoolingState {
    pub const fn charger_connected(&self) -> bool {
        !self.charger_disconnected
    }
}

impl Default for CoolingState {
    fn default() -> Self {
        Self {
            fans: FanBank::default(),
            charger_disconnected: true,
        }
    }
}

/// Inclusive motion thresholds.  Comparisons are signed: reversing or
/// yawing clockwise never counts as motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionThresholds {
    pub linear_mps: f64,
    pub angular_rps: f64,
}

impl MotionThresholds {
    pub fn is_moving(&self, twist: &Twist) -> bool {
        twist.linear.x >= self.linear_mps
            || twist.linear.y >= self.linear_mps
            || twist.angular.z >= self.angular_rps
    }
}

impl Default for MotionThresholds {
    fn default() -> Self {
        Self::from(&CoolingConfig::default())
    }
}

impl From<&CoolingConfig> for MotionThresholds {
    fn from(config: &CoolingConfig) -> Self {
        Self {
            linear_mps: config.linear_threshold_mps,
            angular_rps: config.angular_threshold_rps,
        }
    }
}

/// Apply a charger status report.
pub fn on_charger_status(mut state: CoolingState, status: &Status) -> CoolingState {
    if status.charger_connected {
        state.fans.set_charger_bay(FanSetting::High);
        state.charger_disconnected = false;
    } else if !state.charger_disconnected {
        state.fans.set_charger_bay(FanSetting::Low);
        state.charger_disconnected = true;
    }
    state
}

/// Apply a velocity command.
pub fn on_velocity_command(
    mut state: CoolingState,
    twist: &Twist,
    thresholds: &MotionThresholds,
) -> CoolingState {
    let setting = if thresholds.is_moving(twist) {
        FanSetting::High
    } else {
        FanSetting::Low
    };
    state.fans.set_all(setting);
    state
}
