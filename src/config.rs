//! Cooling controller configuration
//!
//! Motion thresholds and topic names.  Defaults reproduce the stock
//! Ridgeback cooling node; a JSON file can override any field.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Longest topic name the local bus will route.
pub const MAX_TOPIC_LEN: usize = 64;

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoolingConfig {
    // --- Motion thresholds ---
    /// Forward or leftward speed (m/s) at or above which all fans run high
    pub linear_threshold_mps: f64,
    /// Counter-clockwise yaw rate (rad/s) at or above which all fans run high
    pub angular_threshold_rps: f64,

    // --- Topics ---
    /// Inbound MCU status
    pub status_topic: String,
    /// Inbound velocity command
    pub cmd_vel_topic: String,
    /// Outbound fan command
    pub fans_topic: String,
}

impl Default for CoolingConfig {
    fn default() -> Self {
        Self {
            linear_threshold_mps: 0.1,
            angular_threshold_rps: 0.4,

            status_topic: "mcu/status".into(),
            cmd_vel_topic: "cmd_vel".into(),
            fans_topic: "mcu/fans".into(),
        }
    }
}

impl CoolingConfig {
    /// Reject values that would make the controller misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.linear_threshold_mps.is_finite() || self.linear_threshold_mps < 0.0 {
            return Err(ConfigError::ValidationFailed(
                "linear_threshold_mps must be finite and >= 0",
            ));
        }
        if !self.angular_threshold_rps.is_finite() || self.angular_threshold_rps < 0.0 {
            return Err(ConfigError::ValidationFailed(
                "angular_threshold_rps must be finite and >= 0",
            ));
        }

        for (topic, msg) in [
            (&self.status_topic, "status_topic must be 1..=64 bytes"),
            (&self.cmd_vel_topic, "cmd_vel_topic must be 1..=64 bytes"),
            (&self.fans_topic, "fans_topic must be 1..=64 bytes"),
        ] {
            if topic.is_empty() || topic.len() > MAX_TOPIC_LEN {
                return Err(ConfigError::ValidationFailed(msg));
            }
        }

        if self.status_topic == self.cmd_vel_topic
            || self.status_topic == self.fans_topic
            || self.cmd_vel_topic == self.fans_topic
        {
            return Err(ConfigError::ValidationFailed("topics must be distinct"));
        }

        Ok(())
    }
}
