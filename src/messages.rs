//! Wire records exchanged with the robot's message bus.
//!
//! Payloads are JSON.  Inbound records only need the fields the cooling
//! logic reads; anything else the publisher includes is ignored.

use core::fmt;
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::fans::FanBank;

/// MCU status report.  Only the charger flag matters here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub charger_connected: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Commanded base velocity (m/s linear, rad/s angular).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Twist {
    pub linear: Vector3,
    pub angular: Vector3,
}

impl Twist {
    /// Planar twist from the three components the base can actually follow.
    pub const fn planar(x: f64, y: f64, yaw_rate: f64) -> Self {
        Self {
            linear: Vector3 { x, y, z: 0.0 },
            angular: Vector3 {
                x: 0.0,
                y: 0.0,
                z: yaw_rate,
            },
        }
    }
}

/// Outbound fan command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanCommand {
    pub fans: FanBank,
}

/// A message tagged with the topic it travels on.  Used for line-oriented
/// logs and replays: `{"topic":"mcu/fans","msg":{"fans":[2,2,1,1,2,2]}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<'a, T> {
    pub topic: Cow<'a, str>,
    pub msg: T,
}

// ── Codec ─────────────────────────────────────────────────────

/// Payload could not be decoded or encoded.
#[derive(Debug)]
pub struct CodecError {
    kind: &'static str,
    source: serde_json::Error,
}

impl CodecError {
    pub(crate) fn new(kind: &'static str, source: serde_json::Error) -> Self {
        Self { kind, source }
    }

    /// Which record was being processed.
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} payload: {}", self.kind, self.source)
    }
}

impl core::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.source)
    }
}

pub fn decode_status(payload: &[u8]) -> Result<Status, CodecError> {
    serde_json::from_slice(payload).map_err(|e| CodecError::new("status", e))
}

pub fn decode_twist(payload: &[u8]) -> Result<Twist, CodecError> {
    serde_json::from_slice(payload).map_err(|e| CodecError::new("twist", e))
}

pub fn encode_fan_command(cmd: &FanCommand) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(cmd).map_err(|e| CodecError::new("fan command", e))
}
