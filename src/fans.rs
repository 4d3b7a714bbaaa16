//! Fan bank model.
//!
//! The base carries six fans in three bays.  Every outbound fan command
//! carries the full bank, one [`FanSetting`] per [`FanPosition`], in the
//! order the MCU expects on the wire.

use core::fmt;
use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Number of physical fan positions.
pub const FAN_COUNT: usize = 6;

/// Speed setting for a single fan.
///
/// Discriminants are the wire values understood by the MCU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum FanSetting {
    Off = 0,
    High = 1,
    Low = 2,
}

impl From<FanSetting> for u8 {
    fn from(setting: FanSetting) -> Self {
        setting as u8
    }
}

impl TryFrom<u8> for FanSetting {
    type Error = InvalidFanSetting;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Off),
            1 => Ok(Self::High),
            2 => Ok(Self::Low),
            other => Err(InvalidFanSetting(other)),
        }
    }
}

impl fmt::Display for FanSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "OFF"),
            Self::High => write!(f, "HIGH"),
            Self::Low => write!(f, "LOW"),
        }
    }
}

/// A wire value that does not name a [`FanSetting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidFanSetting(pub u8);

impl fmt::Display for InvalidFanSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid fan setting {}", self.0)
    }
}

impl core::error::Error for InvalidFanSetting {}

/// Fixed fan slots, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FanPosition {
    EquipmentBayIntake = 0,
    EquipmentBayExhaust = 1,
    ChargerBayIntake = 2,
    ChargerBayExhaust = 3,
    UserBayIntake = 4,
    UserBayExhaust = 5,
}

impl FanPosition {
    pub const ALL: [FanPosition; FAN_COUNT] = [
        Self::EquipmentBayIntake,
        Self::EquipmentBayExhaust,
        Self::ChargerBayIntake,
        Self::ChargerBayExhaust,
        Self::UserBayIntake,
        Self::UserBayExhaust,
    ];

    /// The two slots that follow charger connection state.
    pub const CHARGER_BAY: [FanPosition; 2] = [Self::ChargerBayIntake, Self::ChargerBayExhaust];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The full set of fan settings published to the MCU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FanBank([FanSetting; FAN_COUNT]);

impl FanBank {
    /// Every slot set to `setting`.
    pub const fn uniform(setting: FanSetting) -> Self {
        Self([setting; FAN_COUNT])
    }

    pub fn set_all(&mut self, setting: FanSetting) {
        self.0 = [setting; FAN_COUNT];
    }

    /// Set both charger bay slots.
    pub fn set_charger_bay(&mut self, setting: FanSetting) {
        for pos in FanPosition::CHARGER_BAY {
            self[pos] = setting;
        }
    }

    pub fn settings(&self) -> &[FanSetting; FAN_COUNT] {
        &self.0
    }

    pub fn is_uniform(&self, setting: FanSetting) -> bool {
        self.0.iter().all(|s| *s == setting)
    }

    /// Raw wire values, one byte per slot.
    pub fn to_wire(&self) -> [u8; FAN_COUNT] {
        self.0.map(u8::from)
    }
}

impl Default for FanBank {
    fn default() -> Self {
        Self::uniform(FanSetting::Low)
    }
}

impl Index<FanPosition> for FanBank {
    type Output = FanSetting;

    fn index(&self, pos: FanPosition) -> &FanSetting {
        &self.0[pos.index()]
    }
}

impl IndexMut<FanPosition> for FanBank {
    fn index_mut(&mut self, pos: FanPosition) -> &mut FanSetting {
        &mut self.0[pos.index()]
    }
}

impl fmt::Display for FanBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, setting) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{setting}")?;
        }
        f.write_str("]")
    }
}
