use std::fmt;

use crate::error::{FooterError, Result};

/// Volume as a whole percentage, always within 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VolumeLevel(u8);

impl VolumeLevel {
    pub const MIN: VolumeLevel = VolumeLevel(0);
    pub const MAX: VolumeLevel = VolumeLevel(100);

    /// Create a volume level, rejecting anything above 100
    pub fn new(percent: u8) -> Result<Self> {
        if percent > Self::MAX.0 {
            return Err(FooterError::InvalidVolume(percent.into()));
        }
        Ok(Self(percent))
    }

    /// Create a volume level, clamping anything above 100
    pub const fn clamped(percent: u8) -> Self {
        if percent > 100 {
            Self::MAX
        } else {
            Self(percent)
        }
    }

    /// Convert a raw slider position into a volume level.
    ///
    /// The value is rounded to the nearest whole percent and clamped into
    /// range. NaN is treated as silence.
    pub fn from_slider(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.round().clamp(0.0, 100.0) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Shift the level by a signed step, saturating at the bounds
    pub fn step(self, delta: i16) -> Self {
        Self((i16::from(self.0) + delta).clamp(0, 100) as u8)
    }
}

impl Default for VolumeLevel {
    fn default() -> Self {
        Self(50)
    }
}

impl fmt::Display for VolumeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
