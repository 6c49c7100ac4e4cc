use std::time::Duration;

use crate::error::{FooterError, Result};
use crate::model::VolumeLevel;

const MAX_DELAY: Duration = Duration::from_secs(10);

/// Timing and initial values for a [`Footer`](crate::Footer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterConfig {
    /// Quiet period before a slider change is sent to the service
    pub volume_debounce: Duration,
    /// Wait between a successful skip and re-reading the current track
    pub skip_settle_delay: Duration,
    /// Volume shown before the user touches the slider
    pub initial_volume: VolumeLevel,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            volume_debounce: Duration::from_millis(300),
            skip_settle_delay: Duration::from_millis(500),
            initial_volume: VolumeLevel::default(),
        }
    }
}

impl FooterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the volume debounce window with validation
    pub fn with_volume_debounce(mut self, window: Duration) -> Result<Self> {
        if window.is_zero() {
            return Err(FooterError::InvalidConfig(
                "Volume debounce window must be greater than 0".to_string(),
            ));
        }
        if window > MAX_DELAY {
            return Err(FooterError::InvalidConfig(
                "Volume debounce window too long (max 10 seconds)".to_string(),
            ));
        }
        self.volume_debounce = window;
        Ok(self)
    }

    /// Set the post-skip settle delay with validation
    pub fn with_skip_settle_delay(mut self, delay: Duration) -> Result<Self> {
        if delay > MAX_DELAY {
            return Err(FooterError::InvalidConfig(
                "Skip settle delay too long (max 10 seconds)".to_string(),
            ));
        }
        self.skip_settle_delay = delay;
        Ok(self)
    }

    pub fn with_initial_volume(mut self, volume: VolumeLevel) -> Self {
        self.initial_volume = volume;
        self
    }

    /// Check a configuration assembled by hand
    pub fn validate(&self) -> Result<()> {
        Self::default()
            .with_volume_debounce(self.volume_debounce)?
            .with_skip_settle_delay(self.skip_settle_delay)?;
        Ok(())
    }
}
