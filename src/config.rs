use crate::error::{Result, SignalError};

// ---------------------------------------------------------------------------
// Playback configuration – fixed at construction, no CLI, no config file
// ---------------------------------------------------------------------------

/// All construction-time parameters for a playback run.
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Simulated signal duration in seconds (default: 120.0)
    pub duration_secs: f64,

    /// Sampling rate in Hz (default: 100)
    pub sampling_rate: u32,

    /// Simulated heart rate in beats per minute (default: 120.0)
    pub heart_rate_bpm: f64,

    /// Width of the scrolling display window in seconds (default: 1.0)
    pub window_size_secs: f64,

    /// Wall-clock interval between display updates in seconds (default: 0.05)
    pub update_interval_secs: f64,

    /// Decimal digits in both export formats (default: 8)
    pub precision: usize,

    /// Values per line in the embedded array literal (default: 10)
    pub values_per_line: usize,

    /// Keep only the first N samples before export and playback
    /// (default: Some(1000), matching the demo firmware table size)
    pub limit_samples: Option<usize>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            duration_secs: 120.0,
            sampling_rate: 100,
            heart_rate_bpm: 120.0,
            window_size_secs: 1.0,
            update_interval_secs: 0.05,
            precision: 8,
            values_per_line: 10,
            limit_samples: Some(1000),
        }
    }
}

impl PlaybackConfig {
    /// Reject non-positive or degenerate parameters up front, before any
    /// signal is generated or any artifact written.
    pub fn validate(&self) -> Result<()> {
        if self.duration_secs <= 0.0 || !self.duration_secs.is_finite() {
            return Err(SignalError::InvalidConfiguration(
                "duration must be positive".to_string(),
            ));
        }
        if self.sampling_rate == 0 {
            return Err(SignalError::InvalidConfiguration(
                "sampling rate must be positive".to_string(),
            ));
        }
        if self.heart_rate_bpm <= 0.0 || !self.heart_rate_bpm.is_finite() {
            return Err(SignalError::InvalidConfiguration(
                "heart rate must be positive".to_string(),
            ));
        }
        if self.window_size_secs <= 0.0 || !self.window_size_secs.is_finite() {
            return Err(SignalError::InvalidConfiguration(
                "window size must be positive".to_string(),
            ));
        }
        if self.update_interval_secs <= 0.0 || !self.update_interval_secs.is_finite() {
            return Err(SignalError::InvalidConfiguration(
                "update interval must be positive".to_string(),
            ));
        }
        if self.precision == 0 {
            return Err(SignalError::InvalidConfiguration(
                "precision must be positive".to_string(),
            ));
        }
        if self.values_per_line == 0 {
            return Err(SignalError::InvalidConfiguration(
                "values_per_line must be positive".to_string(),
            ));
        }
        if self.limit_samples == Some(0) {
            return Err(SignalError::InvalidConfiguration(
                "sample limit must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}
