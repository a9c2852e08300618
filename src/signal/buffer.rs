use crate::error::{Result, SignalError};

// ---------------------------------------------------------------------------
// SampleBuffer – an immutable, fixed-rate sequence of samples
// ---------------------------------------------------------------------------

/// A finite sequence of amplitude samples at a known sampling rate.
///
/// Built once from a generator, read-only afterwards: the exporter and the
/// playback scheduler both borrow from the same buffer and rely on its
/// indices staying stable.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    sampling_rate: u32,
}

impl SampleBuffer {
    /// Construct a buffer. Requires at least one sample and a positive
    /// sampling rate; an empty buffer is a precondition violation here, not
    /// something downstream code silently tolerates.
    pub fn new(samples: Vec<f64>, sampling_rate: u32) -> Result<Self> {
        if samples.is_empty() {
            return Err(SignalError::InvalidConfiguration(
                "sample buffer must contain at least one sample".to_string(),
            ));
        }
        if sampling_rate == 0 {
            return Err(SignalError::InvalidConfiguration(
                "sampling rate must be positive".to_string(),
            ));
        }
        Ok(Self {
            samples,
            sampling_rate,
        })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false by construction; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sampling rate in Hz, fixed for the buffer's lifetime.
    pub fn sampling_rate(&self) -> u32 {
        self.sampling_rate
    }

    /// The full sample sequence.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Duration of the buffer in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sampling_rate as f64
    }

    /// `length` samples starting at `start`. Out-of-bounds requests fail
    /// with [`SignalError::Range`].
    pub fn slice(&self, start: usize, length: usize) -> Result<&[f64]> {
        let end = start.checked_add(length).ok_or(SignalError::Range {
            start,
            length,
            buffer_len: self.samples.len(),
        })?;
        if end > self.samples.len() {
            return Err(SignalError::Range {
                start,
                length,
                buffer_len: self.samples.len(),
            });
        }
        Ok(&self.samples[start..end])
    }
}
