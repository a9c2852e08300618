use std::sync::Arc;

use crate::error::{Result, SignalError};
use crate::signal::buffer::SampleBuffer;

// ---------------------------------------------------------------------------
// WindowFrame – one emitted display window
// ---------------------------------------------------------------------------

/// The (time, amplitude) series handed to the renderer on each tick.
///
/// Recomputed every tick, never stored by the scheduler.
#[derive(Debug, Clone)]
pub struct WindowFrame {
    /// Buffer index of the first sample in this window.
    pub start_index: usize,
    /// Time axis in seconds: `(start_index + i) / sampling_rate`.
    pub time: Vec<f64>,
    /// Amplitude values, same length as `time`.
    pub amplitude: Vec<f64>,
}

// ---------------------------------------------------------------------------
// WindowScheduler – the playback state machine
// ---------------------------------------------------------------------------

/// Scheduler lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Windows remain to be emitted.
    Running,
    /// The window no longer fits in the buffer. Terminal, and the normal
    /// way a playback run ends.
    Exhausted,
}

/// Advances a sliding window over a [`SampleBuffer`] one tick at a time.
///
/// The scheduler is a pure step function: each [`tick`](Self::tick) either
/// emits the next window and advances the cursor by `step_samples`, or
/// reports exhaustion. Wall-clock pacing between ticks is the caller's job.
#[derive(Debug)]
pub struct WindowScheduler {
    buffer: Arc<SampleBuffer>,
    window_samples: usize,
    step_samples: usize,
    start_index: usize,
    state: SchedulerState,
}

impl WindowScheduler {
    /// Build a scheduler over `buffer`.
    ///
    /// `window_samples` is `floor(window_size_secs * rate)` and must come
    /// out positive; `step_samples` is `round(update_interval_secs * rate)`
    /// clamped to at least 1 so playback always makes forward progress.
    /// That floor is the only parameter adjustment that happens silently —
    /// everything else degenerate is an `InvalidConfiguration`.
    pub fn new(
        buffer: Arc<SampleBuffer>,
        window_size_secs: f64,
        update_interval_secs: f64,
    ) -> Result<Self> {
        if window_size_secs <= 0.0 || !window_size_secs.is_finite() {
            return Err(SignalError::InvalidConfiguration(
                "window size must be positive".to_string(),
            ));
        }
        if update_interval_secs <= 0.0 || !update_interval_secs.is_finite() {
            return Err(SignalError::InvalidConfiguration(
                "update interval must be positive".to_string(),
            ));
        }

        let rate = buffer.sampling_rate() as f64;
        let window_samples = (window_size_secs * rate) as usize;
        if window_samples == 0 {
            return Err(SignalError::InvalidConfiguration(format!(
                "window of {window_size_secs} s holds no samples at {rate} Hz"
            )));
        }
        let step_samples = ((update_interval_secs * rate).round() as usize).max(1);

        Ok(Self {
            buffer,
            window_samples,
            step_samples,
            start_index: 0,
            state: SchedulerState::Running,
        })
    }

    /// Samples per emitted window.
    pub fn window_samples(&self) -> usize {
        self.window_samples
    }

    /// Cursor advance per tick, in samples.
    pub fn step_samples(&self) -> usize {
        self.step_samples
    }

    /// Current cursor position.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Playback position of the cursor, in seconds.
    pub fn position_secs(&self) -> f64 {
        self.start_index as f64 / self.buffer.sampling_rate() as f64
    }

    /// Advance one step.
    ///
    /// Returns `Ok(Some(frame))` while a full window still fits, and
    /// `Ok(None)` once the scheduler is exhausted — the sole termination
    /// condition. A `Range` error from the underlying slice would indicate
    /// a cursor bug and is propagated untouched.
    pub fn tick(&mut self) -> Result<Option<WindowFrame>> {
        if self.state == SchedulerState::Exhausted {
            return Ok(None);
        }
        if self.start_index + self.window_samples > self.buffer.len() {
            self.state = SchedulerState::Exhausted;
            return Ok(None);
        }

        let amplitude = self
            .buffer
            .slice(self.start_index, self.window_samples)?
            .to_vec();
        let rate = self.buffer.sampling_rate() as f64;
        let time: Vec<f64> = (self.start_index..self.start_index + self.window_samples)
            .map(|i| i as f64 / rate)
            .collect();

        let frame = WindowFrame {
            start_index: self.start_index,
            time,
            amplitude,
        };
        self.start_index += self.step_samples;
        Ok(Some(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn buffer(n: usize, rate: u32) -> Arc<SampleBuffer> {
        let samples: Vec<f64> = (0..n).map(|i| i as f64).collect();
        Arc::new(SampleBuffer::new(samples, rate).unwrap())
    }

    #[test]
    fn derived_constants() {
        let sched = WindowScheduler::new(buffer(1000, 100), 1.0, 0.05).unwrap();
        assert_eq!(sched.window_samples(), 100);
        assert_eq!(sched.step_samples(), 5);
        assert_eq!(sched.state(), SchedulerState::Running);
    }

    #[test]
    fn window_size_truncates() {
        let sched = WindowScheduler::new(buffer(1000, 3), 1.5, 1.0).unwrap();
        // floor(1.5 * 3) = 4
        assert_eq!(sched.window_samples(), 4);
    }

    #[test]
    fn degenerate_window_rejected() {
        let err = WindowScheduler::new(buffer(100, 100), 0.005, 0.05).unwrap_err();
        assert!(matches!(err, SignalError::InvalidConfiguration(_)));
        let err = WindowScheduler::new(buffer(100, 100), 0.0, 0.05).unwrap_err();
        assert!(matches!(err, SignalError::InvalidConfiguration(_)));
        let err = WindowScheduler::new(buffer(100, 100), 1.0, 0.0).unwrap_err();
        assert!(matches!(err, SignalError::InvalidConfiguration(_)));
    }

    #[test]
    fn tiny_interval_clamps_step_to_one() {
        let mut sched = WindowScheduler::new(buffer(12, 100), 0.1, 0.001).unwrap();
        assert_eq!(sched.step_samples(), 1);
        let first = sched.tick().unwrap().unwrap();
        let second = sched.tick().unwrap().unwrap();
        assert_eq!(second.start_index - first.start_index, 1);
    }

    #[test]
    fn emits_expected_window_count() {
        // 1000 samples at 100 Hz, 1 s window, 0.05 s step:
        // floor((1000 - 100) / 5) + 1 = 181 windows.
        let mut sched = WindowScheduler::new(buffer(1000, 100), 1.0, 0.05).unwrap();
        let mut frames = Vec::new();
        while let Some(frame) = sched.tick().unwrap() {
            frames.push(frame);
        }
        assert_eq!(frames.len(), 181);
        assert_eq!(sched.state(), SchedulerState::Exhausted);

        let first = &frames[0];
        assert_eq!(first.start_index, 0);
        assert_eq!(first.amplitude.len(), 100);
        assert_relative_eq!(first.time[0], 0.0);
        assert_relative_eq!(first.time[1], 0.01);
        assert_relative_eq!(first.time[99], 0.99);

        let last = frames.last().unwrap();
        assert_eq!(last.start_index, 900);
        assert_eq!(last.amplitude[0], 900.0);
        assert_eq!(last.amplitude[99], 999.0);
    }

    #[test]
    fn cursor_advances_by_exactly_one_step() {
        let mut sched = WindowScheduler::new(buffer(500, 100), 0.5, 0.07).unwrap();
        let step = sched.step_samples();
        let mut previous: Option<usize> = None;
        while let Some(frame) = sched.tick().unwrap() {
            if let Some(prev) = previous {
                assert_eq!(frame.start_index, prev + step);
            }
            previous = Some(frame.start_index);
        }
    }

    #[test]
    fn short_buffer_is_immediately_exhausted() {
        let mut sched = WindowScheduler::new(buffer(50, 100), 1.0, 0.05).unwrap();
        assert!(sched.tick().unwrap().is_none());
        assert_eq!(sched.state(), SchedulerState::Exhausted);
        // Ticking a terminal scheduler stays terminal and emits nothing.
        assert!(sched.tick().unwrap().is_none());
    }

    #[test]
    fn exact_fit_emits_single_window() {
        let mut sched = WindowScheduler::new(buffer(100, 100), 1.0, 0.05).unwrap();
        let frame = sched.tick().unwrap().unwrap();
        assert_eq!(frame.amplitude.len(), 100);
        assert!(sched.tick().unwrap().is_none());
    }

    #[test]
    fn time_axis_tracks_cursor() {
        let mut sched = WindowScheduler::new(buffer(300, 100), 1.0, 0.5).unwrap();
        sched.tick().unwrap().unwrap();
        let frame = sched.tick().unwrap().unwrap();
        assert_eq!(frame.start_index, 50);
        assert_relative_eq!(frame.time[0], 0.5);
        assert_relative_eq!(frame.time[99], 1.49);
        assert_relative_eq!(sched.position_secs(), 1.0);
    }
}
