use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::PlaybackConfig;
use crate::error::Result;
use crate::playback::scheduler::{SchedulerState, WindowFrame, WindowScheduler};
use crate::signal::buffer::SampleBuffer;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full playback state, independent of rendering.
///
/// The egui app is the driver from the scheduler's point of view: it calls
/// [`maybe_tick`](Self::maybe_tick) once per frame and the pacing clock here
/// decides whether enough wall time has passed for the next window.
pub struct AppState {
    /// The signal being played back (shared with the scheduler).
    pub buffer: Arc<SampleBuffer>,

    /// The windowing state machine.
    pub scheduler: WindowScheduler,

    /// Most recently emitted window, kept for redraws between ticks.
    pub frame: Option<WindowFrame>,

    /// Construction-time parameters, displayed in the side panel.
    pub config: PlaybackConfig,

    /// When the last window was emitted; None before the first tick.
    last_tick: Option<Instant>,

    /// Driver-level pause: while set, `maybe_tick` does nothing.
    pub paused: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: PlaybackConfig, buffer: Arc<SampleBuffer>) -> Result<Self> {
        let scheduler = WindowScheduler::new(
            buffer.clone(),
            config.window_size_secs,
            config.update_interval_secs,
        )?;
        Ok(Self {
            buffer,
            scheduler,
            frame: None,
            config,
            last_tick: None,
            paused: false,
            status_message: None,
        })
    }

    /// The configured wall-clock cadence.
    pub fn update_interval(&self) -> Duration {
        Duration::from_secs_f64(self.config.update_interval_secs)
    }

    /// Whether the scheduler still has windows to emit.
    pub fn running(&self) -> bool {
        self.scheduler.state() == SchedulerState::Running
    }

    /// Advance playback if the update interval has elapsed since the last
    /// tick. Returns the time remaining until the next due tick, or `None`
    /// when playback is paused or finished (no repaint needs scheduling).
    pub fn maybe_tick(&mut self, now: Instant) -> Option<Duration> {
        if self.paused || !self.running() {
            return None;
        }

        let interval = self.update_interval();
        if let Some(last) = self.last_tick {
            let elapsed = now.duration_since(last);
            if elapsed < interval {
                return Some(interval - elapsed);
            }
        }

        match self.scheduler.tick() {
            Ok(Some(frame)) => {
                self.frame = Some(frame);
                self.last_tick = Some(now);
                Some(interval)
            }
            Ok(None) => {
                log::info!("playback finished: buffer exhausted");
                None
            }
            Err(e) => {
                // A Range error here is a scheduler bug; surface it instead
                // of swallowing it and spinning.
                log::error!("scheduler tick failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
                self.paused = true;
                None
            }
        }
    }

    /// Restart playback from the beginning with a fresh cursor.
    pub fn restart(&mut self) -> Result<()> {
        self.scheduler = WindowScheduler::new(
            self.buffer.clone(),
            self.config.window_size_secs,
            self.config.update_interval_secs,
        )?;
        self.frame = None;
        self.last_tick = None;
        self.paused = false;
        self.status_message = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let config = PlaybackConfig {
            duration_secs: 3.0,
            limit_samples: None,
            ..PlaybackConfig::default()
        };
        let samples: Vec<f64> = (0..300).map(|i| i as f64 / 300.0).collect();
        let buffer = Arc::new(SampleBuffer::new(samples, config.sampling_rate).unwrap());
        AppState::new(config, buffer).unwrap()
    }

    #[test]
    fn first_tick_is_immediate() {
        let mut st = state();
        assert!(st.frame.is_none());
        st.maybe_tick(Instant::now());
        assert_eq!(st.frame.as_ref().unwrap().start_index, 0);
    }

    #[test]
    fn ticks_are_paced_by_the_interval() {
        let mut st = state();
        let t0 = Instant::now();
        st.maybe_tick(t0);

        // Too early: the cursor must not move.
        st.maybe_tick(t0 + Duration::from_millis(10));
        assert_eq!(st.frame.as_ref().unwrap().start_index, 0);

        // One interval later: one step forward.
        st.maybe_tick(t0 + Duration::from_millis(51));
        assert_eq!(
            st.frame.as_ref().unwrap().start_index,
            st.scheduler.step_samples()
        );
    }

    #[test]
    fn pause_stops_ticking() {
        let mut st = state();
        let t0 = Instant::now();
        st.maybe_tick(t0);
        st.paused = true;
        assert!(st.maybe_tick(t0 + Duration::from_secs(1)).is_none());
        assert_eq!(st.frame.as_ref().unwrap().start_index, 0);
    }

    #[test]
    fn restart_resets_the_cursor() {
        let mut st = state();
        let t0 = Instant::now();
        st.maybe_tick(t0);
        st.maybe_tick(t0 + Duration::from_millis(60));
        assert!(st.frame.as_ref().unwrap().start_index > 0);

        st.restart().unwrap();
        assert!(st.frame.is_none());
        assert_eq!(st.scheduler.start_index(), 0);
        st.maybe_tick(t0 + Duration::from_millis(120));
        assert_eq!(st.frame.as_ref().unwrap().start_index, 0);
    }
}
