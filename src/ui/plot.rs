use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};

use crate::state::AppState;

/// Fixed amplitude range of the display, matching the synthesized signal.
const AMPLITUDE_RANGE: (f64, f64) = (-2.0, 2.0);

// ---------------------------------------------------------------------------
// Scrolling waveform (central panel)
// ---------------------------------------------------------------------------

/// Render the current playback window in the central panel.
///
/// The plot owns the axis limits: amplitude is pinned to a fixed range and
/// the time axis follows the emitted window, which is what makes the trace
/// scroll. User zoom/drag is disabled so the viewport stays locked to the
/// playback cursor.
pub fn waveform_plot(ui: &mut Ui, state: &AppState) {
    let frame = match &state.frame {
        Some(frame) => frame,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                if state.running() {
                    ui.heading("Waiting for the first window…");
                } else {
                    ui.heading("Playback finished");
                }
            });
            return;
        }
    };

    let points: PlotPoints = frame
        .time
        .iter()
        .zip(frame.amplitude.iter())
        .map(|(&t, &a)| [t, a])
        .collect();

    let line = Line::new(points)
        .name("PPG")
        .color(Color32::LIGHT_BLUE)
        .width(1.5);

    let (t_min, t_max) = match (frame.time.first(), frame.time.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => (0.0, state.config.window_size_secs),
    };

    Plot::new("waveform_plot")
        .x_axis_label("Time (s)")
        .y_axis_label("Amplitude")
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [t_min, AMPLITUDE_RANGE.0],
                [t_max, AMPLITUDE_RANGE.1],
            ));
            plot_ui.line(line);
        });
}
