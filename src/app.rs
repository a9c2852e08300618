use std::time::Instant;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation – the driving loop for the scheduler
// ---------------------------------------------------------------------------

pub struct PulseScopeApp {
    pub state: AppState,
}

impl PulseScopeApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PulseScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Pacing: advance the scheduler when the interval has elapsed ----
        if let Some(next_due) = self.state.maybe_tick(Instant::now()) {
            ctx.request_repaint_after(next_due);
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: parameters and playback controls ----
        egui::SidePanel::left("playback_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: scrolling waveform ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::waveform_plot(ui, &self.state);
        });
    }
}
