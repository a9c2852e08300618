use eframe::egui::{self, Color32, Grid, RichText, Ui};

use crate::export::writer;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export values…").clicked() {
                export_plain_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export firmware table…").clicked() {
                export_embedded_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} samples at {} Hz ({:.1} s)",
            state.buffer.len(),
            state.buffer.sampling_rate(),
            state.buffer.duration_secs()
        ));

        ui.separator();

        ui.label(format!("position: {:.2} s", state.scheduler.position_secs()));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – parameters and playback controls
// ---------------------------------------------------------------------------

/// Render the playback control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Playback");
    ui.separator();

    Grid::new("parameters").num_columns(2).show(ui, |ui: &mut Ui| {
        ui.label("Window");
        ui.label(format!(
            "{:.2} s ({} samples)",
            state.config.window_size_secs,
            state.scheduler.window_samples()
        ));
        ui.end_row();

        ui.label("Update interval");
        ui.label(format!(
            "{:.0} ms ({} samples/step)",
            state.config.update_interval_secs * 1000.0,
            state.scheduler.step_samples()
        ));
        ui.end_row();

        ui.label("State");
        if state.running() {
            ui.label(if state.paused { "Paused" } else { "Running" });
        } else {
            ui.label("Exhausted");
        }
        ui.end_row();
    });

    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        let pause_label = if state.paused { "Resume" } else { "Pause" };
        if ui.button(pause_label).clicked() {
            state.paused = !state.paused;
        }
        if ui.button("Restart").clicked() {
            if let Err(e) = state.restart() {
                log::error!("restart failed: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    });

    ui.separator();

    ui.heading("Export");
    ui.separator();
    ui.label(format!(
        "{} decimals, {} values per line",
        state.config.precision, state.config.values_per_line
    ));
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Values…").clicked() {
            export_plain_dialog(state);
        }
        if ui.button("Firmware table…").clicked() {
            export_embedded_dialog(state);
        }
    });
}

// ---------------------------------------------------------------------------
// Save dialogs
// ---------------------------------------------------------------------------

fn export_plain_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export sample values")
        .set_file_name("ppg_values.txt")
        .add_filter("Text", &["txt"])
        .save_file();

    if let Some(path) = file {
        match writer::write_plain_text(&path, &state.buffer, state.config.precision) {
            Ok(()) => {
                log::info!("wrote {} values to {}", state.buffer.len(), path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

fn export_embedded_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export firmware table")
        .set_file_name("ppg_table.h")
        .add_filter("C header", &["h"])
        .add_filter("Text", &["txt"])
        .save_file();

    if let Some(path) = file {
        match writer::write_embedded_literal(
            &path,
            &state.buffer,
            state.config.precision,
            state.config.values_per_line,
        ) {
            Ok(()) => {
                log::info!("wrote firmware table to {}", path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
