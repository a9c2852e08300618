mod app;
mod config;
mod error;
mod export;
mod playback;
mod signal;
mod state;
mod ui;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use app::PulseScopeApp;
use config::PlaybackConfig;
use eframe::egui;
use signal::buffer::SampleBuffer;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = PlaybackConfig::default();
    config.validate()?;

    // ---- Generate the signal and freeze it into a buffer ----
    let mut samples = signal::synth::simulate_ppg(
        config.duration_secs,
        config.sampling_rate,
        config.heart_rate_bpm,
        42,
    );
    if let Some(limit) = config.limit_samples {
        samples.truncate(limit);
    }
    let buffer = Arc::new(SampleBuffer::new(samples, config.sampling_rate)?);
    log::info!(
        "simulated {} samples at {} Hz ({:.1} s)",
        buffer.len(),
        buffer.sampling_rate(),
        buffer.duration_secs()
    );

    // ---- Write both export artifacts before the viewer starts ----
    export::writer::write_plain_text(Path::new("ppg_values.txt"), &buffer, config.precision)
        .context("exporting plain value dump")?;
    log::info!("wrote ppg_values.txt");

    export::writer::write_embedded_literal(
        Path::new("ppg_table.h"),
        &buffer,
        config.precision,
        config.values_per_line,
    )
    .context("exporting firmware table")?;
    log::info!("wrote ppg_table.h");

    // ---- Launch the viewer ----
    let state = AppState::new(config, buffer)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pulse Scope – PPG Playback",
        options,
        Box::new(|_cc| Ok(Box::new(PulseScopeApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))?;

    Ok(())
}
