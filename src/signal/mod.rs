/// Signal layer: the immutable sample buffer and the demo generator.
///
/// Architecture:
/// ```text
///   ┌──────────┐
///   │  synth    │  simulate_ppg() → Vec<f64>
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SampleBuffer  │  samples + sampling rate, read-only after construction
///   └──────────────┘
///        │
///        ├──▶ export  (plain dump, embedded literal)
///        └──▶ playback (scrolling window scheduler)
/// ```

pub mod buffer;
pub mod synth;
