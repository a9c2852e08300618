/// Playback layer: the window scheduler that turns a static buffer into a
/// sequence of scrolling display frames. Pacing belongs to the driver (the
/// egui app); the scheduler itself never sleeps and never touches I/O.

pub mod scheduler;
