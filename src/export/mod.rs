/// Export layer: deterministic text renderings of a sample buffer.
///
/// `format` produces complete strings (pure, no I/O); `writer` puts them on
/// disk in one shot so a failed export never leaves a partial artifact.

pub mod format;
pub mod writer;
