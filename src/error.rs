use thiserror::Error;

/// Errors produced by the signal core (buffer, formatter, scheduler).
///
/// Reaching the end of the buffer during playback is *not* an error — the
/// scheduler reports that as a normal `Exhausted` outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    /// Non-positive or degenerate construction parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A slice request outside the buffer bounds. Indicates a caller or
    /// scheduler bug; always propagated, never swallowed.
    #[error("slice of {length} samples at {start} out of range for buffer of {buffer_len} samples")]
    Range {
        start: usize,
        length: usize,
        buffer_len: usize,
    },

    /// Bad formatter parameters (zero precision or wrap width).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, SignalError>;
