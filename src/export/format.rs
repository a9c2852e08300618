use crate::error::{Result, SignalError};
use crate::signal::buffer::SampleBuffer;

// ---------------------------------------------------------------------------
// Fixed-point formatters – pure functions, byte-for-byte reproducible
// ---------------------------------------------------------------------------

/// Render the buffer as plain text: one value per line, exactly `precision`
/// digits after the decimal point, no exponent notation, no separators.
///
/// Rounding follows Rust's `{:.prec$}` fixed formatting (correctly rounded
/// decimal output, ties to even), so the same buffer and precision always
/// produce the identical string. The output has exactly `buffer.len()`
/// lines, each terminated by `\n`.
pub fn to_plain_text(buffer: &SampleBuffer, precision: usize) -> Result<String> {
    if precision == 0 {
        return Err(SignalError::InvalidArgument(
            "precision must be positive".to_string(),
        ));
    }

    let mut out = String::new();
    for value in buffer.samples() {
        out.push_str(&format!("{value:.precision$}\n"));
    }
    Ok(out)
}

/// Render the buffer as a brace-delimited array literal for inclusion in
/// firmware source, e.g.:
///
/// ```text
/// {
///     0.10000000, 0.20000000, ...
///     0.30000000
/// };
/// ```
///
/// Values are comma-space separated with a line break after every
/// `values_per_line`-th value; the trailing run of `", "` characters is
/// stripped before the closing `\n};`. Firmware builds consume this text
/// verbatim, so the framing must not change.
pub fn to_embedded_literal(
    buffer: &SampleBuffer,
    precision: usize,
    values_per_line: usize,
) -> Result<String> {
    if precision == 0 {
        return Err(SignalError::InvalidArgument(
            "precision must be positive".to_string(),
        ));
    }
    if values_per_line == 0 {
        return Err(SignalError::InvalidArgument(
            "values_per_line must be positive".to_string(),
        ));
    }

    let mut out = String::from("{\n    ");
    for (i, value) in buffer.samples().iter().enumerate() {
        out.push_str(&format!("{value:.precision$}, "));
        if (i + 1) % values_per_line == 0 {
            out.push_str("\n    ");
        }
    }
    let mut literal = out.trim_end_matches(|c| c == ',' || c == ' ').to_string();
    literal.push_str("\n};");
    Ok(literal)
}
