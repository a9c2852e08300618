use std::path::Path;

use anyhow::{Context, Result};

use super::format;
use crate::signal::buffer::SampleBuffer;

// ---------------------------------------------------------------------------
// Artifact writers – format the full string first, then write in one shot
// ---------------------------------------------------------------------------

/// Write the plain decimal dump (one value per line) to `path`.
pub fn write_plain_text(path: &Path, buffer: &SampleBuffer, precision: usize) -> Result<()> {
    let text = format::to_plain_text(buffer, precision)
        .context("formatting plain text dump")?;
    std::fs::write(path, text)
        .with_context(|| format!("writing plain text dump to {}", path.display()))?;
    Ok(())
}

/// Write the embedded array literal to `path`.
pub fn write_embedded_literal(
    path: &Path,
    buffer: &SampleBuffer,
    precision: usize,
    values_per_line: usize,
) -> Result<()> {
    let literal = format::to_embedded_literal(buffer, precision, values_per_line)
        .context("formatting embedded array literal")?;
    std::fs::write(path, literal)
        .with_context(|| format!("writing embedded literal to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_complete_artifacts() {
        let buf = SampleBuffer::new(vec![0.1, 0.2, 0.3], 100).unwrap();
        let dir = std::env::temp_dir().join("pulse-scope-writer-test");
        std::fs::create_dir_all(&dir).unwrap();

        let plain = dir.join("values.txt");
        write_plain_text(&plain, &buf, 2).unwrap();
        assert_eq!(std::fs::read_to_string(&plain).unwrap(), "0.10\n0.20\n0.30\n");

        let table = dir.join("table.h");
        write_embedded_literal(&table, &buf, 2, 2).unwrap();
        assert_eq!(
            std::fs::read_to_string(&table).unwrap(),
            "{\n    0.10, 0.20, \n    0.30\n};"
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn bad_parameters_write_nothing() {
        let buf = SampleBuffer::new(vec![0.1], 100).unwrap();
        let dir = std::env::temp_dir().join("pulse-scope-writer-err-test");
        std::fs::create_dir_all(&dir).unwrap();

        let path = dir.join("values.txt");
        assert!(write_plain_text(&path, &buf, 0).is_err());
        assert!(!path.exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
