//! Pattern file input.
//!
//! Patterns are plain text: one row per line, '1' for a live cell and '0'
//! for a dead one, every row the same width. Parsed patterns come back as
//! center-relative offsets ready for `Life::load`.

use anyhow::{Context, Result};
use std::path::Path;

/// Load a pattern file and return its live cells as center-relative offsets
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<(i32, i32)>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

/// Parse a '0'/'1' text block into center-relative live-cell offsets
pub fn parse_pattern(content: &str) -> Result<Vec<(i32, i32)>> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let height = lines.len();
    let width = lines[0].len();

    if width == 0 {
        anyhow::bail!("Pattern rows cannot be empty");
    }

    let mut offsets = Vec::new();
    for (row, line) in lines.iter().enumerate() {
        if line.len() != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                row,
                line.len(),
                width
            );
        }
        for (col, ch) in line.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => offsets.push((col as i32, row as i32)),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row,
                    col
                ),
            }
        }
    }

    // Re-anchor on the bounding-box center so Life::load plants the
    // pattern around the middle of the grid
    let cx = (width / 2) as i32;
    let cy = (height / 2) as i32;
    for offset in &mut offsets {
        offset.0 -= cx;
        offset.1 -= cy;
    }

    Ok(offsets)
}

/// Write the bundled example pattern files for the setup command
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let glider_content = "010\n001\n111\n";
    std::fs::write(dir.join("glider.txt"), glider_content)
        .context("Failed to write glider.txt")?;

    let blinker_content = "000\n111\n000\n";
    std::fs::write(dir.join("blinker.txt"), blinker_content)
        .context("Failed to write blinker.txt")?;

    let block_content = "0000\n0110\n0110\n0000\n";
    std::fs::write(dir.join("block.txt"), block_content)
        .context("Failed to write block.txt")?;

    let beacon_content = "110000\n110000\n001100\n001100\n";
    std::fs::write(dir.join("beacon.txt"), beacon_content)
        .context("Failed to write beacon.txt")?;

    Ok(())
}
