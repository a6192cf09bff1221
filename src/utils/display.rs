//! Terminal rendering and output formatting

use crate::life::{Grid, Life};

/// Character ramp for the fade trace, brightest first.
///
/// A dead cell with age -k renders as the (k-1)th ramp entry, the terminal
/// analogue of the demo's palette lookup by negated age; cells older than
/// the ramp share its last entry.
const TRACE_RAMP: [char; 5] = ['▓', '▒', '░', '∙', '.'];

/// Formats grids and worlds for console output
pub struct WorldFormatter;

impl WorldFormatter {
    /// Render the world, optionally with the fade trace of recent deaths
    pub fn format_world(life: &Life, trace: bool) -> String {
        let grid = life.grid();
        let mut output = String::with_capacity(grid.rows() * (grid.cols() + 1));
        for y in 0..grid.rows() {
            for x in 0..grid.cols() {
                // In range by the loop bounds
                let cell = grid.get(x, y).unwrap_or_default();
                let symbol = if cell.alive {
                    '█'
                } else if trace {
                    match cell.trace_index() {
                        Some(k) => TRACE_RAMP[(k - 1).min(TRACE_RAMP.len() - 1)],
                        None => '·',
                    }
                } else {
                    '·'
                };
                output.push(symbol);
            }
            output.push('\n');
        }
        output
    }

    /// Render a grid with row and column numbers
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..grid.cols() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for y in 0..grid.rows() {
            output.push_str(&format!("{:2} ", y));
            for x in 0..grid.cols() {
                let alive = grid.get(x, y).map(|cell| cell.alive).unwrap_or(false);
                output.push_str(if alive { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One-line counter readout shown under each frame
    pub fn format_counters(life: &Life) -> String {
        format!(
            "generation {} | population {} | rule {}",
            life.generation(),
            life.population(),
            life.rule()
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
        }
    }
}
