//! Cellular automaton core: grid, rules, step engine, and the Life facade

pub mod grid;
pub mod io;
#[allow(clippy::module_inception)]
pub mod life;
pub mod patterns;
pub mod rule;
pub mod step;

pub use grid::{Cell, Grid, GridError};
pub use io::{create_example_patterns, load_pattern_from_file, parse_pattern};
pub use life::{Life, DEFAULT_TRACE_DEPTH};
pub use patterns::Lifeform;
pub use rule::{RuleError, RulePreset, RuleSet};
pub use step::StepEngine;
