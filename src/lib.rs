//! Cellular automaton engine behind the pixelpals demo.
//!
//! The core is a finite 2-D grid evolving under a configurable
//! birth/survival rule, with per-cell ages driving a fade trace of
//! recently-dead cells. Rendering, scheduling, and the collaborative
//! canvas live outside this crate; callers drive [`Life::step`] at their
//! own cadence and read cells back for display.

pub mod config;
pub mod life;
pub mod utils;

pub use config::Settings;
pub use life::{Cell, Grid, Life, Lifeform, RulePreset, RuleSet};
