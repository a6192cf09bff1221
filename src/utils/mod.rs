//! Display and reporting utilities

pub mod display;
pub mod report;

pub use display::{Color, ColorOutput, WorldFormatter};
pub use report::{GenerationSample, RunReport};
