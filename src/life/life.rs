//! The `Life` facade owning one grid, one rule set, and the counters

use super::grid::{Cell, Grid, GridError};
use super::rule::RuleSet;
use super::step::StepEngine;
use serde::{Deserialize, Serialize};

/// Default trace palette depth, matching the demo palettes' color count
pub const DEFAULT_TRACE_DEPTH: usize = 10;

/// A running cellular automaton: one grid, one active rule, and the
/// generation/population counters the rendering layer displays.
///
/// `Life` is single-threaded and furnishes no timer: the caller invokes
/// [`Life::step`] at its own cadence, and each step fully computes one
/// generation before returning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Life {
    grid: Grid,
    rule: RuleSet,
    engine: StepEngine,
    generation: u64,
    population: usize,
}

impl Life {
    /// Create a halted world of fixed `rows x cols` under Conway's rule.
    ///
    /// `trace_depth` is the rendering palette length; it bounds how
    /// negative dead-cell ages may grow.
    pub fn new(rows: usize, cols: usize, trace_depth: usize) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            rule: RuleSet::game_of_life(),
            engine: StepEngine::new(trace_depth),
            generation: 0,
            population: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// The engine's logical clock; increments once per `step`
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Exact count of live cells, maintained across every mutation
    pub fn population(&self) -> usize {
        self.population
    }

    pub fn rule(&self) -> &RuleSet {
        &self.rule
    }

    /// Read-only view of the grid for rendering
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Read one cell for rendering
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        self.grid.get(x, y)
    }

    /// Pencil tool: mark a cell alive.
    ///
    /// A no-op if the cell is already alive, so repeated drags over the
    /// same cell never reset its age.
    pub fn set(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        if self.grid.get(x, y)?.alive {
            return Ok(());
        }
        self.grid.set(x, y)?;
        self.population += 1;
        Ok(())
    }

    /// Eraser tool: mark a cell dead (age -1). A no-op if already dead.
    pub fn unset(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        if !self.grid.get(x, y)?.alive {
            return Ok(());
        }
        self.grid.unset(x, y)?;
        self.population -= 1;
        Ok(())
    }

    /// Plant a pattern around the grid center.
    ///
    /// Offsets falling outside the grid are skipped. The grid is not
    /// cleared first; callers wanting a fresh board clear() beforehand.
    pub fn load(&mut self, offsets: &[(i32, i32)]) {
        let anchor_x = (self.grid.cols() / 2) as i32;
        let anchor_y = (self.grid.rows() / 2) as i32;
        for &(dx, dy) in offsets {
            let x = anchor_x + dx;
            let y = anchor_y + dy;
            if x >= 0 && y >= 0 && self.grid.in_bounds(x as usize, y as usize) {
                // In bounds by the check above
                let _ = self.set(x as usize, y as usize);
            }
        }
    }

    /// Wipe the board. The generation counter is cumulative across loads
    /// and deliberately survives a clear; only the population resets.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.population = 0;
    }

    /// Advance exactly one generation
    pub fn step(&mut self) {
        self.grid = self.engine.advance(&self.grid, &self.rule);
        self.generation += 1;
        self.population = self.grid.population();
    }

    /// Swap in a new active rule.
    ///
    /// Takes effect on the next step; ages already accumulated are left
    /// untouched. The rule is an owned value, so the caller's presets and
    /// any custom edits stay independent of this instance.
    pub fn set_rule(&mut self, rule: RuleSet) {
        self.rule = rule;
    }
}
