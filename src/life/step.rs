//! Generation transition for the automaton

use super::grid::{Cell, Grid};
use super::rule::RuleSet;
use serde::{Deserialize, Serialize};

/// Minimum trace depth: one slot for "alive", so ages floor at 0
pub const MIN_TRACE_DEPTH: usize = 1;

/// Computes the next generation of a grid under a rule set.
///
/// The engine is pure and synchronous: `advance` reads only the current
/// generation and writes a fresh grid, so every cell's fate depends on the
/// neighbor counts of the generation being replaced, never on cells already
/// updated this step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StepEngine {
    age_floor: i32,
}

impl StepEngine {
    /// Build an engine for a trace palette with `trace_depth` entries.
    ///
    /// Dead-cell ages are floored at `-(trace_depth - 1)`: more negative
    /// values have no distinct trace color, so decrementing further would
    /// only grow the numbers without bound.
    pub fn new(trace_depth: usize) -> Self {
        let depth = trace_depth.max(MIN_TRACE_DEPTH);
        Self {
            age_floor: -((depth - 1) as i32),
        }
    }

    pub fn age_floor(&self) -> i32 {
        self.age_floor
    }

    /// Apply `rule` to `current` and return the next generation
    pub fn advance(&self, current: &Grid, rule: &RuleSet) -> Grid {
        let mut next = Grid::new(current.rows(), current.cols());
        for y in 0..current.rows() {
            for x in 0..current.cols() {
                let neighbors = current.neighbor_count(x, y);
                let cell = current.cell(x, y);
                next.put(x, y, self.transition(cell, neighbors, rule));
            }
        }
        next
    }

    /// Next state of one cell given its live neighbor count
    fn transition(&self, cell: Cell, neighbors: u8, rule: &RuleSet) -> Cell {
        if cell.alive {
            if rule.survives(neighbors) {
                Cell {
                    alive: true,
                    age: cell.age + 1,
                }
            } else {
                Cell {
                    alive: false,
                    age: -1,
                }
            }
        } else if rule.born(neighbors) {
            Cell {
                alive: true,
                age: 0,
            }
        } else {
            Cell {
                alive: false,
                age: (cell.age - 1).max(self.age_floor),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conway() -> RuleSet {
        RuleSet::game_of_life()
    }

    fn grid_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &(x, y) in live {
            grid.set(x, y).unwrap();
        }
        grid
    }

    #[test]
    fn test_block_is_still_life() {
        let engine = StepEngine::new(10);
        let block = grid_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let mut grid = block.clone();
        for _ in 0..5 {
            grid = engine.advance(&grid, &conway());
            assert_eq!(grid.live_cells(), block.live_cells());
            assert_eq!(grid.population(), 4);
        }
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let engine = StepEngine::new(10);
        let horizontal = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);

        let vertical = engine.advance(&horizontal, &conway());
        assert_eq!(vertical.live_cells(), vec![(2, 1), (2, 2), (2, 3)]);

        let back = engine.advance(&vertical, &conway());
        assert_eq!(back.live_cells(), horizontal.live_cells());
    }

    #[test]
    fn test_glider_translates_by_one_one_in_four_steps() {
        let engine = StepEngine::new(10);
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut grid = grid_with(10, 10, &glider);

        for _ in 0..4 {
            grid = engine.advance(&grid, &conway());
            assert_eq!(grid.population(), 5);
        }

        let translated: Vec<(usize, usize)> =
            glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        let mut expected = translated;
        expected.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(grid.live_cells(), expected);
    }

    #[test]
    fn test_next_state_reads_only_current_generation() {
        // A blinker evaluated sequentially in place would collapse; the
        // synchronous transition keeps all three cells in play.
        let engine = StepEngine::new(10);
        let grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let next = engine.advance(&grid, &conway());
        assert_eq!(next.population(), 3);
    }

    #[test]
    fn test_survivor_age_increments() {
        let engine = StepEngine::new(10);
        let mut grid = grid_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        for expected_age in 1..=3 {
            grid = engine.advance(&grid, &conway());
            assert_eq!(grid.get(1, 1).unwrap().age, expected_age);
        }
    }

    #[test]
    fn test_dead_cell_age_decrements_to_floor() {
        let engine = StepEngine::new(4); // floor at -3
        // Lone live cell dies immediately
        let mut grid = grid_with(3, 3, &[(1, 1)]);
        grid = engine.advance(&grid, &conway());
        assert_eq!(grid.get(1, 1).unwrap().age, -1);

        for expected in [-2, -3, -3, -3] {
            grid = engine.advance(&grid, &conway());
            assert_eq!(grid.get(1, 1).unwrap().age, expected);
        }
    }

    #[test]
    fn test_birth_resets_age_to_zero() {
        let engine = StepEngine::new(10);
        // Blinker: (2,1) is born on the first step
        let grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let next = engine.advance(&grid, &conway());
        assert_eq!(
            next.get(2, 1).unwrap(),
            Cell {
                alive: true,
                age: 0
            }
        );
    }

    #[test]
    fn test_degenerate_rule_kills_everything() {
        let engine = StepEngine::new(10);
        let rule = RuleSet::parse("", "").unwrap();
        let grid = grid_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let next = engine.advance(&grid, &rule);
        assert!(next.is_empty());
        // Every former cell carries the fresh-death trace
        assert_eq!(next.get(1, 1).unwrap().age, -1);
    }

    #[test]
    fn test_highlife_replicator_birth_on_six() {
        let rule = super::super::rule::RulePreset::HighLife.rule_set();
        let engine = StepEngine::new(10);
        // Ring of six around a dead center
        let grid = grid_with(
            3,
            3,
            &[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (1, 2)],
        );
        let next = engine.advance(&grid, &rule);
        assert!(next.get(1, 1).unwrap().alive);
    }

    #[test]
    fn test_trace_depth_floor_of_one() {
        let engine = StepEngine::new(1);
        assert_eq!(engine.age_floor(), 0);
        let grid = grid_with(3, 3, &[(1, 1)]);
        let next = engine.advance(&grid, &RuleSet::game_of_life());
        // Death always stamps -1; the floor applies on the next decrement
        assert_eq!(next.get(1, 1).unwrap().age, -1);
        let after = engine.advance(&next, &RuleSet::game_of_life());
        assert_eq!(after.get(1, 1).unwrap().age, 0);
    }
}
