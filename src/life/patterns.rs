//! Built-in lifeform patterns.
//!
//! Offsets are relative to the center of each pattern's bounding box, so
//! `Life::load` plants them around the grid center.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown lifeform '{0}'")]
pub struct UnknownLifeform(pub String);

/// The named patterns shipped with the demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifeform {
    Block,
    Blinker,
    Toad,
    Beacon,
    Glider,
    Lwss,
    RPentomino,
    Acorn,
    GosperGliderGun,
}

const BLOCK: &[(i32, i32)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];

const BLINKER: &[(i32, i32)] = &[(-1, 0), (0, 0), (1, 0)];

const TOAD: &[(i32, i32)] = &[(0, 0), (1, 0), (2, 0), (-1, 1), (0, 1), (1, 1)];

const BEACON: &[(i32, i32)] = &[
    (-1, -1),
    (0, -1),
    (-1, 0),
    (0, 0),
    (1, 1),
    (2, 1),
    (1, 2),
    (2, 2),
];

const GLIDER: &[(i32, i32)] = &[(0, -1), (1, 0), (-1, 1), (0, 1), (1, 1)];

const LWSS: &[(i32, i32)] = &[
    (-2, -1),
    (1, -1),
    (2, 0),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (0, 2),
    (1, 2),
    (2, 2),
];

const R_PENTOMINO: &[(i32, i32)] = &[(0, -1), (1, -1), (-1, 0), (0, 0), (0, 1)];

const ACORN: &[(i32, i32)] = &[
    (-3, 1),
    (-2, -1),
    (-2, 1),
    (0, 0),
    (1, 1),
    (2, 1),
    (3, 1),
];

const GOSPER_GLIDER_GUN: &[(i32, i32)] = &[
    // Left block
    (-17, 0),
    (-17, 1),
    (-16, 0),
    (-16, 1),
    // Left ship
    (-7, 0),
    (-7, 1),
    (-7, 2),
    (-6, -1),
    (-6, 3),
    (-5, -2),
    (-5, 4),
    (-4, -2),
    (-4, 4),
    (-3, 1),
    (-2, -1),
    (-2, 3),
    (-1, 0),
    (-1, 1),
    (-1, 2),
    (0, 1),
    // Right ship
    (3, -2),
    (3, -1),
    (3, 0),
    (4, -2),
    (4, -1),
    (4, 0),
    (5, -3),
    (5, 1),
    (7, -4),
    (7, -3),
    (7, 1),
    (7, 2),
    // Right block
    (17, -2),
    (17, -1),
    (18, -2),
    (18, -1),
];

impl Lifeform {
    pub const ALL: [Lifeform; 9] = [
        Lifeform::Block,
        Lifeform::Blinker,
        Lifeform::Toad,
        Lifeform::Beacon,
        Lifeform::Glider,
        Lifeform::Lwss,
        Lifeform::RPentomino,
        Lifeform::Acorn,
        Lifeform::GosperGliderGun,
    ];

    /// Center-relative live-cell offsets for this pattern
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Lifeform::Block => BLOCK,
            Lifeform::Blinker => BLINKER,
            Lifeform::Toad => TOAD,
            Lifeform::Beacon => BEACON,
            Lifeform::Glider => GLIDER,
            Lifeform::Lwss => LWSS,
            Lifeform::RPentomino => R_PENTOMINO,
            Lifeform::Acorn => ACORN,
            Lifeform::GosperGliderGun => GOSPER_GLIDER_GUN,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Lifeform::Block => "block",
            Lifeform::Blinker => "blinker",
            Lifeform::Toad => "toad",
            Lifeform::Beacon => "beacon",
            Lifeform::Glider => "glider",
            Lifeform::Lwss => "lwss",
            Lifeform::RPentomino => "r_pentomino",
            Lifeform::Acorn => "acorn",
            Lifeform::GosperGliderGun => "gosper_glider_gun",
        }
    }
}

impl FromStr for Lifeform {
    type Err = UnknownLifeform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|form| form.name() == s)
            .ok_or_else(|| UnknownLifeform(s.to_string()))
    }
}

impl fmt::Display for Lifeform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
