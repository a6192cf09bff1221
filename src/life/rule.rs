//! Birth/survival rule sets and the named rule presets

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing or constructing rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("invalid character '{0}' in rule string (only digits 0-8 are allowed)")]
    InvalidCharacter(char),
    #[error("neighbor count {0} is out of range (a cell has at most 8 neighbors)")]
    OutOfRange(u8),
    #[error("duplicate neighbor count {0} in rule string")]
    Duplicate(u8),
    #[error("unknown rule preset '{0}'")]
    UnknownPreset(String),
}

/// A generalized birth/survival rule over Moore neighbor counts.
///
/// `birth` holds the neighbor counts at which a dead cell comes alive,
/// `survival` the counts at which a live cell stays alive. Both are sets of
/// distinct values in [0, 8], kept sorted. Empty sets are valid: with both
/// empty nothing is ever born and nothing survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    birth: Vec<u8>,
    survival: Vec<u8>,
}

impl RuleSet {
    /// Build a rule set from explicit neighbor-count lists
    pub fn new(birth: Vec<u8>, survival: Vec<u8>) -> Result<Self, RuleError> {
        Ok(Self {
            birth: validate_counts(birth)?,
            survival: validate_counts(survival)?,
        })
    }

    /// Parse a rule set from a pair of digit strings, e.g. `("3", "23")`
    pub fn parse(birth: &str, survival: &str) -> Result<Self, RuleError> {
        Ok(Self {
            birth: parse_counts(birth)?,
            survival: parse_counts(survival)?,
        })
    }

    /// Conway's classic rule, B3/S23
    pub fn game_of_life() -> Self {
        RulePreset::GameOfLife.rule_set()
    }

    /// Should a dead cell with `neighbors` live neighbors come alive?
    pub fn born(&self, neighbors: u8) -> bool {
        self.birth.contains(&neighbors)
    }

    /// Should a live cell with `neighbors` live neighbors stay alive?
    pub fn survives(&self, neighbors: u8) -> bool {
        self.survival.contains(&neighbors)
    }

    /// Birth counts as a digit string, e.g. "3"
    pub fn birth_string(&self) -> String {
        self.birth.iter().join("")
    }

    /// Survival counts as a digit string, e.g. "23"
    pub fn survival_string(&self) -> String {
        self.survival.iter().join("")
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth_string(), self.survival_string())
    }
}

/// Parse a digit string into a sorted set of neighbor counts.
///
/// Empty input is a valid empty set. Surrounding ASCII whitespace is
/// tolerated. Any digit outside 0-8, any non-digit character, or any
/// repeated digit fails the whole parse with no partial result.
pub fn parse_counts(text: &str) -> Result<Vec<u8>, RuleError> {
    let mut counts = Vec::new();
    for ch in text.trim().chars() {
        let digit = ch
            .to_digit(10)
            .ok_or(RuleError::InvalidCharacter(ch))? as u8;
        if digit > 8 {
            return Err(RuleError::OutOfRange(digit));
        }
        if counts.contains(&digit) {
            return Err(RuleError::Duplicate(digit));
        }
        counts.push(digit);
    }
    counts.sort_unstable();
    Ok(counts)
}

fn validate_counts(mut counts: Vec<u8>) -> Result<Vec<u8>, RuleError> {
    counts.sort_unstable();
    for (i, &n) in counts.iter().enumerate() {
        if n > 8 {
            return Err(RuleError::OutOfRange(n));
        }
        if i > 0 && counts[i - 1] == n {
            return Err(RuleError::Duplicate(n));
        }
    }
    Ok(counts)
}

/// The built-in named rules.
///
/// A closed enumeration rather than a string-keyed table: unknown names are
/// rejected at parse time, and `rule_set` always hands back a fresh owned
/// value so a caller editing its copy can never corrupt a preset definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulePreset {
    GameOfLife,
    HighLife,
    DayAndNight,
    Seeds,
    LifeWithoutDeath,
    Maze,
    Replicator,
}

impl RulePreset {
    pub const ALL: [RulePreset; 7] = [
        RulePreset::GameOfLife,
        RulePreset::HighLife,
        RulePreset::DayAndNight,
        RulePreset::Seeds,
        RulePreset::LifeWithoutDeath,
        RulePreset::Maze,
        RulePreset::Replicator,
    ];

    /// The canonical B/S definition of this preset
    pub fn rule_set(self) -> RuleSet {
        let (birth, survival): (&[u8], &[u8]) = match self {
            RulePreset::GameOfLife => (&[3], &[2, 3]),
            RulePreset::HighLife => (&[3, 6], &[2, 3]),
            RulePreset::DayAndNight => (&[3, 6, 7, 8], &[3, 4, 6, 7, 8]),
            RulePreset::Seeds => (&[2], &[]),
            RulePreset::LifeWithoutDeath => (&[3], &[0, 1, 2, 3, 4, 5, 6, 7, 8]),
            RulePreset::Maze => (&[3], &[1, 2, 3, 4, 5]),
            RulePreset::Replicator => (&[1, 3, 5, 7], &[1, 3, 5, 7]),
        };
        // Preset definitions are static and in range, so this cannot fail
        RuleSet {
            birth: birth.to_vec(),
            survival: survival.to_vec(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RulePreset::GameOfLife => "game_of_life",
            RulePreset::HighLife => "high_life",
            RulePreset::DayAndNight => "day_and_night",
            RulePreset::Seeds => "seeds",
            RulePreset::LifeWithoutDeath => "life_without_death",
            RulePreset::Maze => "maze",
            RulePreset::Replicator => "replicator",
        }
    }
}

impl FromStr for RulePreset {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| RuleError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for RulePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_digit() {
        assert_eq!(parse_counts("3").unwrap(), vec![3]);
    }

    #[test]
    fn test_parse_multiple_digits() {
        assert_eq!(parse_counts("23").unwrap(), vec![2, 3]);
        // Order-insensitive: same set either way around
        assert_eq!(parse_counts("32").unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_parse_empty_is_valid() {
        assert_eq!(parse_counts("").unwrap(), Vec::<u8>::new());
        assert_eq!(parse_counts("  ").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_parse_duplicate_rejected() {
        assert_eq!(parse_counts("33"), Err(RuleError::Duplicate(3)));
    }

    #[test]
    fn test_parse_out_of_range_rejected() {
        assert_eq!(parse_counts("9"), Err(RuleError::OutOfRange(9)));
    }

    #[test]
    fn test_parse_non_digit_rejected() {
        assert_eq!(parse_counts("2a"), Err(RuleError::InvalidCharacter('a')));
    }

    #[test]
    fn test_rule_membership() {
        let rule = RuleSet::parse("3", "23").unwrap();
        assert!(rule.born(3));
        assert!(!rule.born(2));
        assert!(rule.survives(2));
        assert!(rule.survives(3));
        assert!(!rule.survives(4));
    }

    #[test]
    fn test_degenerate_empty_rule() {
        let rule = RuleSet::parse("", "").unwrap();
        for n in 0..=8 {
            assert!(!rule.born(n));
            assert!(!rule.survives(n));
        }
    }

    #[test]
    fn test_display_format() {
        let rule = RuleSet::parse("3", "32").unwrap();
        assert_eq!(rule.to_string(), "B3/S23");
    }

    #[test]
    fn test_new_validates() {
        assert!(RuleSet::new(vec![3], vec![2, 3]).is_ok());
        assert!(RuleSet::new(vec![9], vec![]).is_err());
        assert!(RuleSet::new(vec![3, 3], vec![]).is_err());
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(
            "game_of_life".parse::<RulePreset>().unwrap(),
            RulePreset::GameOfLife
        );
        assert!(matches!(
            "nonsense".parse::<RulePreset>(),
            Err(RuleError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_preset_definitions() {
        let conway = RulePreset::GameOfLife.rule_set();
        assert_eq!(conway.to_string(), "B3/S23");

        let seeds = RulePreset::Seeds.rule_set();
        assert!(seeds.born(2));
        assert!(!seeds.survives(2));
    }

    #[test]
    fn test_preset_hands_out_copies() {
        let mut edited = RulePreset::GameOfLife.rule_set();
        edited.birth = parse_counts("36").unwrap();
        // The canonical definition is unaffected by edits to the copy
        assert_eq!(RulePreset::GameOfLife.rule_set().to_string(), "B3/S23");
    }
}
