//! The automaton line: cell buffer, active rule, and generation stepping
//!
//! # Buffer Contract
//!
//! [`AutomatonLine::tick`] computes the next generation into a scratch buffer
//! and copies it back, so the storage behind [`AutomatonLine::cells`] does not
//! move between ticks. A view fetched after a tick sees the new generation at
//! the same address. [`AutomatonLine::set_length`] reallocates the buffer; the
//! borrow checker keeps views from living across it.

use super::cell::Cell;
use super::constants::{DEFAULT_LENGTH, MAX_LENGTH, RANDOM_ALIVE_THRESHOLD};
use super::errors::AutomatonError;
use super::rule::{Neighborhood, Rule};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What lies beyond the two ends of the line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// The ends are adjacent; the line is a ring
    #[default]
    Wrap,
    /// Every cell beyond an end reads as Dead
    Dead,
}

impl Boundary {
    pub fn toggled(self) -> Self {
        match self {
            Boundary::Wrap => Boundary::Dead,
            Boundary::Dead => Boundary::Wrap,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Boundary::Wrap => "wrap",
            Boundary::Dead => "dead",
        }
    }
}

impl FromStr for Boundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wrap" => Ok(Boundary::Wrap),
            "dead" => Ok(Boundary::Dead),
            other => Err(format!("unknown boundary '{}' (expected wrap or dead)", other)),
        }
    }
}

/// Seeding policy applied before a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartCondition {
    /// One live cell in the middle
    #[default]
    Single,
    /// Each cell independently alive with probability one half
    Random,
}

impl StartCondition {
    pub fn toggled(self) -> Self {
        match self {
            StartCondition::Single => StartCondition::Random,
            StartCondition::Random => StartCondition::Single,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StartCondition::Single => "single",
            StartCondition::Random => "random",
        }
    }
}

impl FromStr for StartCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(StartCondition::Single),
            "random" => Ok(StartCondition::Random),
            other => Err(format!(
                "unknown start condition '{}' (expected single or random)",
                other
            )),
        }
    }
}

/// A one-dimensional line of cells evolving under an elementary rule
#[derive(Debug, Clone)]
pub struct AutomatonLine {
    cells: Vec<Cell>,
    /// Next generation is built here, then copied into `cells`
    scratch: Vec<Cell>,
    rule: Rule,
    boundary: Boundary,
}

impl AutomatonLine {
    /// Create a line seeded with a single live cell in the middle.
    ///
    /// A length of zero (or above [`MAX_LENGTH`]) falls back to [`DEFAULT_LENGTH`].
    pub fn new(length: usize, rule: Rule) -> Self {
        let length = if (1..=MAX_LENGTH).contains(&length) {
            length
        } else {
            DEFAULT_LENGTH
        };

        let mut line = AutomatonLine {
            cells: vec![Cell::Dead; length],
            scratch: vec![Cell::Dead; length],
            rule,
            boundary: Boundary::default(),
        };
        line.reset_to_single_cell();
        line
    }

    /// Current cell count
    pub fn length(&self) -> usize {
        self.cells.len()
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn set_boundary(&mut self, boundary: Boundary) {
        self.boundary = boundary;
    }

    /// Replace the buffer with `length` Dead cells.
    ///
    /// Callers re-seed afterwards; the old contents are not preserved.
    pub fn set_length(&mut self, length: i64) -> Result<(), AutomatonError> {
        let new_length = usize::try_from(length)
            .ok()
            .filter(|n| (1..=MAX_LENGTH).contains(n))
            .ok_or(AutomatonError::InvalidLength {
                requested: length,
                max: MAX_LENGTH,
            })?;

        self.cells = vec![Cell::Dead; new_length];
        self.scratch = vec![Cell::Dead; new_length];
        Ok(())
    }

    /// Switch to another rule number; takes effect on the next tick
    pub fn change_rule(&mut self, rule: i64) -> Result<(), AutomatonError> {
        self.rule = Rule::try_from(rule)?;
        Ok(())
    }

    pub fn set_rule(&mut self, rule: Rule) {
        self.rule = rule;
    }

    /// Read-only view over the live buffer
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable view over the live buffer, for custom seeding
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Clear every cell, then bring the middle cell (`length / 2`) to life
    pub fn reset_to_single_cell(&mut self) {
        self.cells.fill(Cell::Dead);
        let middle = self.cells.len() / 2;
        self.cells[middle] = Cell::Alive;
    }

    /// Each cell is Alive iff a uniform sample in [0, 1) is below one half
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            let sample: f64 = rng.gen();
            *cell = Cell::from(sample < RANDOM_ALIVE_THRESHOLD);
        }
    }

    /// Apply a seeding policy
    pub fn seed<R: Rng + ?Sized>(&mut self, start: StartCondition, rng: &mut R) {
        match start {
            StartCondition::Single => self.reset_to_single_cell(),
            StartCondition::Random => self.randomize(rng),
        }
    }

    /// Neighborhood of cell `i` in the current generation
    fn neighborhood(&self, i: usize) -> Neighborhood {
        let length = self.cells.len();
        let (left, right) = match self.boundary {
            Boundary::Wrap => (
                self.cells[(i + length - 1) % length],
                self.cells[(i + 1) % length],
            ),
            Boundary::Dead => (
                if i == 0 { Cell::Dead } else { self.cells[i - 1] },
                self.cells.get(i + 1).copied().unwrap_or(Cell::Dead),
            ),
        };
        Neighborhood::new(left, self.cells[i], right)
    }

    /// Advance one generation
    pub fn tick(&mut self) {
        for i in 0..self.cells.len() {
            self.scratch[i] = self.rule.apply(self.neighborhood(i));
        }
        self.cells.copy_from_slice(&self.scratch);
    }

    /// Advance `n` generations
    pub fn ticks(&mut self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

impl Default for AutomatonLine {
    fn default() -> Self {
        AutomatonLine::new(DEFAULT_LENGTH, Rule::default())
    }
}

impl fmt::Display for AutomatonLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}
