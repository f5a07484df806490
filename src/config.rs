//! Viewer configuration and host-side input validation
//!
//! Startup settings come from an optional TOML file, then command-line flags
//! override individual fields. Missing fields default to the values the viewer
//! has always started with (rule 30, 100 cells, a single seed cell).
//!
//! The viewer enforces narrower bounds than the engine: a grid of at most
//! [`MAX_GRID_SIZE`] cells. The engine still re-validates everything it is
//! given.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::automaton::constants::{DEFAULT_LENGTH, DEFAULT_RULE};
use crate::automaton::{Boundary, Rule, StartCondition};

/// Largest grid the viewer accepts from the user
pub const MAX_GRID_SIZE: i64 = 1000;

/// Startup settings (TOML).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Initial rule number.
    pub rule: u8,

    /// Initial cell count (1-1000).
    pub length: usize,

    /// Seeding policy applied on every regenerate.
    pub start: StartCondition,

    pub boundary: Boundary,

    /// Generations computed per animation frame.
    pub ticks_per_frame: usize,

    /// Delay between animation frames in milliseconds.
    pub frame_interval_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            rule: DEFAULT_RULE,
            length: DEFAULT_LENGTH,
            start: StartCondition::Single,
            boundary: Boundary::Wrap,
            ticks_per_frame: 5,
            frame_interval_ms: 16,
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 || self.length as i64 > MAX_GRID_SIZE {
            return Err(anyhow!(
                "length must be between 1 and {}, got {}",
                MAX_GRID_SIZE,
                self.length
            ));
        }
        if self.ticks_per_frame == 0 {
            return Err(anyhow!("ticks_per_frame must be > 0"));
        }
        if self.frame_interval_ms == 0 {
            return Err(anyhow!("frame_interval_ms must be > 0"));
        }
        Ok(())
    }

    pub fn rule(&self) -> Rule {
        Rule::new(self.rule)
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub rule: Option<u8>,
    pub length: Option<usize>,
    pub start: Option<StartCondition>,
    pub boundary: Option<Boundary>,
    pub ticks_per_frame: Option<usize>,
    pub frame_interval_ms: Option<u64>,
}

/// Apply command-line overrides to a loaded configuration.
pub fn apply_overrides(mut base: ViewerConfig, overrides: &Overrides) -> Result<ViewerConfig> {
    if let Some(rule) = overrides.rule {
        base.rule = rule;
    }
    if let Some(length) = overrides.length {
        base.length = length;
    }
    if let Some(start) = overrides.start {
        base.start = start;
    }
    if let Some(boundary) = overrides.boundary {
        base.boundary = boundary;
    }
    if let Some(ticks_per_frame) = overrides.ticks_per_frame {
        base.ticks_per_frame = ticks_per_frame;
    }
    if let Some(frame_interval_ms) = overrides.frame_interval_ms {
        base.frame_interval_ms = frame_interval_ms;
    }
    base.validate()?;
    Ok(base)
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ViewerConfig::default()`.
pub fn load_config(path: &Path) -> Result<ViewerConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file missing, using defaults");
        return Ok(ViewerConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ViewerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    tracing::info!(path = %path.display(), rule = cfg.rule, length = cfg.length, "config loaded");
    Ok(cfg)
}

/// Rejected text typed into the rule or grid size prompt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid rule (value must be between 0 and 255).")]
    InvalidRule { input: String },

    #[error("Invalid grid size (value must be between 1 and {max}).")]
    InvalidGridSize { input: String, max: i64 },
}

/// Parse a rule number typed by the user
pub fn parse_rule_input(input: &str) -> Result<Rule, InputError> {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|n| Rule::try_from(n).ok())
        .ok_or_else(|| InputError::InvalidRule {
            input: input.to_string(),
        })
}

/// Parse a grid size typed by the user
pub fn parse_grid_size_input(input: &str) -> Result<i64, InputError> {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| (1..=MAX_GRID_SIZE).contains(n))
        .ok_or_else(|| InputError::InvalidGridSize {
            input: input.to_string(),
            max: MAX_GRID_SIZE,
        })
}
