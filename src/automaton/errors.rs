//! Reconfiguration errors for the automaton engine
//!
//! Only the two structural reconfigurations can fail, and only on out-of-range
//! input. A failed call leaves the line exactly as it was.

use thiserror::Error;

/// Errors returned by [`AutomatonLine::set_length`] and [`AutomatonLine::change_rule`]
///
/// [`AutomatonLine::set_length`]: super::AutomatonLine::set_length
/// [`AutomatonLine::change_rule`]: super::AutomatonLine::change_rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// Requested cell count is zero, negative, or above the allocation cap
    #[error("invalid length {requested}: must be between 1 and {max}")]
    InvalidLength { requested: i64, max: usize },

    /// Requested rule number does not fit in 0..=255
    #[error("invalid rule {requested}: must be between 0 and 255")]
    InvalidRule { requested: i64 },
}
