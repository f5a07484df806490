//! Elementary cellular automaton engine
//!
//! This module provides the simulation core:
//! - [`cell`]: Binary cell states
//! - [`rule`]: Wolfram rule numbers and neighborhood lookup
//! - [`line`]: The [`AutomatonLine`] that owns the cell buffer and advances it
//! - [`presets`]: Named rules offered by the viewer
//! - [`errors`]: Reconfiguration errors
//!
//! # Evolution Model
//!
//! Each generation is derived entirely from the previous one. For cell `i` the
//! neighborhood `(left, self, right)` forms a 3-bit pattern, and bit `pattern`
//! of the rule number decides the next state:
//!
//! ```text
//! pattern   111 110 101 100 011 010 001 000
//! rule 30    0   0   0   1   1   1   1   0
//! ```
//!
//! By default the line is a ring: the left neighbor of index 0 is the last
//! cell and the right neighbor of the last cell is index 0.

pub mod cell;
pub mod constants;
pub mod errors;
pub mod line;
pub mod presets;
pub mod rule;

pub use cell::Cell;
pub use errors::AutomatonError;
pub use line::{AutomatonLine, Boundary, StartCondition};
pub use rule::{Neighborhood, Rule};
