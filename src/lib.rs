//! # Introduction
//!
//! ecatty runs a one-dimensional elementary cellular automaton and draws its
//! generations as stacked rows, producing the familiar history image of rules
//! like 30, 90 and 110. The viewer is a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Config → AutomatonLine → tick → History → TUI
//! ```
//!
//! 1. [`config`] — startup settings from TOML and the command line, plus
//!    validation of values typed into the viewer.
//! 2. [`automaton`] — the engine: [`automaton::AutomatonLine`] owns the cell
//!    buffer and the active [`automaton::Rule`], and advances one generation
//!    per [`automaton::AutomatonLine::tick`].
//! 3. [`history`] — the rows drawn so far, bounded by the canvas height.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 5. [`logging`] — `tracing` subscriber setup.
//!
//! ## Example
//!
//! ```
//! use ecatty::automaton::{AutomatonLine, Rule};
//!
//! let mut line = AutomatonLine::new(7, Rule::new(90));
//! assert_eq!(line.to_string(), "...#...");
//! line.tick();
//! assert_eq!(line.to_string(), "..#.#..");
//! ```

pub mod automaton;
pub mod config;
pub mod history;
pub mod logging;
pub mod ui;
