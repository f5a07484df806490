//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`canvas`]: Stacked generations, two per terminal row
//! - [`rules`]: Rule tiles, preset name, seeding and edge settings
//! - [`status`]: Status bar with keybindings, prompts, and run state
//!
//! Each pane module exports a primary `render_*` function. Panes are
//! stateless; the [`App`](crate::ui::App) passes in what they display.

pub mod canvas;
pub mod rules;
pub mod status;

// Re-export render functions for convenience
pub use canvas::{canvas_capacity, render_canvas_pane, ColumnWindow};
pub use rules::{render_rules_pane, RulesRenderData};
pub use status::{render_status_bar, StatusRenderData};
