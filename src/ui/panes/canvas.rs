//! Generation history pane
//!
//! Draws the stacked rows of the automaton, oldest at the top. Each terminal
//! row holds two generations: the upper half block takes the foreground color
//! of the earlier generation and the background color of the later one.
//!
//! Narrow lines are widened so each cell spans several columns; lines wider
//! than the pane show their middle section.

use crate::automaton::Cell;
use crate::history::History;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const UPPER_HALF_BLOCK: &str = "▀";

/// Horizontal placement of the line inside the pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWindow {
    /// First cell shown
    pub first: usize,
    /// Number of cells shown
    pub count: usize,
    /// Terminal columns per cell
    pub cell_width: usize,
}

impl ColumnWindow {
    pub fn fit(length: usize, columns: usize) -> Self {
        if length == 0 || columns == 0 {
            return ColumnWindow {
                first: 0,
                count: 0,
                cell_width: 1,
            };
        }

        if length <= columns {
            ColumnWindow {
                first: 0,
                count: length,
                cell_width: columns / length,
            }
        } else {
            ColumnWindow {
                first: (length - columns) / 2,
                count: columns,
                cell_width: 1,
            }
        }
    }
}

fn cell_color(cell: Option<Cell>) -> Color {
    match cell {
        Some(Cell::Alive) => DEFAULT_THEME.alive,
        Some(Cell::Dead) => DEFAULT_THEME.dead,
        None => DEFAULT_THEME.bg,
    }
}

/// Build the terminal line holding generations `upper` and `lower`
fn pair_line(upper: &[Cell], lower: Option<&[Cell]>, window: ColumnWindow) -> Line<'static> {
    let spans: Vec<Span> = (window.first..window.first + window.count)
        .map(|i| {
            let top = upper.get(i).copied();
            let bottom = lower.and_then(|row| row.get(i).copied());
            Span::styled(
                UPPER_HALF_BLOCK.repeat(window.cell_width),
                Style::default().fg(cell_color(top)).bg(cell_color(bottom)),
            )
        })
        .collect();
    Line::from(spans)
}

/// Number of generations that fit in a pane of the given outer height
pub fn canvas_capacity(area: Rect) -> usize {
    area.height.saturating_sub(2) as usize * 2
}

/// Render the generation history pane
pub fn render_canvas_pane(
    frame: &mut Frame,
    area: Rect,
    history: &History,
    length: usize,
    is_playing: bool,
) {
    let border_style = if is_playing {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Generations ({} cells) ", length))
        .borders(Borders::ALL)
        .border_style(border_style);

    if history.is_empty() {
        let paragraph = Paragraph::new("(press Enter to generate)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let window = ColumnWindow::fit(length, area.width.saturating_sub(2) as usize);
    let lines: Vec<Line> = history
        .rows()
        .chunks(2)
        .map(|pair| pair_line(&pair[0], pair.get(1).map(Vec::as_slice), window))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(DEFAULT_THEME.bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_line_is_widened() {
        let window = ColumnWindow::fit(7, 30);
        assert_eq!(window.first, 0);
        assert_eq!(window.count, 7);
        assert_eq!(window.cell_width, 4);
    }

    #[test]
    fn test_wide_line_shows_middle() {
        let window = ColumnWindow::fit(100, 40);
        assert_eq!(window.first, 30);
        assert_eq!(window.count, 40);
        assert_eq!(window.cell_width, 1);
    }

    #[test]
    fn test_capacity_counts_two_rows_per_line() {
        assert_eq!(canvas_capacity(Rect::new(0, 0, 80, 22)), 40);
        assert_eq!(canvas_capacity(Rect::new(0, 0, 80, 1)), 0);
    }
}
