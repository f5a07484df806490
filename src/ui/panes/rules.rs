//! Rule tiles pane
//!
//! Shows the active rule as eight tiles, one per neighborhood, in the usual
//! order from `111` down to `000`. The selected tile is highlighted; toggling
//! it flips that output bit of the rule.

use crate::automaton::presets::preset_name;
use crate::automaton::rule::PATTERN_COUNT;
use crate::automaton::{Boundary, Cell, Neighborhood, Rule, StartCondition};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Everything the rules pane displays
pub struct RulesRenderData {
    pub rule: Rule,
    pub selected_tile: usize,
    pub start: StartCondition,
    pub boundary: Boundary,
    pub population: usize,
}

fn cell_span(cell: Cell) -> Span<'static> {
    let color = if cell.is_alive() {
        DEFAULT_THEME.alive
    } else {
        DEFAULT_THEME.dead
    };
    Span::styled("██", Style::default().fg(color))
}

fn tile_line(rule: Rule, tile: usize, selected: bool) -> Line<'static> {
    let label_style = if selected {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    };

    let mut spans = vec![Span::styled(
        format!("{}{} ", if selected { '▸' } else { ' ' }, tile + 1),
        label_style,
    )];
    for cell in Neighborhood::for_tile(tile).cells() {
        spans.push(cell_span(cell));
    }
    spans.push(Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)));
    spans.push(cell_span(rule.tile_output(tile)));

    let line = Line::from(spans);
    if selected {
        line.style(Style::default().bg(DEFAULT_THEME.selected_bg))
    } else {
        line
    }
}

/// Render the rule tiles pane
pub fn render_rules_pane(frame: &mut Frame, area: Rect, data: &RulesRenderData) {
    let block = Block::default()
        .title(" Rule ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}", data.rule),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {:08b}", data.rule.number()),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]),
        Line::from(Span::styled(
            preset_name(data.rule).unwrap_or("custom"),
            Style::default().fg(DEFAULT_THEME.secondary),
        )),
        Line::default(),
    ];

    for tile in 0..PATTERN_COUNT {
        lines.push(tile_line(data.rule, tile, tile == data.selected_tile));
    }

    lines.push(Line::default());
    let info_style = Style::default().fg(DEFAULT_THEME.fg);
    lines.push(Line::from(Span::styled(
        format!("start  {}", data.start.label()),
        info_style,
    )));
    lines.push(Line::from(Span::styled(
        format!("edges  {}", data.boundary.label()),
        info_style,
    )));
    lines.push(Line::from(Span::styled(
        format!("alive  {}", data.population),
        Style::default().fg(DEFAULT_THEME.success),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
