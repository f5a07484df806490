//! Main TUI application state and logic

use crate::automaton::presets;
use crate::automaton::rule::PATTERN_COUNT;
use crate::automaton::{AutomatonLine, Rule, StartCondition};
use crate::config::{parse_grid_size_input, parse_rule_input, ViewerConfig};
use crate::history::History;
use crate::ui::panes::{self, RulesRenderData, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Which value an open prompt edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Rule,
    GridSize,
}

impl InputKind {
    pub fn label(self) -> &'static str {
        match self {
            InputKind::Rule => "Rule (0-255)",
            InputKind::GridSize => "Grid size (1-1000)",
        }
    }
}

/// Text typed into an open prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPrompt {
    pub kind: InputKind,
    pub buffer: String,
}

/// The main application state
pub struct App {
    /// The automaton being animated
    pub line: AutomatonLine,

    /// Rows drawn so far
    pub history: History,

    /// Seeding policy used by regenerate
    pub start: StartCondition,

    /// Generations computed per animation frame
    pub ticks_per_frame: usize,

    /// Delay between animation frames
    pub frame_interval: Duration,

    /// Rule tile under the cursor (0 is pattern 111)
    pub selected_tile: usize,

    /// Open rule or grid size prompt
    pub input: Option<InputPrompt>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a rejected action
    pub status_is_error: bool,

    /// Whether the animation is running
    pub is_playing: bool,

    /// Last time a frame was advanced
    pub last_frame_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    rng: StdRng,
}

impl App {
    /// Create a new app from startup settings
    pub fn new(config: &ViewerConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a new app with a caller-supplied random source
    pub fn with_rng(config: &ViewerConfig, rng: StdRng) -> Self {
        let mut line = AutomatonLine::new(config.length, config.rule());
        line.set_boundary(config.boundary);

        let mut app = App {
            line,
            history: History::unbounded(),
            start: config.start,
            ticks_per_frame: config.ticks_per_frame,
            frame_interval: Duration::from_millis(config.frame_interval_ms),
            selected_tile: 0,
            input: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            is_playing: false,
            last_frame_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
            rng,
        };
        app.regenerate();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_frame_time.elapsed() >= self.frame_interval {
                self.advance_frame();
                self.last_frame_time = Instant::now();
            }

            // Use poll with timeout so the animation keeps running
            let timeout = self.frame_interval.min(Duration::from_millis(50));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Canvas (left) | Rule tiles (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(26)])
            .split(main_chunks[0]);

        // The canvas height decides when the animation stops
        let capacity = panes::canvas_capacity(columns[0]);
        if capacity != self.history.capacity() {
            self.history.set_capacity(capacity);
        }

        panes::render_canvas_pane(
            frame,
            columns[0],
            &self.history,
            self.line.length(),
            self.is_playing,
        );

        panes::render_rules_pane(
            frame,
            columns[1],
            &RulesRenderData {
                rule: self.line.rule(),
                selected_tile: self.selected_tile,
                start: self.start,
                boundary: self.line.boundary(),
                population: self.line.population(),
            },
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                is_error: self.status_is_error,
                generation: self.history.len(),
                capacity: self.history.capacity(),
                is_playing: self.is_playing,
                input: self
                    .input
                    .as_ref()
                    .map(|prompt| (prompt.kind.label(), prompt.buffer.as_str())),
            },
        );
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input.is_some() {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Toggle animation (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Char('n') | KeyCode::Right => {
                self.is_playing = false;
                self.advance_frame();
            }
            KeyCode::Enter => {
                self.regenerate();
            }
            KeyCode::Char('s') => {
                self.start = self.start.toggled();
                self.set_status(format!(
                    "Starting condition: {} (applies on regenerate)",
                    self.start.label()
                ));
            }
            KeyCode::Char('b') => {
                let boundary = self.line.boundary().toggled();
                self.line.set_boundary(boundary);
                self.set_status(format!("Edges: {}", boundary.label()));
            }
            KeyCode::Tab | KeyCode::Char('l') => {
                self.selected_tile = (self.selected_tile + 1) % PATTERN_COUNT;
            }
            KeyCode::BackTab | KeyCode::Char('h') => {
                self.selected_tile = (self.selected_tile + PATTERN_COUNT - 1) % PATTERN_COUNT;
            }
            KeyCode::Char('t') => {
                self.toggle_tile(self.selected_tile);
            }
            // Number keys toggle a tile directly
            KeyCode::Char(c @ '1'..='8') => {
                let tile = c as usize - '1' as usize;
                self.selected_tile = tile;
                self.toggle_tile(tile);
            }
            KeyCode::Char('p') => {
                let preset = presets::next(self.line.rule());
                self.apply_rule(preset.rule);
            }
            KeyCode::Char('P') => {
                let preset = presets::previous(self.line.rule());
                self.apply_rule(preset.rule);
            }
            KeyCode::Char('r') => {
                self.open_input(InputKind::Rule);
            }
            KeyCode::Char('g') => {
                self.open_input(InputKind::GridSize);
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.input.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.input = None;
                self.set_status("Cancelled");
            }
            KeyCode::Backspace => {
                prompt.buffer.pop();
            }
            KeyCode::Enter => {
                if let Some(prompt) = self.input.take() {
                    self.submit_input(prompt);
                }
            }
            KeyCode::Char(c) => {
                prompt.buffer.push(c);
            }
            _ => {}
        }
    }

    fn open_input(&mut self, kind: InputKind) {
        self.is_playing = false;
        self.input = Some(InputPrompt {
            kind,
            buffer: String::new(),
        });
    }

    fn submit_input(&mut self, prompt: InputPrompt) {
        match prompt.kind {
            InputKind::Rule => match parse_rule_input(&prompt.buffer) {
                Ok(rule) => match self.line.change_rule(i64::from(rule.number())) {
                    Ok(()) => {
                        info!(rule = rule.number(), "rule changed");
                        self.regenerate();
                    }
                    Err(e) => self.set_error(e.to_string()),
                },
                Err(e) => {
                    debug!(input = %prompt.buffer, "rule input rejected");
                    self.set_error(e.to_string());
                }
            },
            InputKind::GridSize => match parse_grid_size_input(&prompt.buffer) {
                Ok(length) => match self.line.set_length(length) {
                    Ok(()) => {
                        info!(length, "grid resized");
                        self.regenerate();
                    }
                    Err(e) => self.set_error(e.to_string()),
                },
                Err(e) => {
                    debug!(input = %prompt.buffer, "grid size input rejected");
                    self.set_error(e.to_string());
                }
            },
        }
    }

    fn toggle_play(&mut self) {
        if self.history.is_full() {
            self.set_status("Canvas full, press Enter to regenerate");
            return;
        }

        self.is_playing = !self.is_playing;
        if self.is_playing {
            self.last_frame_time = Instant::now()
                .checked_sub(self.frame_interval)
                .unwrap_or(Instant::now());
            self.set_status("Playing...");
        } else {
            self.set_status("Paused");
        }
    }

    /// Switch rules without clearing the canvas; the next row uses the new table
    fn apply_rule(&mut self, rule: Rule) {
        self.line.set_rule(rule);
        debug!(rule = rule.number(), "rule applied");
        match presets::preset_name(rule) {
            Some(name) => self.set_status(format!("{} ({})", rule, name)),
            None => self.set_status(format!("{}", rule)),
        }
    }

    fn toggle_tile(&mut self, tile: usize) {
        self.apply_rule(self.line.rule().with_tile_toggled(tile));
    }

    /// Re-seed the line, clear the canvas, and start the animation
    pub fn regenerate(&mut self) {
        self.history.clear();
        self.line.seed(self.start, &mut self.rng);
        if self.history.push(self.line.cells()).is_err() {
            self.is_playing = false;
            self.set_error("Canvas too small to draw");
            return;
        }

        info!(
            rule = self.line.rule().number(),
            length = self.line.length(),
            start = self.start.label(),
            "regenerated"
        );
        self.is_playing = true;
        self.last_frame_time = Instant::now();
        self.set_status(format!("Generating {}", self.line.rule()));
    }

    /// Run one animation frame: up to `ticks_per_frame` generations
    pub fn advance_frame(&mut self) {
        for _ in 0..self.ticks_per_frame {
            if self.history.is_full() {
                break;
            }
            self.line.tick();
            if self.history.push(self.line.cells()).is_err() {
                break;
            }
        }

        if self.history.is_full() {
            if self.is_playing {
                info!(rows = self.history.len(), "canvas full");
            }
            self.is_playing = false;
            self.set_status("Done");
        }
    }
}
