// ecatty: Elementary Cellular Automaton Viewer

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ecatty::automaton::{AutomatonLine, Boundary, StartCondition};
use ecatty::config::{self, Overrides, ViewerConfig};
use ecatty::logging;
use ecatty::ui::App;

#[derive(Parser)]
#[command(
    name = "ecatty",
    version,
    about = "Watch elementary cellular automata evolve in the terminal"
)]
struct Cli {
    /// Rule number (0-255)
    #[arg(long)]
    rule: Option<u8>,

    /// Number of cells in the line (1-1000)
    #[arg(long)]
    length: Option<usize>,

    /// Starting condition: single or random
    #[arg(long)]
    start: Option<StartCondition>,

    /// Edge behavior: wrap or dead
    #[arg(long)]
    boundary: Option<Boundary>,

    /// Generations computed per animation frame
    #[arg(long)]
    ticks_per_frame: Option<usize>,

    /// Delay between animation frames in milliseconds
    #[arg(long = "frame-ms")]
    frame_interval_ms: Option<u64>,

    /// TOML file with startup settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write diagnostics to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print this many generations as text and exit
    #[arg(long, value_name = "GENERATIONS")]
    print: Option<usize>,

    /// Generations to run before the first printed row (with --print)
    #[arg(long, value_name = "GENERATIONS", default_value_t = 0, requires = "print")]
    skip: usize,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            rule: self.rule,
            length: self.length,
            start: self.start,
            boundary: self.boundary,
            ticks_per_frame: self.ticks_per_frame,
            frame_interval_ms: self.frame_interval_ms,
        }
    }
}

/// Write `generations` rows to stdout, one `#`/`.` line per generation,
/// starting after `skip` unprinted generations
fn print_generations(config: &ViewerConfig, generations: usize, skip: usize) -> Result<()> {
    let mut line = AutomatonLine::new(config.length, config.rule());
    line.set_boundary(config.boundary);
    line.seed(config.start, &mut rand::thread_rng());
    line.ticks(skip);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for generation in 0..generations {
        if generation > 0 {
            line.tick();
        }
        writeln!(out, "{}", line).context("write generation")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let base = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ViewerConfig::default(),
    };
    let config = config::apply_overrides(base, &cli.overrides())?;
    tracing::debug!(?config, "starting");

    if let Some(generations) = cli.print {
        return print_generations(&config, generations, cli.skip);
    }

    // Set up terminal
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(&config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
