// Render smoke tests for the TUI

use ecatty::config::ViewerConfig;
use ecatty::ui::App;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::TestBackend, Terminal};

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_render_sizes_canvas_to_pane() {
    let config = ViewerConfig {
        rule: 90,
        length: 40,
        ..ViewerConfig::default()
    };
    let mut app = App::with_rng(&config, StdRng::seed_from_u64(1));
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");

    terminal.draw(|f| app.render(f)).expect("draw");

    // 23 rows above the status bar, minus borders, two generations per row
    assert_eq!(app.history.capacity(), 42);

    let text = screen_text(&terminal);
    assert!(text.contains("Rule 90"));
    assert!(text.contains("Sierpinski"));
    assert!(text.contains("Gen 1/42"));
}

#[test]
fn test_animation_runs_until_canvas_full() {
    let mut app = App::with_rng(&ViewerConfig::default(), StdRng::seed_from_u64(1));
    let mut terminal = Terminal::new(TestBackend::new(200, 12)).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");

    let capacity = app.history.capacity();
    while app.is_playing {
        app.advance_frame();
    }

    assert_eq!(app.history.len(), capacity);
    assert_eq!(app.status_message, "Done");

    terminal.draw(|f| app.render(f)).expect("draw");
    assert!(screen_text(&terminal).contains("DONE"));
}
