// Report viewer tests against ratatui's test backend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use stackprobe::probe::record::ProbeOutput;
use stackprobe::probe::{Baseline, Probe};
use stackprobe::ui::app::{App, FocusedPane};
use stackprobe::workload;

fn app_for_depth(depth: usize) -> App {
    let mut probe = Probe::new(Baseline::capture(), ProbeOutput::captured());
    workload::run(&mut probe, 1, depth);
    App::new(probe.into_output().into_records())
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_renders_both_panes() {
    let mut app = app_for_depth(2);
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).expect("test backend");
    app.draw(&mut terminal).expect("draw failed");

    let text = screen_text(&terminal);
    assert!(text.contains("Trace"));
    assert!(text.contains("Peak Depth"));
    assert!(text.contains("direct_call_chain"));
    assert!(text.contains("chain_step"));
    assert!(text.contains("records"));
}

#[test]
fn test_focus_and_quit() {
    let mut app = app_for_depth(1);
    assert_eq!(app.focused_pane, FocusedPane::Trace);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused_pane, FocusedPane::Summary);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused_pane, FocusedPane::Trace);

    assert!(!app.should_quit);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_scrolling_is_clamped_on_render() {
    let mut app = app_for_depth(8);
    let total = app.records.len();
    let mut terminal = Terminal::new(TestBackend::new(120, 20)).expect("test backend");

    press(&mut app, KeyCode::Up);
    assert_eq!(app.trace_scroll, 0);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.trace_scroll, 2);

    press(&mut app, KeyCode::End);
    app.draw(&mut terminal).expect("draw failed");
    // 20 rows minus status bar and borders
    assert_eq!(app.trace_scroll, total - 17);

    press(&mut app, KeyCode::Home);
    assert_eq!(app.trace_scroll, 0);
    assert_eq!(app.summary_scroll, 0);
}
