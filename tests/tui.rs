#![cfg(feature = "tui")]

use crossterm::event::{KeyCode, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};
use std::fs;
use todoview::config::Config;
use todoview::model::Item;
use todoview::tui::action::{Action, PAGE_STEP};
use todoview::tui::state::AppState;
use todoview::tui::resolve_config;
use todoview::tui::view::draw;

fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn row_of(rows: &[String], needle: &str) -> usize {
    rows.iter()
        .position(|r| r.contains(needle))
        .unwrap_or_else(|| panic!("{needle:?} not drawn:\n{}", rows.join("\n")))
}

#[test]
fn test_draws_each_title_above_its_body() {
    let mut state = AppState::new(&Config::default());
    let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();

    terminal.draw(|f| draw(f, &mut state)).unwrap();
    let rows = rows(&terminal);

    let pairs = [
        ("1st todo", "Learn Django properly."),
        ("Second item", "Learn Python."),
        ("Learn HTTP", "It's important."),
    ];
    let mut last = 0;
    for (title, body) in pairs {
        let t = row_of(&rows, title);
        let b = row_of(&rows, body);
        assert_eq!(b, t + 1, "body should sit right under {title:?}");
        assert!(t > last, "items should keep their order");
        last = b;
    }
    assert!(rows[0].contains("placeholder"));
}

#[test]
fn test_empty_list_draws_no_entries() {
    let config = Config {
        initial_items: Some(vec![]),
        ..Config::default()
    };
    let mut state = AppState::new(&config);
    let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();

    terminal.draw(|f| draw(f, &mut state)).unwrap();

    assert!(rows(&terminal)[0].contains("Items (0, placeholder)"));
}

#[test]
fn test_key_mapping() {
    assert_eq!(Action::from_key(KeyCode::Char('q')), Some(Action::Quit));
    assert_eq!(Action::from_key(KeyCode::Esc), Some(Action::Quit));
    assert_eq!(Action::from_key(KeyCode::Char('j')), Some(Action::Next));
    assert_eq!(Action::from_key(KeyCode::Down), Some(Action::Next));
    assert_eq!(Action::from_key(KeyCode::Char('k')), Some(Action::Previous));
    assert_eq!(
        Action::from_key(KeyCode::PageDown),
        Some(Action::JumpForward(PAGE_STEP))
    );
    assert_eq!(Action::from_key(KeyCode::Char('x')), None);
    assert_eq!(
        Action::from_mouse(MouseEventKind::ScrollUp),
        Some(Action::Previous)
    );
}

#[test]
fn test_navigation_wraps_and_clamps() {
    let mut state = AppState::new(&Config::default());

    assert!(state.apply(Action::Previous));
    assert_eq!(state.list_state.selected(), Some(2));
    assert!(state.apply(Action::Next));
    assert_eq!(state.list_state.selected(), Some(0));
    assert!(state.apply(Action::JumpForward(PAGE_STEP)));
    assert_eq!(state.list_state.selected(), Some(2));
    assert!(state.apply(Action::JumpBackward(PAGE_STEP)));
    assert_eq!(state.list_state.selected(), Some(0));
    assert!(!state.apply(Action::Quit));
}

#[test]
fn test_failed_load_leaves_status_neutral() {
    let config = Config {
        url: "not a url".to_string(),
        initial_items: Some(vec![Item::new(1, "a", "b")]),
    };
    let mut state = AppState::new(&config);
    let err = todoview::client::ItemClient::new(&config).unwrap_err();

    state.on_loaded(Err(err));

    assert_eq!(state.message, "Ready.");
    assert_eq!(state.view.len(), 1);
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_resolve_config_from_file_and_command_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, r#"url = "http://from-file:8080/api/v1/""#).unwrap();

    // SAFETY: no other test in this binary reads or writes this variable.
    unsafe { std::env::set_var("TODOVIEW_CONFIG_DIR", dir.path()) };

    // No argument: the file wins.
    assert_eq!(
        resolve_config(&args(&["todoview"])).url,
        "http://from-file:8080/api/v1/"
    );

    // A positional URL overrides the file.
    assert_eq!(
        resolve_config(&args(&["todoview", "http://cli:9000/api/v1/"])).url,
        "http://cli:9000/api/v1/"
    );

    // Flags are not endpoints.
    assert_eq!(
        resolve_config(&args(&["todoview", "--help"])).url,
        "http://from-file:8080/api/v1/"
    );
    assert_eq!(
        resolve_config(&args(&["todoview", "-v", "http://cli:9000/api/v1/"])).url,
        "http://cli:9000/api/v1/"
    );

    // A broken file falls back to defaults.
    fs::write(&path, "url = [not toml").unwrap();
    assert_eq!(resolve_config(&args(&["todoview"])), Config::default());
    assert_eq!(
        resolve_config(&args(&["todoview", "--help"])),
        Config::default()
    );
}
