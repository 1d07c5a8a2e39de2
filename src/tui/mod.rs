// File: ./src/tui/mod.rs
pub mod action;
pub mod state;
pub mod view;

use crate::client::ItemClient;
use crate::config::Config;
use crate::logging;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{env, io, time::Duration};

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Resolves the config file plus an optional positional URL override.
///
/// Flag-like arguments are never taken as the URL.
pub fn resolve_config(args: &[String]) -> Config {
    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("{e:#}; using defaults");
        Config::default()
    });
    for arg in args.iter().skip(1) {
        if arg.starts_with('-') {
            tracing::warn!(arg = %arg, "Ignoring unknown option");
            continue;
        }
        config.url = arg.clone();
        break;
    }
    config
}

pub async fn run() -> Result<()> {
    logging::init();

    // Panic Hook: give the terminal back before the message prints
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        tracing::error!("PANIC: {info}");
        default_hook(info);
    }));

    let args: Vec<String> = env::args().collect();
    let config = resolve_config(&args);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(&config);
    match ItemClient::new(&config) {
        Ok(client) => app_state.view.mount(client),
        Err(e) => {
            tracing::warn!(error = %e, url = %config.url, "Cannot reach item endpoint");
            app_state.on_loaded(Err(e));
        }
    }

    // UI Loop
    loop {
        app_state.refresh();
        terminal.draw(|f| draw(f, &mut app_state))?;

        if event::poll(Duration::from_millis(50))? {
            let action = match event::read()? {
                Event::Key(key) => Action::from_key(key.code),
                Event::Mouse(mouse_event) => Action::from_mouse(mouse_event.kind),
                _ => None,
            };
            if let Some(action) = action
                && !app_state.apply(action)
            {
                break;
            }
        }
    }

    app_state.view.unmount();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
