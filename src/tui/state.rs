use crate::client::FetchError;
use crate::config::Config;
use crate::item_list::{ItemListView, Phase};
use crate::tui::action::Action;
use ratatui::widgets::ListState;

pub struct AppState {
    pub view: ItemListView,
    pub list_state: ListState,
    pub message: String,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let mut l_state = ListState::default();
        l_state.select(Some(0));
        Self {
            view: ItemListView::new(config),
            list_state: l_state,
            message: "Loading...".to_string(),
        }
    }

    /// Picks up a finished load, if any, and refreshes the status line.
    pub fn refresh(&mut self) {
        if let Some(result) = self.view.poll_load() {
            self.on_loaded(result);
        }
    }

    pub fn on_loaded(&mut self, result: Result<usize, FetchError>) {
        self.message = match result {
            Ok(count) => format!("Items: {count}"),
            // Logged by the view. Nothing user-facing changes on failure.
            Err(_) => match self.view.phase() {
                Phase::Loaded => format!("Items: {}", self.view.len()),
                Phase::Placeholder => "Ready.".to_string(),
            },
        };
        self.clamp_selection();
    }

    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return false,
            Action::Next => self.next(),
            Action::Previous => self.previous(),
            Action::JumpForward(step) => self.jump_forward(step),
            Action::JumpBackward(step) => self.jump_backward(step),
        }
        true
    }

    fn clamp_selection(&mut self) {
        let len = self.view.len();
        let sel = self.list_state.selected().unwrap_or(0);
        if len == 0 {
            self.list_state.select(Some(0));
        } else if sel >= len {
            self.list_state.select(Some(len - 1));
        }
    }

    pub fn next(&mut self) {
        let len = self.view.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.view.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) => len - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn jump_forward(&mut self, step: usize) {
        if self.view.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let new_index = (current + step).min(self.view.len() - 1);
        self.list_state.select(Some(new_index));
    }

    pub fn jump_backward(&mut self, step: usize) {
        if self.view.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(current.saturating_sub(step)));
    }
}
