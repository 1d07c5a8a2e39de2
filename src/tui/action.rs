use crossterm::event::{KeyCode, MouseEventKind};

pub const PAGE_STEP: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    JumpForward(usize),
    JumpBackward(usize),
    Quit,
}

impl Action {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Next),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Previous),
            KeyCode::PageDown => Some(Action::JumpForward(PAGE_STEP)),
            KeyCode::PageUp => Some(Action::JumpBackward(PAGE_STEP)),
            _ => None,
        }
    }

    pub fn from_mouse(kind: MouseEventKind) -> Option<Self> {
        match kind {
            MouseEventKind::ScrollDown => Some(Action::Next),
            MouseEventKind::ScrollUp => Some(Action::Previous),
            _ => None,
        }
    }
}
