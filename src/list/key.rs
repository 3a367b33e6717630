use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Keys the list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey {
    Up,
    Down,
    /// Behaves like [`ListKey::Down`].
    ShiftTab,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Esc,
    Unknown,
}

impl ListKey {
    /// Key identifier as used by [`From<&str>`].
    pub fn as_str(self) -> &'static str {
        match self {
            ListKey::Up => "up",
            ListKey::Down => "down",
            ListKey::ShiftTab => "shift+tab",
            ListKey::Home => "home",
            ListKey::End => "end",
            ListKey::PageUp => "pgup",
            ListKey::PageDown => "pgdown",
            ListKey::Enter => "enter",
            ListKey::Esc => "esc",
            ListKey::Unknown => "",
        }
    }
}

impl From<&str> for ListKey {
    fn from(key: &str) -> Self {
        match key {
            "up" => ListKey::Up,
            "down" => ListKey::Down,
            "shift+tab" => ListKey::ShiftTab,
            "home" => ListKey::Home,
            "end" => ListKey::End,
            "pgup" => ListKey::PageUp,
            "pgdown" => ListKey::PageDown,
            "enter" => ListKey::Enter,
            "esc" => ListKey::Esc,
            _ => ListKey::Unknown,
        }
    }
}

impl From<KeyEvent> for ListKey {
    fn from(key: KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return ListKey::Unknown;
        }

        match (key.modifiers.contains(KeyModifiers::CONTROL), key.code) {
            (true, KeyCode::Char('p')) => ListKey::Up,
            (true, KeyCode::Char('n')) => ListKey::Down,

            (false, KeyCode::Up) => ListKey::Up,
            (false, KeyCode::Down) => ListKey::Down,
            (false, KeyCode::BackTab) => ListKey::ShiftTab,
            (false, KeyCode::Home) => ListKey::Home,
            (false, KeyCode::End) => ListKey::End,
            (false, KeyCode::PageUp) => ListKey::PageUp,
            (false, KeyCode::PageDown) => ListKey::PageDown,
            (false, KeyCode::Enter) => ListKey::Enter,
            (false, KeyCode::Esc) => ListKey::Esc,

            _ => ListKey::Unknown,
        }
    }
}
