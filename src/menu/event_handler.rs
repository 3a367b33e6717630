use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::list::ListKey;
use crate::menu::{
    action::MenuAction,
    state::{MenuMode, MenuState},
};

pub trait EventHandler {
    fn handle_event(&self, event: Event, state: &MenuState) -> MenuAction;
}

pub struct DefaultEventHandler;

impl EventHandler for DefaultEventHandler {
    fn handle_event(&self, event: Event, state: &MenuState) -> MenuAction {
        let Event::Key(key) = event else {
            return MenuAction::Nop;
        };

        if key.kind != KeyEventKind::Press {
            return MenuAction::Nop;
        }

        if state.mode == MenuMode::HelpPopup {
            return handle_help_popup_key(key);
        }

        if state.list.is_expanded() {
            return handle_expanded_key(key);
        }

        handle_normal_mode_key(key)
    }
}

fn handle_help_popup_key(key: KeyEvent) -> MenuAction {
    match (key.modifiers.contains(KeyModifiers::CONTROL), key.code) {
        (true, KeyCode::Char('h')) => MenuAction::ToggleHelp,
        (true, KeyCode::Char('c')) => MenuAction::Exit,
        (false, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) => {
            MenuAction::ToggleHelp
        }
        _ => MenuAction::Nop,
    }
}

fn handle_expanded_key(key: KeyEvent) -> MenuAction {
    match (key.modifiers.contains(KeyModifiers::CONTROL), key.code) {
        (true, KeyCode::Char('c')) => MenuAction::Exit,
        (false, KeyCode::Enter) => MenuAction::Select,
        (false, KeyCode::Esc) => MenuAction::List(ListKey::Esc),
        _ => MenuAction::Nop,
    }
}

fn handle_normal_mode_key(key: KeyEvent) -> MenuAction {
    match (key.modifiers.contains(KeyModifiers::CONTROL), key.code) {
        (true, KeyCode::Char('c')) => MenuAction::Exit,
        (true, KeyCode::Char('h')) => MenuAction::ToggleHelp,
        (true, KeyCode::Char('w')) => MenuAction::RemoveLastWord,
        (true, KeyCode::Char('p' | 'n')) => MenuAction::List(ListKey::from(key)),

        (false, KeyCode::Char(c)) => MenuAction::AppendToFilter(c),
        (false, KeyCode::Backspace) => MenuAction::DeleteFromFilter,
        (false, KeyCode::Esc) => MenuAction::Exit,

        _ => match ListKey::from(key) {
            ListKey::Unknown => MenuAction::Nop,
            list_key => MenuAction::List(list_key),
        },
    }
}
