use tracing::debug;

use crate::menu::{
    action::MenuAction,
    state::{MenuMode, MenuState},
};

pub trait ActionDispatcher {
    fn dispatch(&self, action: MenuAction, state: &mut MenuState);
}

pub struct DefaultActionDispatcher;

impl ActionDispatcher for DefaultActionDispatcher {
    fn dispatch(&self, action: MenuAction, state: &mut MenuState) {
        match action {
            MenuAction::List(key) => state.list.handle_key(key),
            MenuAction::Select => handle_select(state),
            MenuAction::AppendToFilter(c) => {
                state.input.push(c);
                state.update_filter_and_reset();
            }
            MenuAction::DeleteFromFilter => {
                state.input.pop();
                state.update_filter_and_reset();
            }
            MenuAction::RemoveLastWord => state.remove_last_word_from_input(),
            MenuAction::ToggleHelp => {
                state.mode = match state.mode {
                    MenuMode::Normal => MenuMode::HelpPopup,
                    MenuMode::HelpPopup => MenuMode::Normal,
                };
            }
            MenuAction::Exit => state.should_exit = true,
            MenuAction::Nop => {}
        }
    }
}

fn handle_select(state: &mut MenuState) {
    let Some(selection) = state.focused_item().cloned() else {
        return;
    };

    debug!(title = %selection.title, "item selected");
    state.selection = Some(selection);
    state.should_exit = true;
}
