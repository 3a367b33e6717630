use crate::config::ListConfig;
use crate::list::{ListModel, SimpleAdapter, SimpleItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuMode {
    Normal,
    HelpPopup,
}

pub struct MenuState {
    pub list: ListModel<SimpleAdapter>,
    pub input: String,

    pub mode: MenuMode,

    pub selection: Option<SimpleItem>,
    pub should_exit: bool,
}

impl MenuState {
    pub fn new(items: Vec<SimpleItem>, config: ListConfig) -> Self {
        let adapter = SimpleAdapter::new(items, config.item.clone());
        let mut list = ListModel::with_config(adapter, config);
        list.focus();

        Self {
            list,
            input: String::new(),
            mode: MenuMode::Normal,
            selection: None,
            should_exit: false,
        }
    }

    /// Re-runs the filter with the current input and resets the position.
    pub fn update_filter_and_reset(&mut self) {
        self.list.filter(&self.input);
    }

    /// The item under the cursor, if any.
    pub fn focused_item(&self) -> Option<&SimpleItem> {
        self.list
            .item_focus()
            .and_then(|pos| self.list.adapter().filtered_item_at(pos))
    }

    pub fn remove_last_word_from_input(&mut self) {
        if self.input.is_empty() {
            return;
        }

        if let Some(last_space) = self.input.trim_end().rfind(' ') {
            self.input.truncate(last_space);
        } else {
            self.input.clear();
        }

        self.update_filter_and_reset();
    }
}
