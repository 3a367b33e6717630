use std::fmt;

use serde::{Deserialize, Serialize};

/// A single entry of a [`SimpleAdapter`](crate::list::simple::SimpleAdapter).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleItem {
    /// Text shown on the first line, also what the filter matches against.
    pub title: String,
    /// Dimmed text shown below the title.
    pub desc: String,
    pub disabled: bool,
    /// Labels the item can be switched between.
    pub options: Vec<String>,
    /// Label shown right-aligned next to the title.
    pub selected_option: String,
}

impl SimpleItem {
    /// Creates an enabled item without options.
    ///
    /// # Arguments
    /// * `title` - The item title.
    /// * `desc` - The description line.
    pub fn new(title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
            ..Default::default()
        }
    }

    pub fn with_options<I, S>(mut self, options: I, selected: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self.selected_option = selected.into();
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl fmt::Display for SimpleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let disabled_indicator = if self.disabled { " (disabled)" } else { "" };

        write!(f, "{}{}", self.title, disabled_indicator)
    }
}
