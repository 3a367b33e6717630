use tracing::trace;

use crate::config::ListConfig;
use crate::list::{
    adapter::{Adapter, Filterable},
    index::FilteredIndex,
    key::ListKey,
    scrollbar::{overlay, scrollbar_row},
};

/// Scrolling and focus state of a list whose items come from an [`Adapter`].
///
/// The model never caches the adapter's length: every key press and every
/// render re-reads it, so the adapter may be mutated freely in between.
pub struct ListModel<A> {
    config: ListConfig,
    adapter: A,

    focus: usize,
    visible_item_start: usize,
    has_focus: bool,
    expanded: bool,
}

impl<A: Adapter> ListModel<A> {
    pub fn new(adapter: A) -> Self {
        Self::with_config(adapter, ListConfig::default())
    }

    pub fn with_config(adapter: A, config: ListConfig) -> Self {
        Self {
            config,
            adapter,
            focus: 0,
            visible_item_start: 0,
            has_focus: false,
            expanded: false,
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable access to the adapter. Positions are re-clamped on the next
    /// key press.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn set_visible_item_count(&mut self, count: usize) {
        self.config.visible_item_count = count.max(1);
        self.adjust_view();
        self.visible_item_start = self.visible_item_start.min(self.max_view_position());
    }

    pub fn set_infinite_scroll(&mut self, enabled: bool) {
        self.config.infinite_scroll = enabled;
    }

    /// Renders the visible window with the scrollbar column on the left.
    pub fn render(&self) -> String {
        let len = self.adapter.len();
        if len == 0 {
            return self.config.placeholder.clone();
        }

        // the adapter may have shrunk since the last key press
        let start = self.visible_item_start.min(self.max_view_position());
        let end = len.min(start + self.window());
        let focus = self
            .has_focus
            .then_some(FilteredIndex(self.focus.min(len - 1)));

        let body = (start..end)
            .map(|i| self.adapter.render_one(FilteredIndex(i), focus, self.expanded))
            .collect::<Vec<_>>()
            .join(self.adapter.sep());

        let height = body.split('\n').count();
        let row = scrollbar_row(start, len, self.window(), height);

        overlay(&body, row, &self.config.scrollbar)
    }

    /// Applies one key press. Does nothing while the list is blurred.
    pub fn handle_key(&mut self, key: impl Into<ListKey>) {
        if !self.has_focus {
            return;
        }

        let key = key.into();
        self.clamp_to_len();

        if self.expanded {
            if key == ListKey::Esc {
                self.expanded = false;
            }
            return;
        }

        match key {
            ListKey::Up => self.update_focus(-1),
            ListKey::Down | ListKey::ShiftTab => self.update_focus(1),
            ListKey::Home => self.set_item_focus(0),
            ListKey::End => self.set_item_focus(self.adapter.len()),
            ListKey::PageUp => {
                self.visible_item_start =
                    self.visible_item_start.saturating_sub(self.window());
            }
            ListKey::PageDown => {
                self.visible_item_start = self
                    .max_view_position()
                    .min(self.visible_item_start + self.window());
            }
            ListKey::Enter => self.expanded = true,
            ListKey::Esc | ListKey::Unknown => {}
        }

        trace!(
            key = key.as_str(),
            focus = self.focus,
            start = self.visible_item_start,
            expanded = self.expanded,
            "list key handled"
        );
    }

    /// Starts honouring key presses.
    pub fn focus(&mut self) {
        self.has_focus = true;
    }

    /// Stops honouring key presses. Position is kept.
    pub fn blur(&mut self) {
        self.has_focus = false;
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Moves focus to `i`, clamped to the last item, and scrolls it into view.
    pub fn set_item_focus(&mut self, i: usize) {
        self.focus = i.min(self.adapter.len().saturating_sub(1));
        self.adjust_view();
    }

    /// Moves the window start to `i`, clamped so the window stays full.
    pub fn set_view_position(&mut self, i: usize) {
        self.visible_item_start = i.min(self.max_view_position());
    }

    /// Scrolls the window by `delta` items without moving focus; wraps in
    /// infinite scroll mode.
    pub fn scroll_view(&mut self, delta: isize) {
        if self.config.infinite_scroll {
            let positions = self.max_view_position() + 1;
            self.visible_item_start = wrap(self.visible_item_start, delta, positions);
        } else {
            self.set_view_position(self.visible_item_start.saturating_add_signed(delta));
        }
    }

    pub fn visible_item_start(&self) -> usize {
        self.visible_item_start
    }

    /// The focused position, `None` when there are no items.
    pub fn item_focus(&self) -> Option<FilteredIndex> {
        (!self.adapter.is_empty()).then_some(FilteredIndex(self.focus))
    }

    fn window(&self) -> usize {
        self.config.visible_item_count.max(1)
    }

    fn max_view_position(&self) -> usize {
        self.adapter.len().saturating_sub(self.window())
    }

    fn update_focus(&mut self, delta: isize) {
        if self.config.infinite_scroll {
            self.focus = wrap(self.focus, delta, self.adapter.len());
            self.adjust_view();
        } else {
            self.set_item_focus(self.focus.saturating_add_signed(delta));
        }
    }

    fn adjust_view(&mut self) {
        let window = self.window();
        if self.focus < self.visible_item_start {
            self.visible_item_start = self.focus;
        } else if self.focus >= self.visible_item_start + window {
            self.visible_item_start = self.focus + 1 - window;
        }
    }

    fn clamp_to_len(&mut self) {
        let len = self.adapter.len();
        if len <= self.visible_item_start + self.window() {
            self.visible_item_start = self.max_view_position();
        }
        if len <= self.focus {
            self.focus = len.saturating_sub(1);
        }
    }
}

impl<A: Filterable> ListModel<A> {
    /// Filters the adapter and moves focus and window back to the top.
    pub fn filter(&mut self, pattern: &str) {
        self.adapter.filter(pattern);
        self.focus = 0;
        self.visible_item_start = 0;
        self.expanded = false;
    }
}

/// `(value + delta) mod len`, treating an empty range as a single slot.
fn wrap(value: usize, delta: isize, len: usize) -> usize {
    let len = len.max(1) as isize;
    (value as isize + delta).rem_euclid(len) as usize
}
