use crossterm::style::{Color, Stylize};
use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::ListError;
use crate::list::{
    adapter::{Adapter, Filterable},
    filter::{FilterMatch, FuzzyFilter},
    index::{FilteredIndex, RawIndex},
    item::SimpleItem,
};

pub const DEFAULT_MAX_LINE_WIDTH: usize = 120;
pub const FOCUS_BORDER: &str = "│ ";
pub const UNFOCUSED_PADDING: &str = "  ";

/// Columns kept free between the title and the selected option.
const OPTION_GAP: usize = 5;

/// Rendering settings for a [`SimpleAdapter`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleStyle {
    /// Width of the title line, selected option included.
    pub max_line_width: usize,
    /// Colour of the description line; `None` renders it unstyled.
    pub description_color: Option<Color>,
}

impl Default for SimpleStyle {
    fn default() -> Self {
        Self {
            max_line_width: DEFAULT_MAX_LINE_WIDTH,
            description_color: Some(Color::Rgb {
                r: 0x70,
                g: 0x70,
                b: 0x70,
            }),
        }
    }
}

impl SimpleStyle {
    /// A style without colours, mostly useful to compare rendered output.
    pub fn plain(max_line_width: usize) -> Self {
        Self {
            max_line_width,
            description_color: None,
        }
    }
}

/// The stock [`Adapter`]: a title/description list with fuzzy filtering.
pub struct SimpleAdapter {
    items: Vec<SimpleItem>,
    filter_result: Option<Vec<FilterMatch>>,
    last_filter_pattern: String,

    style: SimpleStyle,
    filter: FuzzyFilter,
}

impl SimpleAdapter {
    pub fn new(items: Vec<SimpleItem>, style: SimpleStyle) -> Self {
        Self {
            items,
            filter_result: None,
            last_filter_pattern: String::new(),
            style,
            filter: FuzzyFilter::new(),
        }
    }

    pub fn style(&self) -> &SimpleStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: SimpleStyle) {
        self.style = style;
    }

    /// Adds `items` at the end of the collection.
    pub fn append(&mut self, items: impl IntoIterator<Item = SimpleItem>) {
        self.items.extend(items);
        self.refilter();
    }

    /// Inserts `items` so that the first of them ends up at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIndex`] if `at` is past the end of the
    /// collection. Inserting at exactly the length appends.
    pub fn insert(
        &mut self,
        at: RawIndex,
        items: impl IntoIterator<Item = SimpleItem>,
    ) -> Result<(), ListError> {
        if at.get() > self.items.len() {
            return Err(self.invalid(at));
        }

        self.items.splice(at.get()..at.get(), items);
        self.refilter();
        Ok(())
    }

    /// Removes and returns the item at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIndex`] if there is no item at `at`.
    pub fn remove(&mut self, at: RawIndex) -> Result<SimpleItem, ListError> {
        if at.get() >= self.items.len() {
            return Err(self.invalid(at));
        }

        let removed = self.items.remove(at.get());
        self.refilter();
        Ok(removed)
    }

    /// Replaces the item at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIndex`] if there is no item at `at`.
    pub fn set_item_at(
        &mut self,
        at: RawIndex,
        item: SimpleItem,
    ) -> Result<(), ListError> {
        let Some(slot) = self.items.get_mut(at.get()) else {
            return Err(self.invalid(at));
        };

        *slot = item;
        self.refilter();
        Ok(())
    }

    pub fn set_items(&mut self, items: Vec<SimpleItem>) {
        self.items = items;
        self.refilter();
    }

    /// Number of items in the collection, ignoring any filter.
    pub fn original_item_len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[SimpleItem] {
        &self.items
    }

    /// Current filter matches, `None` when no filter is active.
    pub fn matches(&self) -> Option<&[FilterMatch]> {
        self.filter_result.as_deref()
    }

    /// Translates an effective position into a collection position.
    pub fn filtered_index_at(&self, pos: FilteredIndex) -> Option<RawIndex> {
        match &self.filter_result {
            None => (pos.get() < self.items.len()).then_some(RawIndex(pos.get())),
            Some(matches) => matches.get(pos.get()).map(|m| m.index),
        }
    }

    pub fn filtered_item_at(&self, pos: FilteredIndex) -> Option<&SimpleItem> {
        self.filtered_index_at(pos).and_then(|idx| self.item_at(idx))
    }

    pub fn item_at(&self, idx: RawIndex) -> Option<&SimpleItem> {
        self.items.get(idx.get())
    }

    fn invalid(&self, at: RawIndex) -> ListError {
        ListError::InvalidIndex {
            index: at.get(),
            len: self.items.len(),
        }
    }

    fn refilter(&mut self) {
        if self.filter_result.is_some() {
            let pattern = std::mem::take(&mut self.last_filter_pattern);
            self.filter(&pattern);
        }
    }

    fn build_title_and_description(
        &self,
        item: &SimpleItem,
        focused: bool,
    ) -> String {
        let prefix = if focused { FOCUS_BORDER } else { UNFOCUSED_PADDING };

        let option_width = item.selected_option.width();
        let max_title_width = self
            .style
            .max_line_width
            .saturating_sub(option_width + OPTION_GAP);

        let title = truncate_to_width(&item.title, max_title_width);
        let padding = " ".repeat(
            self.style
                .max_line_width
                .saturating_sub(title.width() + option_width),
        );

        let mut rendered =
            format!("{prefix}{title}{padding}{}", item.selected_option);

        // split instead of lines() so an empty description still gets a row
        for line in item.desc.split('\n') {
            rendered.push('\n');
            rendered.push_str(prefix);
            match self.style.description_color {
                Some(color) => rendered.push_str(&line.with(color).to_string()),
                None => rendered.push_str(line),
            }
        }

        rendered
    }
}

impl Adapter for SimpleAdapter {
    fn len(&self) -> usize {
        match &self.filter_result {
            None => self.items.len(),
            Some(matches) => matches.len(),
        }
    }

    fn sep(&self) -> &str {
        "\n\n"
    }

    fn render_one(
        &self,
        pos: FilteredIndex,
        focus: Option<FilteredIndex>,
        expanded: bool,
    ) -> String {
        let Some(item) = self.filtered_item_at(pos) else {
            return String::new();
        };

        let focused = focus == Some(pos);
        let mut rendered = self.build_title_and_description(item, focused);

        if focused && expanded {
            rendered.push('\n');
            rendered.push_str(&self.render_detail(pos));
        }

        rendered
    }
}

impl Filterable for SimpleAdapter {
    fn filter(&mut self, pattern: &str) {
        self.last_filter_pattern = pattern.to_string();

        if pattern.is_empty() {
            self.filter_result = None;
            debug!("filter cleared");
            return;
        }

        let matches = self
            .filter
            .find(pattern, self.items.iter().map(|item| item.title.as_str()));
        debug!(pattern, matched = matches.len(), total = self.items.len(), "filter applied");
        self.filter_result = Some(matches);
    }

    fn pattern(&self) -> &str {
        &self.last_filter_pattern
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, ch) in s.char_indices() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            return &s[..idx];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fruits() -> SimpleAdapter {
        SimpleAdapter::new(
            vec![
                SimpleItem::new("Apple", "red"),
                SimpleItem::new("Banana", "yellow"),
                SimpleItem::new("Grape", "purple"),
            ],
            SimpleStyle::plain(20),
        )
    }

    fn titles(adapter: &SimpleAdapter) -> Vec<String> {
        (0..adapter.len())
            .filter_map(|i| adapter.filtered_item_at(FilteredIndex(i)))
            .map(|item| item.title.clone())
            .collect()
    }

    #[test]
    fn filter_by_subsequence() {
        let mut adapter = fruits();
        adapter.filter("ap");

        let mut found = titles(&adapter);
        found.sort();
        assert_eq!(found, vec!["Apple".to_string(), "Grape".to_string()]);
    }

    #[test]
    fn empty_pattern_is_identity() {
        let mut adapter = fruits();
        adapter.filter("ban");
        adapter.filter("");

        assert_eq!(adapter.len(), adapter.original_item_len());
        assert_eq!(adapter.matches(), None);
        for i in 0..adapter.len() {
            assert_eq!(
                adapter.filtered_item_at(FilteredIndex(i)),
                adapter.item_at(RawIndex(i))
            );
        }
    }

    #[test]
    fn no_match_is_distinct_from_no_filter() {
        let mut adapter = fruits();
        assert_eq!(adapter.len(), 3);

        adapter.filter("zzz");
        assert_eq!(adapter.len(), 0);
        assert_eq!(adapter.matches(), Some(&[][..]));
        assert_eq!(adapter.filtered_index_at(FilteredIndex(0)), None);
    }

    #[test]
    fn append_reapplies_active_filter() {
        let mut adapter = fruits();
        adapter.filter("ap");
        assert_eq!(adapter.len(), 2);

        adapter.append([SimpleItem::new("Apricot", "orange")]);
        assert_eq!(adapter.len(), 3);
        assert_eq!(adapter.pattern(), "ap");

        adapter.append([SimpleItem::new("Cherry", "red")]);
        assert_eq!(adapter.len(), 3);
    }

    #[test]
    fn mutations_keep_mapping_in_sync() {
        let mut adapter = fruits();
        adapter.filter("grape");
        assert_eq!(
            adapter.filtered_index_at(FilteredIndex(0)),
            Some(RawIndex(2))
        );

        adapter
            .insert(RawIndex(0), [SimpleItem::new("Kiwi", "green")])
            .unwrap();
        assert_eq!(
            adapter.filtered_index_at(FilteredIndex(0)),
            Some(RawIndex(3))
        );

        adapter.remove(RawIndex(3)).unwrap();
        assert_eq!(adapter.len(), 0);

        adapter.set_items(vec![SimpleItem::new("grapefruit", "")]);
        assert_eq!(adapter.len(), 1);
    }

    #[test]
    fn set_item_at_reapplies_active_filter() {
        let mut adapter = fruits();
        adapter.filter("ap");
        assert_eq!(adapter.len(), 2);

        adapter
            .set_item_at(RawIndex(1), SimpleItem::new("Papaya", "orange"))
            .unwrap();
        assert_eq!(adapter.len(), 3);
        let matched: Vec<RawIndex> =
            adapter.matches().unwrap().iter().map(|m| m.index).collect();
        assert!(matched.contains(&RawIndex(1)));

        adapter
            .set_item_at(RawIndex(0), SimpleItem::new("Cherry", "red"))
            .unwrap();
        assert_eq!(adapter.len(), 2);
        let matched: Vec<RawIndex> =
            adapter.matches().unwrap().iter().map(|m| m.index).collect();
        assert!(!matched.contains(&RawIndex(0)));
    }

    #[test]
    fn set_items_reapplies_active_filter() {
        let mut adapter = fruits();
        adapter.filter("ap");

        adapter.set_items(vec![
            SimpleItem::new("Kiwi", ""),
            SimpleItem::new("Grape", ""),
            SimpleItem::new("Mango", ""),
        ]);
        assert_eq!(adapter.len(), 1);
        assert_eq!(
            adapter.filtered_index_at(FilteredIndex(0)),
            Some(RawIndex(1))
        );
        assert_eq!(adapter.pattern(), "ap");
    }

    #[test]
    fn set_item_at_round_trips() {
        let mut adapter = fruits();
        let item = SimpleItem::new("Mango", "sweet").with_options(["a", "b"], "b");

        adapter.set_item_at(RawIndex(1), item.clone()).unwrap();
        assert_eq!(adapter.item_at(RawIndex(1)), Some(&item));
    }

    #[test]
    fn insert_positions() {
        let mut adapter = fruits();

        adapter
            .insert(RawIndex(3), [SimpleItem::new("Last", "")])
            .unwrap();
        assert_eq!(adapter.item_at(RawIndex(3)).unwrap().title, "Last");

        adapter
            .insert(
                RawIndex(1),
                [SimpleItem::new("X", ""), SimpleItem::new("Y", "")],
            )
            .unwrap();
        let all: Vec<&str> =
            adapter.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(all, vec!["Apple", "X", "Y", "Banana", "Grape", "Last"]);
    }

    #[test]
    fn out_of_range_mutations_fail() {
        let mut adapter = fruits();

        assert_eq!(
            adapter.insert(RawIndex(4), [SimpleItem::default()]),
            Err(ListError::InvalidIndex { index: 4, len: 3 })
        );
        assert_eq!(
            adapter.remove(RawIndex(3)),
            Err(ListError::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(
            adapter.set_item_at(RawIndex(9), SimpleItem::default()),
            Err(ListError::InvalidIndex { index: 9, len: 3 })
        );
        assert_eq!(adapter.original_item_len(), 3);
    }

    #[test]
    fn renders_focused_and_unfocused_items() {
        let adapter = SimpleAdapter::new(
            vec![SimpleItem::new("Apple", "red").with_options(["on", "off"], "on")],
            SimpleStyle::plain(12),
        );

        let focused = adapter.render_one(FilteredIndex(0), Some(FilteredIndex(0)), false);
        assert_eq!(focused, "│ Apple     on\n│ red");

        let unfocused = adapter.render_one(FilteredIndex(0), None, false);
        assert_eq!(unfocused, "  Apple     on\n  red");
    }

    #[test]
    fn prefixes_every_description_line() {
        let adapter = SimpleAdapter::new(
            vec![SimpleItem::new("Apple", "red\nround")],
            SimpleStyle::plain(8),
        );

        let focused = adapter.render_one(FilteredIndex(0), Some(FilteredIndex(0)), false);
        assert_eq!(focused, "│ Apple   \n│ red\n│ round");

        let unfocused = adapter.render_one(FilteredIndex(0), None, false);
        assert_eq!(unfocused, "  Apple   \n  red\n  round");
    }

    #[test]
    fn truncates_long_titles() {
        let adapter = SimpleAdapter::new(
            vec![SimpleItem::new("A very long title", "").with_options(["x"], "x")],
            SimpleStyle::plain(10),
        );

        let rendered = adapter.render_one(FilteredIndex(0), None, false);
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line, "  A ve     x");
    }

    #[test]
    fn expanded_appends_detail_line() {
        let adapter = fruits();
        let focus = Some(FilteredIndex(1));

        let expanded = adapter.render_one(FilteredIndex(1), focus, true);
        let collapsed = adapter.render_one(FilteredIndex(1), focus, false);
        assert_eq!(expanded, format!("{collapsed}\n"));

        let other = adapter.render_one(FilteredIndex(0), focus, true);
        assert!(!other.ends_with('\n'));
    }

    #[test]
    fn renders_through_filter_mapping() {
        let mut adapter = fruits();
        adapter.filter("grape");

        let rendered = adapter.render_one(FilteredIndex(0), None, false);
        assert!(rendered.starts_with("  Grape"));
    }

    #[test]
    fn description_is_dimmed_by_default() {
        let adapter = SimpleAdapter::new(
            vec![SimpleItem::new("Apple", "red")],
            SimpleStyle::default(),
        );

        let rendered = adapter.render_one(FilteredIndex(0), None, false);
        let desc_line = rendered.lines().nth(1).unwrap();
        assert!(desc_line.contains("\u{1b}["));
        assert!(desc_line.contains("red"));
    }
}
