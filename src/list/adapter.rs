use crate::list::index::FilteredIndex;

/// Supplies the items a [`ListModel`](crate::list::model::ListModel) scrolls
/// over and knows how to draw each of them.
///
/// All positions handed to an adapter are effective positions: when the
/// adapter filters its items, position `0` is the first match, not the first
/// item of the collection.
pub trait Adapter {
    /// Number of items currently visible to the list.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// String placed between two rendered items.
    fn sep(&self) -> &str;

    /// Renders the item at `pos`.
    ///
    /// `focus` is the focused position, or `None` while the list is blurred.
    /// `expanded` is set when the list is in detail mode; it only concerns the
    /// focused item.
    fn render_one(
        &self,
        pos: FilteredIndex,
        focus: Option<FilteredIndex>,
        expanded: bool,
    ) -> String;

    /// Extra content shown below the focused item in detail mode.
    fn render_detail(&self, _pos: FilteredIndex) -> String {
        String::new()
    }
}

/// Adapters that can narrow their items down with a search pattern.
pub trait Filterable: Adapter {
    /// Applies `pattern`; an empty pattern clears the filter.
    fn filter(&mut self, pattern: &str);

    /// The last applied pattern.
    fn pattern(&self) -> &str;
}
