use focuslist::config::ListConfig;
use focuslist::list::{
    Adapter, FilteredIndex, Filterable, ListKey, ListModel, RawIndex, SimpleAdapter,
    SimpleItem, SimpleStyle,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn items(titles: &[&str]) -> Vec<SimpleItem> {
    titles.iter().map(|t| SimpleItem::new(*t, "")).collect()
}

fn numbered(len: usize) -> Vec<SimpleItem> {
    (0..len).map(|i| SimpleItem::new(format!("item {i}"), "")).collect()
}

fn model(items: Vec<SimpleItem>, window: usize, infinite: bool) -> ListModel<SimpleAdapter> {
    let config = ListConfig {
        visible_item_count: window,
        infinite_scroll: infinite,
        ..Default::default()
    };
    let adapter = SimpleAdapter::new(items, SimpleStyle::plain(40));
    let mut model = ListModel::with_config(adapter, config);
    model.focus();
    model
}

fn nav_key() -> impl Strategy<Value = ListKey> {
    prop_oneof![
        Just(ListKey::Up),
        Just(ListKey::Down),
        Just(ListKey::ShiftTab),
        Just(ListKey::Home),
        Just(ListKey::End),
    ]
}

fn title() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{0,12}"
}

proptest! {
    #[test]
    fn bounded_focus_stays_in_range_and_visible(
        len in 1usize..60,
        window in 1usize..12,
        keys in prop::collection::vec(nav_key(), 0..80),
    ) {
        let mut model = model(numbered(len), window, false);

        for key in keys {
            model.handle_key(key);

            let focus = model.item_focus().unwrap().get();
            let start = model.visible_item_start();
            prop_assert!(focus < len);
            prop_assert!(start <= focus && focus < start + window);
            prop_assert!(start <= len.saturating_sub(window));
        }
    }

    #[test]
    fn infinite_scroll_wraps_at_both_ends(len in 1usize..60, window in 1usize..12) {
        let mut model = model(numbered(len), window, true);

        model.handle_key(ListKey::End);
        model.handle_key(ListKey::Down);
        prop_assert_eq!(model.item_focus(), Some(FilteredIndex(0)));

        model.handle_key(ListKey::Up);
        prop_assert_eq!(model.item_focus(), Some(FilteredIndex(len - 1)));
        let start = model.visible_item_start();
        prop_assert!(start <= len - 1 && len - 1 < start + window);
    }

    #[test]
    fn empty_pattern_is_identity(
        titles in prop::collection::vec(title(), 0..20),
        pattern in "[a-z]{1,3}",
    ) {
        let mut adapter = SimpleAdapter::new(
            titles.iter().map(|t| SimpleItem::new(t.as_str(), "")).collect(),
            SimpleStyle::default(),
        );
        adapter.filter(&pattern);
        adapter.filter("");

        prop_assert_eq!(adapter.len(), adapter.original_item_len());
        for i in 0..adapter.len() {
            prop_assert_eq!(adapter.filtered_item_at(FilteredIndex(i)), adapter.item_at(RawIndex(i)));
        }
    }

    #[test]
    fn filter_returns_only_subsequence_matches(
        titles in prop::collection::vec(title(), 0..20),
        pattern in "[a-z]{1,3}",
    ) {
        let mut adapter = SimpleAdapter::new(
            titles.iter().map(|t| SimpleItem::new(t.as_str(), "")).collect(),
            SimpleStyle::default(),
        );
        adapter.filter(&pattern);

        let expected = titles
            .iter()
            .filter(|t| is_subsequence(&pattern, &t.to_lowercase()))
            .count();
        prop_assert_eq!(adapter.len(), expected);

        let scores: Vec<i64> = adapter.matches().unwrap().iter().map(|m| m.score).collect();
        prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn set_item_at_round_trips(
        len in 1usize..20,
        at in 0usize..20,
        new_title in title(),
    ) {
        let at = at % len;
        let mut adapter = SimpleAdapter::new(numbered(len), SimpleStyle::default());
        let item = SimpleItem::new(new_title, "desc").with_options(["x", "y"], "y");

        adapter.set_item_at(RawIndex(at), item.clone()).unwrap();
        prop_assert_eq!(adapter.item_at(RawIndex(at)), Some(&item));
    }
}

fn is_subsequence(pattern: &str, haystack: &str) -> bool {
    let mut chars = haystack.chars();
    pattern.chars().all(|p| chars.any(|c| c == p))
}

#[test]
fn no_match_differs_from_no_filter() {
    let mut adapter = SimpleAdapter::new(items(&["Apple", "Banana"]), SimpleStyle::default());
    assert_eq!(adapter.len(), 2);

    adapter.filter("qqq");
    assert_eq!(adapter.len(), 0);

    adapter.filter("");
    assert_eq!(adapter.len(), 2);
}

#[test]
fn append_under_filter_shows_new_match() {
    let mut adapter = SimpleAdapter::new(items(&["Apple", "Banana"]), SimpleStyle::default());
    adapter.filter("ap");
    assert_eq!(adapter.len(), 1);

    adapter.append(items(&["Grape"]));
    assert_eq!(adapter.len(), 2);
}

#[test]
fn filtering_fruits_resets_focus() {
    let mut model = model(items(&["Apple", "Banana", "Grape"]), 2, false);
    model.handle_key(ListKey::End);

    model.filter("ap");

    let titles: Vec<&str> = (0..model.adapter().len())
        .filter_map(|i| model.adapter().filtered_item_at(FilteredIndex(i)))
        .map(|item| item.title.as_str())
        .collect();
    assert!(titles.contains(&"Apple"));
    assert!(titles.contains(&"Grape"));
    assert!(!titles.contains(&"Banana"));
    assert_eq!(model.item_focus(), Some(FilteredIndex(0)));
}

#[test]
fn end_in_bounded_mode_shows_last_window() {
    let mut model = model(numbered(10), 7, false);
    model.handle_key("end");

    assert_eq!(model.item_focus(), Some(FilteredIndex(9)));
    assert_eq!(model.visible_item_start(), 3);
}

#[test]
fn page_down_clamps_at_last_full_window() {
    let mut model = model(numbered(20), 7, false);
    model.handle_key("pgdown");
    assert_eq!(model.visible_item_start(), 7);
    model.handle_key("pgdown");
    assert_eq!(model.visible_item_start(), 13);
}

#[test]
fn render_shows_window_only() {
    let mut model = model(numbered(10), 3, false);
    model.handle_key(ListKey::End);

    let rendered = model.render();
    assert!(rendered.contains("item 9"));
    assert!(rendered.contains("item 7"));
    assert!(!rendered.contains("item 6"));
    // three items of two lines each, separated by blank lines
    assert_eq!(rendered.lines().count(), 8);
}
