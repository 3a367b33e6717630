//! The list widget.
//!
//! [`ListModel`] keeps focus and the visible window in sync while an
//! [`Adapter`] provides and draws the items. [`SimpleAdapter`] is the stock
//! adapter with fuzzy filtering.

pub mod adapter;
pub mod filter;
pub mod index;
pub mod item;
pub mod key;
pub mod model;
pub mod scrollbar;
pub mod simple;

pub use adapter::{Adapter, Filterable};
pub use filter::{FilterMatch, FuzzyFilter};
pub use index::{FilteredIndex, RawIndex};
pub use item::SimpleItem;
pub use key::ListKey;
pub use model::ListModel;
pub use scrollbar::ScrollbarStyle;
pub use simple::{SimpleAdapter, SimpleStyle};
