//! A scrollable, focusable list widget for terminal user interfaces.
//!
//! ```
//! use focuslist::list::{ListKey, ListModel, SimpleAdapter, SimpleItem, SimpleStyle};
//!
//! let adapter = SimpleAdapter::new(
//!     vec![SimpleItem::new("Apple", "red"), SimpleItem::new("Grape", "purple")],
//!     SimpleStyle::default(),
//! );
//! let mut list = ListModel::new(adapter);
//! list.focus();
//! list.handle_key(ListKey::Down);
//! assert_eq!(list.item_focus().map(|i| i.get()), Some(1));
//! ```

pub mod config;
pub mod error;
pub mod list;
pub mod logging;
pub mod menu;
pub mod persistence;
pub mod terminal_utils;

pub use config::ListConfig;
pub use error::{ConfigError, ListError};
