//! List configuration, optionally read from a TOML file.
//!
//! ```toml
//! visible_item_count = 7
//! infinite_scroll = false
//! placeholder = ""
//!
//! [scrollbar]
//! glyph = "│"
//! color = "#777777"   # or a colour name, or "none"
//!
//! [item]
//! max_line_width = 120
//! description_color = "#707070"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crossterm::style::Color;
use dirs::config_dir;
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::list::{scrollbar::ScrollbarStyle, simple::SimpleStyle};

pub const DEFAULT_VISIBLE_ITEM_COUNT: usize = 7;

const CONFIG_DIR_NAME: &str = "focuslist";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings of a [`ListModel`](crate::list::model::ListModel) and of the
/// [`SimpleAdapter`](crate::list::simple::SimpleAdapter) it usually drives.
#[derive(Debug, Clone, PartialEq)]
pub struct ListConfig {
    /// Window size, in items.
    pub visible_item_count: usize,
    /// Wrap focus around at both ends.
    pub infinite_scroll: bool,
    /// Shown instead of the list when there is nothing to show.
    pub placeholder: String,
    pub scrollbar: ScrollbarStyle,
    pub item: SimpleStyle,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            visible_item_count: DEFAULT_VISIBLE_ITEM_COUNT,
            infinite_scroll: false,
            placeholder: String::new(),
            scrollbar: ScrollbarStyle::default(),
            item: SimpleStyle::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    visible_item_count: usize,
    infinite_scroll: bool,
    placeholder: String,
    scrollbar: RawScrollbar,
    item: RawItem,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawScrollbar {
    glyph: String,
    color: String,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawItem {
    max_line_width: usize,
    description_color: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            visible_item_count: DEFAULT_VISIBLE_ITEM_COUNT,
            infinite_scroll: false,
            placeholder: String::new(),
            scrollbar: RawScrollbar::default(),
            item: RawItem::default(),
        }
    }
}

impl Default for RawScrollbar {
    fn default() -> Self {
        Self {
            glyph: crate::list::scrollbar::DEFAULT_GLYPH.to_string(),
            color: "#777777".to_string(),
        }
    }
}

impl Default for RawItem {
    fn default() -> Self {
        Self {
            max_line_width: crate::list::simple::DEFAULT_MAX_LINE_WIDTH,
            description_color: "#707070".to_string(),
        }
    }
}

impl ListConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML, unknown keys, unknown colours and values
    /// rejected by [`ListConfig::validate`].
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(s)?;

        let config = Self {
            visible_item_count: raw.visible_item_count,
            infinite_scroll: raw.infinite_scroll,
            placeholder: raw.placeholder,
            scrollbar: ScrollbarStyle {
                glyph: raw.scrollbar.glyph,
                color: parse_color("scrollbar.color", &raw.scrollbar.color)?,
            },
            item: SimpleStyle {
                max_line_width: raw.item.max_line_width,
                description_color: parse_color(
                    "item.description_color",
                    &raw.item.description_color,
                )?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Reads and parses the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file can't be read, otherwise
    /// whatever [`ListConfig::from_toml_str`] returns.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loading list config");
        Self::from_toml_str(&data)
    }

    /// Loads the config from the user config directory if a file exists
    /// there, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`ListConfig::load`] when the file exists.
    pub fn load_default() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Checks values the list can't work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.visible_item_count == 0 {
            return Err(ConfigError::Invalid {
                field: "visible_item_count",
                reason: "must be at least 1".into(),
            });
        }
        if self.item.max_line_width == 0 {
            return Err(ConfigError::Invalid {
                field: "item.max_line_width",
                reason: "must be at least 1".into(),
            });
        }
        if self.scrollbar.glyph.is_empty() {
            return Err(ConfigError::Invalid {
                field: "scrollbar.glyph",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

/// `$CONFIG_DIR/focuslist/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Parses `#rrggbb`, a crossterm colour name or `none`.
fn parse_color(field: &'static str, s: &str) -> Result<Option<Color>, ConfigError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    let invalid = || ConfigError::Invalid {
        field,
        reason: format!("unknown colour `{s}`"),
    };

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        return Ok(Some(Color::Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        }));
    }

    Color::try_from(s).map(Some).map_err(|_| invalid())
}
