//! Loading items from files or stdin.
//!
//! Two formats are understood:
//!
//! - TOML, for files ending in `.toml`:
//!   ```toml
//!   [[items]]
//!   title = "Apple"
//!   desc = "A fruit"
//!   options = ["red", "green"]
//!   selected_option = "red"
//!   ```
//! - Tab separated lines everywhere else: `title<TAB>description<TAB>options`,
//!   where options is a comma separated list whose first entry is selected.
//!   Only the title is required; blank lines are skipped.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::list::SimpleItem;

const FIELD_SEPARATOR: char = '\t';
const OPTION_SEPARATOR: char = ',';

#[derive(Debug, Deserialize)]
struct ItemsFile {
    #[serde(default)]
    items: Vec<SimpleItem>,
}

/// Reads items from `path`, or from stdin when `path` is `None`.
pub fn load_items(path: Option<&Path>) -> Result<Vec<SimpleItem>> {
    let Some(path) = path else {
        let mut data = String::new();
        io::stdin()
            .read_to_string(&mut data)
            .context("Failed to read items from stdin")?;
        return Ok(parse_item_lines(&data));
    };

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "toml") {
        parse_items_toml(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))
    } else {
        Ok(parse_item_lines(&data))
    }
}

pub fn parse_items_toml(data: &str) -> Result<Vec<SimpleItem>> {
    let file: ItemsFile = toml::from_str(data)?;
    Ok(file.items)
}

pub fn parse_item_lines(data: &str) -> Vec<SimpleItem> {
    data.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_item_line)
        .collect()
}

fn parse_item_line(line: &str) -> SimpleItem {
    let mut fields = line.splitn(3, FIELD_SEPARATOR);
    let title = fields.next().unwrap_or_default();
    let desc = fields.next().unwrap_or_default();

    let options: Vec<&str> = fields
        .next()
        .map(|options| {
            options
                .split(OPTION_SEPARATOR)
                .map(str::trim)
                .filter(|option| !option.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let selected = options.first().copied().unwrap_or_default();
    SimpleItem::new(title, desc).with_options(options.iter().copied(), selected)
}
