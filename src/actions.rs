use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::generate;
use tracing::info;

use focuslist::config::ListConfig;
use focuslist::list::{
    Adapter, Filterable, ListModel, SimpleAdapter, SimpleItem,
};
use focuslist::menu::Menu;
use focuslist::{logging, persistence, terminal_utils};

use crate::cli::{Args, Commands, ListArgs};

pub fn handle(args: Args) -> Result<()> {
    logging::init(args.log_file.as_deref(), args.log_level.into())?;

    match args.command {
        Commands::Pick { file, filter, list } => {
            let config = load_config(args.config.as_deref(), &list)?;
            pick(file.as_deref(), filter.as_deref(), config)
        }
        Commands::Filter { pattern, file } => filter(&pattern, file.as_deref()),
        Commands::Render {
            file,
            focus,
            pattern,
            list,
        } => {
            let config = load_config(args.config.as_deref(), &list)?;
            render(file.as_deref(), focus, pattern.as_deref(), config)
        }
        Commands::Completions { shell } => {
            generate(shell, &mut Args::command(), "focuslist", &mut io::stdout());
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>, overrides: &ListArgs) -> Result<ListConfig> {
    let mut config = match path {
        Some(path) => ListConfig::load(path),
        None => ListConfig::load_default(),
    }
    .context("Failed to load config")?;

    if let Some(height) = overrides.height {
        config.visible_item_count = usize::from(height);
    }
    if overrides.infinite {
        config.infinite_scroll = true;
    }

    Ok(config)
}

fn pick(file: Option<&Path>, pattern: Option<&str>, config: ListConfig) -> Result<()> {
    let items = persistence::load_items(file)?;

    let mut menu = Menu::new(items, config);
    if let Some(pattern) = pattern {
        menu.state.input = pattern.to_string();
        menu.state.update_filter_and_reset();
    }

    let mut stdout = terminal_utils::init()?;
    let result = menu.run(&mut stdout);
    terminal_utils::restore(stdout)?;

    if let Some(item) = result? {
        info!(title = %item.title, "picked");
        println!("{}", item.title);
    }

    Ok(())
}

fn filter(pattern: &str, file: Option<&Path>) -> Result<()> {
    let items = persistence::load_items(file)?;
    let mut adapter = SimpleAdapter::new(items, Default::default());
    adapter.filter(pattern);

    let mut stdout = io::stdout().lock();
    let Some(matches) = adapter.matches() else {
        // empty pattern, everything matches
        for item in adapter.items() {
            writeln!(stdout, "0\t{}", item.title)?;
        }
        return Ok(());
    };

    for m in matches {
        if let Some(item) = adapter.item_at(m.index) {
            writeln!(stdout, "{}\t{}", m.score, item.title)?;
        }
    }

    Ok(())
}

fn render(
    file: Option<&Path>,
    focus: usize,
    pattern: Option<&str>,
    config: ListConfig,
) -> Result<()> {
    let items: Vec<SimpleItem> = persistence::load_items(file)?;
    let adapter = SimpleAdapter::new(items, config.item.clone());

    let mut list = ListModel::with_config(adapter, config);
    if let Some(pattern) = pattern {
        list.filter(pattern);
    }
    list.focus();
    list.set_item_focus(focus);

    if list.adapter().is_empty() {
        info!("nothing to render");
    }
    println!("{}", list.render());

    Ok(())
}
