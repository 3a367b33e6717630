use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

/// Puts the terminal in raw mode on the alternate screen with the cursor
/// hidden.
///
/// Returns the handle that must later be passed to [`restore`].
pub fn init() -> Result<Stdout> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    Ok(stdout)
}

/// Restores the terminal to its normal mode and leaves the alternate screen.
pub fn restore(mut stdout: Stdout) -> Result<()> {
    disable_raw_mode()?;
    execute!(stdout, Show, LeaveAlternateScreen)?;
    Ok(())
}
