use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Print, Stylize},
    terminal::{Clear, ClearType},
};

use crate::list::Adapter;
use crate::menu::state::{MenuMode, MenuState};

const HELP_HINT: &str = "C-h: Help | Esc: Quit";

const HELP_TEXT: [&str; 11] = [
    "Navigation",
    "  ↑/C-p      → Previous item",
    "  ↓/C-n/S-Tab → Next item",
    "  Home/End   → First/last item",
    "  PgUp/PgDn  → Scroll one page",
    "",
    "Selection",
    "  Enter      → Show details, Enter again to pick",
    "  Esc        → Close details / quit",
    "  C-w        → Delete last word",
    "  C-h        → Toggle help",
];

pub trait MenuRenderer {
    fn draw<W: Write>(&mut self, out: &mut W, state: &MenuState) -> io::Result<()>;
}

pub struct DefaultMenuRenderer;

impl MenuRenderer for DefaultMenuRenderer {
    fn draw<W: Write>(&mut self, out: &mut W, state: &MenuState) -> io::Result<()> {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

        let adapter = state.list.adapter();
        let counter = format!(
            "  {}/{}",
            adapter.len(),
            adapter.original_item_len()
        );
        queue!(
            out,
            Print(format!("> {}", state.input).green()),
            Print(counter.dark_grey()),
        )?;

        let mut row: u16 = 2;
        match state.mode {
            MenuMode::HelpPopup => {
                for line in HELP_TEXT {
                    queue!(out, MoveTo(0, row), Print(line))?;
                    row = row.saturating_add(1);
                }
            }
            MenuMode::Normal => {
                let mut body = state.list.render();
                if body.is_empty() {
                    body = "  No results...".dark_grey().to_string();
                }

                for line in body.lines() {
                    queue!(out, MoveTo(0, row), Print(line))?;
                    row = row.saturating_add(1);
                }
            }
        }

        queue!(
            out,
            MoveTo(0, row.saturating_add(1)),
            Print(HELP_HINT.dark_grey())
        )?;

        out.flush()
    }
}
