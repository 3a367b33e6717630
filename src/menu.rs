//! Interactive picker built on top of the list widget.

pub mod action;
pub mod action_dispatcher;
pub mod event_handler;
pub mod renderer;
pub mod state;

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use crossterm::event;
use tracing::info;

use crate::config::ListConfig;
use crate::list::SimpleItem;
use crate::menu::{
    action_dispatcher::{ActionDispatcher, DefaultActionDispatcher},
    event_handler::{DefaultEventHandler, EventHandler},
    renderer::{DefaultMenuRenderer, MenuRenderer},
    state::MenuState,
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct Menu<H, D, R>
where
    H: EventHandler,
    D: ActionDispatcher,
    R: MenuRenderer,
{
    pub state: MenuState,

    event_handler: H,
    action_dispatcher: D,
    renderer: R,
}

impl Menu<DefaultEventHandler, DefaultActionDispatcher, DefaultMenuRenderer> {
    pub fn new(items: Vec<SimpleItem>, config: ListConfig) -> Self {
        Self::with_components(
            MenuState::new(items, config),
            DefaultEventHandler,
            DefaultActionDispatcher,
            DefaultMenuRenderer,
        )
    }
}

impl<H, D, R> Menu<H, D, R>
where
    H: EventHandler,
    D: ActionDispatcher,
    R: MenuRenderer,
{
    pub fn with_components(
        state: MenuState,
        event_handler: H,
        action_dispatcher: D,
        renderer: R,
    ) -> Self {
        Self {
            state,
            event_handler,
            action_dispatcher,
            renderer,
        }
    }

    /// Runs until the user picks an item or quits.
    ///
    /// Returns the picked item, `None` if the menu was left without one.
    pub fn run(&mut self, out: &mut impl Write) -> Result<Option<SimpleItem>> {
        info!(
            items = self.state.list.adapter().original_item_len(),
            "menu started"
        );

        self.renderer.draw(out, &self.state)?;
        while !self.state.should_exit {
            if self.handle_events()? {
                self.renderer.draw(out, &self.state)?;
            }
        }

        Ok(self.state.selection.take())
    }

    /// Returns whether an event arrived and the screen needs a redraw.
    fn handle_events(&mut self) -> Result<bool> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(false);
        }

        let action =
            self.event_handler.handle_event(event::read()?, &self.state);
        self.action_dispatcher.dispatch(action, &mut self.state);

        Ok(true)
    }
}
