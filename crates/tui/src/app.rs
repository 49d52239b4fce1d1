//! Application shell: state, event bus and the terminal loop.

use anyhow::Context;
use crossterm::event::{self, Event as TermEvent};
use tracing::{debug, warn};

use stocktally_events::{EventBus, InMemoryEventBus, Subscription};
use stocktally_inventory::{InventoryEvent, InventoryView};

use crate::config::Config;
use crate::input::intent_for;
use crate::intent::Intent;
use crate::reducer::reduce;
use crate::render;
use crate::state::{AppState, Focus};
use crate::terminal;

pub struct App {
    state: AppState,
    currency: String,
    bus: InMemoryEventBus<InventoryEvent>,
    feed: Subscription<InventoryEvent>,
}

impl App {
    pub fn new(currency: impl Into<String>) -> Self {
        let bus = InMemoryEventBus::new();
        let feed = bus.subscribe();
        Self {
            state: AppState::default(),
            currency: currency.into(),
            bus,
            feed,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn focus(&self) -> Focus {
        self.state.focus
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }

    /// Additional observers of the form's domain events.
    pub fn subscribe(&self) -> Subscription<InventoryEvent> {
        self.bus.subscribe()
    }

    /// View model for the next frame, derived fresh from state.
    pub fn view(&self) -> InventoryView {
        InventoryView::new(&self.state.form, &self.currency)
    }

    /// Run one intent through the reducer and announce what changed.
    pub fn dispatch(&mut self, intent: Intent) {
        debug!(?intent, "dispatch");
        for event in reduce(&mut self.state, intent) {
            if let Err(err) = self.bus.publish(event) {
                warn!(error = %err, "failed to publish inventory event");
            }
        }

        for event in self.feed.drain() {
            self.state.status = Some(describe(&event));
        }
    }
}

fn describe(event: &InventoryEvent) -> String {
    match event {
        InventoryEvent::ItemAdded(e) => format!("Added {}", e.name),
        InventoryEvent::ItemRemoved(e) => format!("Removed {}", e.name),
    }
}

/// Run the calculator until the user quits.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let (mut term, _guard) = terminal::setup().context("failed to set up terminal")?;
    let mut app = App::new(config.currency.clone());

    while !app.should_quit() {
        term.draw(|frame| render::draw(frame, &app))
            .context("failed to draw frame")?;

        if let TermEvent::Key(key) = event::read().context("failed to read terminal event")? {
            if let Some(intent) = intent_for(key, app.focus()) {
                app.dispatch(intent);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocktally_events::Event;

    fn submit_row(app: &mut App, stock: &str, price: &str) {
        for ch in stock.chars() {
            app.dispatch(Intent::Insert(ch));
        }
        app.dispatch(Intent::FocusNext);
        for ch in price.chars() {
            app.dispatch(Intent::Insert(ch));
        }
        app.dispatch(Intent::Submit);
        app.dispatch(Intent::FocusPrev);
    }

    #[test]
    fn status_line_follows_the_bus() {
        let mut app = App::new("$");
        submit_row(&mut app, "10", "2.50");
        assert_eq!(app.state().status.as_deref(), Some("Added Item 1"));

        app.dispatch(Intent::RemoveSelected);
        assert_eq!(app.state().status.as_deref(), Some("Added Item 1"));

        app.dispatch(Intent::FocusPrev);
        assert_eq!(app.focus(), Focus::Table);
        app.dispatch(Intent::Submit);
        assert_eq!(app.state().status.as_deref(), Some("Removed Item 1"));
    }

    #[test]
    fn external_observers_receive_events() {
        let mut app = App::new("$");
        let observer = app.subscribe();
        submit_row(&mut app, "1", "1");

        let events = observer.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "inventory.line_item.added");
    }

    #[test]
    fn view_uses_configured_currency() {
        let mut app = App::new("£");
        submit_row(&mut app, "4", "1.25");
        let view = app.view();
        assert_eq!(view.total, "£5.00");
        assert_eq!(view.rows[0].price, "£1.25");
    }
}
