use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use crate::catalog::{Catalog, CatalogSource};

/// Unified application event.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    CatalogLoaded(Catalog),
    Tick,
}

/// Spawn a thread that polls crossterm key events and sends them to the channel.
pub fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    std::thread::spawn(move || loop {
        if event::poll(Duration::from_millis(50)).unwrap_or(false) {
            if let Ok(Event::Key(key)) = event::read() {
                if tx.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });
}

/// Spawn a tick timer that sends Tick events at the given interval.
pub fn spawn_tick_timer(tx: mpsc::Sender<AppEvent>, interval: Duration) {
    std::thread::spawn(move || loop {
        std::thread::sleep(interval);
        if tx.send(AppEvent::Tick).is_err() {
            break;
        }
    });
}

/// Spawn the one-shot catalog fetch. On success the catalog arrives as an
/// event; on any fault (transport, status, decode) the error is logged and
/// nothing is sent, leaving the catalog unloaded and the UI on its loading
/// placeholder. No retry.
pub fn spawn_catalog_fetcher(tx: mpsc::Sender<AppEvent>, source: CatalogSource) {
    std::thread::spawn(move || match source.load() {
        Ok(catalog) => {
            tracing::debug!(records = catalog.len(), "catalog loaded");
            let _ = tx.send(AppEvent::CatalogLoaded(catalog));
        }
        Err(err) => {
            tracing::warn!(%err, "catalog fetch failed, staying unloaded");
        }
    });
}
