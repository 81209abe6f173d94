//! swatch — terminal viewer for a remote color catalog.
//!
//! Fetches a list of named colors once at startup, lists them, and previews
//! the chosen one as a swatch whose label color (black or white) is picked
//! by a contrast-ratio computation.

pub mod app;
pub mod catalog;
pub mod contrast;
pub mod events;
pub mod ui;
