use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::style::Color;
use ratatui::Terminal;

use swatch::app::App;
use swatch::catalog::parse_catalog;

/// Build a wrapped `{"colors":[...]}` payload from (name, hex, code) triples.
pub fn wrapped_payload(entries: &[(&str, &str, &str)]) -> String {
    format!(r#"{{"colors":{}}}"#, bare_payload(entries))
}

/// Build a bare-array payload from (name, hex, code) triples.
pub fn bare_payload(entries: &[(&str, &str, &str)]) -> String {
    let records: Vec<String> = entries
        .iter()
        .map(|(name, hex, code)| {
            format!(r#"{{"name":"{name}","hex_code":"{hex}","color_code":"{code}"}}"#)
        })
        .collect();
    format!("[{}]", records.join(","))
}

/// An App with the given payload already parsed and installed.
pub fn loaded_app(payload: &str) -> App {
    let mut app = App::new();
    app.set_catalog(parse_catalog(payload).unwrap());
    app
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Render the full UI into a test terminal.
pub fn draw(app: &App) -> Terminal<TestBackend> {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| swatch::ui::render(f, app)).unwrap();
    terminal
}

/// The whole buffer as one newline-joined string.
pub fn buffer_text(backend: &TestBackend) -> String {
    let buf = backend.buffer();
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Foreground and background of the first cell that starts `text`.
pub fn cell_colors_of(backend: &TestBackend, text: &str) -> Option<(Color, Color)> {
    let buf = backend.buffer();
    for y in 0..buf.area.height {
        let row: String = (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect();
        if let Some(col) = row.find(text) {
            let cell = &buf[(col as u16, y)];
            return Some((cell.fg, cell.bg));
        }
    }
    None
}
