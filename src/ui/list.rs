use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::{App, FocusPanel};
use crate::contrast;

use super::colors;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.focus == FocusPanel::List {
        Style::default().fg(colors::BORDER_FOCUSED)
    } else {
        Style::default().fg(colors::BORDER_IDLE)
    };

    let title = match app.catalog {
        Some(ref catalog) => format!(" Colors ({}) ", catalog.len()),
        None => " Colors ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    // Unloaded (still fetching, or the fetch failed): placeholder only,
    // never a partial list.
    if app.catalog.is_none() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "  Loading colors...",
            Style::default().fg(colors::PLACEHOLDER),
        )))
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = app
        .visible_records()
        .iter()
        .map(|record| {
            let mut spans = vec![Span::raw(" ")];
            if let Ok(rgb) = contrast::parse_hex(&record.hex_code) {
                spans.push(Span::styled(
                    "██ ",
                    Style::default().fg(Color::Rgb(rgb.r, rgb.g, rgb.b)),
                ));
            }
            spans.push(Span::raw(record.name.clone()));
            spans.push(Span::styled(
                format!("  #{}", record.hex_code),
                Style::default().fg(colors::LABEL_DIM),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(colors::HIGHLIGHT_BG)
            .fg(colors::HIGHLIGHT_FG)
            .add_modifier(Modifier::BOLD),
    );

    f.render_stateful_widget(list, area, &mut state);
}
