pub mod colors;
pub mod list;
pub mod preview;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::{App, SortMode};

pub fn render(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // panels
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // catalog list
            Constraint::Percentage(55), // preview swatch
        ])
        .split(outer[0]);

    list::render(f, app, panels[0]);
    preview::render(f, app, panels[1]);
    render_status_bar(f, app, outer[1]);
}

fn render_status_bar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    use ratatui::style::Style;
    use ratatui::text::{Line, Span};
    use ratatui::widgets::Paragraph;

    let status = if app.search_mode {
        Line::from(vec![
            Span::styled(" /", Style::default().fg(colors::STATUS_KEY)),
            Span::raw(app.search_query.clone()),
            Span::styled("_", Style::default().fg(colors::STATUS_KEY)),
        ])
    } else {
        Line::from(vec![
            Span::styled(" [q]", Style::default().fg(colors::STATUS_KEY)),
            Span::raw("uit "),
            Span::styled("[j/k]", Style::default().fg(colors::STATUS_KEY)),
            Span::raw("nav "),
            Span::styled("[enter]", Style::default().fg(colors::STATUS_KEY)),
            Span::raw("preview "),
            Span::styled("[/]", Style::default().fg(colors::STATUS_KEY)),
            Span::raw("search "),
            Span::styled("[s]", Style::default().fg(colors::STATUS_KEY)),
            Span::raw(match app.sort_mode {
                SortMode::CatalogOrder => "ort:api ",
                SortMode::Alphabetical => "ort:A-Z ",
            }),
            Span::styled("[tab]", Style::default().fg(colors::STATUS_KEY)),
            Span::raw("focus "),
        ])
    };

    f.render_widget(
        Paragraph::new(status).style(
            Style::default()
                .bg(colors::STATUS_BG)
                .fg(colors::STATUS_FG),
        ),
        area,
    );
}
