use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, FocusPanel, Selection};
use crate::contrast::{self, TextColor};

use super::colors;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.focus == FocusPanel::Preview {
        Style::default().fg(colors::BORDER_FOCUSED)
    } else {
        Style::default().fg(colors::BORDER_IDLE)
    };

    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(ref selection) = app.selection else {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "  Please select a color",
            Style::default().fg(colors::PLACEHOLDER),
        )))
        .block(block);
        f.render_widget(placeholder, area);
        return;
    };

    // Selections only hold hex codes validated at the catalog boundary, so
    // a parse fault here means a logic bug upstream; fall back to an empty
    // panel rather than crash the draw path.
    let Some((bg, fg)) = swatch_colors(selection) else {
        tracing::warn!(hex = %selection.hex, "selection held an unparseable hex code");
        f.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let swatch = Style::default().bg(bg).fg(fg);

    let pad = area.height.saturating_sub(5) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        selection.name.clone(),
        swatch.add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("#{}", selection.hex),
        swatch,
    )));
    lines.push(Line::from(Span::styled(
        format!("code {}", selection.code),
        swatch,
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(swatch)
        .block(block);
    f.render_widget(paragraph, area);
}

fn label_color(text: TextColor) -> Color {
    match text {
        TextColor::Black => Color::Black,
        TextColor::White => Color::White,
    }
}

/// Background and label colors for a selection, or None if its hex does
/// not parse.
pub fn swatch_colors(selection: &Selection) -> Option<(Color, Color)> {
    let rgb = contrast::parse_hex(&selection.hex).ok()?;
    let text = contrast::text_color(&selection.hex).ok()?;
    Some((Color::Rgb(rgb.r, rgb.g, rgb.b), label_color(text)))
}
