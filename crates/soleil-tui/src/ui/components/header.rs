use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use soleil_core::Snapshot;

use crate::ui::{layout, theme};

/// Brand on the left, local wall clock on the right.
pub fn render_header(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let padding = " ".repeat(layout::CONTENT_PADDING_H as usize);
    let clock = snapshot.wall_clock.format("%H:%M:%S").to_string();

    let chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(clock.len() as u16 + layout::CONTENT_PADDING_H),
    ])
    .split(area);

    let brand = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(padding.clone()),
            Span::styled("☀ ", Style::default().fg(theme::ACCENT_SUN)),
            Span::styled("TERRASSES SOLEIL", theme::title()),
        ]),
        Line::from(vec![
            Span::raw(padding),
            Span::styled("REQUÊTES EN DIRECT · PARIS", theme::label()),
        ]),
    ]);
    f.render_widget(brand, chunks[0]);

    let clock = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}{}", clock, " ".repeat(layout::CONTENT_PADDING_H as usize)),
            Style::default()
                .fg(theme::ACCENT_SUN)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Right);
    f.render_widget(clock, chunks[1]);
}
