use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::{layout, theme, App};

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let padding = " ".repeat(layout::CONTENT_PADDING_H as usize);
    let (hint, hint_style) = if app.pending_quit {
        (
            "⚠ Ctrl+C encore pour quitter",
            Style::default().fg(theme::ACCENT_ERROR),
        )
    } else {
        ("q quitter · ↑↓ défiler", Style::default().fg(theme::TEXT_DIM))
    };

    let chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(hint.chars().count() as u16 + layout::CONTENT_PADDING_H),
    ])
    .split(area);

    let live = Paragraph::new(Line::from(vec![
        Span::raw(padding.clone()),
        Span::styled(app.live_indicator(), Style::default().fg(theme::ACCENT_LIVE)),
        Span::styled(" FLUX EN DIRECT · ÎLE-DE-FRANCE", theme::label()),
    ]));
    f.render_widget(live, chunks[0]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled(hint, hint_style),
        Span::raw(padding),
    ]));
    f.render_widget(hint, chunks[1]);
}
