use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use soleil_core::{Request, Snapshot};

use crate::ui::format::{format_elapsed, score_cells, truncate_with_ellipsis};
use crate::ui::{layout, theme, App};

/// Number of whole rows that fit in `height` lines.
pub fn visible_rows(height: u16) -> usize {
    (height / layout::FEED_ROW_HEIGHT) as usize
}

pub fn render_feed(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(layout::COLUMN_HEADER_HEIGHT),
        Constraint::Min(0),
    ])
    .split(area);

    render_column_headers(f, chunks[0]);

    let rows_area = chunks[1];
    let snapshot = &app.snapshot;
    let mut y = rows_area.y;
    for request in snapshot
        .requests
        .iter()
        .skip(app.scroll_offset)
        .take(visible_rows(rows_area.height))
    {
        let row = Rect {
            y,
            height: layout::FEED_ROW_HEIGHT,
            ..rows_area
        };
        render_row(f, row, request, snapshot);
        y += layout::FEED_ROW_HEIGHT;
    }
}

fn columns(area: Rect) -> [Rect; 3] {
    let inner = Rect {
        x: area.x + layout::CONTENT_PADDING_H,
        width: area.width.saturating_sub(layout::CONTENT_PADDING_H * 2),
        ..area
    };
    let chunks = Layout::horizontal([
        Constraint::Length(layout::FEED_LABEL_WIDTH),
        Constraint::Min(0),
        Constraint::Length(layout::FEED_AGE_WIDTH),
    ])
    .spacing(1)
    .split(inner);
    [chunks[0], chunks[1], chunks[2]]
}

fn render_column_headers(f: &mut Frame, area: Rect) {
    let [label, bar, _] = columns(area);
    let style = theme::label().add_modifier(Modifier::BOLD);
    f.render_widget(Paragraph::new(Span::styled("REQUÊTE", style)), label);
    f.render_widget(Paragraph::new(Span::styled("EXPOSITION SOLAIRE", style)), bar);
}

fn render_row(f: &mut Frame, area: Rect, request: &Request, snapshot: &Snapshot) {
    let bg = if snapshot.is_fresh(request.id) {
        theme::BG_FRESH
    } else {
        theme::BG_CARD
    };
    f.render_widget(Paragraph::new("").style(Style::default().bg(bg)), area);

    let [label_area, bar_area, age_area] = columns(area);

    let label = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {} ", request.category.label()),
            theme::category_pill(request.category),
        )),
        Line::from(Span::styled(
            truncate_with_ellipsis(request.location_label(), label_area.width as usize),
            Style::default()
                .fg(theme::TEXT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            request.coordinates.to_string(),
            Style::default().fg(theme::TEXT_MUTED),
        )),
    ]);
    f.render_widget(label, label_area);

    let bar_width = bar_area.width.saturating_sub(layout::SCORE_TEXT_WIDTH) as usize;
    let filled = score_cells(request.score, bar_width);
    let score_color = theme::score_color(request.score);
    let bar = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("━".repeat(filled), Style::default().fg(score_color)),
            Span::styled(
                "━".repeat(bar_width - filled),
                Style::default().fg(theme::PROGRESS_EMPTY),
            ),
            Span::styled(
                format!(" {}%", request.score),
                Style::default()
                    .fg(score_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ]);
    f.render_widget(bar, bar_area);

    let age = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_elapsed(snapshot.elapsed(request)),
            Style::default().fg(theme::TEXT_MUTED),
        )),
    ])
    .alignment(Alignment::Right);
    f.render_widget(age, age_area);
}
