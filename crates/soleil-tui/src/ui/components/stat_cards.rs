use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};
use soleil_core::Snapshot;

use crate::ui::format::{format_count, format_rate};
use crate::ui::{layout, theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub sub: &'static str,
}

/// TOTAL, ACTIF, DÉBIT and SOLEIL tiles for a snapshot.
pub fn stat_cards(snapshot: &Snapshot) -> [StatCard; 4] {
    [
        StatCard {
            label: "TOTAL",
            value: format_count(snapshot.total),
            sub: "requêtes",
        },
        StatCard {
            label: "ACTIF",
            value: snapshot.active().to_string(),
            sub: "en mémoire",
        },
        StatCard {
            label: "DÉBIT",
            value: format_rate(snapshot.rate),
            sub: "moy. 1 min",
        },
        StatCard {
            label: "SOLEIL",
            value: format!("{}%", snapshot.average_score),
            sub: "score moyen",
        },
    ]
}

pub fn render_stat_cards(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let inner = Rect {
        x: area.x + layout::CONTENT_PADDING_H,
        width: area.width.saturating_sub(layout::CONTENT_PADDING_H * 2),
        ..area
    };
    let cards = stat_cards(snapshot);
    let chunks = Layout::horizontal([Constraint::Ratio(1, 4); 4])
        .spacing(1)
        .split(inner);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::BORDER))
            .style(Style::default().bg(theme::BG_APP));
        let tile = Paragraph::new(vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(card.label, theme::label().add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {}", card.sub), Style::default().fg(theme::TEXT_DIM)),
            ]),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(tile, *chunk);
    }
}
