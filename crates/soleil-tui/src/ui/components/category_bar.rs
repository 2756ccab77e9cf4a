use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use soleil_core::{Category, Snapshot};

use crate::ui::theme;

/// One column per category: colored tag, then its count in the history.
pub fn render_category_bar(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let chunks = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for (category, chunk) in Category::ALL.iter().zip(chunks.iter()) {
        let (fg, _) = theme::category_colors(*category);
        let cell = Paragraph::new(vec![
            Line::from(Span::styled(
                category.label(),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                snapshot.count(*category).to_string(),
                theme::title(),
            )),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme::BG_CARD));
        f.render_widget(cell, *chunk);
    }
}
