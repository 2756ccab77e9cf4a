use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::ui::components::{render_category_bar, render_footer, render_header, render_stat_cards};
use crate::ui::views::render_feed;
use crate::ui::{layout, theme, App};

pub(crate) fn render(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::vertical([
        Constraint::Length(layout::HEADER_HEIGHT),
        Constraint::Length(layout::STAT_CARDS_HEIGHT),
        Constraint::Length(layout::CATEGORY_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(layout::FOOTER_HEIGHT),
    ])
    .split(f.area());

    render_header(f, chunks[0], &app.snapshot);
    render_stat_cards(f, chunks[1], &app.snapshot);
    render_category_bar(f, chunks[2], &app.snapshot);
    render_feed(f, chunks[3], app);
    render_footer(f, chunks[4], app);
}
