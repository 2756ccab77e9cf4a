mod category_bar;
mod footer;
mod header;
mod stat_cards;

pub use category_bar::render_category_bar;
pub use footer::render_footer;
pub use header::render_header;
pub use stat_cards::{render_stat_cards, stat_cards, StatCard};
