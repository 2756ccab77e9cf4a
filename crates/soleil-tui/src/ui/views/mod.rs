mod feed;

pub use feed::{render_feed, visible_rows};
