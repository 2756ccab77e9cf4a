// Layout constants shared by the dashboard components

/// Horizontal padding for content areas
pub const CONTENT_PADDING_H: u16 = 2;

/// Title, subtitle and clock
pub const HEADER_HEIGHT: u16 = 3;

/// Stat tiles (value + label inside a border)
pub const STAT_CARDS_HEIGHT: u16 = 4;

/// Per-category counts
pub const CATEGORY_BAR_HEIGHT: u16 = 2;

pub const COLUMN_HEADER_HEIGHT: u16 = 1;

/// Pill, location and coordinates
pub const FEED_ROW_HEIGHT: u16 = 3;

pub const FOOTER_HEIGHT: u16 = 1;

/// Left column of a feed row
pub const FEED_LABEL_WIDTH: u16 = 28;

/// Right column of a feed row (age)
pub const FEED_AGE_WIDTH: u16 = 11;

/// Score text after the bar ("98%")
pub const SCORE_TEXT_WIDTH: u16 = 5;
