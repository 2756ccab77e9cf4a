// Centralized theme for the dashboard
// Warm paper background with amber sunshine accents

use ratatui::style::{Color, Modifier, Style};
use soleil_core::Category;

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// App background - warm off-white
pub const BG_APP: Color = Color::Rgb(249, 247, 244);

/// Card background for stat tiles and the feed
pub const BG_CARD: Color = Color::Rgb(255, 255, 255);

/// Row highlight for freshly arrived requests - faint amber
pub const BG_FRESH: Color = Color::Rgb(254, 246, 222);

/// Primary text - near black
pub const TEXT_PRIMARY: Color = Color::Rgb(28, 25, 23);

/// Secondary text (location labels)
pub const TEXT_SECONDARY: Color = Color::Rgb(55, 65, 81);

/// Muted text for labels, coordinates, ages
pub const TEXT_MUTED: Color = Color::Rgb(156, 163, 175);

/// Dimmed text for the footer link
pub const TEXT_DIM: Color = Color::Rgb(209, 213, 219);

/// Sunshine accent
pub const ACCENT_SUN: Color = Color::Rgb(245, 158, 11);

/// Live indicator
pub const ACCENT_LIVE: Color = Color::Rgb(34, 197, 94);

/// Quit warning
pub const ACCENT_ERROR: Color = Color::Rgb(220, 38, 38);

/// Score bar empty cells
pub const PROGRESS_EMPTY: Color = Color::Rgb(229, 231, 235);

pub const BORDER: Color = Color::Rgb(229, 231, 235);

// =============================================================================
// CATEGORY PILLS
// =============================================================================

/// (foreground, background) of a category pill
pub fn category_colors(category: Category) -> (Color, Color) {
    match category {
        Category::Top20 => (Color::Rgb(146, 64, 14), Color::Rgb(255, 251, 235)),
        Category::Map => (Color::Rgb(6, 95, 70), Color::Rgb(236, 253, 245)),
        Category::Exposed => (Color::Rgb(30, 64, 175), Color::Rgb(239, 246, 255)),
        Category::Analysis => (Color::Rgb(107, 33, 168), Color::Rgb(253, 244, 255)),
    }
}

pub fn category_pill(category: Category) -> Style {
    let (fg, bg) = category_colors(category);
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

// =============================================================================
// SCORE
// =============================================================================

/// Deeper amber for sunnier scores
pub fn score_color(score: u8) -> Color {
    if score >= 85 {
        ACCENT_SUN
    } else if score >= 70 {
        Color::Rgb(251, 191, 36)
    } else {
        Color::Rgb(252, 211, 77)
    }
}

pub fn title() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn label() -> Style {
    Style::default().fg(TEXT_MUTED)
}
