use std::time::Duration;

/// Truncate string to a max length, adding an ellipsis when truncated.
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    if s.chars().count() <= max_len {
        return s.to_string();
    }

    if max_len <= 3 {
        return ".".repeat(max_len);
    }

    let take = max_len - 3;
    let mut truncated: String = s.chars().take(take).collect();
    truncated.push_str("...");
    truncated
}

/// Relative age label for a feed row ("maintenant", "42s", "3 min", "2h").
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();

    if secs < 10 {
        "maintenant".to_string()
    } else if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{} min", secs / 60)
    } else {
        format!("{}h", secs / 3600)
    }
}

/// Group thousands with a space, French style ("12 345").
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

pub fn format_rate(rate: f64) -> String {
    format!("{:.1}/s", rate)
}

/// Filled cells of a `width`-cell bar for a percentage score.
pub fn score_cells(score: u8, width: usize) -> usize {
    ((score.min(100) as usize * width) + 50) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_buckets() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "maintenant");
        assert_eq!(format_elapsed(Duration::from_secs(9)), "maintenant");
        assert_eq!(format_elapsed(Duration::from_secs(10)), "10s");
        assert_eq!(format_elapsed(Duration::from_secs(59)), "59s");
        assert_eq!(format_elapsed(Duration::from_secs(60)), "1 min");
        assert_eq!(format_elapsed(Duration::from_secs(3599)), "59 min");
        assert_eq!(format_elapsed(Duration::from_secs(3600)), "1h");
        assert_eq!(format_elapsed(Duration::from_secs(7500)), "2h");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(9), "9");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1 000");
        assert_eq!(format_count(1234567), "1 234 567");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.0), "0.0/s");
        assert_eq!(format_rate(2.0), "2.0/s");
        assert_eq!(format_rate(0.3), "0.3/s");
    }

    #[test]
    fn test_score_cells() {
        assert_eq!(score_cells(0, 20), 0);
        assert_eq!(score_cells(50, 20), 10);
        assert_eq!(score_cells(62, 20), 12);
        assert_eq!(score_cells(98, 20), 20);
        assert_eq!(score_cells(100, 0), 0);
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Buttes-Chaumont", 20), "Buttes-Chaumont");
        assert_eq!(truncate_with_ellipsis("Buttes-Chaumont", 8), "Butte...");
        assert_eq!(truncate_with_ellipsis("Buttes-Chaumont", 2), "..");
        assert_eq!(truncate_with_ellipsis("Café", 0), "");
    }
}
