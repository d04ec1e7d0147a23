use chrono::{DateTime, Utc};

/// Display formatting helpers
pub struct Format;

impl Format {
    /// Price in rupees with thousands separators, e.g. `₹1,299`
    pub fn rupees(amount: u32) -> String {
        let digits = amount.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("₹{}", grouped.chars().rev().collect::<String>())
    }

    /// Truncate to at most `max_chars` characters, ellipsized
    pub fn truncate(s: &str, max_chars: usize) -> String {
        if s.chars().count() <= max_chars {
            s.to_string()
        } else {
            let cut: String = s.chars().take(max_chars.saturating_sub(3)).collect();
            format!("{}...", cut.trim_end())
        }
    }

    /// Short clock time for chat timestamps
    pub fn clock_time(ts: &DateTime<Utc>) -> String {
        ts.format("%H:%M").to_string()
    }

    /// Check if string is empty or whitespace only
    pub fn is_blank(s: &str) -> bool {
        s.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupees_grouping() {
        assert_eq!(Format::rupees(0), "₹0");
        assert_eq!(Format::rupees(899), "₹899");
        assert_eq!(Format::rupees(1000), "₹1,000");
        assert_eq!(Format::rupees(1234567), "₹1,234,567");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(Format::truncate("short", 10), "short");
        assert_eq!(Format::truncate("a rather long description", 10), "a rathe...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // must not panic on non-ASCII boundaries
        let s = "₹₹₹₹₹₹₹₹₹₹₹₹";
        let out = Format::truncate(s, 5);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_is_blank() {
        assert!(Format::is_blank(""));
        assert!(Format::is_blank("   \t"));
        assert!(!Format::is_blank(" x "));
    }
}
