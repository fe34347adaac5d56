//! Utilities for date and time formatting
//!
//! Keeps timestamp rendering consistent across the dashboard tables.

use chrono::{DateTime, Utc};

/// Format a server timestamp as DD.MM.YYYY HH:MM.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%d.%m.%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let ts: DateTime<Utc> = "2025-03-15T14:02:26Z".parse().unwrap();
        assert_eq!(format_timestamp(&ts), "15.03.2025 14:02");
    }
}
