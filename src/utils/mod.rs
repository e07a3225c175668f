/// Configuration constants for the plugin
pub mod config {
    /// Namespace used when the kubeconfig context does not name one
    pub const DEFAULT_NAMESPACE: &str = "default";

    /// Filter type used when no positional argument is given
    pub const DEFAULT_FILTER_TYPE: &str = "restart";

    /// Sort field used when `--sort-field` is not given
    pub const DEFAULT_SORT_FIELD: &str = "none";

    /// Log filter applied when `RUST_LOG` is unset
    pub const DEFAULT_LOG_FILTER: &str = "warn";

    /// Minimum width of a table cell, padding included
    pub const TABLE_MIN_WIDTH: usize = 10;

    /// Spaces added after the widest value of a column
    pub const TABLE_PADDING: usize = 5;
}

/// Utility functions for timestamps
pub mod time_utils {
    use k8s_openapi::chrono::{DateTime, Utc};

    /// Display form used when the API did not report a timestamp
    pub const UNKNOWN_TIME: &str = "<unknown>";

    /// Human-readable form of an instant, e.g. `2024-03-01 10:15:00 UTC`
    pub fn format_time(time: Option<&DateTime<Utc>>) -> String {
        match time {
            Some(time) => time.to_string(),
            None => UNKNOWN_TIME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::time_utils::*;
    use k8s_openapi::chrono::{TimeZone, Utc};

    #[test]
    fn test_format_time() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap();
        assert_eq!(format_time(Some(&time)), "2024-03-01 10:15:00 UTC");
        assert_eq!(format_time(None), "<unknown>");
    }
}
