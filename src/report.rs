// Console report formatting.
// Builds the table-like status lines and relative publish times printed per repository.

use std::path::Path;

use chrono::{DateTime, TimeDelta, Utc};

use crate::locator::RepositoryRef;

/// Format a publish timestamp relative to `now` (e.g., "3 days ago").
///
/// Anything older than 30 days is counted in 30-day months. Timestamps in
/// the future count as zero hours. Timestamps that are not RFC 3339 are
/// returned unchanged.
pub fn format_relative_time(published_at: &str, now: DateTime<Utc>) -> String {
    let Ok(published) = DateTime::parse_from_rfc3339(published_at) else {
        return published_at.to_string();
    };

    let duration = now
        .signed_duration_since(published.with_timezone(&Utc))
        .max(TimeDelta::zero());
    let days = duration.num_days();

    if days > 30 {
        format!("{} months ago", days / 30)
    } else if days > 0 {
        format!("{} days ago", days)
    } else {
        format!("{} hours ago", duration.num_hours())
    }
}

/// Table header printed once before any repository.
pub fn header_line() -> String {
    "| repo: | Latest Release:  | date:  |".to_string()
}

/// Status line for one repository with a found release.
pub fn status_line(repo: &RepositoryRef, tag: &str, relative_date: &str) -> String {
    format!(
        "| repo: {} | Latest Release: {} | date: {} |",
        repo, tag, relative_date
    )
}

/// Horizontal rule as wide as `line`.
pub fn rule_for(line: &str) -> String {
    "-".repeat(line.chars().count())
}

/// Notice printed when the tag differs from the cached one.
pub fn update_notice(repo: &RepositoryRef, tag: &str) -> String {
    format!("Update found for {}: {}", repo, tag)
}

/// Notice printed when the repository list file does not exist.
pub fn missing_input_notice(path: &Path) -> String {
    format!(
        "The file '{}' does not exist. Please create it and add GitHub repository URLs into it.",
        path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_relative_hours() {
        assert_eq!(format_relative_time("2024-06-01T07:00:00Z", now()), "5 hours ago");
        assert_eq!(format_relative_time("2024-06-01T11:59:00Z", now()), "0 hours ago");
    }

    #[test]
    fn test_relative_days() {
        assert_eq!(format_relative_time("2024-05-29T12:00:00Z", now()), "3 days ago");
        assert_eq!(format_relative_time("2024-05-02T12:00:00Z", now()), "30 days ago");
    }

    #[test]
    fn test_relative_months() {
        assert_eq!(format_relative_time("2024-05-01T12:00:00Z", now()), "1 months ago");
        assert_eq!(format_relative_time("2024-01-01T00:00:00Z", now()), "5 months ago");
    }

    #[test]
    fn test_relative_offset_timestamp() {
        assert_eq!(
            format_relative_time("2024-06-01T09:00:00+02:00", now()),
            "5 hours ago"
        );
    }

    #[test]
    fn test_relative_future_clamps_to_zero() {
        assert_eq!(format_relative_time("2024-06-01T15:00:00Z", now()), "0 hours ago");
        assert_eq!(format_relative_time("2024-07-01T12:00:00Z", now()), "0 hours ago");
    }

    #[test]
    fn test_relative_unparseable() {
        assert_eq!(format_relative_time("yesterday", now()), "yesterday");
        assert_eq!(format_relative_time("", now()), "");
    }

    #[test]
    fn test_status_line_and_rule() {
        let repo = RepositoryRef::new("acme", "widget");
        let line = status_line(&repo, "v1.2.0", "3 days ago");

        assert_eq!(
            line,
            "| repo: acme/widget | Latest Release: v1.2.0 | date: 3 days ago |"
        );
        assert_eq!(rule_for(&line).len(), line.len());
        assert_eq!(
            update_notice(&repo, "v1.2.0"),
            "Update found for acme/widget: v1.2.0"
        );
    }
}
