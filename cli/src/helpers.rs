//! Input validation and display helpers.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Check that an email has a local part, exactly one `@`, and a dotted
/// domain. Deliberately loose; the server performs the real validation.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Check a password against the server's registration rules.
///
/// Returns every broken rule so the user can fix them all at once.
pub fn validate_password(password: &str) -> Vec<&'static str> {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one number");
    }

    errors
}

/// Parse a server timestamp, accepting RFC 3339 or a bare ISO datetime
/// without zone (treated as UTC).
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Render a timestamp the way the dashboard does: "Just now", then
/// minutes/hours/days ago, then an absolute date past 30 days.
///
/// Unparseable input is returned unchanged.
pub fn format_relative_time(value: &str) -> String {
    let Some(timestamp) = parse_timestamp(value) else {
        return value.to_string();
    };
    let seconds = (Utc::now() - timestamp).num_seconds();

    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3600 {
        format!("{} minutes ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{} hours ago", seconds / 3600)
    } else if seconds < 2592000 {
        format!("{} days ago", seconds / 86400)
    } else {
        format_date(value)
    }
}

/// Render a timestamp as a short date, e.g. "Aug 25, 2026".
///
/// Unparseable input is returned unchanged.
pub fn format_date(value: &str) -> String {
    match parse_timestamp(value) {
        Some(timestamp) => timestamp.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_validate_email_accepts_plain_addresses() {
        assert!(validate_email("casey@example.com"));
        assert!(validate_email("first.last@sub.example.co"));
    }

    #[test]
    fn test_validate_email_rejects_malformed_addresses() {
        assert!(!validate_email(""));
        assert!(!validate_email("casey"));
        assert!(!validate_email("casey@"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("casey@example"));
        assert!(!validate_email("casey@.com"));
        assert!(!validate_email("casey@example."));
        assert!(!validate_email("ca sey@example.com"));
        assert!(!validate_email("casey@exa@mple.com"));
    }

    #[test]
    fn test_validate_password_collects_every_broken_rule() {
        let errors = validate_password("abc");
        assert_eq!(
            errors,
            vec![
                "Password must be at least 8 characters long",
                "Password must contain at least one uppercase letter",
                "Password must contain at least one number",
            ]
        );
    }

    #[test]
    fn test_validate_password_accepts_conforming_password() {
        assert!(validate_password("Sledding4Fun").is_empty());
    }

    #[test]
    fn test_validate_password_requires_lowercase() {
        assert_eq!(
            validate_password("UPPERCASE1"),
            vec!["Password must contain at least one lowercase letter"]
        );
    }

    #[test]
    fn test_relative_time_buckets() {
        let stamp = |delta: Duration| (Utc::now() - delta).to_rfc3339();

        assert_eq!(format_relative_time(&stamp(Duration::seconds(10))), "Just now");
        assert_eq!(
            format_relative_time(&stamp(Duration::minutes(5))),
            "5 minutes ago"
        );
        assert_eq!(
            format_relative_time(&stamp(Duration::hours(3))),
            "3 hours ago"
        );
        assert_eq!(
            format_relative_time(&stamp(Duration::days(12))),
            "12 days ago"
        );
    }

    #[test]
    fn test_relative_time_falls_back_to_date_after_a_month() {
        let old = (Utc::now() - Duration::days(60)).to_rfc3339();
        let rendered = format_relative_time(&old);
        assert!(
            rendered.contains(','),
            "older timestamps should render as a date: {}",
            rendered
        );
    }

    #[test]
    fn test_relative_time_accepts_naive_datetimes() {
        // Some endpoints serialize without a zone suffix.
        assert_eq!(
            format_relative_time("2099-01-01T00:00:00.000"),
            "Just now",
            "future timestamps clamp to Just now"
        );
    }

    #[test]
    fn test_unparseable_timestamp_passes_through() {
        assert_eq!(format_relative_time("yesterday-ish"), "yesterday-ish");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-08-05T09:30:00Z"), "Aug 5, 2026");
    }
}
