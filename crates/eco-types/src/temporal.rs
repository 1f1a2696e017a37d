use chrono::{DateTime, Utc};

/// Human-readable age of a timestamp relative to `now`, as shown on feed
/// cards: `"Just now"`, `"5h ago"`, `"Yesterday"`, `"3d ago"`, or the
/// calendar date (`M/D/YYYY`) for anything older than a week.
///
/// The distance is absolute, so timestamps slightly in the future (clock
/// skew) are labelled like recent ones.
pub fn relative_label(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - then).abs();
    let days = elapsed.num_days();
    let hours = elapsed.num_hours();

    match days {
        0 if hours == 0 => "Just now".to_string(),
        0 => format!("{hours}h ago"),
        1 => "Yesterday".to_string(),
        2..=7 => format!("{days}d ago"),
        _ => then.format("%-m/%-d/%Y").to_string(),
    }
}
