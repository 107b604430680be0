//! Applicant notifications.

use chrono::{DateTime, Duration, Local};

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Alert,
}

/// A notice shown in the notification panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub read: bool,
}

/// Seed notifications, timestamped relative to `now`.
pub fn seed(now: DateTime<Local>) -> Vec<Notification> {
    let entry = |id, title: &str, message: &str, age: Duration, severity, read| Notification {
        id,
        title: title.to_string(),
        message: message.to_string(),
        timestamp: now - age,
        severity,
        read,
    };

    vec![
        entry(
            1,
            "Application Status Update",
            "Your application is now in review stage",
            Duration::hours(2),
            Severity::Info,
            false,
        ),
        entry(
            2,
            "Document Upload Required",
            "Please upload your ID document to continue",
            Duration::days(1),
            Severity::Warning,
            false,
        ),
        entry(
            3,
            "Payment Reminder",
            "Your payment is due in 3 days",
            Duration::days(2),
            Severity::Alert,
            true,
        ),
        entry(
            4,
            "RTO Alert",
            "7000+ qualifications cancelled – check yours now!",
            Duration::days(3),
            Severity::Alert,
            false,
        ),
        entry(
            5,
            "Welcome to Career Bridge",
            "Complete your profile to get started",
            Duration::weeks(1),
            Severity::Info,
            false,
        ),
    ]
}

/// Count of unread notifications, shown as the bell badge.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// Render the age of `timestamp` as "2 hours ago", "1 day ago", ...
pub fn relative_time(timestamp: DateTime<Local>, now: DateTime<Local>) -> String {
    let age = now - timestamp;

    let (count, unit) = if age.num_weeks() >= 1 {
        (age.num_weeks(), "week")
    } else if age.num_days() >= 1 {
        (age.num_days(), "day")
    } else if age.num_hours() >= 1 {
        (age.num_hours(), "hour")
    } else if age.num_minutes() >= 1 {
        (age.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };

    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_unread_count() {
        let list = seed(Local::now());
        assert_eq!(list.len(), 5);
        assert_eq!(unread_count(&list), 4);
    }

    #[test]
    fn test_seed_ids_unique() {
        let list = seed(Local::now());
        let ids: HashSet<u32> = list.iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn test_relative_time_of_seed() {
        let now = Local::now();
        let labels: Vec<String> = seed(now).iter().map(|n| relative_time(n.timestamp, now)).collect();
        assert_eq!(labels, vec!["2 hours ago", "1 day ago", "2 days ago", "3 days ago", "1 week ago"]);
    }

    #[test]
    fn test_relative_time_recent() {
        let now = Local::now();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_time(now - Duration::minutes(45), now), "45 minutes ago");
    }
}
