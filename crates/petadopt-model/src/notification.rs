//! Notification entries shown in the notifications panel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Adoption,
    Reminder,
}

/// A run of notification text; `strong` runs are rendered emphasised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSpan {
    pub text: String,
    #[serde(default)]
    pub strong: bool,
}

impl MessageSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: false,
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub body: Vec<MessageSpan>,
    pub received_at: DateTime<Utc>,
    /// Whether the entry leads somewhere (rendered with a chevron).
    pub actionable: bool,
}

impl Notification {
    /// The body as plain text, emphasis dropped.
    pub fn plain_text(&self) -> String {
        self.body.iter().map(|span| span.text.as_str()).collect()
    }

    /// Age label such as "2 min ago", relative to `now`.
    pub fn relative_age(&self, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(self.received_at);
        let minutes = elapsed.num_minutes();
        if minutes < 1 {
            "just now".to_string()
        } else if minutes < 60 {
            format!("{minutes} min ago")
        } else if elapsed.num_hours() < 24 {
            format!("{} h ago", elapsed.num_hours())
        } else {
            format!("{} d ago", elapsed.num_days())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn notification(received_at: DateTime<Utc>) -> Notification {
        Notification {
            id: NotificationId(1),
            kind: NotificationKind::Reminder,
            title: "Reminder".to_string(),
            body: vec![
                MessageSpan::plain("Confirm completion of adoption with "),
                MessageSpan::strong("ID: 10927"),
            ],
            received_at,
            actionable: true,
        }
    }

    #[test]
    fn test_relative_age_buckets() {
        let now = Utc::now();
        assert_eq!(notification(now).relative_age(now), "just now");
        assert_eq!(
            notification(now - Duration::minutes(2)).relative_age(now),
            "2 min ago"
        );
        assert_eq!(
            notification(now - Duration::hours(3)).relative_age(now),
            "3 h ago"
        );
        assert_eq!(
            notification(now - Duration::days(2)).relative_age(now),
            "2 d ago"
        );
    }

    #[test]
    fn test_plain_text_joins_spans() {
        let n = notification(Utc::now());
        assert_eq!(n.plain_text(), "Confirm completion of adoption with ID: 10927");
    }
}
