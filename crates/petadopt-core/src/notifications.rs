use chrono::{DateTime, Utc};
use petadopt_model::{Notification, NotificationId};
use tracing::debug;

use crate::mock_data;

pub const EMPTY_FEED_MESSAGE: &str = "You're all caught up!";

#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self::new(mock_data::notifications(now))
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove one entry; returns whether it existed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            debug!(id = id.0, "notification dismissed");
        }
        removed
    }

    pub fn clear_all(&mut self) {
        debug!(count = self.items.len(), "notifications cleared");
        self.items.clear();
    }
}
