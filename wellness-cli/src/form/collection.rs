use super::notification::{Dismissal, NotificationSurface};
use crate::api::ApiError;

/// Client-side copy of a remote list. Every refresh replaces it whole.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append locally without asking the server
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Apply the result of a full fetch. A failed fetch keeps the previous list.
    pub fn apply(
        &mut self,
        result: Result<Vec<T>, ApiError>,
        notifications: &mut NotificationSurface,
        failure_message: &str,
        dismissal: Dismissal,
    ) -> bool {
        match result {
            Ok(items) => {
                tracing::debug!("Collection refreshed with {} items", items.len());
                self.items = items;
                true
            }
            Err(e) => {
                tracing::warn!("{}: {}", failure_message, e);
                let message = match e {
                    ApiError::NotLoggedIn => "Please log in first.".to_string(),
                    _ => failure_message.to_string(),
                };
                notifications.error(message, dismissal);
                false
            }
        }
    }
}
