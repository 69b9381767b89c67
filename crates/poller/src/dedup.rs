//! Duplicate suppression for outgoing notifications.
//!
//! Holds a single "last sent" slot. A candidate goes out only if its text
//! differs from the last message actually delivered; the slot is replaced
//! only on delivery, so a failed send is retried on the next iteration.

/// Single-slot filter keyed by exact message text.
#[derive(Debug, Default)]
pub struct DuplicateFilter {
    last_sent: Option<String>,
}

impl DuplicateFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `candidate` differs from the last delivered message.
    pub fn should_send(&self, candidate: &str) -> bool {
        self.last_sent.as_deref() != Some(candidate)
    }

    /// Remember `message` as the last delivered notification.
    pub fn record_sent(&mut self, message: String) {
        self.last_sent = Some(message);
    }

    pub fn last_sent(&self) -> Option<&str> {
        self.last_sent.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_always_sent() {
        assert!(DuplicateFilter::new().should_send("anything"));
    }

    #[test]
    fn test_identical_message_suppressed_until_change() {
        let mut filter = DuplicateFilter::new();
        filter.record_sent("error A".to_string());

        assert!(!filter.should_send("error A"));
        assert!(filter.should_send("error B"));

        filter.record_sent("error B".to_string());
        assert!(filter.should_send("error A"));
        assert_eq!(filter.last_sent(), Some("error B"));
    }
}
