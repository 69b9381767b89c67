//! Notification delivery to the single configured recipient.
//!
//! `MessageSender` is the transport seam (Telegram in production, fakes in
//! tests). `Notifier` wraps it for the poll loop: delivery failures are logged
//! and reported as `false`, never propagated.

pub mod telegram;

use async_trait::async_trait;

use review_common::error::AppError;

/// Transport capable of sending a text message to a recipient.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), AppError>;
}

/// Delivers messages to one recipient through a `MessageSender`.
pub struct Notifier {
    sender: Box<dyn MessageSender>,
    chat_id: String,
}

impl Notifier {
    pub fn new(sender: Box<dyn MessageSender>, chat_id: impl Into<String>) -> Self {
        Self {
            sender,
            chat_id: chat_id.into(),
        }
    }

    /// Attempt delivery once. Returns `true` if the transport accepted the message.
    pub async fn notify(&self, message: &str) -> bool {
        tracing::info!(text = message, "Sending telegram message");

        match self.sender.send_message(&self.chat_id, message).await {
            Ok(()) => {
                tracing::info!(text = message, "Telegram message delivered");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, text = message, "Telegram message delivery failed");
                false
            }
        }
    }
}
