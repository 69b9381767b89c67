use std::time::Duration;

use async_trait::async_trait;
use teloxide::Bot;
use teloxide::requests::Requester;
use teloxide::types::{ChatId, Recipient};

use review_common::error::AppError;

use crate::MessageSender;

/// Telegram transport backed by a teloxide `Bot`.
pub struct TelegramSender {
    bot: Bot,
    token: String,
}

impl TelegramSender {
    pub fn new(api_url: &str, bot_token: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = teloxide::net::default_reqwest_settings()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;
        let api_url = reqwest::Url::parse(api_url)
            .map_err(|e| AppError::Config(format!("invalid TELEGRAM_API_URL {api_url:?}: {e}")))?;

        Ok(Self {
            bot: Bot::with_client(bot_token, client).set_api_url(api_url),
            token: bot_token.to_string(),
        })
    }
}

/// Numeric ids address chats directly; anything else is a `@channel` username.
fn recipient(chat_id: &str) -> Recipient {
    match chat_id.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.to_string()),
    }
}

#[async_trait]
impl MessageSender for TelegramSender {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), AppError> {
        self.bot
            .send_message(recipient(chat_id), text)
            .await
            .map(|_| ())
            // Request URLs embed the bot token; keep it out of the error text.
            .map_err(|e| {
                AppError::TransportDeliveryFailure(e.to_string().replace(&self.token, "<redacted>"))
            })
    }
}
