use review_common::config::AppConfig;
use review_notifier::Notifier;
use review_notifier::telegram::TelegramSender;
use review_poller::client::PracticumClient;
use review_poller::poller::StatusPoller;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "review_poller=info,review_notifier=info,review_decoders=debug".into()
            }),
        )
        .json()
        .init();

    tracing::info!("Review status notifier starting...");

    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                severity = "critical",
                error = %e,
                "Программа принудительно остановлена: некорректная конфигурация"
            );
            return Err(e.into());
        }
    };
    tracing::debug!(?config, "Configuration loaded");

    let client = PracticumClient::new(
        &config.practicum_endpoint,
        &config.practicum_token,
        config.request_timeout(),
    )?;
    let sender = TelegramSender::new(
        &config.telegram_api_url,
        &config.telegram_token,
        config.request_timeout(),
    )?;
    let notifier = Notifier::new(Box::new(sender), config.telegram_chat_id.clone());

    let mut poller = StatusPoller::new(Box::new(client), notifier, config.retry_interval());

    // Run with graceful shutdown on Ctrl+C
    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping gracefully...");
        }
    }

    tracing::info!("Review status notifier stopped.");
    Ok(())
}
