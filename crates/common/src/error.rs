use thiserror::Error;

/// Common error types used across the application.
///
/// `ConfigMissing` and `Config` stop the process at startup; everything else
/// is reported through the notification path and polling continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Отсутствует обязательная переменная окружения: {0}")]
    ConfigMissing(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Сбой при обращении к эндпойнту. Ответ сервера: {code}. Reason: {reason}.")]
    ServerUnavailable { code: u16, reason: String },

    #[error("Ошибка запроса к API: {0}")]
    Request(String),

    #[error("Отсутствует ключ \"homeworks\" в ответе API.")]
    MissingHomeworksKey,

    #[error("Неожиданный формат ответа API: {0}")]
    UnexpectedShape(String),

    #[error("Ответ API не содержит ключа \"status\".")]
    MissingStatusField,

    #[error("Ответ API не содержит ключа \"homework_name\".")]
    MissingNameField,

    #[error("Неизвестный статус ДЗ в ответе API: {0}")]
    UnrecognizedStatus(String),

    #[error("Ошибка отправки telegram сообщения: {0}")]
    TransportDeliveryFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_unavailable_message_carries_code() {
        let err = AppError::ServerUnavailable {
            code: 503,
            reason: "Service Unavailable".into(),
        };
        let text = err.to_string();
        assert!(text.contains("503"));
        assert!(text.contains("Service Unavailable"));
    }
}
