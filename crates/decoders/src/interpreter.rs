use serde_json::Value;

use review_common::error::AppError;
use review_common::types::{ItemRecord, PollOutcome, StatusVerdict};

/// Turn the validated homework list into a poll outcome.
///
/// Only the first (most recent) entry is inspected. Presence of `status` is
/// checked before the name, and both before any typed decoding, so an entry
/// missing both always reports `MissingStatusField`.
pub fn interpret(records: &[Value]) -> Result<PollOutcome, AppError> {
    let Some(latest) = records.first() else {
        return Ok(PollOutcome::NoUpdate);
    };

    let fields = latest.as_object().ok_or_else(|| {
        AppError::UnexpectedShape(format!("элемент списка не является объектом: {latest}"))
    })?;
    let present = |key: &str| fields.get(key).is_some_and(|v| !v.is_null());

    if !present("status") {
        return Err(AppError::MissingStatusField);
    }
    if !present("homework_name") && !present("name") {
        return Err(AppError::MissingNameField);
    }

    let record: ItemRecord = serde_json::from_value(latest.clone())
        .map_err(|e| AppError::UnexpectedShape(format!("{e}: {latest}")))?;
    let (Some(status), Some(name)) = (record.status.as_deref(), record.display_name()) else {
        return Err(AppError::UnexpectedShape(latest.to_string()));
    };
    let verdict = StatusVerdict::from_code(status)?;

    tracing::debug!(homework = name, verdict = %verdict, "Interpreted homework status");

    Ok(PollOutcome::Notification(format_notification(name, verdict)))
}

pub fn format_notification(name: &str, verdict: StatusVerdict) -> String {
    format!(
        "Изменился статус проверки работы \"{name}\". {}",
        verdict.phrase()
    )
}
