use serde_json::Value;

use review_common::error::AppError;

/// Key under which the status API returns the list of homework entries.
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Check the raw API body and return the `homeworks` list.
///
/// Only the container shape is checked here; entries are left to the
/// interpreter, which reads the first one. An empty list is valid and means
/// there is nothing to report.
pub fn validate_response(response: &Value) -> Result<&[Value], AppError> {
    let object = response.as_object().ok_or_else(|| {
        AppError::UnexpectedShape(format!("ожидался объект, получено: {response}"))
    })?;

    let homeworks = object
        .get(HOMEWORKS_KEY)
        .ok_or(AppError::MissingHomeworksKey)?;

    homeworks.as_array().map(Vec::as_slice).ok_or_else(|| {
        AppError::UnexpectedShape(format!(
            "по ключу \"{HOMEWORKS_KEY}\" ожидался список, получено: {homeworks}"
        ))
    })
}
