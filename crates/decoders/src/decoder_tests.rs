//! End-to-end tests for `decode_response` over realistic API bodies.

use serde_json::json;

use review_common::error::AppError;
use review_common::types::{PollOutcome, StatusVerdict};

use crate::decode_response;

// ───────────────────────────── helpers ──────────────────────────────

fn body_with(homework: serde_json::Value) -> serde_json::Value {
    json!({
        "homeworks": [homework],
        "current_date": 1_700_000_000
    })
}

// ═══════════════════════════════════════════════════════════════════
//  Happy paths
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_empty_homeworks_is_no_update() {
    let outcome = decode_response(&json!({"homeworks": [], "current_date": 1})).unwrap();
    assert_eq!(outcome, PollOutcome::NoUpdate);
    assert_eq!(outcome.message(), None);
}

#[test]
fn test_approved_project_message() {
    let outcome =
        decode_response(&body_with(json!({"homework_name": "Project1", "status": "approved"})))
            .unwrap();
    assert_eq!(
        outcome.message().unwrap(),
        "Изменился статус проверки работы \"Project1\". Работа проверена: ревьюеру всё понравилось. Ура!"
    );
}

#[test]
fn test_name_alias_accepted() {
    let outcome =
        decode_response(&body_with(json!({"name": "bot.zip", "status": "reviewing"}))).unwrap();
    assert_eq!(
        outcome,
        PollOutcome::Notification(format!(
            "Изменился статус проверки работы \"bot.zip\". {}",
            StatusVerdict::Reviewing.phrase()
        ))
    );
}

#[test]
fn test_full_practicum_record() {
    let outcome = decode_response(&body_with(json!({
        "id": 123,
        "status": "rejected",
        "homework_name": "username__hw_python_oop.zip",
        "reviewer_comment": "Код не по PEP8",
        "date_updated": "2020-02-13T16:42:47Z",
        "lesson_name": "Итоговый проект"
    })))
    .unwrap();
    let text = outcome.message().unwrap();
    assert!(text.contains("username__hw_python_oop.zip"));
    assert!(text.ends_with(StatusVerdict::Rejected.phrase()));
}

// ═══════════════════════════════════════════════════════════════════
//  Malformed payloads
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_missing_homeworks_regardless_of_other_fields() {
    for body in [
        json!({}),
        json!({"current_date": 1}),
        json!({"homework": [], "code": "not_authenticated"}),
    ] {
        assert_eq!(decode_response(&body), Err(AppError::MissingHomeworksKey));
    }
}

#[test]
fn test_homeworks_wrong_type() {
    let result = decode_response(&json!({"homeworks": {"homework_name": "x"}}));
    assert!(matches!(result, Err(AppError::UnexpectedShape(_))));
}

#[test]
fn test_missing_both_fields_reports_status() {
    let result = decode_response(&body_with(json!({"id": 1})));
    assert_eq!(result, Err(AppError::MissingStatusField));
}

#[test]
fn test_null_name_reports_name() {
    let result = decode_response(&body_with(json!({"homework_name": null, "status": "approved"})));
    assert_eq!(result, Err(AppError::MissingNameField));
}

#[test]
fn test_unknown_status_carries_code() {
    let result = decode_response(&body_with(json!({"homework_name": "x", "status": "lost"})));
    assert_eq!(result, Err(AppError::UnrecognizedStatus("lost".into())));
}

#[test]
fn test_status_of_wrong_type_is_shape_error() {
    let result = decode_response(&body_with(json!({"homework_name": "x", "status": 1})));
    assert!(matches!(result, Err(AppError::UnexpectedShape(_))));
}

// ═══════════════════════════════════════════════════════════════════
//  Entries the interpreter never reads
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_junk_after_latest_record_ignored() {
    let outcome = decode_response(&json!({
        "homeworks": [{"homework_name": "Project1", "status": "approved"}, "junk"]
    }))
    .unwrap();
    assert_eq!(
        outcome.message().unwrap(),
        "Изменился статус проверки работы \"Project1\". Работа проверена: ревьюеру всё понравилось. Ура!"
    );
}

#[test]
fn test_unexpected_types_in_informational_fields_ignored() {
    let outcome = decode_response(&body_with(json!({
        "homework_name": "Project1",
        "status": "approved",
        "id": "abc-1",
        "date_updated": 1_700_000_000,
        "reviewer_comment": {"text": "ok"}
    })))
    .unwrap();
    assert!(outcome.message().unwrap().contains("\"Project1\""));
}

#[test]
fn test_record_with_only_informational_fields_reports_status() {
    let result = decode_response(&body_with(json!({"date_updated": 1_700_000_000})));
    assert_eq!(result, Err(AppError::MissingStatusField));
}
