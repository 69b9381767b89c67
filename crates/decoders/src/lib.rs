//! Decoding of raw status API responses into poll outcomes.
//!
//! Two stages, both pure:
//! 1. `validator` checks the body shape and extracts typed `ItemRecord`s
//! 2. `interpreter` maps the most recent record to a notification text

pub mod interpreter;
pub mod validator;

#[cfg(test)]
mod decoder_tests;

use serde_json::Value;

use review_common::error::AppError;
use review_common::types::PollOutcome;

/// Run a raw response through validation and interpretation.
pub fn decode_response(response: &Value) -> Result<PollOutcome, AppError> {
    let records = validator::validate_response(response)?;
    tracing::debug!(records = records.len(), "Validated status response");
    interpreter::interpret(records)
}
