use chrono::Utc;
use serde::Deserialize;

use crate::error::AppError;

/// Prefix for every failure notice delivered to the recipient.
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// One-time notice sent when the loop starts.
pub const STARTUP_MESSAGE: &str = "Бот начал работу. Держитесь!!!";

/// Lower bound (unix seconds) of the next status query window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollCursor(i64);

impl PollCursor {
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    pub fn timestamp(&self) -> i64 {
        self.0
    }

    /// Move the cursor to `timestamp`, never backwards.
    pub fn advance_to(&mut self, timestamp: i64) {
        if timestamp > self.0 {
            self.0 = timestamp;
        }
    }
}

impl std::fmt::Display for PollCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fields of a homework entry the interpreter reads.
///
/// `name` is accepted as a fallback for `homework_name`. Any other fields the
/// API sends are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemRecord {
    pub homework_name: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
}

impl ItemRecord {
    pub fn display_name(&self) -> Option<&str> {
        self.homework_name.as_deref().or(self.name.as_deref())
    }
}

/// Review verdicts the status API is known to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusVerdict {
    Approved,
    Reviewing,
    Rejected,
}

impl StatusVerdict {
    pub const ALL: [StatusVerdict; 3] = [
        StatusVerdict::Approved,
        StatusVerdict::Reviewing,
        StatusVerdict::Rejected,
    ];

    /// Parse a raw status code. Unknown codes are an API contract change.
    pub fn from_code(code: &str) -> Result<Self, AppError> {
        match code {
            "approved" => Ok(StatusVerdict::Approved),
            "reviewing" => Ok(StatusVerdict::Reviewing),
            "rejected" => Ok(StatusVerdict::Rejected),
            other => Err(AppError::UnrecognizedStatus(other.to_string())),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StatusVerdict::Approved => "approved",
            StatusVerdict::Reviewing => "reviewing",
            StatusVerdict::Rejected => "rejected",
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            StatusVerdict::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            StatusVerdict::Reviewing => "Работа взята на проверку ревьюером.",
            StatusVerdict::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for StatusVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Result of a single poll iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// A status change the recipient should hear about.
    Notification(String),
    /// The API reported nothing new in the window.
    NoUpdate,
    /// A recoverable failure, reported to the recipient as text.
    Failure(AppError),
}

impl PollOutcome {
    /// Text to deliver for this outcome, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            PollOutcome::Notification(text) => Some(text.clone()),
            PollOutcome::NoUpdate => None,
            PollOutcome::Failure(err) => Some(format!("{FAILURE_PREFIX}: {err}")),
        }
    }
}

impl From<Result<PollOutcome, AppError>> for PollOutcome {
    fn from(result: Result<PollOutcome, AppError>) -> Self {
        result.unwrap_or_else(PollOutcome::Failure)
    }
}
