use std::time::Duration;

use review_common::types::{PollCursor, PollOutcome, STARTUP_MESSAGE};
use review_notifier::Notifier;

use crate::client::StatusSource;
use crate::dedup::DuplicateFilter;

type Clock = Box<dyn Fn() -> i64 + Send + Sync>;

/// Status poller that periodically queries the API and notifies on changes.
pub struct StatusPoller {
    source: Box<dyn StatusSource>,
    notifier: Notifier,
    poll_interval: Duration,
    cursor: PollCursor,
    dedup: DuplicateFilter,
    clock: Clock,
}

impl StatusPoller {
    pub fn new(source: Box<dyn StatusSource>, notifier: Notifier, poll_interval: Duration) -> Self {
        Self {
            source,
            notifier,
            poll_interval,
            cursor: PollCursor::now(),
            dedup: DuplicateFilter::new(),
            clock: Box::new(|| PollCursor::now().timestamp()),
        }
    }

    /// Replace the wall clock used to advance the cursor.
    pub fn with_clock(mut self, clock: impl Fn() -> i64 + Send + Sync + 'static) -> Self {
        self.cursor = PollCursor::new(clock());
        self.clock = Box::new(clock);
        self
    }

    pub fn cursor(&self) -> PollCursor {
        self.cursor
    }

    pub fn last_sent(&self) -> Option<&str> {
        self.dedup.last_sent()
    }

    /// Start the polling loop. Runs indefinitely until the task is cancelled.
    pub async fn run(&mut self) {
        self.notifier.notify(STARTUP_MESSAGE).await;
        self.cursor = PollCursor::new((self.clock)());

        tracing::info!(
            cursor = %self.cursor,
            poll_interval_secs = self.poll_interval.as_secs(),
            "Status poller started"
        );

        loop {
            self.tick().await;
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// One iteration: poll, then deliver the outcome through the duplicate filter.
    pub async fn tick(&mut self) -> PollOutcome {
        let outcome = self.poll_once().await;

        if let PollOutcome::Failure(e) = &outcome {
            tracing::error!(error = %e, cursor = %self.cursor, "Poll iteration failed");
        }

        self.dispatch(&outcome).await;
        outcome
    }

    /// Fetch and decode one window. The cursor advances on any successful
    /// API call, even if the body is later rejected.
    pub async fn poll_once(&mut self) -> PollOutcome {
        let response = match self.source.fetch_statuses(self.cursor).await {
            Ok(response) => response,
            Err(e) => return PollOutcome::Failure(e),
        };

        self.cursor.advance_to((self.clock)());

        review_decoders::decode_response(&response).into()
    }

    /// The slot is only updated on delivery, so during a transport outage the
    /// same message is attempted again on every iteration.
    async fn dispatch(&mut self, outcome: &PollOutcome) {
        let Some(message) = outcome.message() else {
            tracing::debug!(cursor = %self.cursor, "No status update");
            return;
        };

        if !self.dedup.should_send(&message) {
            tracing::debug!(text = %message, "Duplicate notification suppressed");
            return;
        }

        if self.notifier.notify(&message).await {
            self.dedup.record_sent(message);
        }
    }
}
