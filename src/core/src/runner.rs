//! Bulk-check driver: repeats the end-to-end flow and times each pass.
//!
//! Iterations run strictly in order, one network round-trip at a time. A
//! failed iteration is logged with its context and never aborts the loop;
//! the next iteration starts fresh with the same credentials.

use chrono::{DateTime, Utc};
use metrics::{counter, histogram};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::authz::AuthzChecker;

// ═══════════════════════════════════════════════════════════════════════════════
// Report Types
// ═══════════════════════════════════════════════════════════════════════════════

/// Outcome of a single end-to-end check.
#[derive(Debug, Clone, Serialize)]
pub struct IterationOutcome {
    /// 1-based iteration index
    pub index: u32,

    /// Wall-clock duration of the whole round-trip
    pub duration_ms: u64,

    /// Projects the user may view, when the check succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,

    /// Error text, when the check failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IterationOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of one bulk run, with outcomes in iteration order.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Correlation id, also attached to every log line of the run
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub username: String,
    pub outcomes: Vec<IterationOutcome>,
}

impl RunReport {
    pub fn successes(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failures(&self) -> usize {
        self.outcomes.len() - self.successes()
    }

    /// Total wall-clock time spent inside checks.
    pub fn total_duration(&self) -> Duration {
        Duration::from_millis(self.outcomes.iter().map(|o| o.duration_ms).sum())
    }

    pub fn slowest(&self) -> Option<&IterationOutcome> {
        self.outcomes.iter().max_by_key(|o| o.duration_ms)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Runs the authorization check `repeat` times and collects a report.
pub struct BulkRunner<'a> {
    checker: &'a AuthzChecker,
    slow_threshold: Duration,
}

impl<'a> BulkRunner<'a> {
    pub fn new(checker: &'a AuthzChecker, slow_threshold: Duration) -> Self {
        Self {
            checker,
            slow_threshold,
        }
    }

    /// Execute iterations 1..=repeat in order. Every iteration produces
    /// exactly one outcome; errors are contained at the iteration
    /// boundary.
    pub async fn run(&self, repeat: u32, username: &str, password: &str) -> RunReport {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!(%run_id, repeat, username, "starting bulk authorization check");

        let mut outcomes = Vec::with_capacity(repeat as usize);
        for index in 1..=repeat {
            info!(%run_id, iteration = index, total = repeat, "running check");

            let start = Instant::now();
            let result = self.checker.visible_projects(username, password).await;
            let elapsed = start.elapsed();
            let elapsed_ms = elapsed.as_millis() as u64;

            histogram!("authpulse_check_duration_seconds").record(elapsed.as_secs_f64());

            match result {
                Ok(projects) => {
                    info!(
                        %run_id,
                        iteration = index,
                        total = repeat,
                        elapsed_ms,
                        ?projects,
                        "check passed"
                    );
                    counter!("authpulse_checks_total", "outcome" => "success").increment(1);
                    outcomes.push(IterationOutcome {
                        index,
                        duration_ms: elapsed_ms,
                        projects: Some(projects),
                        error: None,
                    });
                }
                Err(err) => {
                    error!(
                        %run_id,
                        iteration = index,
                        total = repeat,
                        elapsed_ms,
                        stage = err.stage(),
                        "check failed: {}", err
                    );
                    counter!(
                        "authpulse_checks_total",
                        "outcome" => "failure",
                        "stage" => err.stage()
                    )
                    .increment(1);
                    outcomes.push(IterationOutcome {
                        index,
                        duration_ms: elapsed_ms,
                        projects: None,
                        error: Some(err.to_string()),
                    });
                }
            }

            if elapsed > self.slow_threshold {
                warn!(
                    %run_id,
                    iteration = index,
                    total = repeat,
                    elapsed_ms,
                    "slow check: {:.2}s exceeds the {:.2}s threshold",
                    elapsed.as_secs_f64(),
                    self.slow_threshold.as_secs_f64()
                );
            }
        }

        let report = RunReport {
            run_id,
            started_at,
            username: username.to_string(),
            outcomes,
        };
        info!(
            %run_id,
            successes = report.successes(),
            failures = report.failures(),
            total_ms = report.total_duration().as_millis() as u64,
            "run complete"
        );
        report
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
