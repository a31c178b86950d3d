//! Bounded execution: run sub-operations under one shared wall-clock
//! budget and convert expiry into a policy-chosen fallback instead of an
//! unbounded wait.

use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tracing::warn;

use recall_core::errors::{RecallError, RecallResult};

/// What to do when the budget expires before every operation finished.
#[derive(Debug)]
pub enum FallbackPolicy<T> {
    /// Propagate a `TimeoutExceeded` error.
    Raise,
    /// Resolve every unfinished slot to this value.
    Substitute(T),
    /// Keep the sub-results that finished in time; abandon the rest.
    Partial,
}

/// Outcome of running sub-operations under one shared deadline.
#[derive(Debug)]
pub struct BoundedRun<T> {
    /// One slot per sub-operation, in submission order. `None` means the
    /// operation had not completed when the deadline expired (or its
    /// task died), and under `Partial` it stays `None`.
    pub results: Vec<Option<T>>,
    /// True when the deadline expired before every operation finished.
    pub degraded: bool,
}

impl<T> BoundedRun<T> {
    /// Consume the run, yielding slots in submission order.
    pub fn into_slots(self) -> std::vec::IntoIter<Option<T>> {
        self.results.into_iter()
    }
}

/// Runs already-spawned tasks against a shared wall-clock budget.
///
/// The tasks execute concurrently from the moment they were spawned, so
/// awaiting them in submission order still holds every one of them to
/// the same global deadline. On expiry, unfinished tasks receive a
/// best-effort abort; their eventual results are discarded, never
/// awaited.
#[derive(Debug, Clone, Copy)]
pub struct DeadlineGuard {
    budget: Duration,
}

impl DeadlineGuard {
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Await every handle under the shared budget, applying `policy` on
    /// expiry. `operation` names the bounded work in errors and logs.
    pub async fn run_bounded<T>(
        &self,
        operation: &str,
        handles: Vec<JoinHandle<T>>,
        policy: FallbackPolicy<T>,
    ) -> RecallResult<BoundedRun<T>>
    where
        T: Clone + Send + 'static,
    {
        let started = Instant::now();
        let mut results: Vec<Option<T>> = Vec::with_capacity(handles.len());
        let mut expired = false;

        for mut handle in handles {
            if expired {
                // Past the deadline: keep results that already landed,
                // abandon the rest without waiting.
                if handle.is_finished() {
                    match handle.await {
                        Ok(value) => results.push(Some(value)),
                        Err(join_error) => {
                            warn!(operation, error = %join_error, "bounded sub-task died");
                            results.push(None);
                        }
                    }
                } else {
                    handle.abort();
                    results.push(None);
                }
                continue;
            }
            let remaining = self.budget.saturating_sub(started.elapsed());
            // `timeout` polls the task before the timer, so a task that
            // already finished is still collected at zero remaining.
            match tokio::time::timeout(remaining, &mut handle).await {
                Ok(Ok(value)) => results.push(Some(value)),
                Ok(Err(join_error)) => {
                    warn!(operation, error = %join_error, "bounded sub-task died");
                    results.push(None);
                }
                Err(_) => {
                    expired = true;
                    handle.abort();
                    results.push(None);
                }
            }
        }

        if !expired {
            return Ok(BoundedRun {
                results,
                degraded: false,
            });
        }

        let budget_ms = self.budget.as_millis() as u64;
        warn!(operation, budget_ms, "deadline expired, applying fallback policy");

        match policy {
            FallbackPolicy::Raise => Err(RecallError::TimeoutExceeded {
                operation: operation.to_string(),
                budget_ms,
            }),
            FallbackPolicy::Substitute(value) => {
                for slot in results.iter_mut() {
                    if slot.is_none() {
                        *slot = Some(value.clone());
                    }
                }
                Ok(BoundedRun {
                    results,
                    degraded: true,
                })
            }
            FallbackPolicy::Partial => Ok(BoundedRun {
                results,
                degraded: true,
            }),
        }
    }
}
