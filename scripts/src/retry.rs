//! The retry helper wrapping every network-submitting action

use std::{future::Future, time::Duration};

use tracing::warn;

use crate::{
    constants::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY_MS},
    errors::ScriptError,
};

/// How often, and how patiently, an action is resubmitted
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    /// The total number of attempts, including the first
    pub max_attempts: usize,
    /// The delay between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

/// Run `action` until it succeeds, retrying transient failures.
///
/// Non-transient errors are returned as-is from the attempt that produced
/// them. If every attempt fails transiently a
/// [`ScriptError::RetriesExhausted`] wrapping the last error is returned.
pub async fn repeat<T, F, Fut>(
    policy: &RetryPolicy,
    label: &str,
    mut action: F,
) -> Result<T, ScriptError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScriptError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        let err = match action().await {
            Ok(res) => return Ok(res),
            Err(e) if !e.is_transient() => return Err(e),
            Err(e) => e,
        };

        if attempt >= max_attempts {
            return Err(ScriptError::RetriesExhausted {
                label: label.to_string(),
                attempts: attempt,
                last: Box::new(err),
            });
        }

        warn!("{label} failed on attempt {attempt}/{max_attempts}, retrying: {err}");
        tokio::time::sleep(policy.delay).await;
        attempt += 1;
    }
}
