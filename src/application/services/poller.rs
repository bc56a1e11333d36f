//! Async job poller
//!
//! Queries the job status until the job is terminal or the wait between two
//! queries is interrupted. There is no retry limit and no overall timeout.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::application::services::ApiClient;
use crate::application::ApplicationResult;
use crate::domain::job::JOB_ID;
use crate::domain::{ApiCommand, DomainError, JobState, ParameterSet, Payload, QUERY_JOB_RESULT};
use crate::infrastructure::traits::{Pause, Waited};

/// Fixed delay between two job-status queries.
pub const POLL_INTERVAL: Duration = Duration::from_secs(3);

/// How polling ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The job reached a terminal state; `payload` is the final job result.
    Finished { payload: Payload, state: JobState },
    /// Interrupted while waiting; `payload` is the original submission response.
    Interrupted { payload: Payload },
}

pub struct AsyncPoller {
    pause: Arc<dyn Pause>,
    interval: Duration,
}

impl AsyncPoller {
    pub fn new(pause: Arc<dyn Pause>) -> Self {
        Self::with_interval(pause, POLL_INTERVAL)
    }

    pub fn with_interval(pause: Arc<dyn Pause>, interval: Duration) -> Self {
        Self { pause, interval }
    }

    /// Poll the job referenced by `submitted` until it is no longer pending.
    ///
    /// Transport and API errors from a status query end polling with that error.
    #[instrument(level = "debug", skip_all)]
    pub fn wait(&self, client: &ApiClient, submitted: Payload) -> ApplicationResult<PollOutcome> {
        let job_id = submitted
            .field(JOB_ID)
            .ok_or_else(|| DomainError::MissingField(JOB_ID.to_string()))?;
        let command: &'static ApiCommand = &QUERY_JOB_RESULT;
        let mut attempt = 0u64;

        loop {
            attempt += 1;
            let query = command.request(ParameterSet::new().with(JOB_ID, &job_id))?;
            let status = client.invoke(&query)?;
            let state = JobState::from_payload(&status)?;
            debug!("wait: job {} attempt {} -> {:?}", job_id, attempt, state);

            if state.is_terminal() {
                info!("job {} finished: {:?}", job_id, state);
                return Ok(PollOutcome::Finished {
                    payload: status,
                    state,
                });
            }

            if self.pause.pause(self.interval) == Waited::Interrupted {
                info!("job {} still pending, polling interrupted", job_id);
                return Ok(PollOutcome::Interrupted { payload: submitted });
            }
        }
    }
}
