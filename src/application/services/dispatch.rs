//! Command dispatch: invoke, recover error bodies, poll, select
//!
//! This is the policy behind the command line: what happens between the
//! parsed invocation and the rendered result.

use serde_json::Value;
use tracing::{debug, warn};

use crate::application::services::{ApiClient, AsyncPoller, PollOutcome};
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::ResponseFormat;
use crate::domain::{should_poll, ApiRequest, JobState, Payload};

/// One parsed command line, ready to run.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub request: ApiRequest,
    /// Return the submission response without waiting for the job.
    pub fire_and_forget: bool,
    /// Narrow XML results to elements with this tag.
    pub select: Option<String>,
}

/// Status events surfaced to the user while a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The API answered with a non-success status.
    ApiError { status: u16 },
    /// Raw error body that could not be decoded; always shown.
    ErrorBody(String),
    /// Polling for an async job has started.
    Polling,
    /// Polling was interrupted before the job finished.
    NotReady,
}

/// Receives [`Notice`]s; the CLI prints them to stderr.
pub trait Reporter {
    fn notice(&self, notice: Notice);
}

/// End result of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// `None` when the API failed with an undecodable body.
    pub payload: Option<Payload>,
    pub success: bool,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        if self.success {
            crate::exitcode::OK
        } else {
            crate::exitcode::FAILURE
        }
    }
}

pub struct Dispatcher {
    client: ApiClient,
    poller: AsyncPoller,
}

impl Dispatcher {
    pub fn new(client: ApiClient, poller: AsyncPoller) -> Self {
        Self { client, poller }
    }

    /// Run one invocation end to end.
    ///
    /// An API error whose body is valid JSON is not terminal: the decoded
    /// body goes through job detection and formatting like a normal result.
    pub fn run(
        &self,
        invocation: &Invocation,
        reporter: &dyn Reporter,
    ) -> ApplicationResult<Outcome> {
        let command = invocation.request.command;

        let payload = match self.client.invoke(&invocation.request) {
            Ok(payload) => payload,
            Err(ApplicationError::Api(err)) => {
                reporter.notice(Notice::ApiError { status: err.status });
                if let Some(hint) = &err.hint {
                    debug!("run: {}", hint);
                }
                let decoded = match self.client.response_format() {
                    ResponseFormat::Json => serde_json::from_str::<Value>(&err.body).ok(),
                    ResponseFormat::Xml => None,
                };
                match decoded {
                    Some(value) => Payload::Json(value),
                    None => {
                        reporter.notice(Notice::ErrorBody(err.body));
                        return Ok(Outcome {
                            payload: None,
                            success: false,
                        });
                    }
                }
            }
            Err(e) => return Err(e),
        };

        let mut success = true;
        let payload = if should_poll(command, &payload, invocation.fire_and_forget) {
            reporter.notice(Notice::Polling);
            match self.poller.wait(&self.client, payload)? {
                PollOutcome::Finished { payload, state } => {
                    success = state == JobState::Succeeded;
                    payload
                }
                PollOutcome::Interrupted { payload } => {
                    reporter.notice(Notice::NotReady);
                    payload
                }
            }
        } else {
            payload
        };

        let payload = match invocation.select.as_deref() {
            Some(tag) if matches!(payload, Payload::Xml(_)) => payload.select(tag)?,
            Some(_) => {
                warn!("--select only applies to XML responses, ignored");
                payload
            }
            None => payload,
        };

        Ok(Outcome {
            payload: Some(payload),
            success,
        })
    }
}
