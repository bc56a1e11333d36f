//! Asynchronous job state and polling policy

use crate::domain::{ApiCommand, DomainResult, Payload};

pub const JOB_ID: &str = "jobid";
pub const JOB_STATUS: &str = "jobstatus";
pub const JOB_RESULT_CODE: &str = "jobresultcode";

/// State of a remote job as reported by a job-status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Pending,
    Succeeded,
    Failed { result_code: i64 },
}

impl JobState {
    /// Classify a job-status payload.
    ///
    /// `jobstatus == 0` is pending; any other status is terminal and
    /// `jobresultcode` decides between success and failure.
    pub fn from_payload(payload: &Payload) -> DomainResult<Self> {
        if payload.field_i64(JOB_STATUS)? == 0 {
            return Ok(JobState::Pending);
        }
        match payload.field_i64(JOB_RESULT_CODE)? {
            0 => Ok(JobState::Succeeded),
            result_code => Ok(JobState::Failed { result_code }),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobState::Pending)
    }
}

/// Whether the response to `command` must be followed by job polling.
///
/// Job queries themselves are never polled, fire-and-forget mode never
/// polls, and only responses carrying a job id qualify.
pub fn should_poll(command: &ApiCommand, payload: &Payload, fire_and_forget: bool) -> bool {
    !command.is_job_query() && !fire_and_forget && payload.has_field(JOB_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QUERY_JOB_RESULT;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({"jobstatus": 0}), JobState::Pending)]
    #[case(json!({"jobstatus": 1, "jobresultcode": 0}), JobState::Succeeded)]
    #[case(json!({"jobstatus": 2, "jobresultcode": 530}), JobState::Failed { result_code: 530 })]
    fn test_job_state_classification(#[case] body: serde_json::Value, #[case] expected: JobState) {
        assert_eq!(JobState::from_payload(&Payload::Json(body)), Ok(expected));
    }

    #[test]
    fn test_should_poll_requires_job_id() {
        let deploy = ApiCommand::lookup("deployVirtualMachine").unwrap();
        let with_job = Payload::Json(json!({"jobid": "j-1"}));
        let without_job = Payload::Json(json!({"id": "vm-1"}));

        assert!(should_poll(deploy, &with_job, false));
        assert!(!should_poll(deploy, &with_job, true));
        assert!(!should_poll(deploy, &without_job, false));
    }

    #[test]
    fn test_job_queries_are_never_polled() {
        let payload = Payload::Json(json!({"jobid": "j-1", "jobstatus": 0}));

        assert!(!should_poll(&QUERY_JOB_RESULT, &payload, false));
        assert!(!should_poll(
            ApiCommand::lookup("listAsyncJobs").unwrap(),
            &payload,
            false
        ));
    }
}
