//! Tests for the command-line driver: ordering of failures and request wiring

mod common;

use std::cell::Cell;
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;

use clap::Parser;
use rstest::rstest;
use tempfile::TempDir;

use cs::application::ApplicationError;
use cs::cli::commands::execute_with;
use cs::cli::{Cli, CliError};
use cs::config::{ConfigSources, HttpMethod};
use cs::domain::DomainError;
use cs::exitcode;
use cs::infrastructure::di::ServiceContainer;
use cs::infrastructure::InfraError;

use common::{CountingPause, MockTransport, ENDPOINT};

fn env_sources() -> ConfigSources {
    ConfigSources {
        paths: Vec::new(),
        env: HashMap::from([
            ("CLOUDSTACK_ENDPOINT".to_string(), ENDPOINT.to_string()),
            ("CLOUDSTACK_KEY".to_string(), "api-key".to_string()),
            ("CLOUDSTACK_SECRET".to_string(), "api-secret".to_string()),
        ]),
    }
}

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["cs", "--region", "cloudstack"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

/// Runs the driver with a mock transport; returns the result, whether a
/// container was built, and the transport for inspection.
fn run(
    cli: &Cli,
    sources: &ConfigSources,
    transport: MockTransport,
) -> (Result<i32, CliError>, bool, Arc<MockTransport>) {
    let transport = Arc::new(transport);
    let connected = Cell::new(false);

    let result = execute_with(cli, sources, |profile| {
        connected.set(true);
        Ok(ServiceContainer::with_deps(
            profile,
            transport.clone(),
            Arc::new(CountingPause::new()),
        ))
    });

    (result, connected.get(), transport)
}

fn domain_error(err: &CliError) -> Option<&DomainError> {
    match err {
        CliError::Infra(InfraError::Application(ApplicationError::Domain(e))) => Some(e),
        _ => None,
    }
}

#[rstest]
#[case(&["listZones", "foo"], DomainError::MalformedArgument("foo".into()))]
#[case(&["listUnicorns"], DomainError::UnknownCommand("listUnicorns".into()))]
#[case(
    &["startVirtualMachine"],
    DomainError::MissingParameter { command: "startVirtualMachine".into(), parameter: "id".into() }
)]
fn given_invalid_invocation_when_executing_then_fails_before_any_request(
    #[case] args: &[&str],
    #[case] expected: DomainError,
) {
    // Arrange
    let cli = parse(args);

    // Act
    let (result, connected, transport) = run(&cli, &env_sources(), MockTransport::new());

    // Assert
    let err = result.unwrap_err();
    assert_eq!(domain_error(&err), Some(&expected));
    assert_eq!(err.exit_code(), exitcode::FAILURE);
    assert!(!connected);
    assert!(transport.requests().is_empty());
}

#[test]
fn given_missing_profile_when_executing_then_fails_before_any_request() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cloudstack.ini");
    fs::write(&path, "[lab]\nendpoint = https://lab/compute\nkey = k\nsecret = s\n").unwrap();
    let sources = ConfigSources {
        paths: vec![path],
        env: HashMap::new(),
    };
    let cli = parse(&["listZones"]);

    let (result, connected, transport) = run(&cli, &sources, MockTransport::new());

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        CliError::Infra(InfraError::Application(ApplicationError::ProfileNotFound(_)))
    ));
    assert_eq!(err.exit_code(), exitcode::FAILURE);
    assert!(!connected);
    assert!(transport.requests().is_empty());
}

#[test]
fn given_valid_invocation_when_executing_then_sends_one_request_and_succeeds() {
    let cli = parse(&["--post", "listZones", "available=true"]);
    let transport = MockTransport::new().respond(200, r#"{"listzonesresponse": {"count": 0}}"#);

    let (result, connected, transport) = run(&cli, &env_sources(), transport);

    assert_eq!(result.unwrap(), exitcode::OK);
    assert!(connected);
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, ENDPOINT);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(transport.params(0).get("available").map(String::as_str), Some("true"));
}

#[test]
fn given_failed_job_when_executing_then_exit_code_is_failure() {
    let cli = parse(&[
        "deployVirtualMachine",
        "serviceofferingid=so",
        "templateid=t",
        "zoneid=z",
    ]);
    let transport = MockTransport::new()
        .respond(200, r#"{"deployvirtualmachineresponse": {"jobid": "job-1"}}"#)
        .respond(
            200,
            r#"{"queryasyncjobresultresponse": {"jobstatus": 2, "jobresultcode": 530}}"#,
        );

    let (result, _, transport) = run(&cli, &env_sources(), transport);

    assert_eq!(result.unwrap(), exitcode::FAILURE);
    assert_eq!(transport.requests().len(), 2);
}
