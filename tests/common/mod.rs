//! Shared test doubles for client, poller and dispatcher tests
#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cs::application::services::{Notice, Reporter};
use cs::config::{HttpMethod, Profile, ResponseFormat, TlsVerify};
use cs::infrastructure::di::ServiceContainer;
use cs::infrastructure::traits::{HttpRequest, HttpResponse, Pause, Transport, Waited};
use cs::util::testing;

pub const ENDPOINT: &str = "https://api.example.com/compute";

pub fn test_profile() -> Profile {
    Profile {
        name: "test".into(),
        endpoint: ENDPOINT.into(),
        key: "api-key".into(),
        secret: "api-secret".into(),
        method: HttpMethod::Get,
        timeout: Duration::from_secs(10),
        verify: TlsVerify::Enabled,
        cert: None,
        response: ResponseFormat::Json,
        theme: None,
        expiration: None,
    }
}

/// Transport replaying scripted responses and recording every request.
pub struct MockTransport {
    responses: Mutex<VecDeque<io::Result<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, kind: io::ErrorKind) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(io::Error::new(kind, "mock transport failure")));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Parameters of the n-th request as a map.
    pub fn params(&self, n: usize) -> BTreeMap<String, String> {
        self.requests()[n].params.iter().cloned().collect()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &HttpRequest) -> io::Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: {:?}", request.params))
    }
}

/// Pause that returns immediately and counts waits; optionally interrupts on the n-th wait.
pub struct CountingPause {
    waits: Mutex<Vec<Duration>>,
    interrupt_on: Option<usize>,
}

impl CountingPause {
    pub fn new() -> Self {
        Self {
            waits: Mutex::new(Vec::new()),
            interrupt_on: None,
        }
    }

    pub fn interrupting_on(wait: usize) -> Self {
        Self {
            waits: Mutex::new(Vec::new()),
            interrupt_on: Some(wait),
        }
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

impl Pause for CountingPause {
    fn pause(&self, duration: Duration) -> Waited {
        let mut waits = self.waits.lock().unwrap();
        waits.push(duration);
        if Some(waits.len()) == self.interrupt_on {
            Waited::Interrupted
        } else {
            Waited::Elapsed
        }
    }
}

/// Reporter collecting notices.
#[derive(Default)]
pub struct RecordingReporter {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingReporter {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn notice(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Container over mocks, returned together with the mocks for assertions.
pub fn container(
    profile: Profile,
    transport: MockTransport,
    pause: CountingPause,
) -> (ServiceContainer, Arc<MockTransport>, Arc<CountingPause>) {
    testing::init_test_setup();
    let transport = Arc::new(transport);
    let pause = Arc::new(pause);
    let container = ServiceContainer::with_deps(profile, transport.clone(), pause.clone());
    (container, transport, pause)
}
