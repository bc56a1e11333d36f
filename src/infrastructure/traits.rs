//! I/O boundary traits for testability
//!
//! These traits abstract the network, the wait between job polls and
//! terminal highlighting, allowing services to be tested with mock
//! implementations.

use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::HttpMethod;

/// A fully built, signed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Query parameters (GET) or form fields (POST).
    pub params: Vec<(String, String)>,
}

/// Status and decoded body text of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Network transport abstraction.
pub trait Transport: Send + Sync {
    /// Send one request. Only failures without an HTTP response are errors.
    fn send(&self, request: &HttpRequest) -> io::Result<HttpResponse>;
}

/// How a pause between job polls ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waited {
    Elapsed,
    Interrupted,
}

/// Blocking wait between job-status queries.
pub trait Pause: Send + Sync {
    fn pause(&self, duration: Duration) -> Waited;
}

/// Syntax of a rendered payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Json,
    Xml,
}

/// Optional syntax highlighting for terminal output.
pub trait Highlighter: Send + Sync {
    fn highlight(&self, text: &str, syntax: Syntax) -> String;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Sleep that ends early on Ctrl-C.
///
/// The SIGINT handler is installed on the first pause only, so an interrupt
/// before polling starts still terminates the process.
#[derive(Debug, Default)]
pub struct SignalPause {
    signals: OnceLock<Mutex<Receiver<()>>>,
}

impl SignalPause {
    pub fn new() -> Self {
        Self::default()
    }

    fn signals(&self) -> Result<&Mutex<Receiver<()>>, ctrlc::Error> {
        if let Some(rx) = self.signals.get() {
            return Ok(rx);
        }
        let (tx, rx) = mpsc::channel();
        ctrlc::set_handler(move || {
            let _ = tx.send(());
        })?;
        debug!("signals: Ctrl-C handler installed");
        Ok(self.signals.get_or_init(|| Mutex::new(rx)))
    }
}

impl Pause for SignalPause {
    fn pause(&self, duration: Duration) -> Waited {
        let signals = match self.signals() {
            Ok(signals) => signals,
            Err(e) => {
                warn!("cannot install Ctrl-C handler: {}", e);
                std::thread::sleep(duration);
                return Waited::Elapsed;
            }
        };
        let rx = signals.lock().unwrap_or_else(|e| e.into_inner());
        match rx.recv_timeout(duration) {
            Ok(()) => Waited::Interrupted,
            Err(RecvTimeoutError::Timeout) => Waited::Elapsed,
            Err(RecvTimeoutError::Disconnected) => {
                std::thread::sleep(duration);
                Waited::Elapsed
            }
        }
    }
}
