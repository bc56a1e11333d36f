//! Application services
//!
//! Each service encapsulates one step of running an API command.

pub mod client;
pub mod dispatch;
pub mod formatter;
pub mod poller;

pub use client::ApiClient;
pub use dispatch::{Dispatcher, Invocation, Notice, Outcome, Reporter};
pub use formatter::Formatter;
pub use poller::{AsyncPoller, PollOutcome, POLL_INTERVAL};
