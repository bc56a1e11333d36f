//! Command-line client for CloudStack-style cloud APIs.
//!
//! Turns `key=value` arguments into a signed API request, waits for
//! asynchronous jobs and renders the JSON or XML result.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
