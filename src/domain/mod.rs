//! Domain layer: API request and response model
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod catalog;
pub mod error;
pub mod job;
pub mod params;
pub mod payload;

pub use catalog::{ApiCommand, ApiRequest, QUERY_JOB_RESULT};
pub use error::{DomainError, DomainResult};
pub use job::{should_poll, JobState};
pub use params::{parse_option, ParameterSet};
pub use payload::{Payload, XmlDocument};
