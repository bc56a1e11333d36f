//! Service container for dependency injection
//!
//! Wires up the client, poller and formatter for one profile.

use std::sync::Arc;

use tracing::warn;

use crate::application::services::{ApiClient, AsyncPoller, Dispatcher, Formatter};
use crate::config::Profile;
use crate::infrastructure::highlight::ThemedHighlighter;
use crate::infrastructure::http::HttpTransport;
use crate::infrastructure::traits::{Highlighter, Pause, SignalPause, Transport};
use crate::infrastructure::InfraResult;

/// Container holding the services for one run.
pub struct ServiceContainer {
    /// Resolved profile
    pub profile: Arc<Profile>,

    /// Network transport
    pub transport: Arc<dyn Transport>,

    /// Wait between job polls
    pub pause: Arc<dyn Pause>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(profile: Profile) -> InfraResult<Self> {
        let transport = HttpTransport::from_profile(&profile)?;
        Ok(Self::with_deps(
            profile,
            Arc::new(transport),
            Arc::new(SignalPause::new()),
        ))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        profile: Profile,
        transport: Arc<dyn Transport>,
        pause: Arc<dyn Pause>,
    ) -> Self {
        Self {
            profile: Arc::new(profile),
            transport,
            pause,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.profile.clone(), self.transport.clone())
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.client(), AsyncPoller::new(self.pause.clone()))
    }

    /// Formatter for `theme`; highlighting only when `interactive` and the theme is known.
    pub fn formatter(&self, theme: &str, interactive: bool) -> Formatter {
        if !interactive {
            return Formatter::new();
        }
        match ThemedHighlighter::from_theme(theme) {
            Some(h) => {
                let highlighter: Arc<dyn Highlighter> = Arc::new(h);
                Formatter::with_highlighter(Some(highlighter))
            }
            None => {
                warn!("unknown theme '{}', output not highlighted", theme);
                Formatter::new()
            }
        }
    }
}
