//! Blocking HTTP transport (reqwest)

use std::io;

use reqwest::blocking::Client;
use reqwest::{Certificate, Identity};
use tracing::{debug, instrument};

use crate::config::{HttpMethod, Profile, TlsVerify};
use crate::infrastructure::traits::{HttpRequest, HttpResponse, Transport};
use crate::infrastructure::{InfraError, InfraResult};

/// Transport backed by a blocking reqwest client configured from a profile.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a client with the profile's timeout and TLS settings.
    pub fn from_profile(profile: &Profile) -> InfraResult<Self> {
        let mut builder = Client::builder().timeout(profile.timeout);

        match &profile.verify {
            TlsVerify::Enabled => {}
            TlsVerify::Disabled => builder = builder.danger_accept_invalid_certs(true),
            TlsVerify::CaBundle(path) => {
                let pem = std::fs::read(path)
                    .map_err(|e| InfraError::io(format!("read CA bundle {}", path.display()), e))?;
                let cert = Certificate::from_pem(&pem).map_err(|e| InfraError::Http {
                    message: format!("invalid CA bundle {}: {}", path.display(), e),
                })?;
                builder = builder.add_root_certificate(cert);
            }
        }

        if let Some(path) = &profile.cert {
            let pem = std::fs::read(path).map_err(|e| {
                InfraError::io(format!("read client certificate {}", path.display()), e)
            })?;
            let identity = Identity::from_pem(&pem).map_err(|e| InfraError::Http {
                message: format!("invalid client certificate {}: {}", path.display(), e),
            })?;
            builder = builder.identity(identity);
        }

        let client = builder.build().map_err(|e| InfraError::Http {
            message: e.to_string(),
        })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    #[instrument(level = "debug", skip_all, fields(method = ?request.method, url = %request.url))]
    fn send(&self, request: &HttpRequest) -> io::Result<HttpResponse> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url).query(&request.params),
            HttpMethod::Post => self.client.post(&request.url).form(&request.params),
        };
        let response = builder.send().map_err(io::Error::other)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(io::Error::other)?;
        debug!("send: HTTP {} ({} bytes)", status, body.len());
        Ok(HttpResponse { status, body })
    }
}
