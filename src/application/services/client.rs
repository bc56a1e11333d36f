//! API client: builds, signs and sends one request, decodes the answer

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::application::signing::sign;
use crate::application::{ApiError, ApplicationError, ApplicationResult};
use crate::config::{Profile, ResponseFormat};
use crate::domain::{ApiRequest, Payload, XmlDocument};
use crate::infrastructure::traits::{HttpRequest, HttpResponse, Transport};

const EXPIRES_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const SIGNATURE_VERSION: &str = "3";

/// Client for one profile. Every `invoke` is exactly one round trip.
pub struct ApiClient {
    profile: Arc<Profile>,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(profile: Arc<Profile>, transport: Arc<dyn Transport>) -> Self {
        Self { profile, transport }
    }

    pub fn response_format(&self) -> ResponseFormat {
        self.profile.response
    }

    /// Send `request` and decode the result.
    ///
    /// Non-200 statuses and undecodable bodies become [`ApiError`]; failures
    /// without any HTTP response become [`ApplicationError::Transport`].
    #[instrument(level = "debug", skip_all, fields(command = request.name()))]
    pub fn invoke(&self, request: &ApiRequest) -> ApplicationResult<Payload> {
        let http = self.build(request)?;
        let response = self
            .transport
            .send(&http)
            .map_err(|source| ApplicationError::Transport {
                endpoint: self.profile.endpoint.clone(),
                source,
            })?;
        debug!("invoke: HTTP {}", response.status);

        match self.profile.response {
            ResponseFormat::Json => self.decode_json(request.name(), response),
            ResponseFormat::Xml => decode_xml(response),
        }
    }

    /// Wire parameters with credentials, expiry and signature.
    fn build(&self, request: &ApiRequest) -> ApplicationResult<HttpRequest> {
        let mut params: BTreeMap<String, String> = request.params.to_wire();
        params.insert("command".into(), request.name().into());
        params.insert("apiKey".into(), self.profile.key.clone());
        params.insert("response".into(), self.profile.response.as_str().into());

        if let Some(expiration) = self.profile.expiration {
            let expiration = chrono::Duration::from_std(expiration)
                .map_err(|e| ApplicationError::Signing(e.to_string()))?;
            let expires = (Utc::now() + expiration).format(EXPIRES_FORMAT).to_string();
            params.insert("signatureVersion".into(), SIGNATURE_VERSION.into());
            params.insert("expires".into(), expires);
        }

        debug!(
            "build: params {:?}",
            params.keys().map(String::as_str).collect::<Vec<_>>()
        );
        let signature = sign(&params, &self.profile.secret)?;
        params.insert("signature".into(), signature);

        Ok(HttpRequest {
            method: self.profile.method,
            url: self.profile.endpoint.clone(),
            params: params.into_iter().collect(),
        })
    }

    /// Decode a JSON answer and unwrap its single `<command>response` key.
    fn decode_json(&self, command: &str, response: HttpResponse) -> ApplicationResult<Payload> {
        let data: Value = match serde_json::from_str(&response.body) {
            Ok(data) => data,
            Err(e) => {
                return Err(ApiError {
                    status: response.status,
                    hint: Some(format!(
                        "{}. Make sure endpoint URL '{}' is correct.",
                        e, self.profile.endpoint
                    )),
                    body: response.body,
                }
                .into())
            }
        };

        if response.status != 200 {
            return Err(ApiError {
                status: response.status,
                body: response.body,
                hint: None,
            }
            .into());
        }

        let data = match data {
            Value::Object(mut map) if map.len() == 1 => {
                let expected = format!("{}response", command.to_lowercase());
                let key = map.keys().next().cloned().unwrap_or_default();
                if key != expected {
                    debug!("decode_json: unwrapping unexpected key {}", key);
                }
                map.remove(&key).unwrap_or(Value::Null)
            }
            other => other,
        };
        Ok(Payload::Json(data))
    }
}

fn decode_xml(response: HttpResponse) -> ApplicationResult<Payload> {
    if response.status != 200 {
        return Err(ApiError {
            status: response.status,
            body: response.body,
            hint: None,
        }
        .into());
    }
    match XmlDocument::parse(response.body.as_str()) {
        Ok(doc) => Ok(Payload::Xml(doc)),
        Err(e) => Err(ApiError {
            status: response.status,
            hint: Some(e.to_string()),
            body: response.body,
        }
        .into()),
    }
}
