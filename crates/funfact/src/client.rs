use crate::error::{FetchError, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "https://uselessfacts.jsph.pl/api/v2/facts/random";
pub const DEFAULT_USER_AGENT: &str = "FunFactGenerator/1.0 (Rust)";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Returned in place of a fact when the response has no `text` field.
pub const MISSING_TEXT: &str = "No fact text found";

/// Anything that can produce one fact per call.
pub trait FactSource {
    fn fetch_fact(&self) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Blocking client for the random fact endpoint.
///
/// Holds only fixed configuration; every call to [`FactClient::fetch_fact`]
/// is an independent GET request.
#[derive(Debug, Clone)]
pub struct FactClient {
    http: Client,
    config: ClientConfig,
}

impl FactClient {
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Build)?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches one fact.
    ///
    /// Transport failures (DNS, connect, timeout, truncated body) map to
    /// [`FetchError::Network`], non-2xx statuses to [`FetchError::HttpStatus`],
    /// and bodies that are not a JSON object to [`FetchError::Parse`].
    pub fn fetch_fact(&self) -> Result<String> {
        let url = &self.config.endpoint;
        debug!(%url, "requesting fact");

        let response = self.http.get(url).send().map_err(|e| {
            warn!(error = %e, "fact request failed");
            FetchError::Network(e)
        })?;

        let status = response.status();
        debug!(%status, "fact response received");
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status,
                url: response.url().to_string(),
            });
        }

        let body = response.text().map_err(FetchError::Network)?;
        parse_fact(&body)
    }
}

impl FactSource for FactClient {
    fn fetch_fact(&self) -> Result<String> {
        FactClient::fetch_fact(self)
    }
}

#[derive(Debug, Deserialize)]
struct FactBody {
    #[serde(default)]
    text: Option<Value>,
}

/// Extracts the fact text from a response body.
pub fn parse_fact(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(FetchError::Parse(serde::de::Error::custom(
            "expected a JSON object",
        )));
    }

    let body: FactBody = serde_json::from_value(value)?;
    Ok(match body.text {
        Some(Value::String(text)) => text,
        None | Some(Value::Null) => MISSING_TEXT.to_string(),
        Some(other) => other.to_string(),
    })
}
