use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use crate::config::Config;
use crate::error::LookupError;
use crate::generator::{AssociationLookup, Associations};

/// Client for the Twinword word-associations API (via RapidAPI).
pub struct TwinwordClient {
    url: String,
    host: String,
    api_key: Option<String>,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct AssociationsResponse {
    result_code: String,
    #[serde(default)]
    result_msg: Option<String>,
    #[serde(default)]
    associations_scored: Option<HashMap<String, f64>>,
}

impl TwinwordClient {
    pub fn new(url: &str, host: &str, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            url: url.to_string(),
            host: host.to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.api_url,
            &config.api_host,
            config.effective_api_key().map(str::to_string),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    #[cfg(feature = "network")]
    fn post_entry(&self, api_key: &str, word: &str) -> Result<(u16, String), LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        let response = client
            .post(&self.url)
            .header("x-rapidapi-host", &self.host)
            .header("x-rapidapi-key", api_key)
            .form(&[("entry", word)])
            .send()
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        Ok((status, body))
    }

    #[cfg(not(feature = "network"))]
    fn post_entry(&self, _api_key: &str, _word: &str) -> Result<(u16, String), LookupError> {
        Err(LookupError::NetworkDisabled)
    }
}

impl AssociationLookup for TwinwordClient {
    fn lookup(&self, word: &str) -> Result<Associations, LookupError> {
        let api_key = self.api_key.as_deref().ok_or(LookupError::MissingApiKey)?;
        tracing::debug!(word, url = %self.url, "requesting associations");
        let (status, body) = self.post_entry(api_key, word)?;
        parse_response(status, &body)
    }
}

/// Turn an HTTP status and body into associations or the reason there are none.
pub fn parse_response(status: u16, body: &str) -> Result<Associations, LookupError> {
    if !(200..300).contains(&status) {
        return Err(LookupError::Status(status));
    }
    let parsed: AssociationsResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))?;
    if parsed.result_code != "200" {
        return Err(LookupError::Api {
            code: parsed.result_code,
            message: parsed.result_msg.unwrap_or_default(),
        });
    }
    Ok(parsed.associations_scored.unwrap_or_default())
}
