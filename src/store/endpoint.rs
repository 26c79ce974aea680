use std::time::Duration;

use log::debug;

use crate::config::Config;
use crate::error::TaskdeckError;

/// Callback name sent with every read. The endpoint wraps its JSON reply in
/// `handleResponse(...)`; see [`unwrap_jsonp`].
pub const CALLBACK: &str = "handleResponse";

const TIMEOUT_SECS: u64 = 10;

/// Shared handle on the remote endpoint: base URL plus a reusable agent.
pub struct Endpoint {
    url: String,
    agent: ureq::Agent,
}

impl Endpoint {
    pub fn new(url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build();
        Self {
            url: url.into(),
            agent,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone())
    }

    /// Read via the JSONP convention: GET with `action`, extra query
    /// params, and a `callback` name, then strip the padding and parse.
    pub fn get_json(
        &self,
        action: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, TaskdeckError> {
        let mut request = self
            .agent
            .get(&self.url)
            .query("action", action)
            .query("callback", CALLBACK);
        for (key, value) in params {
            request = request.query(key, value);
        }
        debug!("GET action={action} params={params:?}");
        let body = request.call()?.into_string().map_err(|e| {
            TaskdeckError::transport(format!("Failed to read response body: {e}"))
        })?;
        let json = unwrap_jsonp(&body, CALLBACK)?;
        Ok(serde_json::from_str(json)?)
    }

    /// Write via a form-urlencoded POST. The outcome is observed: only a
    /// 2xx response counts as success, anything else is a transport error.
    pub fn post_form(&self, fields: &[(&str, &str)]) -> Result<(), TaskdeckError> {
        debug!("POST {} fields", fields.len());
        self.agent.post(&self.url).send_form(fields)?;
        Ok(())
    }
}

/// Strip the JSONP padding `callback(...)` (with an optional trailing `;`)
/// from a response body. A bare JSON body is passed through untouched.
pub fn unwrap_jsonp<'a>(body: &'a str, callback: &str) -> Result<&'a str, TaskdeckError> {
    let trimmed = body.trim();
    let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end();

    if let Some(rest) = trimmed.strip_prefix(callback) {
        let rest = rest.trim_start();
        if let Some(inner) = rest
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
        {
            return Ok(inner.trim());
        }
    }

    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return Ok(trimmed);
    }

    Err(TaskdeckError::transport(
        "Response is neither JSONP nor bare JSON",
    ))
}
