//! HTTP access to the bug tracker's search endpoint.

use std::io::Read;
use std::time::Duration;

use crate::error::Error;
use crate::queries::Category;

pub(crate) struct BugzillaClient {
    agent: ureq::Agent,
    endpoint: String,
    api_key: String,
}

impl BugzillaClient {
    pub(crate) fn new(base_url: &str, api_key: &str, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            agent,
            endpoint: format!("{}/bug", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        }
    }

    /// One GET attempt for one category. Returns the raw body; transport
    /// errors and non-2xx statuses map to the retryable `Http` variant.
    pub(crate) fn fetch_raw(&self, category: Category) -> Result<String, Error> {
        let mut request = self.agent.get(&self.endpoint);
        for (key, value) in category.query().params() {
            request = request.query(key, value);
        }
        for (key, value) in self.auth_params() {
            request = request.query(key, value);
        }

        let response = request.call().map_err(|e| Error::Http {
            category: category.label(),
            source: Box::new(e),
        })?;

        let mut body = String::new();
        response
            .into_body()
            .as_reader()
            .read_to_string(&mut body)
            .map_err(|e| Error::Http {
                category: category.label(),
                source: Box::new(ureq::Error::Io(e)),
            })?;
        Ok(body)
    }

    fn auth_params(&self) -> [(&'static str, String); 2] {
        [
            ("api_key", self.api_key.clone()),
            ("restriclogin", "true".to_string()),
        ]
    }
}
