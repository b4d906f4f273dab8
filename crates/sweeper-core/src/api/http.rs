//! Blocking HTTP implementation of [`RestTransport`].

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::api::errors::ApiError;
use crate::api::transport::RestTransport;
use crate::api::types::{DeleteRequest, ListRequest};

/// Applied to every outbound request; a hung call would otherwise block the
/// whole run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Bearer-token authenticated client for the management surfaces.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    access_token: String,
}

impl HttpTransport {
    pub fn new(access_token: String) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            access_token,
        })
    }

    fn check_status(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // The body carries the structured error message; classification
        // (5xx, "Unexpected location") happens on it downstream.
        let message = response.text().unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

impl RestTransport for HttpTransport {
    fn list_page(
        &self,
        request: &ListRequest,
        page_token: Option<&str>,
    ) -> Result<Value, ApiError> {
        debug!(
            event = "core.api.list_page",
            url = request.url.as_str(),
            continuation = page_token.is_some()
        );

        let mut builder = self
            .client
            .get(&request.url)
            .bearer_auth(&self.access_token);
        if let Some(token) = page_token {
            builder = builder.query(&[("pageToken", token)]);
        }

        let response = Self::check_status(builder.send()?)?;
        response.json().map_err(|e| ApiError::Decode {
            message: e.to_string(),
        })
    }

    fn delete(&self, request: &DeleteRequest) -> Result<(), ApiError> {
        debug!(event = "core.api.delete", url = request.url.as_str());

        let response = self
            .client
            .delete(&request.url)
            .bearer_auth(&self.access_token)
            .send()?;
        Self::check_status(response)?;

        Ok(())
    }
}
