//! Client for the hosted report-generation endpoint.
//!
//! One POST per work order, no retry. Any failure, from a missing API key
//! to a malformed response, degrades to the deterministic fallback string
//! so the caller always gets a usable report line.

use anyhow::{anyhow, bail, Result};
use log::{debug, warn};
use std::time::Duration;

use crate::config::API_KEY_VAR;

pub struct ReportClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ReportClient {
    pub fn new(endpoint: String) -> Self {
        Self::with_api_key(endpoint, std::env::var(API_KEY_VAR).ok())
    }

    pub fn with_api_key(endpoint: String, api_key: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("plantlog/0.1")
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            endpoint,
            api_key,
        }
    }

    /// One-line maintenance report for the given work order fields. Never
    /// fails; remote trouble of any kind yields [`fallback_report`].
    pub async fn generate(
        &self,
        unit: &str,
        machine: &str,
        technician: &str,
        issue: &str,
    ) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("{} not set, using fallback report", API_KEY_VAR);
            return fallback_report(technician, issue);
        };

        match self.request(api_key, unit, machine, technician, issue).await {
            Ok(text) => text,
            Err(err) => {
                warn!("Report generation failed, using fallback: {:#}", err);
                fallback_report(technician, issue)
            }
        }
    }

    async fn request(
        &self,
        api_key: &str,
        unit: &str,
        machine: &str,
        technician: &str,
        issue: &str,
    ) -> Result<String> {
        let prompt = build_prompt(unit, machine, technician, issue);
        let payload = serde_json::json!({
            "inputs": prompt,
            "parameters": {
                "max_new_tokens": 100,
                "temperature": 0.7,
                "return_full_text": false,
            }
        });

        debug!("Requesting report from {}", self.endpoint);
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            bail!("Inference endpoint returned {}", status);
        }

        let body: serde_json::Value = response.json().await?;
        let text = body
            .get(0)
            .and_then(|entry| entry.get("generated_text"))
            .and_then(|text| text.as_str())
            .ok_or_else(|| anyhow!("Response has no generated_text field"))?;

        Ok(text.trim().to_string())
    }
}

/// Deterministic report used whenever the remote call cannot deliver one.
pub fn fallback_report(technician: &str, issue: &str) -> String {
    format!("Issue reported and solved by {}: {}", technician, issue)
}

fn build_prompt(unit: &str, machine: &str, technician: &str, issue: &str) -> String {
    format!(
        "You are an expert electrical maintenance engineer. Generate a \
         **concise and professional** one-line report based on the following details:\n\
         Unit: {}\n\
         Machine: {}\n\
         Technician Name: {}\n\
         Issue Reported: {}\n\
         - Keep it one line only.",
        unit, machine, technician, issue
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_deterministic() {
        let expected = "Issue reported and solved by John Doe: High temperature issue";
        assert_eq!(fallback_report("John Doe", "High temperature issue"), expected);
        assert_eq!(fallback_report("John Doe", "High temperature issue"), expected);
    }

    #[test]
    fn prompt_embeds_all_fields() {
        let prompt = build_prompt("Unit 5", "Compressor A1", "John Doe", "High temperature issue");
        assert!(prompt.contains("Unit: Unit 5"));
        assert!(prompt.contains("Machine: Compressor A1"));
        assert!(prompt.contains("Technician Name: John Doe"));
        assert!(prompt.contains("Issue Reported: High temperature issue"));
    }

    #[tokio::test]
    async fn missing_api_key_takes_fallback() {
        let client =
            ReportClient::with_api_key("http://127.0.0.1:9/inference".to_string(), None);
        let report = client
            .generate("Unit 5", "Compressor A1", "John Doe", "High temperature issue")
            .await;
        assert_eq!(
            report,
            "Issue reported and solved by John Doe: High temperature issue"
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_takes_fallback() {
        // Port 9 (discard) refuses connections; the client must swallow the
        // transport error and fall back.
        let client = ReportClient::with_api_key(
            "http://127.0.0.1:9/inference".to_string(),
            Some("test-key".to_string()),
        );
        let report = client
            .generate("Unit 5", "Compressor A1", "John Doe", "High temperature issue")
            .await;
        assert_eq!(
            report,
            "Issue reported and solved by John Doe: High temperature issue"
        );
    }
}
