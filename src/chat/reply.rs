use std::time::Duration;

use serde_json::json;

use crate::error::ChatError;

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Where bot replies go
pub(crate) trait ReplySink {
    fn send(&mut self, content: &str) -> Result<(), ChatError>;
}

/// Prints replies, one per line
pub(crate) struct StdoutSink;

impl ReplySink for StdoutSink {
    fn send(&mut self, content: &str) -> Result<(), ChatError> {
        println!("{content}");
        Ok(())
    }
}

/// Posts replies to a chat channel through an incoming webhook
pub(crate) struct WebhookSink {
    agent: ureq::Agent,
    url: String,
}

impl WebhookSink {
    pub(crate) fn new(url: &str) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(WEBHOOK_TIMEOUT))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            url: url.to_string(),
        }
    }
}

impl ReplySink for WebhookSink {
    fn send(&mut self, content: &str) -> Result<(), ChatError> {
        let response = self
            .agent
            .post(&self.url)
            .send_json(json!({"content": content}))
            .map_err(ChatError::Webhook)?;
        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            tracing::debug!(status, chars = content.chars().count(), "posted reply");
            Ok(())
        } else {
            Err(ChatError::WebhookStatus { status })
        }
    }
}
