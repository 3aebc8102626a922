//! Discord dispatch -- slash-command interactions and plain channel messages.
//!
//! Every nudge is one application-command interaction posted to the
//! interactions endpoint; the startup "online" message is a plain channel
//! message. 2xx (including 204) counts as delivered, anything else is a
//! [`NotifyError::Status`].

use chrono::Utc;
use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

use crate::error::NotifyError;
use crate::storage::{CommandConfig, TargetConfig};

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";
const USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10; K) AppleWebKit/537.36";

/// Seam between the executor and the wire. One call per tag.
pub trait NudgeSink {
    fn send_nudge(
        &self,
        tag: &str,
    ) -> impl std::future::Future<Output = Result<(), NotifyError>> + Send;
}

/// Authenticated Discord client bound to one target channel and command.
pub struct DiscordClient {
    http: Client,
    api_base: String,
    token: String,
    command: CommandConfig,
    target: TargetConfig,
}

impl DiscordClient {
    pub fn new(token: String, command: CommandConfig, target: TargetConfig) -> Self {
        Self::with_api_base(token, command, target, DISCORD_API_BASE.to_string())
    }

    /// Same as [`new`](Self::new) but against a custom API base URL.
    pub fn with_api_base(
        token: String,
        command: CommandConfig,
        target: TargetConfig,
        api_base: String,
    ) -> Self {
        Self {
            http: Client::new(),
            api_base,
            token,
            command,
            target,
        }
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<(), NotifyError> {
        let resp = self
            .http
            .post(format!("{}{path}", self.api_base))
            .header("Authorization", &self.token)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "*/*")
            .header("Origin", "https://discord.com")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(NotifyError::Status {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            })
        }
    }

    /// Post one plain message to a channel (startup notification).
    pub async fn send_message(&self, channel_id: &str, content: &str) -> Result<(), NotifyError> {
        self.post(
            &format!("/channels/{channel_id}/messages"),
            json!({ "content": content }),
        )
        .await
    }

    /// Dispatch the nudge command for one tag as a slash-command interaction.
    pub async fn send_nudge_interaction(&self, tag: &str) -> Result<(), NotifyError> {
        let session_id = Uuid::new_v4().simple().to_string();
        let nonce = Utc::now().timestamp_micros().to_string();

        let payload = json!({
            "type": 2,
            "application_id": self.command.application_id,
            "guild_id": self.target.guild_id,
            "channel_id": self.target.channel_id,
            "session_id": session_id,
            "data": {
                "version": self.command.version,
                "id": self.command.id,
                "name": self.command.name,
                "type": 1,
                "options": [{ "type": 3, "name": "tag", "value": tag }],
            },
            "nonce": nonce,
            "analytics_location": "slash_ui",
        });

        self.post("/interactions", payload).await
    }
}

impl NudgeSink for DiscordClient {
    async fn send_nudge(&self, tag: &str) -> Result<(), NotifyError> {
        self.send_nudge_interaction(tag).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_base: String) -> DiscordClient {
        DiscordClient::with_api_base(
            "test-token".into(),
            CommandConfig::default(),
            TargetConfig::default(),
            api_base,
        )
    }

    #[tokio::test]
    async fn nudge_interaction_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/interactions")
            .match_header("authorization", "test-token")
            .with_status(204)
            .create_async()
            .await;

        let result = client(server.url()).send_nudge_interaction("feed").await;
        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn nudge_interaction_rejection_is_a_status_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/interactions")
            .with_status(401)
            .with_body("unauthorized")
            .create_async()
            .await;

        let err = client(server.url())
            .send_nudge_interaction("tame")
            .await
            .unwrap_err();
        match err {
            NotifyError::Status { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "unauthorized");
            }
            other => panic!("expected status error, got {other}"),
        }
    }

    #[tokio::test]
    async fn startup_message_targets_the_channel() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/channels/123/messages")
            .match_body(mockito::Matcher::Json(json!({ "content": "hi" })))
            .with_status(200)
            .create_async()
            .await;

        let result = client(server.url()).send_message("123", "hi").await;
        assert!(result.is_ok());
        mock.assert_async().await;
    }
}
