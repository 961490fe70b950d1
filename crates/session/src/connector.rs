//! The connector seam and its shipped HTTP implementation.

use url::Url;

use crate::context::{LaunchContext, LaunchSettings};
use crate::handle::SessionHandle;
use crate::AuthResult;

/// Default connect endpoint of a locally-running SMART client agent.
pub const DEFAULT_AGENT_URL: &str = "http://127.0.0.1:8445/connect";

/// Establishes an authenticated session against a FHIR server.
///
/// The real handshake (authorization redirect, token exchange) lives behind
/// this trait, so the view can be wired to the shipped [`AgentConnector`] in
/// production and to canned implementations in tests. Call `establish` once
/// per process; repeated calls are not guaranteed supported.
#[async_trait::async_trait]
pub trait SessionConnector: Send + Sync {
    async fn establish(&self) -> AuthResult<SessionHandle>;
}

/// Connector that delegates the whole handshake to an external SMART client
/// agent over HTTP.
///
/// The agent receives the launch context as JSON and replies with the session
/// object it negotiated. This type performs no protocol work of its own: one
/// POST out, one opaque blob back, no retries.
pub struct AgentConnector {
    http: reqwest::Client,
    endpoint: Url,
    settings: LaunchSettings,
}

impl AgentConnector {
    /// Create a connector targeting `endpoint` with the given launch settings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AuthError::Transport`] if the HTTP client cannot be
    /// built.
    pub fn new(endpoint: Url, settings: LaunchSettings) -> AuthResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint,
            settings,
        })
    }
}

#[async_trait::async_trait]
impl SessionConnector for AgentConnector {
    /// Resolve the launch context and relay it to the client agent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AuthError`] if:
    /// - the launch context is missing or malformed,
    /// - the agent cannot be reached,
    /// - the agent answers with a non-success status, or
    /// - the agent's reply is not valid JSON.
    async fn establish(&self) -> AuthResult<SessionHandle> {
        let context = LaunchContext::resolve(&self.settings)?;

        tracing::debug!(iss = %context.iss, "delegating launch to client agent");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&context)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(crate::AuthError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let session: serde_json::Value = serde_json::from_str(&body)?;
        Ok(SessionHandle::from(session))
    }
}
