//! SMART on FHIR session boundary for the starter app.
//!
//! This crate owns the narrow contract between the starter and the external
//! SMART client agent that performs the real launch/authorization handshake:
//! - opaque session and resource carriers ([`SessionHandle`], [`Resource`])
//! - the validated launch context and its startup resolution
//! - the [`SessionConnector`] trait plus the shipped [`AgentConnector`]
//!   implementation that delegates the whole handshake over HTTP
//!
//! The authorization flow itself (launch-context negotiation, token exchange,
//! redirect state) is NOT implemented here. This crate only carries the
//! launch parameters out and an opaque session blob back.

pub mod connector;
pub mod context;
pub mod handle;

// Re-export facades
pub use connector::{AgentConnector, SessionConnector, DEFAULT_AGENT_URL};
pub use context::{LaunchContext, LaunchSettings};
pub use handle::{Resource, SessionHandle};

/// Errors returned by the session boundary.
///
/// A single taxonomy covers everything the connector can reject: missing or
/// malformed launch context, transport failures, and authorization denials
/// relayed from the client agent.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("launch context missing: {0}")]
    MissingLaunchContext(String),

    #[error("invalid issuer URL: {0}")]
    InvalidIssuer(#[from] url::ParseError),

    #[error("insecure issuer URL: {0}")]
    InsecureIssuer(String),

    #[error("authorization rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed session payload: {0}")]
    MalformedSession(#[from] serde_json::Error),
}

/// Type alias for Results that can fail with an [`AuthError`].
pub type AuthResult<T> = Result<T, AuthError>;
