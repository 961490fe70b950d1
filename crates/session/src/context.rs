//! Launch context resolution.
//!
//! The launch parameters arrive as ambient process configuration (`SMART_ISS`
//! and `SMART_LAUNCH`). They are read once at startup into [`LaunchSettings`]
//! and validated into a [`LaunchContext`] only when the connector needs them,
//! so a missing or malformed launch surfaces as an [`AuthError`] on the
//! connect path rather than aborting the process.

use serde::Serialize;
use url::Url;

use crate::{AuthError, AuthResult};

/// Raw launch configuration as resolved at process startup.
///
/// Both values are optional here; validation happens in
/// [`LaunchContext::resolve`].
#[derive(Clone, Debug, Default)]
pub struct LaunchSettings {
    /// Issuer URL identifying the FHIR server that launched the app.
    pub iss: Option<String>,
    /// Opaque launch token minted by the EHR or launch simulator.
    pub launch: Option<String>,
}

/// Validated launch parameters handed to the client agent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LaunchContext {
    pub iss: Url,
    pub launch: String,
}

impl LaunchContext {
    /// Validate raw settings into a usable launch context.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if:
    /// - either `iss` or `launch` is absent or blank,
    /// - `iss` does not parse as a URL, or
    /// - `iss` is neither HTTPS nor a loopback HTTP address.
    pub fn resolve(settings: &LaunchSettings) -> AuthResult<Self> {
        let iss = non_blank(settings.iss.as_deref())
            .ok_or_else(|| AuthError::MissingLaunchContext("iss".into()))?;
        let launch = non_blank(settings.launch.as_deref())
            .ok_or_else(|| AuthError::MissingLaunchContext("launch".into()))?;

        let iss = Url::parse(iss)?;
        validate_https_or_loopback(&iss)?;

        Ok(Self {
            iss,
            launch: launch.to_owned(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Launch issuers must be HTTPS; plain HTTP is allowed for loopback only.
fn validate_https_or_loopback(url: &Url) -> AuthResult<()> {
    if url.scheme() == "https" {
        return Ok(());
    }
    if url.scheme() == "http" {
        if let Some(host) = url.host_str() {
            // IPv6 hosts come back bracketed.
            let host = host.trim_start_matches('[').trim_end_matches(']');
            if host.eq_ignore_ascii_case("localhost") || host == "127.0.0.1" || host == "::1" {
                return Ok(());
            }
        }
    }
    Err(AuthError::InsecureIssuer(url.to_string()))
}
