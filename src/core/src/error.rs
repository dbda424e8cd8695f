//! Error taxonomy for the authorization check flow.
//!
//! Each stage of the flow owns one variant. The bulk runner catches every
//! variant at the iteration boundary, logs it with iteration context, and
//! moves on; nothing here aborts a run. Malformed CLI invocations are
//! handled by clap before any of these can occur.

use thiserror::Error;

/// A specialized Result type for authorization check operations.
pub type Result<T> = std::result::Result<T, CheckError>;

/// Errors raised by the authorization check flow.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Password-grant login failed: bad credentials, a provider error
    /// response, or the identity provider was unreachable.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The UMA ticket request was denied or the authorization server
    /// could not be reached.
    #[error("authorization request failed: {0}")]
    Authorization(String),

    /// RPT introspection against the protection API failed.
    #[error("token introspection failed: {0}")]
    Introspection(String),

    /// The authorization client descriptor could not be read or parsed.
    #[error("invalid client descriptor: {0}")]
    Descriptor(String),

    /// Configuration was missing or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CheckError {
    /// Stable stage label for log fields and metrics.
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Authentication(_) => "authentication",
            Self::Authorization(_) => "authorization",
            Self::Introspection(_) => "introspection",
            Self::Descriptor(_) => "descriptor",
            Self::Configuration(_) => "configuration",
        }
    }

    /// Whether the error came from one of the three network stages.
    pub const fn is_network_stage(&self) -> bool {
        matches!(
            self,
            Self::Authentication(_) | Self::Authorization(_) | Self::Introspection(_)
        )
    }
}

/// Classify a transport-level failure into a short reason suitable for a
/// stage-specific error message.
pub(crate) fn transport_reason(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        "failed to connect to the provider".to_string()
    } else if let Some(status) = error.status() {
        format!("provider returned {}", status)
    } else {
        error.to_string()
    }
}

impl From<config::ConfigError> for CheckError {
    fn from(error: config::ConfigError) -> Self {
        let message = match &error {
            config::ConfigError::NotFound(key) => format!("required value not found: {}", key),
            config::ConfigError::FileParse { .. } | config::ConfigError::PathParse(_) => {
                format!("configuration file is invalid: {}", error)
            }
            _ => error.to_string(),
        };
        Self::Configuration(message)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_labels() {
        assert_eq!(CheckError::Authentication(String::new()).stage(), "authentication");
        assert_eq!(CheckError::Authorization(String::new()).stage(), "authorization");
        assert_eq!(CheckError::Introspection(String::new()).stage(), "introspection");
        assert_eq!(CheckError::Descriptor(String::new()).stage(), "descriptor");
        assert_eq!(CheckError::Configuration(String::new()).stage(), "configuration");
    }

    #[test]
    fn test_network_stage_classification() {
        assert!(CheckError::Authentication("x".into()).is_network_stage());
        assert!(CheckError::Authorization("x".into()).is_network_stage());
        assert!(CheckError::Introspection("x".into()).is_network_stage());
        assert!(!CheckError::Descriptor("x".into()).is_network_stage());
        assert!(!CheckError::Configuration("x".into()).is_network_stage());
    }

    #[test]
    fn test_display_includes_stage_context() {
        let error = CheckError::Authentication("token endpoint returned 401".into());
        assert_eq!(
            error.to_string(),
            "authentication failed: token endpoint returned 401"
        );
    }
}
