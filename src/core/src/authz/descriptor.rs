//! Authorization client descriptor.
//!
//! A JSON resource, in the provider's installation format, describing the
//! authorization server and the resource client this tool acts for:
//!
//! ```json
//! {
//!   "auth-server-url": "https://login.example.com",
//!   "realm": "acme",
//!   "resource": "workbench",
//!   "credentials": { "secret": "..." }
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::error::{CheckError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct ClientDescriptor {
    /// Base URL of the authorization server
    #[serde(rename = "auth-server-url")]
    pub auth_server_url: String,

    /// Realm holding the authorization policy
    pub realm: String,

    /// Client identifier of the resource server the permissions live on
    pub resource: String,

    /// Credentials for the protection API
    pub credentials: ClientCredentials,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientCredentials {
    pub secret: String,
}

impl ClientDescriptor {
    /// Read and parse a descriptor from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CheckError::Descriptor(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    /// Parse a descriptor from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| CheckError::Descriptor(e.to_string()))
    }

    /// The OIDC token endpoint of the authorization server.
    pub fn token_endpoint(&self) -> String {
        format!(
            "{}/realms/{}/protocol/openid-connect/token",
            self.auth_server_url.trim_end_matches('/'),
            self.realm
        )
    }

    /// The protection-API introspection endpoint.
    pub fn introspection_endpoint(&self) -> String {
        format!("{}/introspect", self.token_endpoint())
    }
}
