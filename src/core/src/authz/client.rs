//! HTTP client for the identity and authorization providers.
//!
//! Implements the four-step check: password-grant login, UMA ticket
//! exchange, RPT introspection, and the view-scope filter. Tokens live
//! for a single check; nothing is cached or reused between calls.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::descriptor::ClientDescriptor;
use crate::config::IdentityConfig;
use crate::error::{transport_reason, CheckError, Result};
use crate::permissions::Permission;
use crate::telemetry::token_preview;

/// UMA grant type for exchanging an access token for an RPT.
const UMA_TICKET_GRANT: &str = "urn:ietf:params:oauth:grant-type:uma-ticket";

/// Token type hint the protection API expects for RPT introspection.
const RPT_TOKEN_HINT: &str = "requesting_party_token";

// ═══════════════════════════════════════════════════════════════════════════════
// Wire Types
// ═══════════════════════════════════════════════════════════════════════════════

/// Response from the OIDC token endpoint. The password grant and the UMA
/// grant both return this shape; for the UMA grant `access_token` carries
/// the RPT.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: String,
}

/// One granted permission from RPT introspection.
#[derive(Debug, Clone, Deserialize)]
pub struct PermissionRecord {
    /// Name of the resource the permission applies to
    #[serde(rename = "rsname")]
    pub resource_name: String,

    /// Scopes granted on that resource
    #[serde(default)]
    pub scopes: Vec<String>,
}

/// Response from the protection-API introspection endpoint.
#[derive(Debug, Deserialize)]
pub struct IntrospectionResponse {
    pub active: bool,
    #[serde(default)]
    pub permissions: Vec<PermissionRecord>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Checker
// ═══════════════════════════════════════════════════════════════════════════════

/// Drives one end-to-end authorization check against the providers.
#[derive(Debug)]
pub struct AuthzChecker {
    client: Client,
    identity: IdentityConfig,
    descriptor: ClientDescriptor,
}

impl AuthzChecker {
    /// Create a checker for the given identity provider and authorization
    /// client descriptor.
    pub fn new(identity: IdentityConfig, descriptor: ClientDescriptor) -> Result<Self> {
        let client = Client::builder()
            .timeout(identity.timeout)
            .build()
            .map_err(|e| CheckError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            identity,
            descriptor,
        })
    }

    fn login_endpoint(&self) -> String {
        format!(
            "{}/realms/{}/protocol/openid-connect/token",
            self.identity.server_url.trim_end_matches('/'),
            self.identity.realm
        )
    }

    /// Obtain an access token via the OIDC password grant.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let url = self.login_endpoint();
        let response = self
            .client
            .post(&url)
            .form(&[
                ("grant_type", "password"),
                ("client_id", self.identity.client_id.as_str()),
                ("client_secret", self.identity.client_secret.as_str()),
                ("username", username),
                ("password", password),
            ])
            .send()
            .await
            .map_err(|e| CheckError::Authentication(transport_reason(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CheckError::Authentication(format!(
                "token endpoint returned {}: {}",
                status, body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CheckError::Authentication(format!("malformed token response: {}", e)))?;

        debug!(token = %token_preview(&token.access_token), "obtained access token");
        Ok(token.access_token)
    }

    /// Exchange an access token for an authorization ticket (RPT) scoped
    /// to a single permission scope.
    pub async fn authorize(&self, access_token: &str, scope: &str) -> Result<String> {
        let url = self.descriptor.token_endpoint();
        let permission = format!("#{}", scope);
        let response = self
            .client
            .post(&url)
            .bearer_auth(access_token)
            .form(&[
                ("grant_type", UMA_TICKET_GRANT),
                ("audience", self.descriptor.resource.as_str()),
                ("permission", permission.as_str()),
            ])
            .send()
            .await
            .map_err(|e| CheckError::Authorization(transport_reason(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CheckError::Authorization(format!(
                "authorization server returned {}: {}",
                status, body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CheckError::Authorization(format!("malformed RPT response: {}", e)))?;

        debug!(rpt = %token_preview(&token.access_token), "obtained authorization ticket");
        Ok(token.access_token)
    }

    /// Introspect an RPT against the protection API and return the full
    /// list of granted permission records.
    pub async fn introspect(&self, rpt: &str) -> Result<Vec<PermissionRecord>> {
        let url = self.descriptor.introspection_endpoint();
        let response = self
            .client
            .post(&url)
            .basic_auth(
                &self.descriptor.resource,
                Some(&self.descriptor.credentials.secret),
            )
            .form(&[("token_type_hint", RPT_TOKEN_HINT), ("token", rpt)])
            .send()
            .await
            .map_err(|e| CheckError::Introspection(transport_reason(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CheckError::Introspection(format!(
                "protection API returned {}: {}",
                status, body
            )));
        }

        let introspection: IntrospectionResponse = response.json().await.map_err(|e| {
            CheckError::Introspection(format!("malformed introspection response: {}", e))
        })?;

        if !introspection.active {
            return Err(CheckError::Introspection(
                "authorization ticket is no longer active".to_string(),
            ));
        }

        Ok(introspection.permissions)
    }

    /// Run the full flow and resolve the projects the user may view, in
    /// the order the provider returned them.
    pub async fn visible_projects(&self, username: &str, password: &str) -> Result<Vec<String>> {
        debug!(username, "requesting access token");
        let access_token = self.login(username, password).await?;

        let scope = Permission::ProjectView.scope();
        debug!(scope, "exchanging access token for an authorization ticket");
        let rpt = self.authorize(&access_token, scope).await?;

        debug!("introspecting authorization ticket");
        let permissions = self.introspect(&rpt).await?;

        let projects: Vec<String> = permissions
            .into_iter()
            .filter(|record| record.scopes.iter().any(|s| s == scope))
            .map(|record| record.resource_name)
            .collect();

        debug!(?projects, "resolved visible projects");
        Ok(projects)
    }
}
