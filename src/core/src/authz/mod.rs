//! Clients for the external identity and authorization providers.
//!
//! Everything protocol-level (token issuance, permission evaluation,
//! cryptographic validation) happens on the provider side; this module
//! only drives the provider's HTTP endpoints and decodes the responses.

pub mod client;
pub mod descriptor;

pub use client::{AuthzChecker, IntrospectionResponse, PermissionRecord, TokenResponse};
pub use descriptor::{ClientCredentials, ClientDescriptor};
