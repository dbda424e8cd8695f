//! # Authpulse Core
//!
//! Measures end-to-end OIDC/UMA authorization round-trips against an
//! external identity and authorization provider.
//!
//! ## Architecture
//!
//! - **Authorization flow**: password-grant login, UMA ticket exchange, and
//!   RPT introspection against the provider's token and protection endpoints
//! - **Permission catalog**: static scope table with role closures and
//!   reverse lookup
//! - **Bulk runner**: strictly sequential timed iterations with per-iteration
//!   fault isolation and an end-of-run report
//! - **Telemetry**: structured logging with token redaction

pub mod authz;
pub mod config;
pub mod error;
pub mod permissions;
pub mod runner;
pub mod telemetry;

pub use error::{CheckError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::authz::{
        AuthzChecker, ClientDescriptor, IntrospectionResponse, PermissionRecord, TokenResponse,
    };
    pub use crate::config::{Config, IdentityConfig, RunnerConfig};
    pub use crate::error::{CheckError, Result};
    pub use crate::permissions::{Component, Permission, PermissionKind, Role};
    pub use crate::runner::{BulkRunner, IterationOutcome, RunReport};
    pub use crate::telemetry::{init_logging, LogFormat, LoggingConfig};
}
