//! Permission catalog: the fixed table of authorization scopes and the
//! built-in roles assembled from it.
//!
//! The catalog is immutable after compile time and safe to share; nothing
//! in it performs I/O or requires synchronization.

pub mod catalog;
pub mod roles;

pub use catalog::{Component, Permission, PermissionKind};
pub use roles::Role;
