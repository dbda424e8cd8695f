//! Built-in roles with default permission sets.
//!
//! Five roles ship with the platform:
//!
//! | Role        | Description                                                |
//! |-------------|------------------------------------------------------------|
//! | ReadOnly    | Sign in, read the wiki, read projects                      |
//! | WikiEditor  | Wiki access only                                           |
//! | User        | Work on projects, corpora, classifiers, and the APIs       |
//! | Admin       | Everything a user can, plus project and ontology lifecycle |
//! | Superadmin  | Every catalog entry                                        |
//!
//! Each role also has an API variant: the same set minus the interactive
//! login capability, for credentials that only ever call the APIs.

use std::collections::HashSet;

use super::catalog::Permission;

/// Built-in role templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    ReadOnly,
    WikiEditor,
    User,
    Admin,
    Superadmin,
}

impl Role {
    /// Get the role identifier string.
    pub fn id(&self) -> &'static str {
        match self {
            Self::ReadOnly => "read-only",
            Self::WikiEditor => "wiki-editor",
            Self::User => "user",
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
        }
    }

    /// Get the description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ReadOnly => "Sign in, read the wiki, and read projects",
            Self::WikiEditor => "Wiki access only",
            Self::User => "Work on projects, corpora, classifiers, and the APIs",
            Self::Admin => "Everything a user can, plus project and ontology lifecycle",
            Self::Superadmin => "Every catalog entry",
        }
    }

    /// Return the set of permissions granted by this role.
    ///
    /// Role sets are closed over fixed subsets of the catalog: `User`
    /// extends `WikiEditor` and `Admin` extends `User`, so the superset
    /// chain Superadmin > Admin > User > WikiEditor holds by
    /// construction. Pure and idempotent.
    pub fn permissions(&self) -> HashSet<Permission> {
        match self {
            Self::ReadOnly => HashSet::from([
                Permission::Login,
                Permission::WikiRead,
                Permission::ProjectRead,
            ]),
            Self::WikiEditor => HashSet::from([Permission::WikiRead]),
            Self::User => {
                let mut permissions = Self::WikiEditor.permissions();
                permissions.extend([
                    Permission::Login,
                    Permission::ProjectRead,
                    Permission::ProjectWrite,
                    Permission::CorpusCreate,
                    Permission::CorpusRead,
                    Permission::CorpusWrite,
                    Permission::CorpusDelete,
                    Permission::ApiRead,
                    Permission::ApiWrite,
                    Permission::Dashboard,
                    Permission::ClassifierCreate,
                    Permission::ClassifierRead,
                    Permission::ClassifierWrite,
                    Permission::ClassifierDelete,
                    Permission::WorkflowAssign,
                ]);
                permissions
            }
            Self::Admin => {
                let mut permissions = Self::User.permissions();
                permissions.extend([
                    Permission::Publish,
                    Permission::SparqlUpdate,
                    Permission::OntologiesCreate,
                    Permission::OntologiesRead,
                    Permission::OntologiesWrite,
                    Permission::OntologiesDelete,
                    Permission::ProjectCreate,
                    Permission::ProjectDelete,
                    Permission::ProjectGroups,
                    Permission::ProjectHistoryDelete,
                    Permission::ProjectLinking,
                    Permission::SchemaSettings,
                    Permission::WorkflowConfigure,
                    Permission::WorkflowUpdate,
                    Permission::InschemeSettings,
                    Permission::SkosxlSettings,
                    Permission::Collaboration,
                    Permission::UriSettings,
                    Permission::UriEdit,
                    Permission::LinkedData,
                    Permission::QualitySettings,
                    Permission::ProjectAdvancedConfig,
                    Permission::ProjectNotifications,
                ]);
                permissions
            }
            Self::Superadmin => Permission::ALL.iter().copied().collect(),
        }
    }

    /// The same set minus the interactive login capability.
    pub fn api_permissions(&self) -> HashSet<Permission> {
        let mut permissions = self.permissions();
        permissions.remove(&Permission::Login);
        permissions
    }

    /// Return all built-in roles.
    pub fn all() -> Vec<Role> {
        vec![
            Self::ReadOnly,
            Self::WikiEditor,
            Self::User,
            Self::Admin,
            Self::Superadmin,
        ]
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
