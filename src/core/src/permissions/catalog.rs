//! Static catalog of the authorization scopes known to the platform.
//!
//! Scope strings are wire constants: they appear verbatim in UMA
//! authorization requests and introspection responses, so they must never
//! be edited without a matching change on the authorization server.

use std::collections::HashSet;
use std::fmt;

/// Whether a permission applies platform-wide or to a single project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionKind {
    Global,
    Project,
}

/// The component that owns and enforces a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// The editing workbench
    Platform,
    /// The search dashboard
    Search,
}

/// A named authorization scope.
///
/// Invariant: every entry's scope string is unique, so [`Permission::from_scope`]
/// returns at most one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    RemoteSystems,
    Migration,
    AdminScripts,
    MetadataMove,
    CorpusLanguageModelSettings,
    SnapshotsWrite,
    UsersCreate,
    UsersRead,
    UsersWrite,
    UsersDelete,

    TriplesDelete,
    ProjectUserRoles,

    Publish,
    SparqlUpdate,

    OntologiesCreate,
    OntologiesRead,
    OntologiesWrite,
    OntologiesDelete,

    ProjectCreate,
    ProjectDelete,
    ProjectGroups,
    ProjectHistoryDelete,
    ProjectLinking,
    ProjectNotifications,

    SchemaSettings,

    WorkflowConfigure,
    WorkflowUpdate,
    WorkflowAssign,

    InschemeSettings,
    SkosxlSettings,
    Collaboration,
    UriSettings,
    UriEdit,
    LinkedData,
    QualitySettings,

    ProjectAdvancedConfig,

    Login,

    ApiRead,
    ApiWrite,

    CorpusCreate,
    CorpusRead,
    CorpusWrite,
    CorpusDelete,

    ProjectView,
    ProjectRead,
    ProjectWrite,

    ClassifierCreate,
    ClassifierRead,
    ClassifierWrite,
    ClassifierDelete,

    WikiRead,

    Dashboard,
    AdminDashboard,
}

impl Permission {
    /// Every catalog entry, in declaration order.
    pub const ALL: &'static [Permission] = &[
        Self::RemoteSystems,
        Self::Migration,
        Self::AdminScripts,
        Self::MetadataMove,
        Self::CorpusLanguageModelSettings,
        Self::SnapshotsWrite,
        Self::UsersCreate,
        Self::UsersRead,
        Self::UsersWrite,
        Self::UsersDelete,
        Self::TriplesDelete,
        Self::ProjectUserRoles,
        Self::Publish,
        Self::SparqlUpdate,
        Self::OntologiesCreate,
        Self::OntologiesRead,
        Self::OntologiesWrite,
        Self::OntologiesDelete,
        Self::ProjectCreate,
        Self::ProjectDelete,
        Self::ProjectGroups,
        Self::ProjectHistoryDelete,
        Self::ProjectLinking,
        Self::ProjectNotifications,
        Self::SchemaSettings,
        Self::WorkflowConfigure,
        Self::WorkflowUpdate,
        Self::WorkflowAssign,
        Self::InschemeSettings,
        Self::SkosxlSettings,
        Self::Collaboration,
        Self::UriSettings,
        Self::UriEdit,
        Self::LinkedData,
        Self::QualitySettings,
        Self::ProjectAdvancedConfig,
        Self::Login,
        Self::ApiRead,
        Self::ApiWrite,
        Self::CorpusCreate,
        Self::CorpusRead,
        Self::CorpusWrite,
        Self::CorpusDelete,
        Self::ProjectView,
        Self::ProjectRead,
        Self::ProjectWrite,
        Self::ClassifierCreate,
        Self::ClassifierRead,
        Self::ClassifierWrite,
        Self::ClassifierDelete,
        Self::WikiRead,
        Self::Dashboard,
        Self::AdminDashboard,
    ];

    /// The scope string sent to and returned by the authorization server.
    pub const fn scope(self) -> &'static str {
        match self {
            Self::RemoteSystems => "remote-systems",
            Self::Migration => "migration",
            Self::AdminScripts => "admin:scripts",
            Self::MetadataMove => "remote-systems.metadata",
            Self::CorpusLanguageModelSettings => "corpus-language-model-settings",
            Self::SnapshotsWrite => "snapshots:write",
            Self::UsersCreate => "users:create",
            Self::UsersRead => "users:read",
            Self::UsersWrite => "users:write",
            Self::UsersDelete => "users:delete",
            Self::TriplesDelete => "triples:delete",
            Self::ProjectUserRoles => "project.users:write",
            Self::Publish => "projects:publish",
            Self::SparqlUpdate => "projects:sparql-update",
            Self::OntologiesCreate => "ontologies:create",
            Self::OntologiesRead => "ontologies:read",
            Self::OntologiesWrite => "ontologies:write",
            Self::OntologiesDelete => "ontologies:delete",
            Self::ProjectCreate => "projects:create",
            Self::ProjectDelete => "projects:delete",
            Self::ProjectGroups => "project.groups",
            Self::ProjectHistoryDelete => "project-events:delete",
            Self::ProjectLinking => "projects:link",
            Self::ProjectNotifications => "project-notifications",
            Self::SchemaSettings => "project-customschema",
            Self::WorkflowConfigure => "workflows:configure",
            Self::WorkflowUpdate => "workflows:update",
            Self::WorkflowAssign => "workflows:assign",
            Self::InschemeSettings => "inscheme",
            Self::SkosxlSettings => "skosxl",
            Self::Collaboration => "collaboration",
            Self::UriSettings => "advanced-uri-settings",
            Self::UriEdit => "concepts:change-uri",
            Self::LinkedData => "opendata",
            Self::QualitySettings => "quality-settings",
            Self::ProjectAdvancedConfig => "projects:advanced-configure",
            Self::Login => "login",
            Self::ApiRead => "apis:read",
            Self::ApiWrite => "apis:write",
            Self::CorpusCreate => "corpora:create",
            Self::CorpusRead => "corpora:read",
            Self::CorpusWrite => "corpora:write",
            Self::CorpusDelete => "corpora:delete",
            Self::ProjectView => "projects:view",
            Self::ProjectRead => "projects:read",
            Self::ProjectWrite => "projects:write",
            Self::ClassifierCreate => "classifiers:create",
            Self::ClassifierRead => "classifiers:read",
            Self::ClassifierWrite => "classifiers:write",
            Self::ClassifierDelete => "classifiers:delete",
            Self::WikiRead => "wiki:read",
            Self::Dashboard => "dashboard",
            Self::AdminDashboard => "admin.dashboard",
        }
    }

    /// Whether the permission is platform-wide or scoped to one project.
    pub const fn kind(self) -> PermissionKind {
        match self {
            Self::TriplesDelete
            | Self::ProjectUserRoles
            | Self::ProjectGroups
            | Self::ProjectHistoryDelete
            | Self::ProjectLinking
            | Self::ProjectNotifications
            | Self::SchemaSettings
            | Self::WorkflowConfigure
            | Self::WorkflowUpdate
            | Self::WorkflowAssign
            | Self::InschemeSettings
            | Self::SkosxlSettings
            | Self::Collaboration
            | Self::UriSettings
            | Self::UriEdit
            | Self::LinkedData
            | Self::QualitySettings
            | Self::ProjectAdvancedConfig
            | Self::CorpusCreate
            | Self::CorpusRead
            | Self::CorpusWrite
            | Self::CorpusDelete
            | Self::ProjectView
            | Self::ProjectRead
            | Self::ProjectWrite
            | Self::ClassifierCreate
            | Self::ClassifierRead
            | Self::ClassifierWrite
            | Self::ClassifierDelete => PermissionKind::Project,
            _ => PermissionKind::Global,
        }
    }

    /// The component that enforces this permission.
    pub const fn component(self) -> Component {
        match self {
            Self::Dashboard | Self::AdminDashboard => Component::Search,
            _ => Component::Platform,
        }
    }

    pub const fn is_global(self) -> bool {
        matches!(self.kind(), PermissionKind::Global)
    }

    /// Reverse lookup from a scope string. An unknown scope is not an
    /// error; it simply has no catalog entry.
    pub fn from_scope(scope: &str) -> Option<Permission> {
        Self::ALL.iter().copied().find(|p| p.scope() == scope)
    }

    /// Whether a scope string names a platform-wide permission. Unknown
    /// scopes are not global.
    pub fn scope_is_global(scope: &str) -> bool {
        Self::from_scope(scope).is_some_and(|p| p.is_global())
    }

    /// All platform-wide permissions.
    pub fn globals() -> HashSet<Permission> {
        Self::ALL.iter().copied().filter(|p| p.is_global()).collect()
    }

    /// All project-scoped permissions.
    pub fn project_scoped() -> HashSet<Permission> {
        Self::ALL
            .iter()
            .copied()
            .filter(|p| p.kind() == PermissionKind::Project)
            .collect()
    }

    /// All permissions enforced by the given component.
    pub fn owned_by(component: Component) -> HashSet<Permission> {
        Self::ALL
            .iter()
            .copied()
            .filter(|p| p.component() == component)
            .collect()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scope())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_strings_are_unique() {
        let scopes: HashSet<&str> = Permission::ALL.iter().map(|p| p.scope()).collect();
        assert_eq!(scopes.len(), Permission::ALL.len());
    }

    #[test]
    fn test_from_scope_roundtrip() {
        for permission in Permission::ALL.iter().copied() {
            assert_eq!(Permission::from_scope(permission.scope()), Some(permission));
        }
    }

    #[test]
    fn test_from_scope_unknown_is_none() {
        assert_eq!(Permission::from_scope("no-such-scope"), None);
        assert_eq!(Permission::from_scope(""), None);
    }

    #[test]
    fn test_kind_partition_covers_catalog() {
        let globals = Permission::globals();
        let project = Permission::project_scoped();
        assert_eq!(globals.len() + project.len(), Permission::ALL.len());
        assert!(globals.is_disjoint(&project));
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(Permission::ProjectView.kind(), PermissionKind::Project);
        assert_eq!(Permission::CorpusRead.kind(), PermissionKind::Project);
        assert_eq!(Permission::Login.kind(), PermissionKind::Global);
        assert_eq!(Permission::ProjectCreate.kind(), PermissionKind::Global);
        assert_eq!(Permission::UsersDelete.kind(), PermissionKind::Global);
    }

    #[test]
    fn test_component_ownership() {
        let search = Permission::owned_by(Component::Search);
        assert_eq!(
            search,
            HashSet::from([Permission::Dashboard, Permission::AdminDashboard])
        );

        let platform = Permission::owned_by(Component::Platform);
        assert_eq!(platform.len() + search.len(), Permission::ALL.len());
        assert!(platform.contains(&Permission::ProjectView));
    }

    #[test]
    fn test_scope_is_global() {
        assert!(Permission::scope_is_global("login"));
        assert!(Permission::scope_is_global("users:read"));
        assert!(!Permission::scope_is_global("projects:view"));
        assert!(!Permission::scope_is_global("no-such-scope"));
    }

    #[test]
    fn test_display_is_the_scope() {
        assert_eq!(Permission::ProjectView.to_string(), "projects:view");
        assert_eq!(Permission::AdminDashboard.to_string(), "admin.dashboard");
    }
}
