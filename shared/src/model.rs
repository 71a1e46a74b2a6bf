//! Entity types for the admin console
//!
//! Users and roles are plain records identified by an integer id.
//! Permissions are string tags; a role carries an ordered set of them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer identifier assigned by the entity store
pub type RecordId = u32;

/// Permissions offered by the role form's multi-select
pub const ROLE_FORM_PERMISSIONS: [&str; 4] = ["Read", "Write", "Edit", "Delete"];

/// Permissions offered by the permission assignment panel
pub const PANEL_PERMISSIONS: [&str; 6] = [
    "Read",
    "Write",
    "Edit",
    "Delete",
    "Manage Users",
    "Manage Roles",
];

// ============================================================================
// Records
// ============================================================================

/// A record held by an [`EntityStore`](crate::store::EntityStore)
pub trait Record: Clone {
    /// Entity name used in log events
    const KIND: &'static str;

    fn id(&self) -> RecordId;
}

/// User status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub const ALL: [UserStatus; 2] = [UserStatus::Active, UserStatus::Inactive];

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }

    /// Parse a dropdown value; anything else (including `""`) is `None`
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == value)
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User account
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    /// Role *name*, not a reference into the role collection
    pub role: String,
    #[serde(default)]
    pub status: UserStatus,
}

impl Record for User {
    const KIND: &'static str = "user";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Role with its granted permissions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl Record for Role {
    const KIND: &'static str = "role";

    fn id(&self) -> RecordId {
        self.id
    }
}

// ============================================================================
// Permission Set
// ============================================================================

/// Set of permission tags that remembers insertion order.
///
/// Equality ignores order: `{Read, Write} == {Write, Read}`.
#[derive(Clone, Debug, Default, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PermissionSet(Vec<String>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, permission: &str) -> bool {
        self.0.iter().any(|p| p == permission)
    }

    /// Insert a permission; returns `false` if it was already present
    pub fn insert(&mut self, permission: impl Into<String>) -> bool {
        let permission = permission.into();
        if self.contains(&permission) {
            return false;
        }
        self.0.push(permission);
        true
    }

    pub fn remove(&mut self, permission: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|p| p != permission);
        self.0.len() != before
    }

    /// Flip membership. New entries go to the end.
    pub fn toggle(&mut self, permission: &str) {
        if !self.remove(permission) {
            self.0.push(permission.to_string());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma separated list for table cells and selection echoes
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl PartialEq for PermissionSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|p| other.contains(p))
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = PermissionSet::new();
        for permission in iter {
            set.insert(permission);
        }
        set
    }
}

impl From<Vec<String>> for PermissionSet {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<PermissionSet> for Vec<String> {
    fn from(set: PermissionSet) -> Self {
        set.0
    }
}

/// Union of every role's permissions, in first-seen order
pub fn permission_union(roles: &[Role]) -> Vec<String> {
    let union: PermissionSet = roles
        .iter()
        .flat_map(|role| role.permissions.iter())
        .collect();
    union.into()
}
