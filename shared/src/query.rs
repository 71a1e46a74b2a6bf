//! Filter/Sort Engine
//!
//! Derives the displayed view of a collection from a search term, an
//! optional categorical filter and a sort state. The engine is a pure
//! function: the input slice is never touched and a fresh `Vec` is
//! returned on every call.
//!
//! Sorting compares raw strings (code-point order, case-sensitive) and is
//! stable. Descending order reverses the comparator, so records with equal
//! keys keep their collection order in both directions.

use std::cmp::Ordering;
use std::fmt;

use crate::model::{Role, User, UserStatus};

// ============================================================================
// Sort State
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Current sort key and direction of a table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: Copy + PartialEq> SortState<K> {
    pub fn ascending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Same key flips the direction, a new key starts ascending
    pub fn toggle(&mut self, key: K) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            *self = Self::ascending(key);
        }
    }

    /// Arrow to show next to `key`'s header, if it is the active key
    pub fn indicator(&self, key: K) -> &'static str {
        if self.key == key {
            self.direction.arrow()
        } else {
            ""
        }
    }
}

impl<K: Default + Copy + PartialEq> Default for SortState<K> {
    fn default() -> Self {
        Self::ascending(K::default())
    }
}

// ============================================================================
// Queryable
// ============================================================================

/// A record type the engine can search, filter and sort
pub trait Queryable: Clone {
    type SortKey: Copy + PartialEq + fmt::Debug;
    type Filter: Clone + PartialEq + fmt::Debug;

    /// `needle` is already lowercased and non-empty
    fn matches_search(&self, needle: &str) -> bool;

    fn matches_filter(&self, filter: &Self::Filter) -> bool;

    fn sort_field(&self, key: Self::SortKey) -> &str;
}

/// Search, filter and sort parameters for one table
#[derive(Clone, Debug, PartialEq)]
pub struct Query<T: Queryable> {
    pub search: String,
    /// `None` means no categorical filtering
    pub filter: Option<T::Filter>,
    pub sort: SortState<T::SortKey>,
}

impl<T> Default for Query<T>
where
    T: Queryable,
    T::SortKey: Default,
{
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: None,
            sort: SortState::default(),
        }
    }
}

impl<T: Queryable> Query<T> {
    pub fn matches(&self, record: &T) -> bool {
        let matches_search = self.search.is_empty()
            || record.matches_search(&self.search.to_lowercase());
        let matches_filter = self
            .filter
            .as_ref()
            .map_or(true, |filter| record.matches_filter(filter));
        matches_search && matches_filter
    }

    /// Derive the displayed rows from `records`
    pub fn apply(&self, records: &[T]) -> Vec<T> {
        let mut rows: Vec<T> = records.iter().filter(|r| self.matches(r)).cloned().collect();
        let SortState { key, direction } = self.sort;
        rows.sort_by(|a, b| direction.apply(a.sort_field(key).cmp(b.sort_field(key))));
        rows
    }
}

// ============================================================================
// Users
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserSortKey {
    #[default]
    Name,
    Email,
    Role,
    Status,
}

impl UserSortKey {
    pub const ALL: [UserSortKey; 4] = [
        UserSortKey::Name,
        UserSortKey::Email,
        UserSortKey::Role,
        UserSortKey::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UserSortKey::Name => "Name",
            UserSortKey::Email => "Email",
            UserSortKey::Role => "Role",
            UserSortKey::Status => "Status",
        }
    }
}

impl Queryable for User {
    type SortKey = UserSortKey;
    type Filter = UserStatus;

    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }

    fn matches_filter(&self, status: &UserStatus) -> bool {
        self.status == *status
    }

    fn sort_field(&self, key: UserSortKey) -> &str {
        match key {
            UserSortKey::Name => &self.name,
            UserSortKey::Email => &self.email,
            UserSortKey::Role => &self.role,
            UserSortKey::Status => self.status.label(),
        }
    }
}

pub type UserQuery = Query<User>;

// ============================================================================
// Roles
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoleSortKey {
    #[default]
    Name,
}

impl RoleSortKey {
    pub fn label(&self) -> &'static str {
        match self {
            RoleSortKey::Name => "Role Name",
        }
    }
}

impl Queryable for Role {
    type SortKey = RoleSortKey;
    /// A permission the role must hold
    type Filter = String;

    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    fn matches_filter(&self, permission: &String) -> bool {
        self.permissions.contains(permission)
    }

    fn sort_field(&self, key: RoleSortKey) -> &str {
        match key {
            RoleSortKey::Name => &self.name,
        }
    }
}

pub type RoleQuery = Query<Role>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;

    fn user(id: RecordId, name: &str, email: &str, role: &str, status: UserStatus) -> User {
        User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            status,
        }
    }

    fn role(id: RecordId, name: &str, perms: &[&str]) -> Role {
        Role {
            id,
            name: name.to_string(),
            permissions: perms.iter().copied().collect(),
        }
    }

    fn names<T, F: Fn(&T) -> &str>(rows: &[T], f: F) -> Vec<&str> {
        rows.iter().map(f).collect()
    }

    fn sample_users() -> Vec<User> {
        vec![
            user(1, "Bob", "bob@corp.io", "Editor", UserStatus::Active),
            user(2, "Amy", "amy@corp.io", "Admin", UserStatus::Inactive),
            user(3, "Carl", "carl@lab.org", "Viewer", UserStatus::Active),
        ]
    }

    #[test]
    fn test_sort_toggle_same_key_flips() {
        let mut sort = SortState::ascending(UserSortKey::Name);
        sort.toggle(UserSortKey::Name);
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.toggle(UserSortKey::Name);
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_sort_toggle_new_key_resets_to_ascending() {
        let mut sort = SortState {
            key: UserSortKey::Name,
            direction: SortDirection::Descending,
        };
        sort.toggle(UserSortKey::Email);
        assert_eq!(sort, SortState::ascending(UserSortKey::Email));
        assert_eq!(sort.indicator(UserSortKey::Email), "↑");
        assert_eq!(sort.indicator(UserSortKey::Name), "");
    }

    #[test]
    fn test_default_query_returns_everything_sorted_by_name() {
        let users = sample_users();
        let rows = UserQuery::default().apply(&users);
        assert_eq!(names(&rows, |u| &u.name), vec!["Amy", "Bob", "Carl"]);
        // input untouched
        assert_eq!(names(&users, |u| &u.name), vec!["Bob", "Amy", "Carl"]);
    }

    #[test]
    fn test_search_matches_name_or_email_case_insensitive() {
        let users = sample_users();
        let mut query = UserQuery::default();

        query.search = "BO".to_string();
        assert_eq!(names(&query.apply(&users), |u| &u.name), vec!["Bob"]);

        query.search = "Corp.IO".to_string();
        assert_eq!(names(&query.apply(&users), |u| &u.name), vec!["Amy", "Bob"]);

        query.search = "nobody".to_string();
        assert!(query.apply(&users).is_empty());
    }

    #[test]
    fn test_status_filter() {
        let users = sample_users();
        let query = UserQuery {
            filter: Some(UserStatus::Inactive),
            ..Default::default()
        };
        assert_eq!(names(&query.apply(&users), |u| &u.name), vec!["Amy"]);
    }

    #[test]
    fn test_sort_by_each_user_column() {
        let users = sample_users();
        let mut query = UserQuery::default();

        query.sort = SortState::ascending(UserSortKey::Email);
        assert_eq!(names(&query.apply(&users), |u| &u.name), vec!["Amy", "Bob", "Carl"]);

        query.sort = SortState::ascending(UserSortKey::Role);
        assert_eq!(names(&query.apply(&users), |u| &u.role), vec!["Admin", "Editor", "Viewer"]);

        query.sort = SortState::ascending(UserSortKey::Status);
        assert_eq!(names(&query.apply(&users), |u| &u.name), vec!["Bob", "Carl", "Amy"]);
    }

    #[test]
    fn test_sorting_twice_reverses() {
        let users = sample_users();
        let mut query = UserQuery::default();
        let once = query.apply(&users);

        query.sort.toggle(UserSortKey::Name);
        let mut twice = query.apply(&users);
        twice.reverse();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_equal_keys_keep_collection_order_in_both_directions() {
        let users = vec![
            user(1, "Zed", "z@x.io", "Viewer", UserStatus::Active),
            user(2, "Amy", "a@x.io", "Admin", UserStatus::Active),
            user(3, "Bob", "b@x.io", "Viewer", UserStatus::Active),
        ];
        let mut query = UserQuery {
            sort: SortState::ascending(UserSortKey::Role),
            ..Default::default()
        };
        let ids = |rows: Vec<User>| rows.iter().map(|u| u.id).collect::<Vec<_>>();
        assert_eq!(ids(query.apply(&users)), vec![2, 1, 3]);

        query.sort.toggle(UserSortKey::Role);
        assert_eq!(ids(query.apply(&users)), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let users = vec![
            user(1, "bob", "b@x.io", "Viewer", UserStatus::Active),
            user(2, "Zed", "z@x.io", "Viewer", UserStatus::Active),
        ];
        let rows = UserQuery::default().apply(&users);
        assert_eq!(names(&rows, |u| &u.name), vec!["Zed", "bob"]);
    }

    #[test]
    fn test_role_search_and_permission_filter() {
        let roles = vec![
            role(1, "Editor", &["Read", "Write", "Edit"]),
            role(2, "Admin", &["Read", "Write", "Edit", "Delete"]),
            role(3, "Viewer", &["Read"]),
        ];
        let mut query = RoleQuery::default();
        assert_eq!(names(&query.apply(&roles), |r| &r.name), vec!["Admin", "Editor", "Viewer"]);

        query.filter = Some("Write".to_string());
        assert_eq!(names(&query.apply(&roles), |r| &r.name), vec!["Admin", "Editor"]);

        query.search = "ed".to_string();
        assert_eq!(names(&query.apply(&roles), |r| &r.name), vec!["Editor"]);

        query.sort.toggle(RoleSortKey::Name);
        query.search.clear();
        query.filter = None;
        assert_eq!(names(&query.apply(&roles), |r| &r.name), vec!["Viewer", "Editor", "Admin"]);
    }

    #[test]
    fn test_column_labels() {
        let users: Vec<_> = UserSortKey::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(users, vec!["Name", "Email", "Role", "Status"]);
        assert_eq!(RoleSortKey::Name.label(), "Role Name");
    }
}
