//! Seed configuration
//!
//! The console starts from an in-process dataset described in TOML. The
//! document bundled with the crate (`seed.toml`) is embedded at compile time;
//! if it cannot be used, [`DashboardConfig::builtin`] supplies the same data.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ConfigError;
use crate::model::{
    Record, RecordId, Role, User, UserStatus, PANEL_PERMISSIONS, ROLE_FORM_PERMISSIONS,
};
use crate::store::IdStrategy;

/// Seed document bundled with the crate
pub const SEED_TOML: &str = include_str!("../seed.toml");

/// Initial state of the console
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub id_strategy: IdStrategy,

    #[serde(default)]
    pub vocabulary: Vocabulary,

    #[serde(default)]
    pub roles: Vec<Role>,

    #[serde(default)]
    pub users: Vec<User>,
}

/// Permission lists offered by the two permission editors.
///
/// The role form and the assignment panel have always offered different
/// lists; they are kept separate here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default = "default_role_form")]
    pub role_form: Vec<String>,

    #[serde(default = "default_permission_panel")]
    pub permission_panel: Vec<String>,
}

fn default_role_form() -> Vec<String> {
    ROLE_FORM_PERMISSIONS.iter().map(|p| p.to_string()).collect()
}

fn default_permission_panel() -> Vec<String> {
    PANEL_PERMISSIONS.iter().map(|p| p.to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            role_form: default_role_form(),
            permission_panel: default_permission_panel(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a TOML seed document
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Convert to a TOML string
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Reject seeds with duplicate ids inside a collection
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unique_ids(&self.roles)?;
        check_unique_ids(&self.users)?;
        Ok(())
    }

    /// The embedded seed, or the built-in dataset if it fails to load
    pub fn embedded() -> Self {
        match Self::from_toml(SEED_TOML) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using built-in seed data: {}", e);
                Self::builtin()
            }
        }
    }

    /// Hard-coded dataset matching `seed.toml`
    pub fn builtin() -> Self {
        let role = |id, name: &str, permissions: &[&str]| Role {
            id,
            name: name.to_string(),
            permissions: permissions.iter().copied().collect(),
        };
        let user = |id, name: &str, email: &str, role: &str, status| User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            status,
        };

        Self {
            id_strategy: IdStrategy::MaxPlusOne,
            vocabulary: Vocabulary::default(),
            roles: vec![
                role(1, "Admin", &PANEL_PERMISSIONS),
                role(2, "Editor", &["Read", "Write", "Edit"]),
                role(3, "Viewer", &["Read"]),
            ],
            users: vec![
                user(1, "Alice Johnson", "alice@example.com", "Admin", UserStatus::Active),
                user(2, "Brian Lee", "brian@example.com", "Editor", UserStatus::Active),
                user(3, "Carla Gomez", "carla@example.com", "Viewer", UserStatus::Inactive),
                user(4, "David Kim", "david@example.com", "Editor", UserStatus::Inactive),
                user(5, "Emma Brown", "emma@example.com", "Viewer", UserStatus::Active),
            ],
        }
    }
}

fn check_unique_ids<T: Record>(records: &[T]) -> Result<(), ConfigError> {
    let mut seen = HashSet::<RecordId>::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(ConfigError::DuplicateId {
                kind: T::KIND,
                id: record.id(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_seed_matches_builtin() {
        let config = DashboardConfig::from_toml(SEED_TOML).unwrap();
        assert_eq!(config, DashboardConfig::builtin());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config.id_strategy, IdStrategy::MaxPlusOne);
        assert_eq!(config.vocabulary.role_form.len(), 4);
        assert_eq!(config.vocabulary.permission_panel.len(), 6);
        assert!(config.roles.is_empty() && config.users.is_empty());
    }

    #[test]
    fn test_id_strategy_parses() {
        let config = DashboardConfig::from_toml(r#"id_strategy = "length_plus_one""#).unwrap();
        assert_eq!(config.id_strategy, IdStrategy::LengthPlusOne);
    }

    #[test]
    fn test_user_status_defaults_to_active() {
        let config = DashboardConfig::from_toml(
            r#"
            [[users]]
            id = 1
            name = "Sam"
            email = "sam@example.com"
            role = "Viewer"
            "#,
        )
        .unwrap();
        assert_eq!(config.users[0].status, UserStatus::Active);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = DashboardConfig::from_toml(
            r#"
            [[roles]]
            id = 1
            name = "Admin"

            [[roles]]
            id = 1
            name = "Copy"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateId { kind: "role", id: 1 }));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = DashboardConfig::from_toml("id_strategy = \"random\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_to_toml_round_trips() {
        let config = DashboardConfig::builtin();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[[roles]]"));
        assert!(toml.contains("[[users]]"));
        assert_eq!(DashboardConfig::from_toml(&toml).unwrap(), config);
    }
}
