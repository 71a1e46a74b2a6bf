//! Permission Assignment Panel state
//!
//! Holds the selected role snapshot and a working copy of its permissions.
//! Toggles only touch the working set; [`PermissionPanel::save`] hands back
//! the role with the new set and resets the panel to "no role selected".

use crate::model::{PermissionSet, RecordId, Role};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PermissionPanel {
    selected: Option<Role>,
    working: PermissionSet,
}

impl PermissionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a role by id. `None` is the "Choose a Role" sentinel; an id
    /// that is not in `roles` is treated the same way.
    pub fn select(&mut self, id: Option<RecordId>, roles: &[Role]) {
        self.selected = id.and_then(|id| roles.iter().find(|r| r.id == id).cloned());
        self.working = self
            .selected
            .as_ref()
            .map(|r| r.permissions.clone())
            .unwrap_or_default();
    }

    /// Parse a dropdown value and select it. Empty or non-numeric values
    /// clear the selection.
    pub fn select_value(&mut self, value: &str, roles: &[Role]) {
        self.select(value.parse().ok(), roles);
    }

    pub fn selected(&self) -> Option<&Role> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<RecordId> {
        self.selected.as_ref().map(|r| r.id)
    }

    pub fn working(&self) -> &PermissionSet {
        &self.working
    }

    pub fn is_granted(&self, permission: &str) -> bool {
        self.working.contains(permission)
    }

    /// Flip one permission in the working set. Ignored with no selection.
    pub fn toggle(&mut self, permission: &str) {
        if self.selected.is_some() {
            self.working.toggle(permission);
        }
    }

    /// Role snapshot carrying the working set, then reset. `None` when no
    /// role is selected.
    pub fn save(&mut self) -> Option<Role> {
        let role = self.selected.take()?;
        let permissions = std::mem::take(&mut self.working);
        Some(Role { permissions, ..role })
    }
}
