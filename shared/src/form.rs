//! Record Form
//!
//! State machine behind the create/edit modals. The form edits a *draft*, a
//! snapshot copy of a record whose id is `None` while creating, so nothing
//! reaches the collection until the draft is submitted.
//!
//! ```text
//! Closed --open_create--> Open(Create) --submit ok--> Closed
//! Closed --open_edit----> Open(Edit)   --cancel-----> Closed
//! ```

use crate::error::ValidationError;
use crate::model::{PermissionSet, Record, RecordId, Role, User, UserStatus};

/// Form-local copy of a record
pub trait Draft: Clone {
    type Record: Record;

    fn from_record(record: &Self::Record) -> Self;

    /// `None` while creating
    fn id(&self) -> Option<RecordId>;

    fn into_record(self, id: RecordId) -> Self::Record;

    /// Field rules checked on submit
    fn validate(&self) -> Result<(), ValidationError>;
}

// ============================================================================
// Drafts
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

impl UserDraft {
    /// Defaults for a new user: first available role, status Active
    pub fn new(roles: &[Role]) -> Self {
        Self {
            role: roles.first().map(|r| r.name.clone()).unwrap_or_default(),
            ..Self::default()
        }
    }
}

impl Draft for UserDraft {
    type Record = User;

    fn from_record(user: &User) -> Self {
        Self {
            id: Some(user.id),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            status: user.status,
        }
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn into_record(self, id: RecordId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            status: self.status,
        }
    }

    // Name and email may be empty; email format is not checked.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleDraft {
    pub id: Option<RecordId>,
    pub name: String,
    pub permissions: PermissionSet,
}

impl RoleDraft {
    /// Replace the whole permission set with the current multi-select value
    pub fn set_permissions<I, S>(&mut self, selected: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = selected.into_iter().collect();
    }
}

impl Draft for RoleDraft {
    type Record = Role;

    fn from_record(role: &Role) -> Self {
        Self {
            id: Some(role.id),
            name: role.name.clone(),
            permissions: role.permissions.clone(),
        }
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn into_record(self, id: RecordId) -> Role {
        Role {
            id,
            name: self.name,
            permissions: self.permissions,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::new("name", "Role name is required"));
        }
        Ok(())
    }
}

// ============================================================================
// Form State
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum RecordForm<D> {
    #[default]
    Closed,
    Open {
        mode: FormMode,
        draft: D,
        /// Last failed submit, cleared by the next field change
        error: Option<ValidationError>,
    },
}

impl<D: Draft> RecordForm<D> {
    /// Open with a fresh draft, discarding whatever was being edited
    pub fn open_create(&mut self, draft: D) {
        *self = RecordForm::Open {
            mode: FormMode::Create,
            draft,
            error: None,
        };
    }

    pub fn open_edit(&mut self, record: &D::Record) {
        *self = RecordForm::Open {
            mode: FormMode::Edit,
            draft: D::from_record(record),
            error: None,
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, RecordForm::Open { .. })
    }

    pub fn mode(&self) -> Option<FormMode> {
        match self {
            RecordForm::Open { mode, .. } => Some(*mode),
            RecordForm::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            RecordForm::Open { draft, .. } => Some(draft),
            RecordForm::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            RecordForm::Open { error, .. } => error.as_ref(),
            RecordForm::Closed => None,
        }
    }

    /// Apply a field change to the draft. Ignored while closed.
    pub fn edit(&mut self, change: impl FnOnce(&mut D)) {
        if let RecordForm::Open { draft, error, .. } = self {
            change(draft);
            *error = None;
        }
    }

    /// Validate and hand back the draft, closing the form.
    ///
    /// On a validation failure the form stays open with the error recorded
    /// and `None` is returned. Submitting a closed form also returns `None`.
    pub fn submit(&mut self) -> Option<D> {
        let RecordForm::Open { draft, error, .. } = self else {
            return None;
        };

        if let Err(e) = draft.validate() {
            *error = Some(e);
            return None;
        }

        match std::mem::replace(self, RecordForm::Closed) {
            RecordForm::Open { draft, .. } => Some(draft),
            RecordForm::Closed => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = RecordForm::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(id: RecordId, name: &str) -> Role {
        Role {
            id,
            name: name.to_string(),
            permissions: ["Read"].into_iter().collect(),
        }
    }

    #[test]
    fn test_initial_state_is_closed() {
        let form = RecordForm::<UserDraft>::default();
        assert!(!form.is_open());
        assert!(form.draft().is_none());
    }

    #[test]
    fn test_user_create_defaults_to_first_role() {
        let draft = UserDraft::new(&[role(1, "Admin"), role(2, "Viewer")]);
        assert_eq!(draft.id, None);
        assert_eq!(draft.role, "Admin");
        assert_eq!(draft.status, UserStatus::Active);
        assert!(draft.name.is_empty() && draft.email.is_empty());

        assert_eq!(UserDraft::new(&[]).role, "");
    }

    #[test]
    fn test_edit_is_a_snapshot() {
        let original = role(3, "Editor");
        let mut form = RecordForm::<RoleDraft>::default();
        form.open_edit(&original);
        form.edit(|d| d.name = "Changed".to_string());

        assert_eq!(original.name, "Editor");
        assert_eq!(form.mode(), Some(FormMode::Edit));
        assert_eq!(form.draft().map(|d| d.name.as_str()), Some("Changed"));
    }

    #[test]
    fn test_submit_returns_draft_and_closes() {
        let mut form = RecordForm::<RoleDraft>::default();
        form.open_create(RoleDraft::default());
        form.edit(|d| d.name = "Viewer".to_string());

        let draft = form.submit().unwrap();
        assert_eq!(draft.name, "Viewer");
        assert_eq!(draft.id, None);
        assert!(!form.is_open());
    }

    #[test]
    fn test_role_name_required() {
        let mut form = RecordForm::<RoleDraft>::default();
        form.open_create(RoleDraft::default());

        assert!(form.submit().is_none());
        assert!(form.is_open());
        assert_eq!(form.error().map(|e| e.field), Some("name"));

        form.edit(|d| d.name = "Ops".to_string());
        assert!(form.error().is_none());
        assert!(form.submit().is_some());
    }

    #[test]
    fn test_user_empty_fields_are_permitted() {
        let mut form = RecordForm::<UserDraft>::default();
        form.open_create(UserDraft::new(&[]));
        assert!(form.submit().is_some());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut form = RecordForm::<UserDraft>::default();
        form.open_create(UserDraft::default());
        form.edit(|d| d.name = "Half typed".to_string());
        form.cancel();
        assert!(!form.is_open());
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_edit_while_closed_is_ignored() {
        let mut form = RecordForm::<UserDraft>::default();
        form.edit(|d| d.name = "Nobody".to_string());
        assert_eq!(form, RecordForm::Closed);
    }

    #[test]
    fn test_permission_selection_replaces_set() {
        let mut draft = RoleDraft::from_record(&role(1, "Viewer"));
        draft.set_permissions(["Write", "Edit"]);
        assert_eq!(draft.permissions.joined(), "Write, Edit");
        draft.set_permissions(Vec::<String>::new());
        assert!(draft.permissions.is_empty());
    }

    #[test]
    fn test_unchanged_draft_round_trips() {
        let original = role(7, "Auditor");
        let draft = RoleDraft::from_record(&original);
        assert_eq!(draft.into_record(7), original);
    }
}
