//! Navigation Shell state
//!
//! [`Dashboard`] is the single owner of both entity collections and of the
//! modal state. Views read snapshots from it and request mutations through
//! its methods; nothing else writes to the stores.

use crate::config::{DashboardConfig, Vocabulary};
use crate::form::{Draft, RecordForm, RoleDraft, UserDraft};
use crate::model::{RecordId, Role, User};
use crate::store::EntityStore;

// ============================================================================
// Sections
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Users,
    Roles,
    Permissions,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Users, Section::Roles, Section::Permissions];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Users => "Users",
            Section::Roles => "Roles",
            Section::Permissions => "Permissions",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Section::Users => "/users",
            Section::Roles => "/roles",
            Section::Permissions => "/permissions",
        }
    }

    /// Section for a location path. Unknown paths land on Users.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|s| s.path() == path)
            .unwrap_or_default()
    }
}

// ============================================================================
// Dashboard
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    users: EntityStore<User>,
    roles: EntityStore<Role>,
    vocabulary: Vocabulary,
    pub section: Section,
    pub user_form: RecordForm<UserDraft>,
    pub role_form: RecordForm<RoleDraft>,
}

impl Dashboard {
    pub fn from_config(config: DashboardConfig) -> Self {
        tracing::debug!(
            users = config.users.len(),
            roles = config.roles.len(),
            id_strategy = ?config.id_strategy,
            "Seeding dashboard"
        );
        Self {
            users: EntityStore::new(config.users, config.id_strategy),
            roles: EntityStore::new(config.roles, config.id_strategy),
            vocabulary: config.vocabulary,
            section: Section::default(),
            user_form: RecordForm::Closed,
            role_form: RecordForm::Closed,
        }
    }

    pub fn users(&self) -> &[User] {
        self.users.records()
    }

    pub fn roles(&self) -> &[Role] {
        self.roles.records()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Show another section. Entity state is untouched.
    pub fn navigate(&mut self, section: Section) {
        self.section = section;
    }

    // ------------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------------

    pub fn add_user(&mut self) {
        let draft = UserDraft::new(self.roles.records());
        self.user_form.open_create(draft);
    }

    pub fn edit_user(&mut self, user: &User) {
        self.user_form.open_edit(user);
    }

    /// Create when the draft has no id, otherwise update. Returns the id of
    /// the stored record, or `None` if nothing was written.
    pub fn save_user(&mut self, draft: UserDraft) -> Option<RecordId> {
        save(&mut self.users, draft)
    }

    /// Submit the open user form. `None` if it was closed or invalid, or if
    /// the save did not change the collection.
    pub fn submit_user_form(&mut self) -> Option<RecordId> {
        let draft = self.user_form.submit()?;
        self.save_user(draft)
    }

    pub fn delete_user(&mut self, id: RecordId) -> bool {
        self.users.delete(id)
    }

    // ------------------------------------------------------------------------
    // Roles
    // ------------------------------------------------------------------------

    pub fn add_role(&mut self) {
        self.role_form.open_create(RoleDraft::default());
    }

    pub fn edit_role(&mut self, role: &Role) {
        self.role_form.open_edit(role);
    }

    pub fn save_role(&mut self, draft: RoleDraft) -> Option<RecordId> {
        save(&mut self.roles, draft)
    }

    pub fn submit_role_form(&mut self) -> Option<RecordId> {
        let draft = self.role_form.submit()?;
        self.save_role(draft)
    }

    /// Commit a role coming back from the permission panel
    pub fn update_role(&mut self, role: Role) -> bool {
        self.roles.update(role)
    }

    /// Remove a role. Users keep the role name they were saved with.
    pub fn delete_role(&mut self, id: RecordId) -> bool {
        self.roles.delete(id)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::from_config(DashboardConfig::embedded())
    }
}

fn save<D: Draft>(store: &mut EntityStore<D::Record>, draft: D) -> Option<RecordId> {
    match draft.id() {
        Some(id) => store.update(draft.into_record(id)).then_some(id),
        None => store.create(|id| draft.into_record(id)),
    }
}
