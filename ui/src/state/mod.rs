//! Global State Management
//!
//! The whole console state lives in one [`Dashboard`] held by a signal and
//! provided through context. Components read derived memos so that typing
//! in a modal does not re-render the tables behind it.

use leptos::*;
use warden_shared::{Dashboard, Role, Section, User, Vocabulary};

/// Handle to the dashboard signal
#[derive(Clone, Copy)]
pub struct DashboardState {
    dashboard: RwSignal<Dashboard>,
}

impl DashboardState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: create_rw_signal(dashboard),
        }
    }

    pub fn with_untracked<O>(&self, f: impl FnOnce(&Dashboard) -> O) -> O {
        self.dashboard.with_untracked(f)
    }

    pub fn update(&self, f: impl FnOnce(&mut Dashboard)) {
        self.dashboard.update(f);
    }

    pub fn users(&self) -> Memo<Vec<User>> {
        let dashboard = self.dashboard;
        create_memo(move |_| dashboard.with(|d| d.users().to_vec()))
    }

    pub fn roles(&self) -> Memo<Vec<Role>> {
        let dashboard = self.dashboard;
        create_memo(move |_| dashboard.with(|d| d.roles().to_vec()))
    }

    pub fn section(&self) -> Memo<Section> {
        let dashboard = self.dashboard;
        create_memo(move |_| dashboard.with(|d| d.section))
    }

    /// Vocabularies never change after seeding
    pub fn vocabulary(&self) -> Vocabulary {
        self.dashboard.with_untracked(|d| d.vocabulary().clone())
    }

    /// Derived memo over any part of the dashboard
    pub fn select<T: PartialEq + 'static>(&self, f: impl Fn(&Dashboard) -> T + 'static) -> Memo<T> {
        let dashboard = self.dashboard;
        create_memo(move |_| dashboard.with(&f))
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(Dashboard::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_shared::DashboardConfig;

    #[test]
    fn test_memos_follow_mutations() {
        let runtime = create_runtime();
        let state = DashboardState::new(Dashboard::from_config(DashboardConfig::builtin()));
        let users = state.users();
        let section = state.section();
        assert_eq!(users.get_untracked().len(), 5);

        state.update(|d| {
            d.delete_user(1);
            d.navigate(Section::Roles);
        });
        assert_eq!(users.get_untracked().len(), 4);
        assert_eq!(section.get_untracked(), Section::Roles);

        runtime.dispose();
    }
}
