//! App Shell Component
//!
//! Sidebar on the left, the active section on the right. The section is
//! derived from the router location and mirrored into the dashboard.

use leptos::*;
use leptos_router::*;
use warden_shared::Section;

use super::Sidebar;
use crate::components::access::{PermissionManager, RoleManagement, UserManagement};
use crate::state::DashboardState;

#[component]
pub fn AppShell() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let location = use_location();

    create_effect(move |_| {
        let section = Section::from_path(&location.pathname.get());
        if state.with_untracked(|d| d.section) != section {
            tracing::debug!(?section, "Navigating");
            state.update(|d| d.navigate(section));
        }
    });

    let section = state.section();

    view! {
        <div class="h-screen flex bg-slate-900 text-white overflow-hidden">
            <Sidebar />

            <main class="flex-1 overflow-hidden flex flex-col min-w-0">
                <div class="flex-1 overflow-auto">
                    {move || match section.get() {
                        Section::Users => view! { <UserManagement /> }.into_view(),
                        Section::Roles => view! { <RoleManagement /> }.into_view(),
                        Section::Permissions => view! { <PermissionManager /> }.into_view(),
                    }}
                </div>
            </main>
        </div>
    }
}
