//! Root Application Component
//!
//! Sets up:
//! - The dashboard state provider
//! - Routing; every path renders the shell, which picks the section

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::layout::AppShell;
use crate::state::DashboardState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(DashboardState::default());

    view! {
        <Title text="Warden" />
        <Router>
            <Routes>
                // "/", "/users", "/roles", "/permissions"; anything else shows Users
                <Route path="/*any" view=AppShell />
            </Routes>
        </Router>
    }
}
