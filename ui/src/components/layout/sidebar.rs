//! Sidebar Navigation Component

use leptos::*;
use leptos_router::*;
use warden_shared::Section;

use crate::components::common::{KeyIcon, ShieldIcon, UsersIcon};
use crate::state::DashboardState;

/// Always-visible links to the three sections
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="h-full w-56 bg-slate-800 border-r border-slate-700 flex flex-col">
            // Logo header
            <div class="h-14 flex items-center px-4 border-b border-slate-700">
                <A href="/" class="flex items-center gap-2 text-white font-bold">
                    <div class="w-8 h-8 bg-gradient-to-br from-blue-500 to-purple-600 rounded-lg flex items-center justify-center">
                        <span class="text-white text-sm font-bold">"W"</span>
                    </div>
                    <span class="text-lg whitespace-nowrap">"Warden"</span>
                </A>
            </div>

            <nav class="flex-1 py-4 overflow-y-auto">
                <div class="space-y-1 px-2">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <SidebarLink section=section /> })
                        .collect_view()}
                </div>
            </nav>
        </aside>
    }
}

#[component]
fn SidebarLink(section: Section) -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let active = state.section();

    view! {
        <A
            href=section.path()
            class=move || {
                let base = "flex items-center gap-3 px-3 py-2 rounded-lg transition-colors";
                if active.get() == section {
                    format!("{} bg-blue-600 text-white", base)
                } else {
                    format!("{} text-slate-400 hover:text-white hover:bg-slate-700/50", base)
                }
            }
        >
            <div class="w-5 h-5 flex items-center justify-center flex-shrink-0">
                {match section {
                    Section::Users => view! { <UsersIcon class="w-5 h-5" /> }.into_view(),
                    Section::Roles => view! { <ShieldIcon class="w-5 h-5" /> }.into_view(),
                    Section::Permissions => view! { <KeyIcon class="w-5 h-5" /> }.into_view(),
                }}
            </div>
            <span class="text-sm font-medium whitespace-nowrap">{section.label()}</span>
        </A>
    }
}
