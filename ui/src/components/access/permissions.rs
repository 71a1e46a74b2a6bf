//! Permission Manager Component
//!
//! Pick a role, toggle permissions in a working copy, then save the copy
//! back onto the role.

use leptos::*;
use warden_shared::PermissionPanel;

use crate::components::common::INPUT_CLASS;
use crate::state::DashboardState;

#[component]
pub fn PermissionManager() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let roles = state.roles();
    let choices = state.vocabulary().permission_panel;
    let panel = create_rw_signal(PermissionPanel::new());
    let has_selection = create_memo(move |_| panel.with(|p| p.selected().is_some()));

    let on_select = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        roles.with_untracked(|roles| panel.update(|p| p.select_value(&value, roles)));
    };

    let on_save = move |_| {
        if let Some(role) = panel.try_update(|p| p.save()).flatten() {
            tracing::debug!(id = role.id, permissions = %role.permissions.joined(), "Saving role permissions");
            state.update(|d| {
                d.update_role(role);
            });
        }
    };

    view! {
        <div class="flex-1 overflow-auto p-6 bg-slate-900">
            <div class="max-w-3xl mx-auto">
                <div class="mb-6">
                    <h1 class="text-2xl font-bold text-white">"Permission Management"</h1>
                    <p class="text-slate-400 mt-1">"Assign permissions to a role"</p>
                </div>

                <div class="bg-slate-800 rounded-xl border border-slate-700 p-6 space-y-6">
                    <div class="space-y-1">
                        <label class="block text-sm font-medium text-slate-300">"Role"</label>
                        <select class=INPUT_CLASS on:change=on_select>
                            <option value="" selected=move || !has_selection.get()>"Choose a Role"</option>
                            {move || {
                                let selected = panel.with_untracked(|p| p.selected_id());
                                roles
                                    .get()
                                    .into_iter()
                                    .map(|role| {
                                        let is_selected = selected == Some(role.id);
                                        view! {
                                            <option value=role.id.to_string() selected=is_selected>
                                                {role.name}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <Show when=move || has_selection.get()>
                        <div class="grid grid-cols-2 gap-3">
                            {choices
                                .iter()
                                .cloned()
                                .map(|permission| {
                                    let checked = permission.clone();
                                    let toggled = permission.clone();
                                    view! {
                                        <label class="flex items-center gap-3 px-3 py-2 rounded-lg bg-slate-900 \
                                                      border border-slate-700 cursor-pointer hover:border-slate-600">
                                            <input
                                                type="checkbox"
                                                class="w-4 h-4 rounded border-slate-600 bg-slate-800 text-blue-500"
                                                prop:checked=move || panel.with(|p| p.is_granted(&checked))
                                                on:change=move |_| panel.update(|p| p.toggle(&toggled))
                                            />
                                            <span class="text-sm text-slate-300">{permission}</span>
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex justify-end">
                            <button
                                class="px-4 py-2 text-sm bg-blue-500 hover:bg-blue-600 text-white font-medium rounded-lg transition-colors"
                                on:click=on_save
                            >
                                "Save Changes"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
