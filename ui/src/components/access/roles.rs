//! Role Management Component
//!
//! - Roles table with search, permission filter and sortable name
//! - Create/Edit role modal with a multi-select of permissions

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};
use warden_shared::{permission_union, FormMode, Role, RoleDraft, RoleQuery, RoleSortKey};

use crate::components::common::{
    visible_rows, EditIcon, EmptyRow, Modal, PlusIcon, SearchBox, SortHeader, TrashIcon, INPUT_CLASS,
};
use crate::state::DashboardState;

// ============================================================================
// Main Component
// ============================================================================

#[component]
pub fn RoleManagement() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let form_open = state.select(|d| d.role_form.is_open());

    view! {
        <div class="flex-1 overflow-auto p-6 bg-slate-900">
            <div class="max-w-7xl mx-auto">
                <div class="flex items-center justify-between mb-6">
                    <div>
                        <h1 class="text-2xl font-bold text-white">"Role Management"</h1>
                        <p class="text-slate-400 mt-1">"Define roles and the permissions they carry"</p>
                    </div>

                    <button
                        class="flex items-center gap-2 px-4 py-2 bg-blue-500 hover:bg-blue-600 \
                               text-white font-medium rounded-lg transition-colors"
                        on:click=move |_| state.update(|d| d.add_role())
                    >
                        <PlusIcon class="w-4 h-4" />
                        "Add Role"
                    </button>
                </div>

                <RolesTable />

                <Show when=move || form_open.get()>
                    <RoleFormModal />
                </Show>
            </div>
        </div>
    }
}

// ============================================================================
// Roles Table Component
// ============================================================================

#[component]
fn RolesTable() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let roles = state.roles();
    let query = create_rw_signal(RoleQuery::default());
    let rows = visible_rows(roles, query);
    // Filter choices follow the permissions currently in use
    let permissions = create_memo(move |_| roles.with(|roles| permission_union(roles)));

    view! {
        <div class="flex items-center gap-3 mb-4">
            <SearchBox
                placeholder="Search roles"
                value=Signal::derive(move || query.with(|q| q.search.clone()))
                on_input=move |search| query.update(|q| q.search = search)
            />
            <select
                class="w-48 px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm \
                       focus:outline-none focus:ring-2 focus:ring-blue-500"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    query.update(|q| q.filter = (!value.is_empty()).then_some(value));
                }
            >
                <option value="" selected=move || query.with(|q| q.filter.is_none())>"All Permissions"</option>
                {move || {
                    permissions
                        .get()
                        .into_iter()
                        .map(|permission| {
                            let selected = query.with_untracked(|q| q.filter.as_ref() == Some(&permission));
                            view! { <option value=permission.clone() selected=selected>{permission}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>

        <div class="bg-slate-800 rounded-xl border border-slate-700 overflow-hidden">
            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead class="bg-slate-800/50 border-b border-slate-700">
                        <tr>
                            <SortHeader
                                label=RoleSortKey::Name.label()
                                indicator=Signal::derive(move || query.with(|q| q.sort.indicator(RoleSortKey::Name)))
                                on_click=move || query.update(|q| q.sort.toggle(RoleSortKey::Name))
                            />
                            <th class="px-6 py-4 text-left text-xs font-medium text-slate-400 uppercase tracking-wider">"Permissions"</th>
                            <th class="px-6 py-4 text-right text-xs font-medium text-slate-400 uppercase tracking-wider">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-700">
                        {move || {
                            match rows.get() {
                                Some(items) => items.into_iter().map(|role| view! { <RoleRow role=role /> }).collect_view(),
                                None => view! {
                                    <EmptyRow
                                        colspan=3
                                        message="No roles found. Try adjusting the filters or adding new roles."
                                    />
                                }
                                .into_view(),
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn RoleRow(role: Role) -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let role_edit = role.clone();
    let role_id = role.id;

    view! {
        <tr class="hover:bg-slate-700/30 transition-colors">
            <td class="px-6 py-4 whitespace-nowrap">
                <span class="text-sm font-medium text-white">{role.name}</span>
            </td>
            <td class="px-6 py-4">
                <div class="flex flex-wrap gap-1">
                    {role
                        .permissions
                        .iter()
                        .map(|p| view! {
                            <span class="px-2 py-0.5 rounded text-xs bg-blue-500/20 text-blue-400">{p.to_string()}</span>
                        })
                        .collect_view()}
                </div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-right">
                <div class="flex items-center justify-end gap-1">
                    <button
                        class="p-2 text-slate-400 hover:text-white hover:bg-slate-700 rounded-lg transition-colors"
                        title="Edit role"
                        on:click=move |_| state.update(|d| d.edit_role(&role_edit))
                    >
                        <EditIcon class="w-4 h-4" />
                    </button>
                    <button
                        class="p-2 text-slate-400 hover:text-red-400 hover:bg-red-500/10 rounded-lg transition-colors"
                        title="Delete role"
                        on:click=move |_| state.update(|d| {
                            d.delete_role(role_id);
                        })
                    >
                        <TrashIcon class="w-4 h-4" />
                    </button>
                </div>
            </td>
        </tr>
    }
}

// ============================================================================
// Role Form Modal (Create/Edit)
// ============================================================================

fn edit_draft(state: DashboardState, change: impl FnOnce(&mut RoleDraft)) {
    state.update(|d| d.role_form.edit(change));
}

/// Values of every selected `<option>` in a multi-select
fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}

#[component]
fn RoleFormModal() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let choices = state.vocabulary().role_form;
    let draft = state.select(|d| d.role_form.draft().cloned().unwrap_or_default());
    let error = state.select(|d| d.role_form.error().map(|e| e.message.clone()));
    let title = state.select(|d| match d.role_form.mode() {
        Some(FormMode::Edit) => "Edit Role".to_string(),
        _ => "Add Role".to_string(),
    });

    let cancel = move || state.update(|d| d.role_form.cancel());
    let save = move |_| {
        state.update(|d| {
            if let Some(id) = d.submit_role_form() {
                tracing::debug!(id, "Role saved");
            }
        });
    };

    view! {
        <Modal title=title on_close=cancel>
            <div class="p-6 space-y-4">
                <div class="space-y-1">
                    <label class="block text-sm font-medium text-slate-300">"Role Name"</label>
                    <input
                        type="text"
                        class=move || {
                            if error.with(Option::is_some) {
                                format!("{} border-red-500", INPUT_CLASS)
                            } else {
                                INPUT_CLASS.to_string()
                            }
                        }
                        placeholder="e.g. Auditor"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| {
                            let name = event_target_value(&ev);
                            edit_draft(state, move |d| d.name = name);
                        }
                    />
                    {move || error.get().map(|err| view! { <p class="text-xs text-red-400 mt-1">{err}</p> })}
                </div>

                <div class="space-y-1">
                    <label class="block text-sm font-medium text-slate-300">"Permissions"</label>
                    <select
                        multiple
                        class=format!("{} h-28", INPUT_CLASS)
                        on:change=move |ev| {
                            let selected = selected_values(&event_target::<HtmlSelectElement>(&ev));
                            edit_draft(state, move |d| d.set_permissions(selected));
                        }
                    >
                        {choices
                            .into_iter()
                            .map(|permission| {
                                let value = permission.clone();
                                view! {
                                    <option
                                        value=permission.clone()
                                        selected=move || draft.with(|d| d.permissions.contains(&value))
                                    >
                                        {permission}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <p class="text-xs text-slate-400">
                        "Selected: "{move || draft.with(|d| d.permissions.joined())}
                    </p>
                </div>
            </div>

            <div class="flex items-center justify-end gap-3 px-6 py-4 border-t border-slate-700">
                <button
                    class="px-4 py-2 text-sm text-slate-300 hover:text-white hover:bg-slate-700 rounded-lg transition-colors"
                    on:click=move |_| cancel()
                >
                    "Cancel"
                </button>
                <button
                    class="px-4 py-2 text-sm bg-blue-500 hover:bg-blue-600 text-white font-medium rounded-lg transition-colors"
                    on:click=save
                >
                    "Save"
                </button>
            </div>
        </Modal>
    }
}
