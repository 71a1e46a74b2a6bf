//! User Management Component
//!
//! - Users table with search, status filter and sortable columns
//! - Create/Edit user modal
//! - Immediate delete

use leptos::*;
use warden_shared::{FormMode, User, UserDraft, UserQuery, UserSortKey, UserStatus};

use crate::components::common::{
    visible_rows, EditIcon, EmptyRow, Modal, PlusIcon, SearchBox, SortHeader, TrashIcon, INPUT_CLASS,
};
use crate::state::DashboardState;

fn status_badge_class(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "bg-green-500/20 text-green-400",
        UserStatus::Inactive => "bg-slate-500/20 text-slate-400",
    }
}

// ============================================================================
// Main Component
// ============================================================================

#[component]
pub fn UserManagement() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let form_open = state.select(|d| d.user_form.is_open());

    view! {
        <div class="flex-1 overflow-auto p-6 bg-slate-900">
            <div class="max-w-7xl mx-auto">
                // Header
                <div class="flex items-center justify-between mb-6">
                    <div>
                        <h1 class="text-2xl font-bold text-white">"User Management"</h1>
                        <p class="text-slate-400 mt-1">"Manage users, their roles and status"</p>
                    </div>

                    <button
                        class="flex items-center gap-2 px-4 py-2 bg-blue-500 hover:bg-blue-600 \
                               text-white font-medium rounded-lg transition-colors"
                        on:click=move |_| state.update(|d| d.add_user())
                    >
                        <PlusIcon class="w-4 h-4" />
                        "Add User"
                    </button>
                </div>

                <UsersTable />

                <Show when=move || form_open.get()>
                    <UserFormModal />
                </Show>
            </div>
        </div>
    }
}

// ============================================================================
// Users Table Component
// ============================================================================

#[component]
fn UsersTable() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let users = state.users();
    let query = create_rw_signal(UserQuery::default());
    let rows = visible_rows(users, query);

    let sort_header = move |key: UserSortKey| {
        view! {
            <SortHeader
                label=key.label()
                indicator=Signal::derive(move || query.with(|q| q.sort.indicator(key)))
                on_click=move || query.update(|q| q.sort.toggle(key))
            />
        }
    };

    view! {
        // Toolbar
        <div class="flex items-center gap-3 mb-4">
            <SearchBox
                placeholder="Search by name or email"
                value=Signal::derive(move || query.with(|q| q.search.clone()))
                on_input=move |search| query.update(|q| q.search = search)
            />
            <select
                class="w-48 px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm \
                       focus:outline-none focus:ring-2 focus:ring-blue-500"
                on:change=move |ev| {
                    let filter = UserStatus::from_label(&event_target_value(&ev));
                    query.update(|q| q.filter = filter);
                }
            >
                <option value="" selected=move || query.with(|q| q.filter.is_none())>"All Statuses"</option>
                {UserStatus::ALL
                    .into_iter()
                    .map(|status| view! {
                        <option
                            value=status.label()
                            selected=move || query.with(|q| q.filter == Some(status))
                        >
                            {status.label()}
                        </option>
                    })
                    .collect_view()}
            </select>
        </div>

        <div class="bg-slate-800 rounded-xl border border-slate-700 overflow-hidden">
            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead class="bg-slate-800/50 border-b border-slate-700">
                        <tr>
                            {UserSortKey::ALL.into_iter().map(sort_header).collect_view()}
                            <th class="px-6 py-4 text-right text-xs font-medium text-slate-400 uppercase tracking-wider">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-700">
                        {move || {
                            match rows.get() {
                                Some(items) => items.into_iter().map(|user| view! { <UserRow user=user /> }).collect_view(),
                                None => view! {
                                    <EmptyRow
                                        colspan=5
                                        message="No users found. Try adjusting the filters or adding new users."
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
fn UserRow(user: User) -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let user_edit = user.clone();
    let user_id = user.id;

    view! {
        <tr class="hover:bg-slate-700/30 transition-colors">
            <td class="px-6 py-4 whitespace-nowrap">
                <span class="text-sm font-medium text-white">{user.name}</span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class="text-sm text-slate-300">{user.email}</span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium \
                             border bg-violet-500/20 text-violet-400 border-violet-500/30">
                    {user.role}
                </span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class=format!(
                    "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}",
                    status_badge_class(user.status)
                )>
                    {user.status.label()}
                </span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-right">
                <div class="flex items-center justify-end gap-1">
                    <button
                        class="p-2 text-slate-400 hover:text-white hover:bg-slate-700 rounded-lg transition-colors"
                        title="Edit user"
                        on:click=move |_| state.update(|d| d.edit_user(&user_edit))
                    >
                        <EditIcon class="w-4 h-4" />
                    </button>
                    <button
                        class="p-2 text-slate-400 hover:text-red-400 hover:bg-red-500/10 rounded-lg transition-colors"
                        title="Delete user"
                        on:click=move |_| state.update(|d| {
                            d.delete_user(user_id);
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
// User Form Modal (Create/Edit)
// ============================================================================

fn edit_draft(state: DashboardState, change: impl FnOnce(&mut UserDraft)) {
    state.update(|d| d.user_form.edit(change));
}

#[component]
fn UserFormModal() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let roles = state.roles();
    let draft = state.select(|d| d.user_form.draft().cloned().unwrap_or_default());
    let title = state.select(|d| match d.user_form.mode() {
        Some(FormMode::Edit) => "Edit User".to_string(),
        _ => "Add User".to_string(),
    });

    let cancel = move || state.update(|d| d.user_form.cancel());
    let save = move |_| {
        state.update(|d| {
            if let Some(id) = d.submit_user_form() {
                tracing::debug!(id, "User saved");
            }
        });
    };

    view! {
        <Modal title=title on_close=cancel>
            <div class="p-6 space-y-4">
                <div class="space-y-1">
                    <label class="block text-sm font-medium text-slate-300">"Name"</label>
                    <input
                        type="text"
                        class=INPUT_CLASS
                        placeholder="Full name"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| {
                            let name = event_target_value(&ev);
                            edit_draft(state, move |d| d.name = name);
                        }
                    />
                </div>

                <div class="space-y-1">
                    <label class="block text-sm font-medium text-slate-300">"Email"</label>
                    <input
                        type="email"
                        class=INPUT_CLASS
                        placeholder="user@example.com"
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| {
                            let email = event_target_value(&ev);
                            edit_draft(state, move |d| d.email = email);
                        }
                    />
                </div>

                <div class="space-y-1">
                    <label class="block text-sm font-medium text-slate-300">"Role"</label>
                    <select
                        class=INPUT_CLASS
                        on:change=move |ev| {
                            let role = event_target_value(&ev);
                            edit_draft(state, move |d| d.role = role);
                        }
                    >
                        {move || {
                            let current = draft.with(|d| d.role.clone());
                            let names: Vec<String> = roles.with(|roles| roles.iter().map(|r| r.name.clone()).collect());
                            // A user may still carry the name of a deleted role
                            let stale = (!current.is_empty() && !names.contains(&current)).then(|| current.clone());
                            stale
                                .into_iter()
                                .chain(names)
                                .map(|name| {
                                    let selected = name == current;
                                    view! { <option value=name.clone() selected=selected>{name}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="space-y-1">
                    <label class="block text-sm font-medium text-slate-300">"Status"</label>
                    <select
                        class=INPUT_CLASS
                        on:change=move |ev| {
                            if let Some(status) = UserStatus::from_label(&event_target_value(&ev)) {
                                edit_draft(state, move |d| d.status = status);
                            }
                        }
                    >
                        {UserStatus::ALL
                            .into_iter()
                            .map(|status| view! {
                                <option
                                    value=status.label()
                                    selected=move || draft.with(|d| d.status == status)
                                >
                                    {status.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            // Footer
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
