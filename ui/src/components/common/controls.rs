//! Table controls
//!
//! Small building blocks for the record tables: the search box, a column
//! header that toggles sorting, and the placeholder row for empty views.

use leptos::*;
use warden_shared::{Query, Queryable};

use super::SearchIcon;

pub const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm \
                               placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent";

#[component]
pub fn SearchBox(
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div class="relative flex-1">
            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none text-slate-500">
                <SearchIcon class="w-4 h-4" />
            </div>
            <input
                type="text"
                class="w-full pl-9 pr-3 py-2 rounded-lg bg-slate-900 border border-slate-700 text-white text-sm \
                       placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
        </div>
    }
}

/// Column header. `indicator` is the arrow for the active sort key, empty otherwise.
#[component]
pub fn SortHeader(
    label: &'static str,
    #[prop(into)] indicator: Signal<&'static str>,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <th class="px-6 py-4 text-left text-xs font-medium text-slate-400 uppercase tracking-wider">
            <button
                class="flex items-center gap-1 uppercase tracking-wider hover:text-white transition-colors"
                on:click=move |_| on_click()
            >
                {label}
                <span class="text-blue-400">{move || indicator.get()}</span>
            </button>
        </th>
    }
}

/// Rows a table should render for `query`, or `None` when nothing matches
/// and the placeholder row is shown instead.
pub fn visible_rows<T>(records: Memo<Vec<T>>, query: RwSignal<Query<T>>) -> Memo<Option<Vec<T>>>
where
    T: Queryable + PartialEq + 'static,
{
    create_memo(move |_| {
        let rows = records.with(|records| query.with(|q| q.apply(records)));
        (!rows.is_empty()).then_some(rows)
    })
}

#[component]
pub fn EmptyRow(colspan: usize, message: &'static str) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan class="px-6 py-12 text-center text-sm text-slate-400">
                {message}
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_shared::{User, UserQuery, UserStatus};

    fn user(id: u32, name: &str, status: UserStatus) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: "Viewer".to_string(),
            status,
        }
    }

    #[test]
    fn test_visible_rows_falls_back_to_placeholder() {
        let runtime = create_runtime();
        let users = create_rw_signal(vec![
            user(1, "Bob", UserStatus::Active),
            user(2, "Amy", UserStatus::Inactive),
        ]);
        let records = create_memo(move |_| users.get());
        let query = create_rw_signal(UserQuery::default());
        let rows = visible_rows(records, query);

        let names = |rows: Option<Vec<User>>| {
            rows.map(|rows| rows.into_iter().map(|u| u.name).collect::<Vec<_>>())
        };
        assert_eq!(names(rows.get_untracked()), Some(vec!["Amy".to_string(), "Bob".to_string()]));

        query.update(|q| q.search = "zed".to_string());
        assert_eq!(rows.get_untracked(), None);

        query.update(|q| {
            q.search.clear();
            q.filter = Some(UserStatus::Active);
        });
        assert_eq!(names(rows.get_untracked()), Some(vec!["Bob".to_string()]));

        users.set(Vec::new());
        assert_eq!(rows.get_untracked(), None);

        runtime.dispose();
    }
}
