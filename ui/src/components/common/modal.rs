//! Modal frame shared by the record forms

use leptos::*;

use super::CloseIcon;

/// Backdrop plus dialog with a title bar. Clicking the backdrop or the
/// close button calls `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    on_close: impl Fn() + Clone + 'static,
    children: Children,
) -> impl IntoView {
    let on_close_backdrop = on_close.clone();
    let on_close_header = on_close;

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            // Backdrop
            <div
                class="absolute inset-0 bg-black/60 backdrop-blur-sm"
                on:click=move |_| on_close_backdrop()
            />

            <div class="relative bg-slate-800 rounded-xl border border-slate-700 shadow-2xl w-full max-w-lg mx-4">
                <div class="flex items-center justify-between px-6 py-4 border-b border-slate-700">
                    <h2 class="text-lg font-semibold text-white">{move || title.get()}</h2>
                    <button
                        class="p-1 text-slate-400 hover:text-white rounded transition-colors"
                        on:click=move |_| on_close_header()
                    >
                        <CloseIcon class="w-5 h-5" />
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
