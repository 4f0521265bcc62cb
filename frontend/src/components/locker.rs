use leptos::html;
use leptos::prelude::*;

use super::{first_file, relay_alerts};
use crate::features::shelf::{self, DocumentListView, PLACEHOLDER};
use crate::state::AppState;

/// Vault upload plus the listing of stored documents.
#[component]
pub fn DocumentLockerPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let file_ref: NodeRef<html::Input> = NodeRef::new();
    let view_model = Memo::new(move |_| state.locker.with(|l| l.view()));
    relay_alerts(state.locker);

    let selected_file = move || file_ref.get_untracked().and_then(|input| first_file(&input));

    let on_change = move |_| {
        let name = selected_file().map(|f| f.name());
        state.locker.update(|l| l.select(name));
    };

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="glass-panel rounded-2xl p-6 space-y-4">
                <label class="flex items-center justify-center h-32 rounded-xl border-2 border-dashed border-slate-700 cursor-pointer text-sm text-slate-400">
                    <input id="locker-input" type="file" accept="application/pdf" class="hidden" node_ref=file_ref on:change=on_change />
                    <span id="locker-filename">
                        {move || view_model.with(|v| v.file_name.clone()).unwrap_or_else(|| "Select a PDF to vault".to_string())}
                    </span>
                </label>
                <button
                    id="locker-btn"
                    class="w-full flex items-center justify-center rounded-xl bg-indigo-600 py-3 text-sm font-medium text-white disabled:opacity-50"
                    disabled=move || view_model.with(|v| v.button_disabled)
                    on:click=move |_| state.vault(selected_file())
                >
                    <span class="w-4 h-4 mr-2" class:animate-spin=move || view_model.with(|v| v.button_spinning)>"◆"</span>
                    {move || view_model.with(|v| v.button_label)}
                </button>
                {move || view_model.with(|v| v.status.clone()).map(|message| view! {
                    <p id="locker-msg" class="text-sm"><span class="text-emerald-400">{message}</span></p>
                })}
            </div>

            <div id="locker-list" class="space-y-2">
                <DocumentList />
            </div>
        </div>
    }
}

#[component]
fn DocumentList() -> impl IntoView {
    let state = expect_context::<AppState>();

    move || match state.shelf.with(|s| s.view(shelf::viewer_offset_at)) {
        DocumentListView::Placeholder => view! {
            <div class="text-center text-slate-500 mt-10">{PLACEHOLDER}</div>
        }
        .into_any(),
        DocumentListView::Rows(rows) => rows
            .into_iter()
            .map(|row| {
                view! {
                    <div class="flex items-center justify-between p-3 rounded-lg bg-slate-800/50 border border-slate-700/50 hover:border-indigo-500/50 transition-colors group">
                        <div class="flex items-center space-x-3">
                            <div class="p-2 bg-indigo-500/10 rounded-lg text-indigo-400 text-xs">"PDF"</div>
                            <div>
                                <p class="text-sm font-medium text-white">{row.name}</p>
                                <p class="text-[10px] text-slate-500">{row.date}</p>
                            </div>
                        </div>
                        // Placeholder: the backend has no download route.
                        <button class="text-slate-500 hover:text-white transition-colors" title="Download">"↓"</button>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    }
}
