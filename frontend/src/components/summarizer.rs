use leptos::html;
use leptos::prelude::*;

use super::{ContentBody, first_file};
use crate::state::AppState;

#[component]
pub fn PdfSummarizerPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let file_ref: NodeRef<html::Input> = NodeRef::new();
    let view_model = Memo::new(move |_| state.summarizer.with(|s| s.view()));

    let selected_file = move || file_ref.get_untracked().and_then(|input| first_file(&input));

    let on_change = move |_| {
        let name = selected_file().map(|f| f.name());
        state.summarizer.update(|s| s.select(name));
    };

    view! {
        <label
            id="pdf-upload-label"
            class=move || {
                format!(
                    "flex flex-col items-center justify-center h-40 rounded-2xl border-2 border-dashed cursor-pointer text-sm text-slate-400 {}",
                    view_model.with(|v| v.upload_label_class),
                )
            }
        >
            <input id="pdf-upload-input" type="file" accept="application/pdf" class="hidden" node_ref=file_ref on:change=on_change />
            <span id="pdf-filename">
                {move || view_model.with(|v| v.file_name.clone()).unwrap_or_else(|| "Drop a judgment, contract or notice (PDF)".to_string())}
            </span>
        </label>

        <button
            id="pdf-analyze-btn"
            class="mt-4 w-full rounded-xl bg-indigo-600 py-3 text-sm font-medium text-white disabled:opacity-50"
            disabled=move || view_model.with(|v| v.button_disabled)
            on:click=move |_| state.summarize(selected_file())
        >
            {move || view_model.with(|v| v.button_label)}
        </button>

        <div id="pdf-output" class="mt-6 glass-panel rounded-2xl p-6 text-sm text-slate-300">
            {move || {
                view_model
                    .get()
                    .output
                    .map(|content| view! { <ContentBody content=content /> }.into_any())
                    .unwrap_or_else(|| view! { <p class="text-slate-500">"The summary will appear here."</p> }.into_any())
            }}
        </div>
    }
}
