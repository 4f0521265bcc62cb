use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use super::{ContentBody, first_file, relay_alerts};
use crate::state::AppState;

#[component]
pub fn CasePredictorPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (description, set_description) = signal(String::new());
    let file_ref: NodeRef<html::Input> = NodeRef::new();
    let view_model = Memo::new(move |_| state.predictor.with(|p| p.view()));
    relay_alerts(state.predictor);

    let selected_file = move || file_ref.get_untracked().and_then(|input| first_file(&input));

    let on_change = move |_| {
        let name = selected_file().map(|f| f.name());
        state.predictor.update(|p| p.attach(name));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        state.predict(description.get_untracked(), selected_file());
    };

    view! {
        <form id="predictor-form" class="space-y-4" on:submit=on_submit>
            <textarea
                id="predictor-desc"
                rows="6"
                class="w-full rounded-xl bg-slate-900 border border-slate-700 p-4 text-sm text-white"
                placeholder="Summarise the facts of the case"
                prop:value=description
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <label class="flex items-center gap-3 rounded-xl border border-dashed border-slate-700 p-4 text-sm text-slate-400 cursor-pointer">
                <input id="predictor-file" type="file" accept="application/pdf" class="hidden" node_ref=file_ref on:change=on_change />
                <span id="predictor-filename">
                    {move || view_model.with(|v| v.attached.clone()).unwrap_or_else(|| "Attach FIR, petition or evidence (optional)".to_string())}
                </span>
            </label>
            <button
                id="predictor-btn"
                type="submit"
                class="w-full rounded-xl bg-blue-600 py-3 text-sm font-medium text-white disabled:opacity-50"
                disabled=move || view_model.with(|v| v.button_disabled)
            >
                {move || view_model.with(|v| v.button_label)}
            </button>
        </form>

        <div class="mt-6 glass-panel rounded-2xl p-6">
            <div id="predictor-placeholder" class="text-slate-500 text-sm" class:hidden=move || !view_model.with(|v| v.placeholder)>
                "The simulated verdict will appear here."
            </div>
            <div id="predictor-content">
                {move || view_model.get().content.map(|content| view! { <ContentBody content=content /> })}
            </div>
        </div>
    }
}
