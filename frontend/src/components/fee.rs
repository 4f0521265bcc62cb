use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::ContentBody;
use crate::state::AppState;

#[component]
pub fn FeeFinderPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (prompt, set_prompt) = signal(String::new());
    let view_model = Memo::new(move |_| state.fee.with(|fee| fee.view()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        state.ask_fee(prompt.get_untracked());
    };

    view! {
        <form id="fee-form" class="flex gap-3" on:submit=on_submit>
            <input
                id="fee-input"
                class="flex-1 rounded-xl bg-slate-900 border border-slate-700 px-4 py-3 text-sm text-white"
                placeholder="Describe your matter, e.g. contested divorce in Mumbai High Court"
                prop:value=prompt
                on:input=move |ev| set_prompt.set(event_target_value(&ev))
            />
            <button type="submit" class="rounded-xl bg-blue-600 px-5 text-sm font-medium text-white">
                "Estimate"
            </button>
        </form>

        <div class="mt-6 glass-panel rounded-2xl p-6 relative">
            <span
                id="fee-result-badge"
                class="absolute top-4 right-4 text-[10px] uppercase tracking-wide text-emerald-400"
                class:hidden=move || !view_model.with(|v| v.badge)
            >
                "Estimate ready"
            </span>
            <div id="fee-placeholder" class="text-slate-500 text-sm" class:hidden=move || !view_model.with(|v| v.placeholder)>
                "Your fee breakdown will appear here."
            </div>
            <div id="fee-loading" class="text-slate-400 text-sm animate-pulse" class:hidden=move || !view_model.with(|v| v.loading)>
                "Estimating fees..."
            </div>
            <div id="fee-content">
                {move || view_model.get().content.map(|content| view! { <ContentBody content=content /> })}
            </div>
        </div>
    }
}
