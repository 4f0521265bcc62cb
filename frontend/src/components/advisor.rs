use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use super::relay_alerts;
use crate::features::advisor::{AssistantView, Bubble};
use crate::state::AppState;

/// Law advisor chat: history plus input row.
#[component]
pub fn LawAdvisorPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (query, set_query) = signal(String::new());
    let history_ref: NodeRef<html::Div> = NodeRef::new();
    relay_alerts(state.advisor);

    // Keep the newest bubble in view.
    Effect::new(move |_| {
        state.advisor.with(|chat| chat.len());
        if let Some(history) = history_ref.get() {
            history.set_scroll_top(history.scroll_height());
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = query.get_untracked();
        set_query.set(String::new());
        state.ask_advisor(text);
    };

    view! {
        <div class="flex flex-col h-[calc(100vh-10rem)]">
            <div id="chat-history" class="flex-1 overflow-y-auto space-y-4 pr-2" node_ref=history_ref>
                <div id="chat-empty" class="text-center text-slate-500 mt-20" class:hidden=move || !state.advisor.with(|c| c.is_empty())>
                    "Ask about any Act, Article or legal situation."
                </div>
                // History is append-only, so a bubble's position is a stable key.
                <For
                    each=move || state.advisor.with(|chat| chat.bubbles().iter().cloned().enumerate().collect::<Vec<_>>())
                    key=|(index, _)| *index
                    let:entry
                >
                    <ChatBubble bubble=entry.1 />
                </For>
                <Show when=move || state.advisor.with(|c| c.is_typing())>
                    <div class="text-xs text-slate-500 animate-pulse">"Consulting the statutes..."</div>
                </Show>
            </div>

            <form id="advisor-form" class="mt-4 flex gap-3" on:submit=on_submit>
                <input
                    id="advisor-input"
                    class="flex-1 rounded-xl bg-slate-900 border border-slate-700 px-4 py-3 text-sm text-white"
                    placeholder="Type your legal question"
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit" class="rounded-xl bg-amber-600 px-5 text-sm font-medium text-white">
                    "Ask"
                </button>
            </form>
        </div>
    }
}

#[component]
fn ChatBubble(bubble: Bubble) -> impl IntoView {
    match bubble {
        Bubble::User(text) => view! {
            <div class="flex justify-end animate-fade-in">
                <div class="max-w-3xl p-5 rounded-2xl rounded-br-none text-sm leading-relaxed shadow-lg bg-slate-800 text-slate-200 border border-slate-700">
                    <p>{text}</p>
                </div>
            </div>
        }
        .into_any(),
        Bubble::Assistant(reply) => {
            let reply = AssistantView::from(&reply);
            view! {
                <div class="flex justify-start animate-fade-in mt-4">
                    <div class="max-w-3xl p-5 rounded-2xl rounded-bl-none text-sm leading-relaxed shadow-lg glass-panel border-slate-700/50 space-y-5">
                        {reply.citation.map(|citation| view! {
                            <div class="relative overflow-hidden rounded-xl border border-amber-900/40 bg-gradient-to-r from-amber-950/40 to-transparent">
                                <div class="absolute left-0 top-0 w-1 h-full bg-amber-600"></div>
                                <div class="p-4 pl-6">
                                    <h4 class="text-amber-400 font-serif font-bold text-lg mb-2">{citation.article}</h4>
                                    <p class="text-amber-100/70 text-sm italic font-serif leading-relaxed">
                                        {format!("\"{}\"", citation.law_text)}
                                    </p>
                                </div>
                            </div>
                        })}
                        <div class="text-slate-300 prose prose-invert prose-sm max-w-none" inner_html=reply.advice_html></div>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
