pub mod advisor;
pub mod fee;
pub mod locker;
pub mod nav;
pub mod predictor;
pub mod reminder;
pub mod summarizer;

use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::features::Content;
use crate::lifecycle::{Feature, Surface};

/// The file currently picked in a file input, if any.
pub(crate) fn first_file(input: &HtmlInputElement) -> Option<web_sys::File> {
    input.files()?.get(0)
}

/// Shows a feature's dialog notices with `window.alert`, once each.
pub(crate) fn relay_alerts<V>(signal: RwSignal<V>)
where
    V: Feature + Send + Sync + 'static,
{
    Effect::new(move |_| {
        let has_alert = signal.with(|v| v.notice().is_some_and(|n| n.surface == Surface::Alert));
        if !has_alert {
            return;
        }
        if let Some(text) = signal.try_update_untracked(|v| v.take_alert()).flatten() {
            if let Err(e) = window().alert_with_message(&text) {
                log::warn!("alert failed: {e:?}");
            }
        }
    });
}

/// Result container body: rendered Markdown or escaped text.
#[component]
pub fn ContentBody(content: Content) -> impl IntoView {
    match content {
        Content::Html(html) => view! { <div class="prose prose-invert max-w-none" inner_html=html></div> }.into_any(),
        Content::Text(text) => view! { <p class="text-rose-400 text-sm">{text}</p> }.into_any(),
    }
}
