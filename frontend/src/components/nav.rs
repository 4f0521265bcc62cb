use leptos::prelude::*;

use crate::features::tabs::Tab;
use crate::state::AppState;

/// Left-hand navigation, one button per panel.
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <aside class="w-64 shrink-0 border-r border-white/5 bg-slate-950 p-4 space-y-1">
            <h2 class="px-3 pb-4 text-lg font-serif font-bold text-white">"Legal Desk"</h2>
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            id=format!("nav-{}", tab.id())
                            class=move || {
                                format!(
                                    "nav-btn relative w-full flex items-center px-3 py-2 rounded-lg text-sm {}",
                                    state.tabs.with(|nav| nav.nav_class(tab)),
                                )
                            }
                            on:click=move |_| state.switch_tab(tab)
                        >
                            <Show when=move || state.tabs.with(|nav| nav.shows_indicator(tab))>
                                <div class="active-indicator absolute left-0 top-0 w-[2px] h-full bg-blue-500 shadow-[0_0_10px_#3b82f6]"></div>
                            </Show>
                            <span class=move || {
                                format!("nav-icon mr-3 {}", state.tabs.with(|nav| nav.icon_class(tab)))
                            }>"●"</span>
                            {tab.nav_label()}
                        </button>
                    }
                })
                .collect_view()}
        </aside>
    }
}

/// Page header naming the active panel.
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <header class="h-16 flex items-center px-8 border-b border-white/5">
            <h1 id="header-title" class="text-xl font-semibold capitalize text-white">
                {move || state.tabs.with(|nav| nav.header())}
            </h1>
        </header>
    }
}

/// Wraps one panel; hidden unless its tab is active.
#[component]
pub fn TabPanel(tab: Tab, children: Children) -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <section
            id=format!("tab-{}", tab.id())
            class="tab-content p-8"
            class:hidden=move || !state.tabs.with(|nav| nav.is_visible(tab))
        >
            {children()}
        </section>
    }
}
