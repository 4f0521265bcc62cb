mod api;
mod components;
mod config;
mod errors;
mod features;
mod lifecycle;
mod markdown;
mod models;
mod state;
#[cfg(test)]
mod testing;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::advisor::LawAdvisorPanel;
use components::fee::FeeFinderPanel;
use components::locker::DocumentLockerPanel;
use components::nav::{Header, Sidebar, TabPanel};
use components::predictor::CasePredictorPanel;
use components::reminder::CaseReminderPanel;
use components::summarizer::PdfSummarizerPanel;
use features::tabs::Tab;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let state = AppState::provide();

    state.open_from_hash();
    // The vault listing is loaded once up front, then after each upload.
    state.load_documents();

    view! {
        <div class="flex min-h-screen bg-slate-950 text-slate-200">
            <Sidebar />
            <main class="flex-1 flex flex-col">
                <Header />
                <TabPanel tab=Tab::FeeFinder><FeeFinderPanel /></TabPanel>
                <TabPanel tab=Tab::CasePredictor><CasePredictorPanel /></TabPanel>
                <TabPanel tab=Tab::LawAdvisor><LawAdvisorPanel /></TabPanel>
                <TabPanel tab=Tab::PdfSummarizer><PdfSummarizerPanel /></TabPanel>
                <TabPanel tab=Tab::DocumentLocker><DocumentLockerPanel /></TabPanel>
                <TabPanel tab=Tab::CaseReminder><CaseReminderPanel /></TabPanel>
            </main>
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    log::info!("dashboard talking to {}", config::API_BASE);
    mount_to_body(App);
}
