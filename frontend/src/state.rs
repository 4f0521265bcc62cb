use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::GlooTransport;
use crate::features::advisor::ChatHistory;
use crate::features::fee::FeeFinder;
use crate::features::locker::{self, DocumentLocker};
use crate::features::predictor::CasePredictor;
use crate::features::reminder::{ReminderDesk, ReminderField};
use crate::features::shelf::DocumentShelf;
use crate::features::summarizer::PdfSummarizer;
use crate::features::tabs::{Tab, TabNav};
use crate::lifecycle::perform;

/// Shared application state, provided via Leptos context.
///
/// One signal per feature view-model; the components only project them.
#[derive(Clone, Copy)]
pub struct AppState {
    pub tabs: RwSignal<TabNav>,
    pub fee: RwSignal<FeeFinder>,
    pub predictor: RwSignal<CasePredictor>,
    pub advisor: RwSignal<ChatHistory>,
    pub summarizer: RwSignal<PdfSummarizer>,
    pub locker: RwSignal<DocumentLocker>,
    pub shelf: RwSignal<DocumentShelf>,
    pub reminder: RwSignal<ReminderDesk>,
    transport: GlooTransport,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let state = Self {
            tabs: RwSignal::new(TabNav::default()),
            fee: RwSignal::new(FeeFinder::default()),
            predictor: RwSignal::new(CasePredictor::default()),
            advisor: RwSignal::new(ChatHistory::default()),
            summarizer: RwSignal::new(PdfSummarizer::default()),
            locker: RwSignal::new(DocumentLocker::default()),
            shelf: RwSignal::new(DocumentShelf::default()),
            reminder: RwSignal::new(ReminderDesk::default()),
            transport: GlooTransport::default(),
        };
        provide_context(state);
        state
    }

    pub fn switch_tab(&self, tab: Tab) {
        self.tabs.update(|nav| nav.activate(tab));
        if let Err(e) = window().location().set_hash(tab.id()) {
            log::warn!("could not record tab in URL: {e:?}");
        }
    }

    /// Opens the panel named by the URL fragment (`#advisor`), if any.
    pub fn open_from_hash(&self) {
        let hash = window().location().hash().unwrap_or_default();
        let id = hash.trim_start_matches('#').to_string();
        if !id.is_empty() {
            self.tabs.update(|nav| {
                nav.activate_id(&id);
            });
        }
    }

    /// Fetch the vault listing.
    pub fn load_documents(&self) {
        let state = *self;
        spawn_local(async move {
            perform(&state.transport, &state.shelf, |_| DocumentShelf::request()).await;
        });
    }

    pub fn ask_fee(&self, prompt: String) {
        let state = *self;
        spawn_local(async move {
            perform(&state.transport, &state.fee, |_| FeeFinder::request(&prompt)).await;
        });
    }

    pub fn predict(&self, description: String, file: Option<web_sys::File>) {
        let state = *self;
        spawn_local(async move {
            perform(&state.transport, &state.predictor, |_| {
                CasePredictor::request(&description, file)
            })
            .await;
        });
    }

    pub fn ask_advisor(&self, query: String) {
        let state = *self;
        spawn_local(async move {
            perform(&state.transport, &state.advisor, |chat: &mut ChatHistory| {
                chat.submit(&query)
            })
            .await;
        });
    }

    pub fn summarize(&self, file: Option<web_sys::File>) {
        let state = *self;
        spawn_local(async move {
            perform(&state.transport, &state.summarizer, |_| PdfSummarizer::request(file)).await;
        });
    }

    /// Upload to the vault and refresh the listing once it is stored.
    pub fn vault(&self, file: Option<web_sys::File>) {
        let state = *self;
        spawn_local(async move {
            locker::vault_and_refresh(&state.transport, &state.locker, &state.shelf, file).await;
        });
    }

    pub fn set_reminder_field(&self, field: ReminderField, value: String) {
        self.reminder.update(|desk| desk.set_field(field, value));
    }

    pub fn save_reminder(&self) {
        let state = *self;
        spawn_local(async move {
            perform(&state.transport, &state.reminder, |desk: &mut ReminderDesk| desk.request())
                .await;
        });
    }
}
