const ACTIVE_BUTTON: &str = "bg-white/5 text-white shadow-inner border border-white/5";
const INACTIVE_BUTTON: &str = "text-slate-400 hover:text-white hover:bg-white/5";
const ACTIVE_ICON: &str = "text-blue-400";
const INACTIVE_ICON: &str = "text-slate-500";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    FeeFinder,
    CasePredictor,
    LawAdvisor,
    PdfSummarizer,
    DocumentLocker,
    CaseReminder,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::FeeFinder,
        Tab::CasePredictor,
        Tab::LawAdvisor,
        Tab::PdfSummarizer,
        Tab::DocumentLocker,
        Tab::CaseReminder,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tab::FeeFinder => "fee_finder",
            Tab::CasePredictor => "predictor",
            Tab::LawAdvisor => "advisor",
            Tab::PdfSummarizer => "summarizer",
            Tab::DocumentLocker => "locker",
            Tab::CaseReminder => "reminders",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Text for the page header: the id with its first underscore spaced out.
    pub fn header_label(self) -> String {
        self.id().replacen('_', " ", 1)
    }

    /// Sidebar button caption.
    pub fn nav_label(self) -> &'static str {
        match self {
            Tab::FeeFinder => "Fee Finder",
            Tab::CasePredictor => "Case Predictor",
            Tab::LawAdvisor => "Law Advisor",
            Tab::PdfSummarizer => "PDF Summarizer",
            Tab::DocumentLocker => "Document Locker",
            Tab::CaseReminder => "Case Reminder",
        }
    }
}

/// Which panel is on screen. Exactly one is, at all times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabNav {
    active: Tab,
}

impl Default for TabNav {
    fn default() -> Self {
        Self { active: Tab::FeeFinder }
    }
}

impl TabNav {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn activate(&mut self, tab: Tab) {
        self.active = tab;
    }

    /// Unknown ids leave the current tab in place.
    pub fn activate_id(&mut self, id: &str) -> bool {
        match Tab::from_id(id) {
            Some(tab) => {
                self.activate(tab);
                true
            }
            None => false,
        }
    }

    pub fn is_visible(&self, tab: Tab) -> bool {
        self.active() == tab
    }

    pub fn header(&self) -> String {
        self.active.header_label()
    }

    pub fn nav_class(&self, tab: Tab) -> &'static str {
        if self.is_visible(tab) { ACTIVE_BUTTON } else { INACTIVE_BUTTON }
    }

    pub fn icon_class(&self, tab: Tab) -> &'static str {
        if self.is_visible(tab) { ACTIVE_ICON } else { INACTIVE_ICON }
    }

    pub fn shows_indicator(&self, tab: Tab) -> bool {
        self.is_visible(tab)
    }
}
