use super::blank;
use crate::api::{ApiRequest, ApiResponse, Endpoint};
use crate::errors::ApiError;
use crate::lifecycle::{Feature, FeaturePolicy, Notice, RemoteCall, Surface};
use crate::markdown;
use crate::models::{AdviceReply, AdviceRequest, Citation};

pub const FAILURE: &str = "Advisor Error";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Bubble {
    User(String),
    Assistant(AdviceReply),
}

/// An assistant bubble ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantView {
    pub citation: Option<Citation>,
    pub advice_html: String,
}

impl From<&AdviceReply> for AssistantView {
    fn from(reply: &AdviceReply) -> Self {
        Self {
            citation: reply.citation.clone(),
            advice_html: markdown::render(reply.markdown()),
        }
    }
}

/// Law advisor conversation. Bubbles are only ever appended.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatHistory {
    bubbles: Vec<Bubble>,
    call: RemoteCall<AdviceReply>,
    notice: Option<Notice>,
}

impl ChatHistory {
    /// Appends the user's bubble right away and builds the request for it.
    pub fn submit<F>(&mut self, query: &str) -> Option<ApiRequest<F>> {
        if blank(query) {
            return None;
        }
        self.bubbles.push(Bubble::User(query.to_string()));
        let body = serde_json::to_value(AdviceRequest { query: query.to_string() }).ok()?;
        Some(ApiRequest::json(Endpoint::LawAdvice, body))
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    /// Reply pending for at least one question.
    pub fn is_typing(&self) -> bool {
        self.is_pending()
    }
}

impl Feature for ChatHistory {
    type Output = AdviceReply;

    fn policy(&self) -> FeaturePolicy {
        FeaturePolicy::new(Surface::Alert).every_reply()
    }

    fn call(&self) -> &RemoteCall<AdviceReply> {
        &self.call
    }

    fn call_mut(&mut self) -> &mut RemoteCall<AdviceReply> {
        &mut self.call
    }

    fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    fn set_notice(&mut self, notice: Option<Notice>) {
        self.notice = notice;
    }

    fn decode(response: ApiResponse) -> Result<AdviceReply, ApiError> {
        AdviceReply::decode(&response.success()?.body)
    }

    fn error_text(&self, _error: &ApiError) -> Option<String> {
        Some(FAILURE.to_string())
    }

    fn on_success(&mut self, reply: &AdviceReply) {
        self.bubbles.push(Bubble::Assistant(reply.clone()));
    }
}
