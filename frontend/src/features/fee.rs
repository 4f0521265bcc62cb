use super::{Content, blank, inline, server_error_or};
use crate::api::{ApiRequest, ApiResponse, Endpoint};
use crate::errors::ApiError;
use crate::lifecycle::{Feature, FeaturePolicy, Notice, RemoteCall, Surface};
use crate::markdown;
use crate::models::{FeeRequest, MarkdownReply};

pub const CONNECT_ERROR: &str = "Error: Could not connect to API.";

/// Fee estimate panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeeFinder {
    call: RemoteCall<MarkdownReply>,
    notice: Option<Notice>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeView {
    pub loading: bool,
    pub placeholder: bool,
    pub content: Option<Content>,
    pub badge: bool,
}

impl FeeFinder {
    pub fn request<F>(prompt: &str) -> Option<ApiRequest<F>> {
        if blank(prompt) {
            return None;
        }
        let body = serde_json::to_value(FeeRequest { prompt: prompt.to_string() }).ok()?;
        Some(ApiRequest::json(Endpoint::FeeFinder, body))
    }

    pub fn view(&self) -> FeeView {
        if self.is_pending() {
            return FeeView { loading: true, placeholder: false, content: None, badge: false };
        }
        let content = match (self.call.output(), inline(self.notice.as_ref())) {
            (_, Some(notice)) => Some(Content::Text(notice.text.clone())),
            (Some(reply), None) => Some(Content::Html(markdown::render(&reply.response))),
            (None, None) => None,
        };
        FeeView {
            loading: false,
            placeholder: content.is_none(),
            badge: matches!(content, Some(Content::Html(_))),
            content,
        }
    }
}

impl Feature for FeeFinder {
    type Output = MarkdownReply;

    fn policy(&self) -> FeaturePolicy {
        FeaturePolicy::new(Surface::Inline)
    }

    fn call(&self) -> &RemoteCall<MarkdownReply> {
        &self.call
    }

    fn call_mut(&mut self) -> &mut RemoteCall<MarkdownReply> {
        &mut self.call
    }

    fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    fn set_notice(&mut self, notice: Option<Notice>) {
        self.notice = notice;
    }

    fn decode(response: ApiResponse) -> Result<MarkdownReply, ApiError> {
        response.json()
    }

    fn error_text(&self, error: &ApiError) -> Option<String> {
        Some(server_error_or(error, CONNECT_ERROR))
    }
}
