use super::{Content, inline, server_error_or};
use crate::api::{ApiRequest, ApiResponse, Endpoint, Part};
use crate::errors::ApiError;
use crate::lifecycle::{Feature, FeaturePolicy, Notice, RemoteCall, Surface};
use crate::markdown;
use crate::models::MarkdownReply;

pub const IDLE_LABEL: &str = "Summarize Document";
pub const PENDING_LABEL: &str = "Analyzing Content...";
pub const FAILURE: &str = "Analysis Failed.";

const LABEL_IDLE_CLASS: &str = "border-slate-700";
const LABEL_SELECTED_CLASS: &str = "bg-indigo-900/20 border-indigo-500";

/// PDF summary panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PdfSummarizer {
    call: RemoteCall<MarkdownReply>,
    notice: Option<Notice>,
    selected: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummarizerView {
    pub file_name: Option<String>,
    pub upload_label_class: &'static str,
    pub button_label: &'static str,
    pub button_disabled: bool,
    pub output: Option<Content>,
}

impl PdfSummarizer {
    pub fn request<F>(file: Option<F>) -> Option<ApiRequest<F>> {
        let file = file?;
        Some(ApiRequest::multipart(Endpoint::PdfSummary, vec![("pdf", Part::File(file))]))
    }

    /// Called from the file input's change event; an emptied picker keeps the old name.
    pub fn select(&mut self, file_name: Option<String>) {
        if file_name.is_some() {
            self.selected = file_name;
        }
    }

    pub fn view(&self) -> SummarizerView {
        let pending = self.is_pending();
        let output = match (self.call.output(), inline(self.notice.as_ref())) {
            (_, Some(notice)) => Some(Content::Text(notice.text.clone())),
            (Some(reply), None) => Some(Content::Html(markdown::render(&reply.response))),
            (None, None) => None,
        };
        SummarizerView {
            file_name: self.selected.clone(),
            upload_label_class: if self.selected.is_some() {
                LABEL_SELECTED_CLASS
            } else {
                LABEL_IDLE_CLASS
            },
            button_label: if pending { PENDING_LABEL } else { IDLE_LABEL },
            button_disabled: self.selected.is_none(),
            output,
        }
    }
}

impl Feature for PdfSummarizer {
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
        Some(server_error_or(error, FAILURE))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::api::Body;
    use crate::lifecycle::{Settled, perform};
    use crate::testing::{FakeFile, MockTransport};

    #[test]
    fn no_file_no_request() {
        let transport = MockTransport::new();
        let pdf = RefCell::new(PdfSummarizer::default());
        let settled = block_on(perform(&transport, &pdf, |_| PdfSummarizer::request::<FakeFile>(None)));
        assert_eq!(settled, Settled::Skipped);
        assert_eq!(transport.sent(), 0);
        assert!(pdf.borrow().view().button_disabled);
    }

    #[test]
    fn selection_restyles_label_and_enables_button() {
        let mut pdf = PdfSummarizer::default();
        pdf.select(Some("judgment.pdf".into()));
        pdf.select(None);
        let view = pdf.view();
        assert_eq!(view.file_name.as_deref(), Some("judgment.pdf"));
        assert_eq!(view.upload_label_class, LABEL_SELECTED_CLASS);
        assert!(!view.button_disabled);
    }

    #[test]
    fn summary_is_rendered_markdown() {
        let transport = MockTransport::replying(200, r#"{"summary":"Done","response":"Holding: *affirmed*"}"#);
        let pdf = RefCell::new(PdfSummarizer::default());
        block_on(perform(&transport, &pdf, |_| PdfSummarizer::request(Some("judgment.pdf"))));

        assert_eq!(
            transport.last().unwrap().body,
            Body::Multipart(vec![("pdf", Part::File("judgment.pdf"))])
        );
        let view = pdf.borrow().view();
        assert_eq!(view.button_label, IDLE_LABEL);
        match view.output {
            Some(Content::Html(html)) => {
                // The panel's ContentBody supplies the prose wrapper.
                assert!(!html.contains("prose"));
                assert!(html.contains("<em>affirmed</em>"));
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn server_error_is_shown_inline() {
        let transport = MockTransport::replying(400, r#"{"error":"No file"}"#);
        let pdf = RefCell::new(PdfSummarizer::default());
        block_on(perform(&transport, &pdf, |_| PdfSummarizer::request(Some("x.pdf"))));
        assert_eq!(pdf.borrow().view().output, Some(Content::Text("Error: No file".into())));
    }

    #[test]
    fn network_failure_restores_label() {
        let transport = MockTransport::failing();
        let pdf = RefCell::new(PdfSummarizer::default());
        block_on(perform(&transport, &pdf, |_| PdfSummarizer::request(Some("x.pdf"))));
        let view = pdf.borrow().view();
        assert_eq!(view.button_label, IDLE_LABEL);
        assert_eq!(view.output, Some(Content::Text(FAILURE.into())));
    }
}
