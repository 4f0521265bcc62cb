use super::{Content, blank};
use crate::api::{ApiRequest, ApiResponse, Endpoint, Part};
use crate::errors::ApiError;
use crate::lifecycle::{Feature, FeaturePolicy, Notice, RemoteCall, Surface};
use crate::markdown;
use crate::models::Prediction;

pub const IDLE_LABEL: &str = "Predict Outcome";
pub const PENDING_LABEL: &str = "Simulating Court Outcome...";
pub const FAILURE: &str = "Prediction Error. Check console.";

/// Case outcome simulation panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CasePredictor {
    call: RemoteCall<Prediction>,
    notice: Option<Notice>,
    attached: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictorView {
    pub button_label: &'static str,
    pub button_disabled: bool,
    pub placeholder: bool,
    pub content: Option<Content>,
    pub attached: Option<String>,
}

impl CasePredictor {
    /// Either a description or a supporting document is enough to run.
    pub fn request<F>(description: &str, file: Option<F>) -> Option<ApiRequest<F>> {
        if blank(description) && file.is_none() {
            return None;
        }
        let mut parts = vec![("case_description", Part::Text(description.to_string()))];
        if let Some(file) = file {
            parts.push(("files", Part::File(file)));
        }
        Some(ApiRequest::multipart(Endpoint::CaseSimulate, parts))
    }

    pub fn attach(&mut self, file_name: Option<String>) {
        if file_name.is_some() {
            self.attached = file_name;
        }
    }

    pub fn view(&self) -> PredictorView {
        let pending = self.is_pending();
        let content = self
            .call
            .output()
            .map(|p| Content::Html(markdown::render(p.markdown())));
        PredictorView {
            button_label: if pending { PENDING_LABEL } else { IDLE_LABEL },
            button_disabled: pending,
            placeholder: !pending && self.call.requests_issued() == 0,
            content,
            attached: self.attached.clone(),
        }
    }
}

impl Feature for CasePredictor {
    type Output = Prediction;

    fn policy(&self) -> FeaturePolicy {
        FeaturePolicy::new(Surface::Alert)
    }

    fn call(&self) -> &RemoteCall<Prediction> {
        &self.call
    }

    fn call_mut(&mut self) -> &mut RemoteCall<Prediction> {
        &mut self.call
    }

    fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    fn set_notice(&mut self, notice: Option<Notice>) {
        self.notice = notice;
    }

    fn decode(response: ApiResponse) -> Result<Prediction, ApiError> {
        Prediction::decode(&response.success()?.body)
    }

    fn error_text(&self, error: &ApiError) -> Option<String> {
        log::error!("case simulation failed: {error}");
        Some(FAILURE.to_string())
    }
}
