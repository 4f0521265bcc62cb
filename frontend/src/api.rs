use std::future::Future;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use web_sys::FormData;

use crate::config::{self, API_BASE};
use crate::errors::ApiError;

/// Every backend route the dashboard calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    FeeFinder,
    CaseSimulate,
    LawAdvice,
    PdfSummary,
    PdfLock,
    Documents,
    SaveReminder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::FeeFinder => "/api/fee_finder",
            Endpoint::CaseSimulate => "/api/case_simulate",
            Endpoint::LawAdvice => "/api/law_advice",
            Endpoint::PdfSummary => "/api/pdf_summary",
            Endpoint::PdfLock => "/api/pdf_lock",
            Endpoint::Documents => "/api/documents",
            Endpoint::SaveReminder => "/reminders/save-case-local",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Endpoint::Documents => Method::Get,
            _ => Method::Post,
        }
    }
}

/// One field of a multipart body.
#[derive(Clone, Debug, PartialEq)]
pub enum Part<F> {
    Text(String),
    File(F),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body<F> {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<(&'static str, Part<F>)>),
}

/// A request as the features describe it, independent of the platform's
/// file handle `F`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest<F> {
    pub endpoint: Endpoint,
    pub body: Body<F>,
}

impl<F> ApiRequest<F> {
    pub fn get(endpoint: Endpoint) -> Self {
        Self { endpoint, body: Body::Empty }
    }

    pub fn json(endpoint: Endpoint, value: serde_json::Value) -> Self {
        Self { endpoint, body: Body::Json(value) }
    }

    pub fn multipart(endpoint: Endpoint, parts: Vec<(&'static str, Part<F>)>) -> Self {
        Self { endpoint, body: Body::Multipart(parts) }
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-2xx reply into `ApiError::Status`, lifting `{error}` out of the body.
    pub fn success(self) -> Result<Self, ApiError> {
        if self.ok() {
            return Ok(self);
        }
        let message = serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|b| b.error);
        Err(ApiError::Status { status: self.status, message })
    }

    /// Checks the status, then decodes the body.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let resp = self.success()?;
        Ok(serde_json::from_str(&resp.body)?)
    }
}

/// The seam between features and the network.
pub trait Transport {
    type File: Clone;

    fn send(
        &self,
        request: ApiRequest<Self::File>,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Browser transport backed by `fetch` through gloo-net.
#[derive(Clone, Copy, Debug)]
pub struct GlooTransport {
    base: &'static str,
}

impl Default for GlooTransport {
    fn default() -> Self {
        Self { base: API_BASE }
    }
}

impl Transport for GlooTransport {
    type File = web_sys::File;

    async fn send(&self, request: ApiRequest<web_sys::File>) -> Result<ApiResponse, ApiError> {
        let url = config::endpoint_url(self.base, request.endpoint.path());
        let builder = match request.endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };

        let req = match request.body {
            Body::Empty => builder.build()?,
            Body::Json(value) => builder.json(&value)?,
            Body::Multipart(parts) => builder.body(form_data(parts)?)?,
        };

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok(ApiResponse::new(status, body))
    }
}

fn form_data(parts: Vec<(&'static str, Part<web_sys::File>)>) -> Result<FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("FormData error: {e:?}"));
    let form = FormData::new().map_err(js_err)?;
    for (name, part) in parts {
        match part {
            Part::Text(value) => form.append_with_str(name, &value).map_err(js_err)?,
            Part::File(file) => form
                .append_with_blob_and_filename(name, &file, &file.name())
                .map_err(js_err)?,
        }
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_is_the_only_get() {
        let gets: Vec<_> = [
            Endpoint::FeeFinder,
            Endpoint::CaseSimulate,
            Endpoint::LawAdvice,
            Endpoint::PdfSummary,
            Endpoint::PdfLock,
            Endpoint::Documents,
            Endpoint::SaveReminder,
        ]
        .into_iter()
        .filter(|e| e.method() == Method::Get)
        .collect();
        assert_eq!(gets, vec![Endpoint::Documents]);
        assert_eq!(Endpoint::SaveReminder.path(), "/reminders/save-case-local");
    }

    #[test]
    fn non_2xx_lifts_error_field() {
        let err = ApiResponse::new(500, r#"{"error":"Firebase Not Connected"}"#)
            .success()
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status { status: 500, message: Some("Firebase Not Connected".into()) }
        );
    }

    #[test]
    fn non_2xx_without_json_body_has_no_message() {
        let err = ApiResponse::new(502, "<html>Bad Gateway</html>").success().unwrap_err();
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = ApiResponse::new(200, "not json")
            .json::<serde_json::Value>()
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
