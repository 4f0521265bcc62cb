use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

/// Body of `/api/fee_finder`.
#[derive(Clone, Debug, Serialize)]
pub struct FeeRequest {
    pub prompt: String,
}

/// Body of `/api/law_advice`.
#[derive(Clone, Debug, Serialize)]
pub struct AdviceRequest {
    pub query: String,
}

/// Body of `/reminders/save-case-local`. Key names are fixed by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderPayload {
    pub case_title: String,
    pub due_date: String,
    pub user_email: String,
    pub sender_email: String,
    pub description: String,
}

/// `{response}` reply of the fee finder and the PDF summarizer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MarkdownReply {
    pub response: String,
}

/// Case simulation reply. The backend sends the analysis in `response` and
/// sometimes a short status in `prediction`; the analysis wins when present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prediction {
    Response(String),
    Prediction(String),
}

#[derive(Deserialize)]
struct RawPrediction {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    prediction: Option<String>,
}

impl Prediction {
    pub fn decode(body: &str) -> Result<Self, ApiError> {
        let raw: RawPrediction = serde_json::from_str(body)?;
        match (non_empty(raw.response), non_empty(raw.prediction)) {
            (Some(text), _) => Ok(Prediction::Response(text)),
            (None, Some(text)) => Ok(Prediction::Prediction(text)),
            (None, None) => Err(ApiError::decode("expected `response` or `prediction`")),
        }
    }

    pub fn markdown(&self) -> &str {
        match self {
            Prediction::Response(text) | Prediction::Prediction(text) => text,
        }
    }
}

/// The statute the advisor grounded its answer on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Citation {
    pub article: String,
    pub law_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdviceBody {
    Advice(String),
    Explanation(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdviceReply {
    pub citation: Option<Citation>,
    pub body: AdviceBody,
}

#[derive(Deserialize)]
struct RawAdvice {
    #[serde(default)]
    article: Option<String>,
    #[serde(default)]
    law_text: Option<String>,
    #[serde(default)]
    advice: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
}

impl AdviceReply {
    pub fn decode(body: &str) -> Result<Self, ApiError> {
        let raw: RawAdvice = serde_json::from_str(body)?;
        let body = match (non_empty(raw.advice), non_empty(raw.explanation)) {
            (Some(text), _) => AdviceBody::Advice(text),
            (None, Some(text)) => AdviceBody::Explanation(text),
            (None, None) => return Err(ApiError::decode("expected `advice` or `explanation`")),
        };
        // A citation block needs an article heading; the quoted text may be blank.
        let citation = non_empty(raw.article).map(|article| Citation {
            article,
            law_text: raw.law_text.unwrap_or_default(),
        });
        Ok(AdviceReply { citation, body })
    }

    pub fn markdown(&self) -> &str {
        match &self.body {
            AdviceBody::Advice(text) | AdviceBody::Explanation(text) => text,
        }
    }
}

/// Upload acknowledgement of `/api/pdf_lock`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LockReply {
    pub message: String,
    #[serde(default)]
    pub filename: Option<String>,
}

/// One vaulted file as listed by `/api/documents`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DocumentRecord {
    pub name: String,
    pub created_at: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_prefers_response() {
        let p = Prediction::decode(r#"{"prediction":"Done","response":"**High** odds"}"#).unwrap();
        assert_eq!(p, Prediction::Response("**High** odds".into()));
    }

    #[test]
    fn prediction_falls_back_when_response_blank() {
        let p = Prediction::decode(r#"{"response":"","prediction":"Low"}"#).unwrap();
        assert_eq!(p.markdown(), "Low");
    }

    #[test]
    fn prediction_without_either_field_is_rejected() {
        let err = Prediction::decode(r#"{"status":"ok"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn advice_with_citation() {
        let reply = AdviceReply::decode(
            r#"{"article":"Article 21","law_text":"No person shall be deprived...","advice":"Consult counsel."}"#,
        )
        .unwrap();
        assert_eq!(
            reply.citation,
            Some(Citation {
                article: "Article 21".into(),
                law_text: "No person shall be deprived...".into()
            })
        );
        assert_eq!(reply.body, AdviceBody::Advice("Consult counsel.".into()));
    }

    #[test]
    fn advice_explanation_without_article() {
        let reply = AdviceReply::decode(r#"{"explanation":"Tort is a civil wrong."}"#).unwrap();
        assert!(reply.citation.is_none());
        assert_eq!(reply.markdown(), "Tort is a civil wrong.");
    }

    #[test]
    fn reminder_payload_uses_backend_keys() {
        let payload = ReminderPayload {
            case_title: "State v. Rao".into(),
            due_date: "2024-03-01".into(),
            user_email: "client@example.com".into(),
            sender_email: "clerk@example.com".into(),
            description: "Hearing".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["case_title"], "State v. Rao");
        assert_eq!(json["user_email"], "client@example.com");
        assert_eq!(json["sender_email"], "clerk@example.com");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }
}
