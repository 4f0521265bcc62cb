use super::blank;
use crate::api::{ApiRequest, ApiResponse, Endpoint};
use crate::errors::ApiError;
use crate::lifecycle::{Feature, FeaturePolicy, Notice, RemoteCall, Surface};
use crate::models::ReminderPayload;

pub const IDLE_LABEL: &str = "Schedule Reminder";
pub const PENDING_LABEL: &str = "Saving...";
pub const SAVED: &str = "Reminder Saved to Database!";
pub const CONNECT_ERROR: &str = "Connection Error. Is Backend Running?";
pub const INCOMPLETE: &str = "Fill in the case title, due date and both email addresses.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReminderField {
    CaseTitle,
    DueDate,
    Recipient,
    Sender,
    Notes,
}

/// Case reminder form and its save call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReminderDesk {
    form: ReminderPayload,
    call: RemoteCall<()>,
    notice: Option<Notice>,
}

impl ReminderDesk {
    #[cfg(test)]
    pub fn form(&self) -> &ReminderPayload {
        &self.form
    }

    pub fn field(&self, field: ReminderField) -> &str {
        match field {
            ReminderField::CaseTitle => &self.form.case_title,
            ReminderField::DueDate => &self.form.due_date,
            ReminderField::Recipient => &self.form.user_email,
            ReminderField::Sender => &self.form.sender_email,
            ReminderField::Notes => &self.form.description,
        }
    }

    pub fn set_field(&mut self, field: ReminderField, value: String) {
        let slot = match field {
            ReminderField::CaseTitle => &mut self.form.case_title,
            ReminderField::DueDate => &mut self.form.due_date,
            ReminderField::Recipient => &mut self.form.user_email,
            ReminderField::Sender => &mut self.form.sender_email,
            ReminderField::Notes => &mut self.form.description,
        };
        *slot = value;
    }

    /// Notes are optional; everything else has to be filled in.
    pub fn request<F>(&self) -> Option<ApiRequest<F>> {
        let f = &self.form;
        if [&f.case_title, &f.due_date, &f.user_email, &f.sender_email]
            .into_iter()
            .any(|v| blank(v))
        {
            return None;
        }
        let body = serde_json::to_value(f).ok()?;
        Some(ApiRequest::json(Endpoint::SaveReminder, body))
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_pending() { PENDING_LABEL } else { IDLE_LABEL }
    }
}

impl Feature for ReminderDesk {
    type Output = ();

    // Whitespace-only fields get past the browser's `required` check.
    fn policy(&self) -> FeaturePolicy {
        FeaturePolicy::new(Surface::Alert).notify_on_empty(INCOMPLETE)
    }

    fn call(&self) -> &RemoteCall<()> {
        &self.call
    }

    fn call_mut(&mut self) -> &mut RemoteCall<()> {
        &mut self.call
    }

    fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    fn set_notice(&mut self, notice: Option<Notice>) {
        self.notice = notice;
    }

    // Any 2xx counts as saved, whatever the body.
    fn decode(response: ApiResponse) -> Result<(), ApiError> {
        response.success().map(|_| ())
    }

    fn error_text(&self, error: &ApiError) -> Option<String> {
        let text = match error {
            ApiError::Network(_) => CONNECT_ERROR.to_string(),
            ApiError::Status { message: Some(message), .. } => format!("Error: {message}"),
            ApiError::Status { status, message: None } => {
                format!("Error: request failed with status {status}")
            }
            ApiError::Decode(detail) => format!("Error: {detail}"),
        };
        Some(text)
    }

    fn on_success(&mut self, _output: &()) {
        self.form = ReminderPayload::default();
        self.notice = Some(Notice::new(SAVED, Surface::Alert));
    }
}
