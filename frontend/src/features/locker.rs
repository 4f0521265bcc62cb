use super::shelf::DocumentShelf;
use crate::api::{ApiRequest, ApiResponse, Endpoint, Part, Transport};
use crate::errors::ApiError;
use crate::lifecycle::{Feature, FeaturePolicy, Notice, RemoteCall, Settled, StateCell, Surface, perform};
use crate::models::LockReply;

pub const IDLE_LABEL: &str = "Vault Document";
pub const PENDING_LABEL: &str = "Encrypting...";
pub const FAILURE: &str = "Upload failed";

/// Upload side of the document vault.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentLocker {
    call: RemoteCall<LockReply>,
    notice: Option<Notice>,
    selected: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockerView {
    pub file_name: Option<String>,
    pub button_label: &'static str,
    pub button_disabled: bool,
    pub button_spinning: bool,
    pub status: Option<String>,
}

impl DocumentLocker {
    pub fn request<F>(file: Option<F>) -> Option<ApiRequest<F>> {
        let file = file?;
        Some(ApiRequest::multipart(Endpoint::PdfLock, vec![("pdf", Part::File(file))]))
    }

    pub fn select(&mut self, file_name: Option<String>) {
        if file_name.is_some() {
            self.selected = file_name;
        }
    }

    pub fn view(&self) -> LockerView {
        let pending = self.is_pending();
        LockerView {
            file_name: self.selected.clone(),
            button_label: if pending { PENDING_LABEL } else { IDLE_LABEL },
            button_disabled: self.selected.is_none(),
            button_spinning: pending,
            status: self.call.output().map(|ack| ack.message.clone()),
        }
    }
}

impl Feature for DocumentLocker {
    type Output = LockReply;

    fn policy(&self) -> FeaturePolicy {
        FeaturePolicy::new(Surface::Alert)
    }

    fn call(&self) -> &RemoteCall<LockReply> {
        &self.call
    }

    fn call_mut(&mut self) -> &mut RemoteCall<LockReply> {
        &mut self.call
    }

    fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    fn set_notice(&mut self, notice: Option<Notice>) {
        self.notice = notice;
    }

    fn decode(response: ApiResponse) -> Result<LockReply, ApiError> {
        response.json()
    }

    fn error_text(&self, _error: &ApiError) -> Option<String> {
        Some(FAILURE.to_string())
    }
}

/// Uploads one file and, once the vault acknowledged it, refetches the listing.
pub async fn vault_and_refresh<T, L, S>(
    transport: &T,
    locker: &L,
    shelf: &S,
    file: Option<T::File>,
) -> Settled
where
    T: Transport,
    L: StateCell<DocumentLocker>,
    S: StateCell<DocumentShelf>,
{
    let settled = perform(transport, locker, |_| DocumentLocker::request(file)).await;
    if settled == Settled::Succeeded {
        perform(transport, shelf, |_| DocumentShelf::request()).await;
    }
    settled
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::FixedOffset;
    use futures::executor::block_on;

    use super::*;
    use crate::features::shelf::DocumentListView;
    use crate::testing::MockTransport;

    #[test]
    fn successful_upload_refetches_documents() {
        let transport = MockTransport::new();
        transport.push_reply(200, r#"{"message":"Vaulted Locally","filename":"deed.pdf"}"#);
        transport.push_reply(200, r#"[{"name":"deed.pdf","created_at":"2024-05-02T10:00:00Z"}]"#);
        let locker = RefCell::new(DocumentLocker::default());
        let shelf = RefCell::new(DocumentShelf::default());

        let settled = block_on(vault_and_refresh(&transport, &locker, &shelf, Some("deed.pdf")));

        assert_eq!(settled, Settled::Succeeded);
        let endpoints: Vec<_> = transport.requests.borrow().iter().map(|r| r.endpoint).collect();
        assert_eq!(endpoints, vec![Endpoint::PdfLock, Endpoint::Documents]);
        assert_eq!(locker.borrow().view().status.as_deref(), Some("Vaulted Locally"));
        let utc = FixedOffset::east_opt(0).unwrap();
        assert!(matches!(shelf.borrow().view(|_| utc), DocumentListView::Rows(rows) if rows.len() == 1));
    }

    #[test]
    fn failed_upload_alerts_without_refetch() {
        let transport = MockTransport::failing();
        let locker = RefCell::new(DocumentLocker::default());
        let shelf = RefCell::new(DocumentShelf::default());

        let settled = block_on(vault_and_refresh(&transport, &locker, &shelf, Some("deed.pdf")));

        assert_eq!(settled, Settled::Failed);
        assert_eq!(transport.sent(), 1);
        let mut locker = locker.into_inner();
        assert_eq!(locker.view().button_label, IDLE_LABEL);
        assert!(!locker.view().button_spinning);
        assert_eq!(locker.take_alert().as_deref(), Some(FAILURE));
    }

    #[test]
    fn failed_second_upload_keeps_status_line() {
        let transport = MockTransport::new();
        transport.push_reply(200, r#"{"message":"Vaulted Locally","filename":"deed.pdf"}"#);
        transport.push_reply(200, "[]");
        transport.push_failure();
        let locker = RefCell::new(DocumentLocker::default());
        let shelf = RefCell::new(DocumentShelf::default());

        block_on(vault_and_refresh(&transport, &locker, &shelf, Some("deed.pdf")));
        let settled = block_on(vault_and_refresh(&transport, &locker, &shelf, Some("lease.pdf")));

        assert_eq!(settled, Settled::Failed);
        let mut locker = locker.into_inner();
        assert_eq!(locker.view().status.as_deref(), Some("Vaulted Locally"));
        assert_eq!(locker.take_alert().as_deref(), Some(FAILURE));
    }

    #[test]
    fn nothing_selected_nothing_sent() {
        let transport = MockTransport::new();
        let locker = RefCell::new(DocumentLocker::default());
        let shelf = RefCell::new(DocumentShelf::default());
        let settled = block_on(vault_and_refresh(&transport, &locker, &shelf, None));
        assert_eq!(settled, Settled::Skipped);
        assert_eq!(transport.sent(), 0);
    }
}
