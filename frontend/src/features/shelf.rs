use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};
use wasm_bindgen::JsValue;

use crate::api::{ApiRequest, ApiResponse, Endpoint};
use crate::errors::ApiError;
use crate::lifecycle::{Feature, FeaturePolicy, Notice, RemoteCall, Surface};
use crate::models::DocumentRecord;

pub const PLACEHOLDER: &str = "Vault Empty or Connection Error";
pub const INVALID_DATE: &str = "Invalid Date";

/// Files stored in the vault, as last fetched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentShelf {
    call: RemoteCall<Vec<DocumentRecord>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRow {
    pub name: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentListView {
    Rows(Vec<DocumentRow>),
    /// Shown for an empty vault and for a failed fetch alike.
    Placeholder,
}

impl DocumentShelf {
    pub fn request<F>() -> Option<ApiRequest<F>> {
        Some(ApiRequest::get(Endpoint::Documents))
    }

    /// `offset_at` gives the viewer's UTC offset in force at an instant.
    pub fn view(&self, offset_at: impl Fn(DateTime<Utc>) -> FixedOffset) -> DocumentListView {
        match self.call.output() {
            Some(records) if !records.is_empty() => DocumentListView::Rows(
                records
                    .iter()
                    .map(|r| DocumentRow {
                        name: r.name.clone(),
                        date: format_created_at(&r.created_at, &offset_at),
                    })
                    .collect(),
            ),
            _ => DocumentListView::Placeholder,
        }
    }
}

impl Feature for DocumentShelf {
    type Output = Vec<DocumentRecord>;

    fn policy(&self) -> FeaturePolicy {
        FeaturePolicy::new(Surface::Inline)
    }

    fn call(&self) -> &RemoteCall<Vec<DocumentRecord>> {
        &self.call
    }

    fn call_mut(&mut self) -> &mut RemoteCall<Vec<DocumentRecord>> {
        &mut self.call
    }

    fn notice(&self) -> Option<&Notice> {
        None
    }

    fn set_notice(&mut self, _notice: Option<Notice>) {}

    fn decode(response: ApiResponse) -> Result<Vec<DocumentRecord>, ApiError> {
        response.json()
    }

    // The placeholder row covers failures.
    fn error_text(&self, _error: &ApiError) -> Option<String> {
        None
    }
}

/// Renders a listing timestamp as `M/D/YYYY` in the viewer's zone, using
/// the offset in force on that date.
///
/// Cloud listings send RFC 3339; the local-disk fallback sends `ctime`
/// strings, which carry no zone and are shown as-is.
pub fn format_created_at(raw: &str, offset_at: impl Fn(DateTime<Utc>) -> FixedOffset) -> String {
    let local_day = |instant: DateTime<Utc>| instant.with_timezone(&offset_at(instant)).date_naive();
    let raw = raw.trim();
    let date = if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        local_day(ts.with_timezone(&Utc))
    } else if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%a %b %e %H:%M:%S %Y") {
        naive.date()
    } else if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        naive.date()
    } else if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
    {
        // Bare dates are midnight UTC.
        local_day(midnight.and_utc())
    } else {
        return INVALID_DATE.to_string();
    };
    date.format("%-m/%-d/%Y").to_string()
}

/// The browser's UTC offset at `instant`, daylight saving included.
pub fn viewer_offset_at(instant: DateTime<Utc>) -> FixedOffset {
    let at = js_sys::Date::new(&JsValue::from_f64(instant.timestamp_millis() as f64));
    let minutes_behind = at.get_timezone_offset();
    FixedOffset::west_opt((minutes_behind * 60.0) as i32).unwrap_or_else(|| Utc.fix())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use chrono::Datelike;

    use super::*;
    use crate::lifecycle::perform;
    use crate::testing::{FakeFile, MockTransport};

    fn utc(_: DateTime<Utc>) -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    /// US Eastern, rough DST window (April to October).
    fn new_york(at: DateTime<Utc>) -> FixedOffset {
        let hours = if (4..=10).contains(&at.month()) { 4 } else { 5 };
        FixedOffset::west_opt(hours * 3600).unwrap()
    }

    fn fetched(transport: &MockTransport) -> DocumentShelf {
        let shelf = RefCell::new(DocumentShelf::default());
        block_on(perform(transport, &shelf, |_| DocumentShelf::request::<FakeFile>()));
        shelf.into_inner()
    }

    #[test]
    fn one_record_one_row() {
        let transport =
            MockTransport::replying(200, r#"[{"name":"A.pdf","created_at":"2024-01-01T00:00:00Z"}]"#);
        let shelf = fetched(&transport);
        assert_eq!(transport.last().unwrap().endpoint, Endpoint::Documents);
        assert_eq!(
            shelf.view(utc),
            DocumentListView::Rows(vec![DocumentRow { name: "A.pdf".into(), date: "1/1/2024".into() }])
        );
    }

    #[test]
    fn empty_and_failed_look_the_same() {
        let empty = fetched(&MockTransport::replying(200, "[]"));
        let failed = fetched(&MockTransport::failing());
        assert_eq!(empty.view(utc), DocumentListView::Placeholder);
        assert_eq!(empty.view(utc), failed.view(utc));
    }

    #[test]
    fn dates_follow_viewer_offset() {
        assert_eq!(format_created_at("2024-01-01T00:00:00Z", new_york), "12/31/2023");
        assert_eq!(format_created_at("2024-01-01", new_york), "12/31/2023");
    }

    #[test]
    fn offset_is_taken_at_each_date() {
        // 00:30 EDT, but 23:30 the previous day under January's EST.
        assert_eq!(format_created_at("2024-07-01T04:30:00Z", new_york), "7/1/2024");
        assert_eq!(format_created_at("2024-01-01T04:30:00Z", new_york), "12/31/2023");
    }

    #[test]
    fn ctime_and_garbage() {
        assert_eq!(format_created_at("Mon Jan  1 09:30:00 2024", utc), "1/1/2024");
        assert_eq!(format_created_at("Fri Mar 15 18:00:00 2024", utc), "3/15/2024");
        assert_eq!(format_created_at("yesterday", utc), INVALID_DATE);
    }

    #[test]
    fn newer_fetch_replaces_list() {
        let transport = MockTransport::new();
        transport.push_reply(200, r#"[{"name":"old.pdf","created_at":"2024-01-01T00:00:00Z"}]"#);
        transport.push_reply(
            200,
            r#"[{"name":"old.pdf","created_at":"2024-01-01T00:00:00Z"},{"name":"new.pdf","created_at":"2024-02-01T00:00:00Z"}]"#,
        );
        let shelf = RefCell::new(DocumentShelf::default());
        block_on(perform(&transport, &shelf, |_| DocumentShelf::request::<FakeFile>()));
        block_on(perform(&transport, &shelf, |_| DocumentShelf::request::<FakeFile>()));
        match shelf.borrow().view(utc) {
            DocumentListView::Rows(rows) => assert_eq!(rows.len(), 2),
            DocumentListView::Placeholder => panic!("expected rows"),
        }
    }
}
