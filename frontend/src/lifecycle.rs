//! The dispatch/settle cycle every feature panel goes through.
//!
//! A feature's view-model implements [`Feature`]; [`perform`] runs one
//! trigger against a [`Transport`]: precondition, pending state, a single
//! request, decode, notice, and the unconditional settle that clears the
//! pending state again.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::api::{ApiRequest, ApiResponse, Transport};
use crate::errors::ApiError;

/// Sequence number handed out when a request is dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyInput {
    /// Return without a request or any feedback.
    Ignore,
    /// Return without a request and show this text.
    Notify(&'static str),
}

/// Where a feature's notices are shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    /// Inside the feature's own output container.
    Inline,
    /// In a blocking browser dialog.
    Alert,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ordering {
    /// Replies that are not for the newest ticket are discarded.
    LatestWins,
    /// Every reply is applied (append-only outputs).
    EveryReply,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeaturePolicy {
    pub on_empty_input: EmptyInput,
    pub on_error: Surface,
    pub ordering: Ordering,
}

impl FeaturePolicy {
    pub const fn new(on_error: Surface) -> Self {
        Self { on_empty_input: EmptyInput::Ignore, on_error, ordering: Ordering::LatestWins }
    }

    pub const fn every_reply(mut self) -> Self {
        self.ordering = Ordering::EveryReply;
        self
    }

    pub const fn notify_on_empty(mut self, text: &'static str) -> Self {
        self.on_empty_input = EmptyInput::Notify(text);
        self
    }
}

/// User-facing text produced by a trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub surface: Surface,
}

impl Notice {
    pub fn new(text: impl Into<String>, surface: Surface) -> Self {
        Self { text: text.into(), surface }
    }
}

/// Request bookkeeping plus the latest applied outcome of one feature.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoteCall<O> {
    issued: u64,
    in_flight: usize,
    awaiting: Option<Ticket>,
    output: Option<O>,
}

impl<O> Default for RemoteCall<O> {
    fn default() -> Self {
        Self { issued: 0, in_flight: 0, awaiting: None, output: None }
    }
}

impl<O> RemoteCall<O> {
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.in_flight += 1;
        let ticket = Ticket(self.issued);
        self.awaiting = Some(ticket);
        ticket
    }

    /// Records that `ticket` came back and reports whether its result may be applied.
    pub fn settle(&mut self, ticket: Ticket, ordering: Ordering) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        let newest = self.awaiting == Some(ticket);
        if newest {
            self.awaiting = None;
        }
        match ordering {
            Ordering::LatestWins => newest,
            Ordering::EveryReply => true,
        }
    }

    /// Stores an applied reply. A failure reported in a dialog leaves the
    /// previous output on screen; an inline failure takes its place.
    pub fn apply(&mut self, result: Result<O, ApiError>, on_error: Surface) {
        match result {
            Ok(output) => self.output = Some(output),
            Err(_) if on_error == Surface::Inline => self.output = None,
            Err(_) => {}
        }
    }

    /// Waiting on the newest request. Older requests still in flight don't count,
    /// their replies will be discarded.
    pub fn is_pending(&self) -> bool {
        self.awaiting.is_some()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn requests_issued(&self) -> u64 {
        self.issued
    }

    pub fn output(&self) -> Option<&O> {
        self.output.as_ref()
    }
}

/// A feature panel's view-model.
pub trait Feature {
    type Output;

    fn policy(&self) -> FeaturePolicy;

    fn call(&self) -> &RemoteCall<Self::Output>;

    fn call_mut(&mut self) -> &mut RemoteCall<Self::Output>;

    fn notice(&self) -> Option<&Notice>;

    fn set_notice(&mut self, notice: Option<Notice>);

    fn decode(response: ApiResponse) -> Result<Self::Output, ApiError>;

    /// Text shown for a failed call; `None` keeps the failure silent.
    fn error_text(&self, error: &ApiError) -> Option<String>;

    /// Runs once an applied reply succeeded, before the outcome is stored.
    fn on_success(&mut self, _output: &Self::Output) {}

    fn is_pending(&self) -> bool {
        match self.policy().ordering {
            Ordering::LatestWins => self.call().is_pending(),
            Ordering::EveryReply => self.call().in_flight() > 0,
        }
    }

    /// Drops a notice that is meant for a dialog; the dialog shows it once.
    fn take_alert(&mut self) -> Option<String> {
        let text = self
            .notice()
            .filter(|n| n.surface == Surface::Alert)
            .map(|n| n.text.clone())?;
        self.set_notice(None);
        Some(text)
    }
}

/// How one trigger ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    /// Precondition failed; nothing was sent.
    Skipped,
    /// A newer request superseded this one; its reply was dropped.
    Stale,
    Succeeded,
    Failed,
}

/// Mutable access to wherever a view-model lives.
pub trait StateCell<V> {
    /// `None` when the state is gone (disposed signal).
    fn with_mut<R>(&self, f: impl FnOnce(&mut V) -> R) -> Option<R>;
}

impl<V: Send + Sync + 'static> StateCell<V> for RwSignal<V> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut V) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<V> StateCell<V> for RefCell<V> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut V) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<V> StateCell<V> for Rc<RefCell<V>> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut V) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Runs one trigger of a feature.
///
/// `build` sees the view-model before dispatch; returning `None` means the
/// required input is missing and no request is made.
pub async fn perform<T, C, V>(
    transport: &T,
    cell: &C,
    build: impl FnOnce(&mut V) -> Option<ApiRequest<T::File>>,
) -> Settled
where
    T: Transport,
    C: StateCell<V>,
    V: Feature,
{
    let dispatched = cell.with_mut(|view| match build(view) {
        Some(request) => {
            view.set_notice(None);
            Some((request, view.call_mut().begin()))
        }
        None => {
            if let EmptyInput::Notify(text) = view.policy().on_empty_input {
                let surface = view.policy().on_error;
                view.set_notice(Some(Notice::new(text, surface)));
            }
            None
        }
    });
    let Some(Some((request, ticket))) = dispatched else {
        return Settled::Skipped;
    };

    let endpoint = request.endpoint;
    log::debug!("dispatching {} ({ticket:?})", endpoint.path());
    let result = transport.send(request).await.and_then(V::decode);

    cell.with_mut(|view| {
        let policy = view.policy();
        if !view.call_mut().settle(ticket, policy.ordering) {
            log::debug!("dropping stale reply from {} ({ticket:?})", endpoint.path());
            return Settled::Stale;
        }
        let settled = match &result {
            Ok(output) => {
                view.on_success(output);
                Settled::Succeeded
            }
            Err(error) => {
                log::warn!("{} failed: {error}", endpoint.path());
                let notice = view
                    .error_text(error)
                    .map(|text| Notice::new(text, policy.on_error));
                view.set_notice(notice);
                Settled::Failed
            }
        };
        view.call_mut().apply(result, policy.on_error);
        settled
    })
    .unwrap_or(Settled::Stale)
}
