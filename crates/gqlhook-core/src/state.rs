//! Per-accessor request state and its reducer.
//!
//! # Design
//! - One accessor owns one state record; nothing here is shared across accessors.
//! - All mutation goes through [`RequestAction`] so UI layers can plug the reducer
//!   into their own store primitive.
//! - Completion order decides the final state when calls overlap (last writer wins).

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::error::GraphqlClientError;

/// Observable `loading`/`error`/`data` triple.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestState {
    /// A request was started and has not settled the flag yet.
    pub loading: bool,
    /// Failure stored by `load_data`.
    pub error: Option<GraphqlClientError>,
    /// Data stored by `load_data`.
    pub data: Option<Value>,
}

/// State transitions emitted by the accessor operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestAction {
    /// A request is about to be sent.
    Started,
    /// `load_data` received an envelope; stores its `data` and clears `loading`.
    Loaded(Option<Value>),
    /// `load_data` failed; stores the error and leaves `loading` untouched.
    LoadFailed(GraphqlClientError),
    /// `submit` finished without GraphQL errors; clears `loading` only.
    Settled,
    /// Back to the initial state.
    Reset,
}

/// Coarse lifecycle view derived from [`RequestState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestPhase {
    /// Nothing loaded and nothing in flight.
    Idle,
    /// A request is in flight.
    Loading,
    /// Data is available.
    Succeeded,
    /// A failure is recorded.
    Failed,
}

impl RequestState {
    /// Apply a single transition in place.
    pub fn apply(&mut self, action: RequestAction) {
        match action {
            RequestAction::Started => self.loading = true,
            RequestAction::Loaded(data) => {
                self.data = data;
                self.loading = false;
            }
            RequestAction::LoadFailed(error) => self.error = Some(error),
            RequestAction::Settled => self.loading = false,
            RequestAction::Reset => *self = Self::default(),
        }
    }

    /// Apply a transition and return the new state.
    #[must_use]
    pub fn reduce(mut self, action: RequestAction) -> Self {
        self.apply(action);
        self
    }

    /// Derived lifecycle phase.
    ///
    /// A recorded error takes precedence over the `loading` flag, since a failed
    /// `load_data` leaves `loading` set.
    #[must_use]
    pub const fn phase(&self) -> RequestPhase {
        if self.error.is_some() {
            RequestPhase::Failed
        } else if self.loading {
            RequestPhase::Loading
        } else if self.data.is_some() {
            RequestPhase::Succeeded
        } else {
            RequestPhase::Idle
        }
    }
}

/// Receiver for state transitions.
pub trait ActionSink {
    /// Deliver one transition.
    fn dispatch(&self, action: RequestAction);
}

impl<F> ActionSink for F
where
    F: Fn(RequestAction),
{
    fn dispatch(&self, action: RequestAction) {
        self(action);
    }
}

type Subscriber = Rc<dyn Fn(&RequestState)>;

/// Single-threaded state container with change notification, for hosts that
/// are not driven by a UI framework's own state hooks.
#[derive(Clone, Default)]
pub struct RequestStore {
    inner: Rc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    state: RefCell<RequestState>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl RequestStore {
    /// Create a store holding the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> RequestState {
        self.inner.state.borrow().clone()
    }

    /// Register a callback invoked after every transition.
    pub fn subscribe(&self, subscriber: impl Fn(&RequestState) + 'static) {
        self.inner.subscribers.borrow_mut().push(Rc::new(subscriber));
    }
}

impl ActionSink for RequestStore {
    fn dispatch(&self, action: RequestAction) {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            state.apply(action);
            state.clone()
        };
        let subscribers = self.inner.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }
}

impl fmt::Debug for RequestStore {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RequestStore")
            .field("state", &*self.inner.state.borrow())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}
