//! Bridge between the core request reducer and Yew's `use_reducer`.

use std::rc::Rc;

use gqlhook_core::{ActionSink, RequestAction, RequestState};
use yew::functional::{Reducible, UseReducerDispatcher};

/// [`RequestState`] wrapped so it can live in a Yew reducer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReducibleState(pub RequestState);

impl Reducible for ReducibleState {
    type Action = RequestAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.clone().reduce(action);
        if next == self.0 {
            // Unchanged state keeps the same Rc so the component skips a render.
            return self;
        }
        Rc::new(Self(next))
    }
}

/// Forwards accessor transitions into a component's reducer.
#[derive(Clone)]
pub struct StateDispatcher(UseReducerDispatcher<ReducibleState>);

impl StateDispatcher {
    /// Wrap a reducer dispatcher.
    #[must_use]
    pub const fn new(dispatcher: UseReducerDispatcher<ReducibleState>) -> Self {
        Self(dispatcher)
    }
}

impl ActionSink for StateDispatcher {
    fn dispatch(&self, action: RequestAction) {
        self.0.dispatch(action);
    }
}
