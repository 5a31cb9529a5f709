//! `use_graphql`: per-component GraphQL accessor.
//!
//! # Design
//! - Read the nearest provider's configuration; rebuild the client only when it changes.
//! - Auto-load once on mount when the operation asks for it, reset once on unmount.
//! - In-flight requests are not cancelled; late completions land in a detached reducer.

use std::rc::Rc;

use gqlhook_core::{
    GraphqlClient, GraphqlClientError, Operation, RequestAccessor, RequestPhase, RequestState,
    SubmitOutcome, Transport, Variables,
};
use serde_json::Value;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::context::GraphqlCtx;
use crate::reducer::{ReducibleState, StateDispatcher};

type HookAccessor = RequestAccessor<Rc<dyn Transport>, StateDispatcher>;

/// Render-time view of one accessor plus its operations.
#[derive(Clone)]
pub struct UseGraphqlHandle {
    state: UseReducerHandle<ReducibleState>,
    accessor: HookAccessor,
}

impl UseGraphqlHandle {
    /// State as of this render.
    #[must_use]
    pub fn state(&self) -> &RequestState {
        &self.state.0
    }

    /// Whether a request has started and not cleared the flag.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.state.0.loading
    }

    /// Failure stored by `load_data`.
    #[must_use]
    pub fn error(&self) -> Option<&GraphqlClientError> {
        self.state.0.error.as_ref()
    }

    /// Data stored by `load_data`.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.state.0.data.as_ref()
    }

    /// Derived lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> RequestPhase {
        self.state.0.phase()
    }

    /// Run the operation with its fixed variables, storing the outcome in state.
    pub async fn load_data(&self) -> Option<Value> {
        self.accessor.load_data().await
    }

    /// Run the operation with `variables` and return the outcome directly.
    pub async fn submit(&self, variables: Variables) -> SubmitOutcome {
        self.accessor.submit(Some(variables)).await
    }

    /// Return state to idle.
    pub fn reset(&self) {
        self.accessor.reset();
    }

    /// Fire `load_data` from an event handler.
    pub fn run_load(&self) {
        let accessor = self.accessor.clone();
        spawn_local(async move {
            accessor.load_data().await;
        });
    }

    /// Fire `submit` from an event handler and hand the outcome to `on_done`.
    pub fn run_submit(&self, variables: Variables, on_done: Callback<SubmitOutcome>) {
        let accessor = self.accessor.clone();
        spawn_local(async move {
            on_done.emit(accessor.submit(Some(variables)).await);
        });
    }
}

/// Accessor hook over an explicit transport.
#[hook]
pub fn use_graphql_with(operation: Operation, transport: Rc<dyn Transport>) -> UseGraphqlHandle {
    let ctx = use_context::<GraphqlCtx>().unwrap_or_default();
    let state = use_reducer(ReducibleState::default);
    let client = use_memo(
        move |ctx: &GraphqlCtx| GraphqlClient::new(ctx.config().clone(), transport),
        ctx,
    );
    let accessor = RequestAccessor::new(
        client,
        Rc::new(operation),
        StateDispatcher::new(state.dispatcher()),
    );

    {
        let accessor = accessor.clone();
        use_effect_with_deps(
            move |_| {
                let unmount = accessor.mount(spawn_local);
                move || unmount.run()
            },
            (),
        );
    }

    UseGraphqlHandle { state, accessor }
}

/// Accessor hook over the browser fetch transport.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_graphql(operation: Operation) -> UseGraphqlHandle {
    use_graphql_with(operation, Rc::new(crate::fetch::FetchTransport))
}
