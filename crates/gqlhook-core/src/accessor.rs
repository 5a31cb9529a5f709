//! Accessor operations: `load_data`, `submit` and `reset`.
//!
//! # Design
//! - The accessor never throws; every failure ends up in state or in the returned outcome.
//! - `load_data` always uses the operation's fixed variables.
//! - `submit` always uses the caller's variables and reports GraphQL errors inline.
//! - Known gaps kept as-is: a failed `load_data` and a `submit` answered with
//!   GraphQL errors both leave `loading` set.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;

use crate::client::GraphqlClient;
use crate::request::{Operation, Variables};
use crate::state::{ActionSink, RequestAction};
use crate::transport::Transport;

/// A `!Send` task handed to the host's local executor.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Value handed back by [`RequestAccessor::submit`].
///
/// Serialises untagged so callers see the raw data, the raw errors array, or
/// `{"error": message}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SubmitOutcome {
    /// The envelope's `data`.
    Data(Option<Value>),
    /// The envelope's `errors`, verbatim.
    Errors(Vec<Value>),
    /// Transport or decode failure.
    Failed {
        /// Failure message.
        error: String,
    },
}

impl SubmitOutcome {
    /// Data carried by a successful outcome.
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        match self {
            Self::Data(data) => data.as_ref(),
            Self::Errors(_) | Self::Failed { .. } => None,
        }
    }
}

/// One usage site: a fixed operation, the client it runs on and the state sink it reports to.
pub struct RequestAccessor<T, S> {
    client: Rc<GraphqlClient<T>>,
    operation: Rc<Operation>,
    sink: S,
}

impl<T, S> Clone for RequestAccessor<T, S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            client: Rc::clone(&self.client),
            operation: Rc::clone(&self.operation),
            sink: self.sink.clone(),
        }
    }
}

impl<T, S> RequestAccessor<T, S>
where
    T: Transport,
    S: ActionSink,
{
    /// Assemble an accessor.
    pub const fn new(client: Rc<GraphqlClient<T>>, operation: Rc<Operation>, sink: S) -> Self {
        Self {
            client,
            operation,
            sink,
        }
    }

    /// Operation this accessor runs.
    #[must_use]
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// Whether creation should trigger a single `load_data`.
    #[must_use]
    pub fn should_load_on_start(&self) -> bool {
        self.operation.should_load_on_start()
    }

    /// Run the operation with its fixed variables and store the outcome in state.
    ///
    /// Returns the envelope's `data`, or `None` on failure. GraphQL `errors` are not
    /// inspected here.
    pub async fn load_data(&self) -> Option<Value> {
        let request = self.operation.load_request();
        self.sink.dispatch(RequestAction::Started);
        match self.client.execute(&request).await {
            Ok(envelope) => {
                let data = envelope.data;
                self.sink.dispatch(RequestAction::Loaded(data.clone()));
                data
            }
            Err(err) => {
                self.sink.dispatch(RequestAction::LoadFailed(err));
                None
            }
        }
    }

    /// Run the operation with `variables` and hand the outcome back to the caller.
    ///
    /// `data`/`error` state is never written; only `loading` moves.
    pub async fn submit(&self, variables: Option<Variables>) -> SubmitOutcome {
        let request = self.operation.submit_request(variables);
        self.sink.dispatch(RequestAction::Started);
        match self.client.execute(&request).await {
            Ok(envelope) => {
                if let Some(errors) = envelope.errors {
                    return SubmitOutcome::Errors(errors);
                }
                self.sink.dispatch(RequestAction::Settled);
                SubmitOutcome::Data(envelope.data)
            }
            Err(err) => {
                self.sink.dispatch(RequestAction::Settled);
                SubmitOutcome::Failed {
                    error: err.to_string(),
                }
            }
        }
    }

    /// Return state to idle.
    pub fn reset(&self) {
        self.sink.dispatch(RequestAction::Reset);
    }
}

impl<T, S> RequestAccessor<T, S>
where
    T: Transport + 'static,
    S: ActionSink + Clone + 'static,
{
    /// Mount-time side of an accessor.
    ///
    /// Hands one `load_data` task to `spawn` when the operation loads on start and
    /// returns the teardown that resets state. Call once per mounted owner.
    pub fn mount(&self, spawn: impl FnOnce(LocalTask)) -> Unmount<T, S> {
        if self.should_load_on_start() {
            let loader = self.clone();
            spawn(Box::pin(async move {
                loader.load_data().await;
            }));
        }
        Unmount {
            accessor: self.clone(),
        }
    }
}

/// Teardown returned by [`RequestAccessor::mount`].
#[must_use = "dropping the teardown skips the reset"]
pub struct Unmount<T, S> {
    accessor: RequestAccessor<T, S>,
}

impl<T, S> Unmount<T, S>
where
    T: Transport,
    S: ActionSink,
{
    /// Reset the accessor's state.
    pub fn run(self) {
        self.accessor.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::SubmitOutcome;
    use serde_json::json;

    #[test]
    fn outcomes_serialize_untagged() -> Result<(), serde_json::Error> {
        let data = SubmitOutcome::Data(Some(json!({ "ping": "pong" })));
        assert_eq!(serde_json::to_value(&data)?, json!({ "ping": "pong" }));

        let errors = SubmitOutcome::Errors(vec![json!({ "message": "bad" }), json!("raw")]);
        assert_eq!(
            serde_json::to_value(&errors)?,
            json!([{ "message": "bad" }, "raw"])
        );

        let failed = SubmitOutcome::Failed {
            error: "offline".to_string(),
        };
        assert_eq!(serde_json::to_value(&failed)?, json!({ "error": "offline" }));
        Ok(())
    }

    #[test]
    fn data_accessor_only_reads_success() {
        assert_eq!(
            SubmitOutcome::Data(Some(json!(1))).data(),
            Some(&json!(1))
        );
        assert_eq!(SubmitOutcome::Errors(Vec::new()).data(), None);
    }
}
