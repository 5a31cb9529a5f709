#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! DOM-free GraphQL request primitives.
//!
//! This crate holds everything the UI layer needs that does not touch the browser:
//! endpoint configuration, the request/response wire shapes, the per-accessor
//! request state reducer, and the accessor operations themselves.

pub mod accessor;
pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod state;
pub mod transport;

pub use accessor::{LocalTask, RequestAccessor, SubmitOutcome, Unmount};
pub use client::GraphqlClient;
pub use config::GraphqlConfig;
pub use error::{GraphqlClientError, Result};
pub use request::{GraphqlRequest, Operation, Variables};
pub use response::{ErrorLocation, GraphqlError, ResponseEnvelope};
pub use state::{ActionSink, RequestAction, RequestPhase, RequestState, RequestStore};
pub use transport::{PostRequest, Transport};
