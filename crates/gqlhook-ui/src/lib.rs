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
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Yew surface for gqlhook.
//!
//! Wrap a subtree in [`GraphqlProvider`] once, then call `use_graphql` from any
//! component beneath it to run requests against the provided endpoint.
//! The fetch transport builds for wasm32 only; `examples/demo.rs` shows both pieces in a page.

pub mod context;
pub mod hook;
pub mod provider;
pub mod reducer;

#[cfg(target_arch = "wasm32")]
pub mod fetch;

pub use context::GraphqlCtx;
pub use gqlhook_core::{
    GraphqlClientError, GraphqlConfig, Operation, RequestPhase, RequestState,
    SubmitOutcome, Variables,
};
pub use hook::{UseGraphqlHandle, use_graphql_with};
pub use provider::{GraphqlProvider, GraphqlProviderProps};

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;
#[cfg(target_arch = "wasm32")]
pub use hook::use_graphql;
