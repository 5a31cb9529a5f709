use std::cell::Cell;
use std::rc::Rc;

use gqlhook_core::{
    GraphqlClient, GraphqlClientError, GraphqlConfig, LocalTask, Operation, RequestAccessor,
    RequestState, RequestStore,
};
use gqlhook_test_support::fixtures::{EXAMPLE_ENDPOINT, PING_QUERY, data_body, variables};
use gqlhook_test_support::logging::init_test_logging;
use gqlhook_test_support::mocks::ScriptedTransport;
use serde_json::json;
use tokio::task::{JoinHandle, LocalSet};

fn accessor(
    operation: Operation,
) -> (
    RequestAccessor<ScriptedTransport, RequestStore>,
    ScriptedTransport,
    RequestStore,
) {
    init_test_logging();
    let transport = ScriptedTransport::new();
    let store = RequestStore::new();
    let client = Rc::new(GraphqlClient::new(
        GraphqlConfig::new(EXAMPLE_ENDPOINT),
        transport.clone(),
    ));
    (
        RequestAccessor::new(client, Rc::new(operation), store.clone()),
        transport,
        store,
    )
}

// Runs spawned tasks on the current `LocalSet` and keeps their handles.
fn spawner(handles: &Rc<Cell<Vec<JoinHandle<()>>>>) -> impl FnOnce(LocalTask) + '_ {
    move |task| {
        let mut spawned = handles.take();
        spawned.push(tokio::task::spawn_local(task));
        handles.set(spawned);
    }
}

async fn join_all(handles: &Rc<Cell<Vec<JoinHandle<()>>>>) -> anyhow::Result<()> {
    for handle in handles.take() {
        handle.await?;
    }
    Ok(())
}

#[tokio::test]
async fn mount_with_variables_loads_once() -> anyhow::Result<()> {
    let operation = Operation::new(PING_QUERY).with_variables(variables(json!({})));
    let (accessor, transport, store) = accessor(operation);
    transport.reply_body(data_body(&json!({ "ping": "pong" })));

    LocalSet::new()
        .run_until(async move {
            let handles = Rc::new(Cell::new(Vec::new()));
            let unmount = accessor.mount(spawner(&handles));
            join_all(&handles).await?;

            assert_eq!(transport.request_count(), 1);
            assert_eq!(store.snapshot().data, Some(json!({ "ping": "pong" })));
            assert!(!store.snapshot().loading);

            unmount.run();
            assert_eq!(store.snapshot(), RequestState::default());
            assert_eq!(transport.request_count(), 1);
            anyhow::Ok(())
        })
        .await
}

#[tokio::test]
async fn mount_without_variables_spawns_nothing() {
    let (accessor, transport, store) = accessor(Operation::new(PING_QUERY));
    let spawned = Cell::new(0_u32);

    let unmount = accessor.mount(|_| spawned.set(spawned.get() + 1));

    assert_eq!(spawned.get(), 0);
    assert_eq!(transport.request_count(), 0);
    assert_eq!(store.snapshot(), RequestState::default());
    unmount.run();
    assert_eq!(store.snapshot(), RequestState::default());
}

#[tokio::test]
async fn explicit_load_on_start_overrides_variables() {
    let spawned = Cell::new(0_u32);

    let (forced, _, _) = accessor(Operation::new(PING_QUERY).with_load_on_start(true));
    let _unmount = forced.mount(|_| spawned.set(spawned.get() + 1));
    assert_eq!(spawned.get(), 1);

    let (suppressed, _, _) = accessor(
        Operation::new(PING_QUERY)
            .with_variables(variables(json!({ "id": 1 })))
            .with_load_on_start(false),
    );
    let _unmount = suppressed.mount(|_| spawned.set(spawned.get() + 1));
    assert_eq!(spawned.get(), 1);
}

#[tokio::test]
async fn unmount_clears_a_failed_auto_load() -> anyhow::Result<()> {
    let operation = Operation::new(PING_QUERY).with_variables(variables(json!({})));
    let (accessor, transport, store) = accessor(operation);
    transport.fail(GraphqlClientError::transport("offline"));

    LocalSet::new()
        .run_until(async move {
            let handles = Rc::new(Cell::new(Vec::new()));
            let unmount = accessor.mount(spawner(&handles));
            join_all(&handles).await?;
            assert!(store.snapshot().loading);
            assert!(store.snapshot().error.is_some());

            unmount.run();
            assert_eq!(store.snapshot(), RequestState::default());
            anyhow::Ok(())
        })
        .await
}
