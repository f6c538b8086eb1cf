//! Integration tests for the PostgreSQL store
//!
//! These tests require Docker. Run with: `cargo test -- --ignored`

mod common;

use studychat::models::Sender;
use studychat::store::{Store, StoreConfig};
use testcontainers::clients::Cli;

// Macro to set up test environment
// Note: This keeps _docker and _container alive for the duration of the test
macro_rules! setup_store {
    ($docker:ident, $container:ident, $store:ident) => {
        let $docker = Cli::default();
        let $container = $docker.run(common::create_postgres_container());

        // Postgres restarts once during init; give it a moment to settle
        tokio::time::sleep(tokio::time::Duration::from_secs(3)).await;

        let host_port = $container.get_host_port_ipv4(common::POSTGRES_PORT);
        let connection_string = common::build_connection_string("127.0.0.1", host_port);
        common::apply_schema(&connection_string).await;

        let config = StoreConfig::from_connection_string(&connection_string).unwrap();
        let $store = Store::new(config).await.unwrap();
    };
}

// ============================================================================
// profile tests
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_fetch_profile_missing() {
    setup_store!(_docker, _container, store);

    let profile = store.fetch_profile("unknown-student").await.unwrap();
    assert_eq!(profile, None);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_profile_insert_fetch_update() {
    setup_store!(_docker, _container, store);

    store
        .insert_profile("s-1", r#"{"likes":["pizza"]}"#)
        .await
        .unwrap();
    let profile = store.fetch_profile("s-1").await.unwrap();
    assert_eq!(profile, Some(r#"{"likes":["pizza"]}"#.to_string()));

    store
        .update_profile("s-1", r#"{"likes":["pizza","chess"]}"#)
        .await
        .unwrap();
    let profile = store.fetch_profile("s-1").await.unwrap();
    assert_eq!(profile, Some(r#"{"likes":["pizza","chess"]}"#.to_string()));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_duplicate_profile_insert_rejected() {
    setup_store!(_docker, _container, store);

    store.insert_profile("s-1", "{}").await.unwrap();

    // One row per student: a second insert violates the primary key
    let result = store.insert_profile("s-1", "{}").await;
    assert!(result.is_err());
}

// ============================================================================
// history tests
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_recent_messages_empty() {
    setup_store!(_docker, _container, store);

    let messages = store.recent_messages("no-history", 10).await.unwrap();
    assert!(messages.is_empty());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_recent_messages_newest_first() {
    setup_store!(_docker, _container, store);

    store
        .save_message("s-1", Sender::Bot, "hi")
        .await
        .unwrap();
    store
        .save_message("s-1", Sender::User, "hello")
        .await
        .unwrap();

    let messages = store.recent_messages("s-1", 10).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[0].message, "hello");
    assert_eq!(messages[1].sender, Sender::Bot);
    assert_eq!(messages[1].message, "hi");
    assert!(messages[0].created_at >= messages[1].created_at);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_recent_messages_honors_limit() {
    setup_store!(_docker, _container, store);

    for i in 0..12 {
        store
            .save_message("s-1", Sender::User, &format!("message {}", i))
            .await
            .unwrap();
    }

    let messages = store.recent_messages("s-1", 10).await.unwrap();
    assert_eq!(messages.len(), 10);
    assert_eq!(messages[0].message, "message 11");
    assert_eq!(messages[9].message, "message 2");
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_recent_messages_scoped_to_student() {
    setup_store!(_docker, _container, store);

    store
        .save_message("s-1", Sender::User, "from s-1")
        .await
        .unwrap();
    store
        .save_message("s-2", Sender::User, "from s-2")
        .await
        .unwrap();

    let messages = store.recent_messages("s-1", 10).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].student_id, "s-1");
    assert_eq!(messages[0].message, "from s-1");
}
