use httpmock::prelude::*;
use serde_json::json;
use service::{CatalogSource, CompassConfig, CompassService};
use tempfile::TempDir;

fn config_for(server: &MockServer, state: &TempDir) -> CompassConfig {
    let mut config = CompassConfig::default()
        .with_api_url(server.base_url())
        .with_storage_dir(state.path());
    config.catalog.source = CatalogSource::Api;
    config
}

fn api_catalog() -> serde_json::Value {
    json!({
        "courses": [
            {
                "id": "c1", "name": "Introduction to Artificial Intelligence",
                "code": "CSCI-B551", "departmentCode": "CSCI", "number": "B551",
                "credits": 3, "term": "Spring", "year": 2024, "mode": "In-Person",
                "schedule": { "days": ["Monday", "Wednesday"], "startTime": "10:00", "endTime": "11:15" }
            },
            {
                "id": "c2", "name": "Data Mining",
                "code": "DSCI-D590", "departmentCode": "DSCI", "number": "D590",
                "credits": 3, "term": "Fall", "year": 2024, "mode": "Hybrid"
            }
        ]
    })
}

#[tokio::test]
async fn test_open_with_api_catalog_and_persist_state() {
    let server = MockServer::start_async().await;
    let courses_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/courses");
            then.status(200).json_body(api_catalog());
        })
        .await;
    let state = TempDir::new().unwrap();

    let mut service = CompassService::open(config_for(&server, &state)).await.unwrap();
    courses_mock.assert_async().await;
    assert_eq!(service.catalog().len(), 2);

    service.add_to_cart("CSCI-B551").unwrap();
    service.add_to_cart("c2").unwrap();
    assert!(state.path().join("cart.json").exists());

    let outcome = service.enroll().unwrap();
    assert_eq!(outcome.added, 2);
    assert!(!state.path().join("cart.json").exists());

    // a fresh service sees the enrolled courses
    let reopened = CompassService::open(config_for(&server, &state)).await.unwrap();
    assert_eq!(reopened.enrollment().len(), 2);
    assert!(reopened.cart().is_empty());
    assert_eq!(reopened.enrollment().terms(), vec!["Spring 2024", "Fall 2024"]);
}

#[tokio::test]
async fn test_api_failure_fails_open() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/courses");
            then.status(500);
        })
        .await;
    let state = TempDir::new().unwrap();

    assert!(CompassService::open(config_for(&server, &state)).await.is_err());
}

#[tokio::test]
async fn test_roadmap_written_to_disk() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/courses");
            then.status(200).json_body(api_catalog());
        })
        .await;
    let roadmap_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/roadmap")
                .json_body(json!({ "career_goal": "AI Engineer", "courses": ["CSCI-B551"] }));
            then.status(200).body([0x89, b'P', b'N', b'G']);
        })
        .await;
    let state = TempDir::new().unwrap();

    let mut service = CompassService::open(config_for(&server, &state)).await.unwrap();
    service.add_to_cart("c1").unwrap();
    service.enroll().unwrap();

    let out = state.path().join("roadmap.png");
    let written = service.roadmap("AI Engineer", &out).await.unwrap();

    roadmap_mock.assert_async().await;
    assert_eq!(written, 4);
    assert_eq!(std::fs::read(&out).unwrap(), vec![0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn test_chat_falls_back_to_local_assistant() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat");
            then.status(502);
        })
        .await;
    let state = TempDir::new().unwrap();

    let mut config = config_for(&server, &state);
    config.catalog.source = CatalogSource::Bundled;
    let service = CompassService::open(config).await.unwrap();

    let reply = service.chat_remote("hello").await;
    assert_eq!(reply, service.chat("hello"));

    let mut session = service.chat_session();
    assert!(service.converse(&mut session, "hello", true).await);
    assert_eq!(session.messages().len(), 3);
    assert_eq!(session.messages()[2].text, reply);
}
