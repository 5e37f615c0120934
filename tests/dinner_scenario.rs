//! End-to-end scenario against a live server on an ephemeral port.

#![allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashSet;
use std::net::SocketAddr;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{Value, json};

use choice_picker::api;
use choice_picker::app_state::AppState;
use choice_picker::persistence::SqliteStore;
use choice_picker::service::ListService;

async fn spawn_server() -> SocketAddr {
    let store = SqliteStore::in_memory().await.expect("in-memory store");
    let app = api::app(
        AppState::new(ListService::new(store)),
        Duration::from_secs(5),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });
    addr
}

#[tokio::test]
async fn dinner_lifecycle() {
    let addr = spawn_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/lists"))
        .json(&json!({ "name": "Dinner" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let list: Value = resp.json().await.unwrap();
    let list_id = list["id"].as_i64().unwrap();

    let mut added = Vec::new();
    for text in ["Pizza", "Sushi", "Tacos"] {
        let resp = client
            .post(format!("{base}/lists/{list_id}/choices"))
            .json(&json!({ "text": text }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let choice: Value = resp.json().await.unwrap();
        added.push(choice["id"].as_i64().unwrap());
    }

    let detail: Value = client
        .get(format!("{base}/lists/{list_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(detail["name"], "Dinner");
    let texts: Vec<&str> = detail["choices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["Pizza", "Sushi", "Tacos"]);

    let allowed: HashSet<&str> = ["Pizza", "Sushi", "Tacos"].into_iter().collect();
    for _ in 0..10 {
        let resp = client
            .post(format!("{base}/lists/{list_id}/pick"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let picked: Value = resp.json().await.unwrap();
        assert!(allowed.contains(picked["text"].as_str().unwrap()));
    }

    let resp = client
        .delete(format!("{base}/lists/{list_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base}/lists/{list_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    for choice_id in added {
        let resp = client
            .get(format!("{base}/choices/{choice_id}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn concurrent_duplicate_creates_yield_one_list() {
    let addr = spawn_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        let url = format!("{base}/lists");
        handles.push(tokio::spawn(async move {
            client
                .post(url)
                .json(&json!({ "name": "Race" }))
                .send()
                .await
                .unwrap()
                .status()
        }));
    }

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::CREATED => created += 1,
            StatusCode::CONFLICT => {}
            other => panic!("unexpected status {other}"),
        }
    }
    assert_eq!(created, 1);

    let lists: Value = client
        .get(format!("{base}/lists"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(lists.as_array().map(Vec::len), Some(1));
}
