//! Concurrent registration through the HTTP layer

use axum::http::StatusCode;
use std::sync::Arc;

use crate::common::*;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_single_winner() {
    let app = Arc::new(TestApp::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                register(&app, "racer", &format!("racer{}@x.com", i), "pw")
                    .await
                    .status()
            })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }

    let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
    let conflicts = statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count();
    assert_eq!(created, 1, "statuses: {:?}", statuses);
    assert_eq!(conflicts, 7, "statuses: {:?}", statuses);
    assert_eq!(app.state.auth.users().count().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_distinct_registrations_all_succeed() {
    let app = Arc::new(TestApp::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                register(&app, &format!("user{}", i), &format!("user{}@x.com", i), "pw")
                    .await
                    .status()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::CREATED);
    }
    assert_eq!(app.state.auth.users().count().await.unwrap(), 8);
}
