//! Request ID uniqueness under concurrent load.

use std::collections::HashSet;
use std::time::Instant;

use serde_json::Value;

mod common;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_request_ids_unique_under_load() {
    let (addr, shutdown) = common::spawn_service().await;

    let concurrency = 20;
    let requests_per_task = 50;
    let total_requests = concurrency * requests_per_task;

    let client = reqwest::Client::new();
    let start = Instant::now();

    let mut tasks = Vec::new();
    for task in 0..concurrency {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            let mut ids = Vec::new();
            for i in 0..requests_per_task {
                let url = format!("http://{}/load/{}/{}", addr, task, i);
                let res = client.get(&url).send().await.expect("service unreachable");
                assert_eq!(res.status(), 200);

                let header = res.headers()["x-uber-request-id"]
                    .to_str()
                    .unwrap()
                    .to_string();
                let body: Value = res.json().await.unwrap();
                assert_eq!(body["request_id"], header.as_str());
                ids.push(header);
            }
            ids
        }));
    }

    let mut unique = HashSet::new();
    let mut received = 0;
    for task in tasks {
        for id in task.await.unwrap() {
            assert!(!id.is_empty());
            received += 1;
            unique.insert(id);
        }
    }

    let duration = start.elapsed();
    println!(
        "{} requests in {:?} ({:.2} req/s)",
        total_requests,
        duration,
        total_requests as f64 / duration.as_secs_f64()
    );

    assert_eq!(received, total_requests);
    assert_eq!(unique.len(), total_requests, "duplicate request IDs issued");

    shutdown.trigger();
}
