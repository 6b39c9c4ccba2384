//! One structured log record per request, with matching fields.

use axum::body::Body;
use axum::http::{Method, Request, Response};
use tower::ServiceExt;
use tracing_subscriber::layer::SubscriberExt;

use fake_uber_service::http::X_UBER_REQUEST_ID;

mod common;

use common::CapturedEvents;

const MESSAGE: &str = "Processing request";

fn request(method: Method, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

/// Read the request ID header and drain the body so every response
/// callback in the middleware stack has run.
async fn finish(response: Response<Body>) -> String {
    let request_id = response.headers()[&X_UBER_REQUEST_ID]
        .to_str()
        .unwrap()
        .to_string();
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    request_id
}

#[tokio::test]
async fn test_single_request_emits_one_record() {
    // Built before capturing so startup logs are not counted.
    let router = common::test_server().router();

    let events = CapturedEvents::default();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(events.clone()));

    let response = router
        .oneshot(request(Method::POST, "/v1/rides?surge=true"))
        .await
        .unwrap();
    let request_id = finish(response).await;

    // The capture layer has no level filter, so this covers debug and trace too.
    let all = events.all();
    assert_eq!(all.len(), 1, "unexpected events: {:?}", all);

    let record = &all[0];
    assert_eq!(record.message, MESSAGE);
    assert_eq!(record.field("request_id"), Some(request_id.as_str()));
    assert_eq!(record.field("method"), Some("POST"));
    assert_eq!(record.field("path"), Some("/v1/rides"));
    assert_eq!(record.field("service"), Some("fake-uber-service"));
    assert_eq!(record.field("environment"), Some("development"));
}

#[tokio::test]
async fn test_concurrent_requests_emit_independent_records() {
    let router = common::test_server().router();

    let events = CapturedEvents::default();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(events.clone()));

    let (first, second) = tokio::join!(
        router.clone().oneshot(request(Method::GET, "/first")),
        router.clone().oneshot(request(Method::DELETE, "/second")),
    );
    let first_id = finish(first.unwrap()).await;
    let second_id = finish(second.unwrap()).await;
    assert_ne!(first_id, second_id);

    assert_eq!(events.all().len(), 2);
    let records = events.with_message(MESSAGE);
    assert_eq!(records.len(), 2);

    let by_path = |path: &str| {
        records
            .iter()
            .find(|r| r.field("path") == Some(path))
            .cloned()
            .unwrap()
    };

    let first_record = by_path("/first");
    assert_eq!(first_record.field("request_id"), Some(first_id.as_str()));
    assert_eq!(first_record.field("method"), Some("GET"));

    let second_record = by_path("/second");
    assert_eq!(second_record.field("request_id"), Some(second_id.as_str()));
    assert_eq!(second_record.field("method"), Some("DELETE"));
}
