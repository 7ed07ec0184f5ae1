use actix_web::test;
use backend::infra::state::build_state;
use backend::test_support::create_test_app;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

mod common;

#[actix_web::test]
async fn health_endpoint_reports_healthy() {
    // No oracle configured on purpose: liveness must not depend on it.
    let state = build_state().build();
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));

    let timestamp = body["timestamp"].as_str().expect("timestamp is a string");
    OffsetDateTime::parse(timestamp, &Rfc3339).expect("timestamp is RFC 3339");
}

#[actix_web::test]
async fn root_greets() {
    let state = build_state().build();
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains("Overruled"));
}

#[actix_web::test]
async fn health_carries_a_trace_id_header() {
    let state = build_state().build();
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .expect("x-trace-id header present")
        .to_str()
        .unwrap();
    assert!(!trace_id.is_empty());
}
