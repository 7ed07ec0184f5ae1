//! End-to-end tests of the four generation endpoints against scripted
//! oracle doubles. No network I/O anywhere.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::domain::fixtures::{sample_game_state, sample_history};
use backend::infra::state::build_state;
use backend::test_support::create_test_app;
use backend::test_support::mock_oracle::{FailingOracle, ScriptedOracle};
use backend_test_support::problem_details::assert_problem_details;

mod common;

const CASE_REPLY: &str = r#"{
    "name": "Petunia Vex",
    "accusation": "aggravated umbrella hoarding",
    "method": "a coat rack with delusions of grandeur",
    "time": "during the great drizzle",
    "troubling_events": ["forty umbrellas vanished", "her hallway rattled", "she stayed dry"],
    "alibis": ["she was at choir", "her coat rack acted alone", "it never rains on Tuesdays"]
}"#;

async fn app_with_replies(
    replies: impl IntoIterator<Item = String>,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
    Error = actix_web::Error,
> {
    let state = build_state()
        .with_oracle(Arc::new(ScriptedOracle::replying(replies)))
        .build();
    create_test_app(state).with_prod_routes().build().await
}

#[actix_web::test]
async fn generate_storyboard_returns_a_case_file() {
    let app = app_with_replies([format!("```json\n{CASE_REPLY}\n```")]).await;

    let req = test::TestRequest::post()
        .uri("/generate_storyboard")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Petunia Vex");
    assert_eq!(body["troubling_events"].as_array().unwrap().len(), 3);
    assert_eq!(body["alibis"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn generate_storyboard_twice_yields_two_valid_cases() {
    let app = app_with_replies([CASE_REPLY.to_string(), CASE_REPLY.to_string()]).await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/generate_storyboard")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["name"].as_str().is_some_and(|n| !n.is_empty()));
    }
}

#[actix_web::test]
async fn generate_interruption_returns_a_phrase() {
    let app = app_with_replies([
        r#"{"interruption": "FREE CHURROS", "position": 18, "delay": 0.5}"#.to_string(),
    ])
    .await;

    let req = test::TestRequest::post()
        .uri("/generate_interruption")
        .set_json(sample_game_state())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["interruption"]
        .as_str()
        .is_some_and(|s| !s.trim().is_empty()));
    assert_eq!(body["position"], 18);
}

#[actix_web::test]
async fn generate_interruption_rejects_malformed_bodies() {
    let app = app_with_replies([]).await;

    let req = test::TestRequest::post()
        .uri("/generate_interruption")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"storyboard": {"name": "x"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST", "Invalid JSON").await;
}

#[actix_web::test]
async fn generate_interruption_rejects_semantically_empty_case() {
    let app = app_with_replies([]).await;

    let mut state = sample_game_state();
    state.storyboard.accusation = String::new();

    let req = test::TestRequest::post()
        .uri("/generate_interruption")
        .set_json(state)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(
        resp,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
        "accusation",
    )
    .await;
}

#[actix_web::test]
async fn judge_question_answers_plain_text() {
    let app = app_with_replies(["  Why was the trombone case damp?  ".to_string()]).await;

    let req = test::TestRequest::post()
        .uri("/judge_question")
        .set_json(sample_history())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = test::read_body(resp).await;
    assert_eq!(body, "Why was the trombone case damp?");
}

#[actix_web::test]
async fn final_verdict_is_binary_and_sentence_is_bounded() {
    let app = app_with_replies([r#"{
        "verdict": "guilty",
        "arguments": "the coat rack could not have acted alone",
        "closing_sentence": "This court finds the defendant guilty.",
        "sentence": 42
    }"#
    .to_string()])
    .await;

    let req = test::TestRequest::post()
        .uri("/final_verdict")
        .set_json(sample_history())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let verdict = body["verdict"].as_str().unwrap();
    assert!(verdict == "guilty" || verdict == "innocent");
    let sentence = body["sentence"].as_u64().unwrap();
    assert!(sentence <= 10, "sentence {sentence} out of range");
}

#[actix_web::test]
async fn oracle_failure_surfaces_as_generation_error() {
    let state = build_state()
        .with_oracle(Arc::new(FailingOracle::new("request timed out")))
        .build();
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/generate_storyboard")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "GENERATION_FAILED",
        "request timed out",
    )
    .await;
}

#[actix_web::test]
async fn unparseable_reply_surfaces_as_generation_error() {
    let app = app_with_replies(["I refuse to answer in JSON today.".to_string()]).await;

    let req = test::TestRequest::post()
        .uri("/final_verdict")
        .set_json(sample_history())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "GENERATION_FAILED",
        "verdict reply rejected",
    )
    .await;
}

#[actix_web::test]
async fn missing_oracle_yields_service_unavailable() {
    let state = build_state().build();
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/generate_storyboard")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(
        resp,
        StatusCode::SERVICE_UNAVAILABLE,
        "ORACLE_UNAVAILABLE",
        "Model oracle unavailable",
    )
    .await;
}
