//! ProblemDetails test helpers.
//!
//! Assertions over the stable RFC 7807 error contract, operating on raw
//! response parts so they stay independent of the backend's error types.

use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's ProblemDetails wire shape.
#[derive(Debug, Deserialize)]
struct ProblemDetailsLike {
    #[serde(rename = "type")]
    type_: String,
    title: String,
    status: u16,
    detail: String,
    code: String,
    trace_id: String,
}

/// Assert that a `ServiceResponse` conforms to the stable error contract:
/// expected status, `application/problem+json` content type, all envelope
/// fields present, `trace_id` parity with the `x-trace-id` header, and a
/// `Retry-After` header on 503.
pub async fn assert_problem_details(
    resp: actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_detail_contains: &str,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_eq!(status, expected_status);

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert!(!trace_id_header.is_empty());

    if expected_status == StatusCode::SERVICE_UNAVAILABLE {
        let retry_after = headers
            .get("Retry-After")
            .expect("503 responses must carry Retry-After");
        assert!(!retry_after.to_str().unwrap().is_empty());
    } else {
        assert!(
            headers.get("Retry-After").is_none(),
            "{expected_status} responses must not carry Retry-After"
        );
    }

    let body_str = std::str::from_utf8(&body).expect("response body should be valid UTF-8");
    let problem: ProblemDetailsLike = serde_json::from_str(body_str).unwrap_or_else(|_| {
        panic!("failed to parse error body as ProblemDetails. Raw body: {body_str}")
    });

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert!(
        problem.detail.contains(expected_detail_contains),
        "expected detail to contain '{expected_detail_contains}', got '{}'",
        problem.detail
    );
    assert_eq!(
        problem.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );
    assert!(!problem.title.is_empty());
    assert!(
        problem.type_.starts_with("https://overruled.app/errors/"),
        "type should follow the expected URL format"
    );
}
