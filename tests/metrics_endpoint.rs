// tests/metrics_endpoint.rs
// Own test binary: installs the process-global Prometheus recorder.

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use tower::ServiceExt as _;
use tweet_tokenizer::metrics::Metrics;
use tweet_tokenizer::{Pipeline, TokenizerConfig};

#[tokio::test]
async fn pipeline_counters_show_up_on_metrics() {
    let metrics = Metrics::init().expect("install recorder");

    let p = Pipeline::new(&TokenizerConfig::default());
    p.process("not bad at all :)");
    let _ = p.process_value(&serde_json::json!(false));

    let req = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .expect("build GET /metrics");
    let resp = metrics.router().oneshot(req).await.expect("oneshot /metrics");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let text = String::from_utf8(bytes.to_vec()).expect("utf8");
    assert!(text.contains("tokenizer_texts_total"), "{text}");
    assert!(text.contains("tokenizer_tokens_total 5"), "{text}");
    assert!(text.contains("tokenizer_negated_tokens_total 4"), "{text}");
    assert!(text.contains("tokenizer_input_errors_total 1"), "{text}");
}
