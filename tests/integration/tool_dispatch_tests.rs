//! Dispatch tests covering every registered tool.

use std::sync::Arc;

use mcp_workbench::mcp::registry::CapabilityRegistry;
use serde_json::json;

use super::test_helpers::{args, call_tool, first_text, test_state};

#[tokio::test]
async fn calculate_sum_adds() {
    let result = call_tool("calculate_sum", json!({ "a": 2, "b": 3 }))
        .await
        .expect("sum succeeds");
    assert_eq!(first_text(&result), "The sum of 2 and 3 is 5");
}

#[tokio::test]
async fn calculate_sum_defaults_missing_operands_to_zero() {
    let result = call_tool("calculate_sum", json!({}))
        .await
        .expect("sum succeeds");
    assert_eq!(first_text(&result), "The sum of 0 and 0 is 0");
}

#[tokio::test]
async fn calculate_product_multiplies() {
    let result = call_tool("calculate_product", json!({ "a": 4, "b": 5 }))
        .await
        .expect("product succeeds");
    assert_eq!(first_text(&result), "The product of 4 and 5 is 20");
}

#[tokio::test]
async fn calculate_percentage_computes_ratio() {
    let result = call_tool("calculate_percentage", json!({ "part": 25, "total": 50 }))
        .await
        .expect("percentage succeeds");
    assert_eq!(first_text(&result), "50");
}

#[tokio::test]
async fn calculate_percentage_guards_zero_total() {
    let result = call_tool("calculate_percentage", json!({ "part": 25, "total": 0 }))
        .await
        .expect("zero total is guarded, not an error");
    assert_eq!(first_text(&result), "0");
}

#[tokio::test]
async fn calculate_percentage_rejects_missing_operands() {
    let err = call_tool("calculate_percentage", json!({ "part": 25 }))
        .await
        .expect_err("missing total fails");
    assert!(err.message.contains("calculate_percentage"));
}

#[tokio::test]
async fn divide_divides() {
    let result = call_tool("divide", json!({ "a": 10, "b": 4 }))
        .await
        .expect("divide succeeds");
    assert_eq!(first_text(&result), "10 divided by 4 is 2.5");
}

#[tokio::test]
async fn divide_by_zero_is_a_domain_error() {
    let err = call_tool("divide", json!({ "a": 10, "b": 0 }))
        .await
        .expect_err("zero divisor fails");
    assert!(err.message.contains("division by zero"));
}

#[tokio::test]
async fn greet_user_uses_supplied_name() {
    let result = call_tool("greet_user", json!({ "name": "Ada" }))
        .await
        .expect("greet succeeds");
    assert!(first_text(&result).starts_with("Hello, Ada!"));
}

#[tokio::test]
async fn greet_user_falls_back_to_stranger() {
    let result = call_tool("greet_user", json!({}))
        .await
        .expect("greet succeeds without a name");
    assert!(first_text(&result).contains("stranger"));
}

#[tokio::test]
async fn analyze_text_returns_structured_statistics() {
    let result = call_tool("analyze_text", json!({ "text": "a bb ccc" }))
        .await
        .expect("analysis succeeds");

    let body: serde_json::Value =
        serde_json::from_str(&first_text(&result)).expect("result is JSON");
    assert_eq!(body["word_count"], 3);
    assert_eq!(body["longest_word"], "ccc");
    assert_eq!(body["shortest_word"], "a");
}

#[tokio::test]
async fn analyze_text_requires_text() {
    let err = call_tool("analyze_text", json!({}))
        .await
        .expect_err("missing text fails");
    assert!(err.message.contains("analyze_text"));
}

#[tokio::test]
async fn get_user_list_filters_inactive_by_default() {
    let result = call_tool("get_user_list", json!({}))
        .await
        .expect("user list succeeds");

    let body: serde_json::Value =
        serde_json::from_str(&first_text(&result)).expect("result is JSON");
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn get_user_list_includes_inactive_on_request() {
    let result = call_tool("get_user_list", json!({ "include_inactive": true }))
        .await
        .expect("user list succeeds");

    let body: serde_json::Value =
        serde_json::from_str(&first_text(&result)).expect("result is JSON");
    assert_eq!(body["total"], 5);
}

#[tokio::test]
async fn trigger_error_always_fails() {
    let err = call_tool("trigger_error", json!({}))
        .await
        .expect_err("trigger_error fails by design");
    assert!(err.message.contains("trigger_error"));
}

#[tokio::test]
async fn dispatch_updates_operational_counters() {
    let registry = CapabilityRegistry::builtin();
    let state = test_state();

    registry
        .call_tool(Arc::clone(&state), "calculate_sum", args(json!({ "a": 1, "b": 1 })))
        .await
        .expect("sum succeeds");
    let _ = registry
        .call_tool(Arc::clone(&state), "trigger_error", args(json!({})))
        .await;

    let snapshot = state.stats.snapshot();
    assert_eq!(snapshot.tool_calls, 2);
    assert_eq!(snapshot.requests, 2);
    assert_eq!(snapshot.errors, 1);
}
