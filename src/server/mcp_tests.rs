//! Unit tests for MCP protocol implementation.
//!
//! Tests JSON-RPC 2.0 request/response handling, the tool definition,
//! and request dispatch.

use super::*;
use serde_json::json;

use crate::config::{Config, DisplayConfig, LogFormat, LoggingConfig};
use crate::server::AppState;
use std::sync::Arc;

fn test_server() -> McpServer {
    let state = Arc::new(AppState::new(Config {
        logging: LoggingConfig {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        },
        display: DisplayConfig {
            log_thoughts: false,
        },
    }));
    McpServer::new(state)
}

// ============================================================================
// JsonRpcResponse tests
// ============================================================================

#[test]
fn test_jsonrpc_response_success_with_id() {
    let response = JsonRpcResponse::success(Some(json!(1)), json!({"result": "ok"}));

    assert_eq!(response.jsonrpc, "2.0");
    assert_eq!(response.id, json!(1));
    assert!(response.result.is_some());
    assert!(response.error.is_none());
    assert_eq!(response.result.unwrap()["result"], "ok");
}

#[test]
fn test_jsonrpc_response_success_without_id() {
    let response = JsonRpcResponse::success(None, json!({"data": "value"}));

    assert_eq!(response.id, Value::Null);
    assert!(response.result.is_some());
}

#[test]
fn test_jsonrpc_response_error_with_id() {
    let response = JsonRpcResponse::error(Some(json!(42)), -32600, "Invalid request");

    assert_eq!(response.jsonrpc, "2.0");
    assert_eq!(response.id, json!(42));
    assert!(response.result.is_none());

    let error = response.error.unwrap();
    assert_eq!(error.code, -32600);
    assert_eq!(error.message, "Invalid request");
}

#[test]
fn test_jsonrpc_response_serialization_omits_absent_error() {
    let response = JsonRpcResponse::success(Some(json!(1)), json!({"test": true}));
    let serialized = serde_json::to_string(&response).unwrap();

    assert!(serialized.contains("\"jsonrpc\":\"2.0\""));
    assert!(serialized.contains("\"result\""));
    assert!(!serialized.contains("\"error\""));
}

#[test]
fn test_jsonrpc_request_deserialization() {
    let json_str = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#;
    let request: JsonRpcRequest = serde_json::from_str(json_str).unwrap();

    assert_eq!(request.jsonrpc, "2.0");
    assert_eq!(request.id, Some(json!(1)));
    assert_eq!(request.method, "initialize");
    assert!(request.params.is_some());
}

#[test]
fn test_jsonrpc_notification_no_id() {
    let json_str = r#"{"jsonrpc":"2.0","method":"initialized","params":{}}"#;
    let request: JsonRpcRequest = serde_json::from_str(json_str).unwrap();

    assert!(request.id.is_none());
}

// ============================================================================
// Tool definition tests
// ============================================================================

#[test]
fn test_tool_definition_name_and_schema() {
    let tool = get_sequential_thinking_tool();

    assert_eq!(tool.name, "sequentialthinking");
    assert!(!tool.description.is_empty());

    let required = tool.input_schema["required"].as_array().unwrap();
    let required: Vec<&str> = required.iter().filter_map(Value::as_str).collect();
    assert_eq!(
        required,
        vec!["thought", "thoughtNumber", "totalThoughts", "nextThoughtNeeded"]
    );
}

#[test]
fn test_tool_definition_optional_fields_declared() {
    let tool = get_sequential_thinking_tool();
    let props = tool.input_schema["properties"].as_object().unwrap();

    for field in [
        "confidenceScore",
        "knowledgeAssessment",
        "isRevision",
        "revisesThought",
        "branchFromThought",
        "branchId",
    ] {
        assert!(props.contains_key(field), "schema missing {field}");
    }
}

#[test]
fn test_tool_serializes_input_schema_key() {
    let tool = get_sequential_thinking_tool();
    let serialized = serde_json::to_value(&tool).unwrap();
    assert!(serialized.get("inputSchema").is_some());
}

// ============================================================================
// Request dispatch tests
// ============================================================================

fn request(method: &str, id: Option<Value>, params: Option<Value>) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id,
        method: method.to_string(),
        params,
    }
}

#[tokio::test]
async fn test_initialize_returns_server_info() {
    let server = test_server();
    let response = server
        .handle_request(request("initialize", Some(json!(1)), None))
        .await
        .unwrap();

    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "mcp-sequential-thinking");
    assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
}

#[tokio::test]
async fn test_initialized_notification_gets_no_response() {
    let server = test_server();
    let response = server.handle_request(request("initialized", None, None)).await;
    assert!(response.is_none());
}

#[tokio::test]
async fn test_tools_list_contains_single_tool() {
    let server = test_server();
    let response = server
        .handle_request(request("tools/list", Some(json!(2)), None))
        .await
        .unwrap();

    let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "sequentialthinking");
}

#[tokio::test]
async fn test_ping_returns_empty_object() {
    let server = test_server();
    let response = server
        .handle_request(request("ping", Some(json!(3)), None))
        .await
        .unwrap();
    assert_eq!(response.result.unwrap(), json!({}));
}

#[tokio::test]
async fn test_unknown_method_error() {
    let server = test_server();
    let response = server
        .handle_request(request("bogus/method", Some(json!(4)), None))
        .await
        .unwrap();

    let error = response.error.unwrap();
    assert_eq!(error.code, -32601);
    assert!(error.message.contains("bogus/method"));
}

#[tokio::test]
async fn test_unknown_notification_ignored() {
    let server = test_server();
    let response = server.handle_request(request("bogus/notify", None, None)).await;
    assert!(response.is_none());
}

#[tokio::test]
async fn test_tool_call_missing_params() {
    let server = test_server();
    let response = server
        .handle_request(request("tools/call", Some(json!(5)), None))
        .await
        .unwrap();
    assert_eq!(response.error.unwrap().code, -32602);
}

#[tokio::test]
async fn test_tool_call_success_wraps_text_content() {
    let server = test_server();
    let params = json!({
        "name": "sequentialthinking",
        "arguments": {
            "thought": "first step",
            "thoughtNumber": 1,
            "totalThoughts": 2,
            "nextThoughtNeeded": true
        }
    });
    let response = server
        .handle_request(request("tools/call", Some(json!(6)), Some(params)))
        .await
        .unwrap();

    let result = response.result.unwrap();
    assert!(result.get("isError").is_none());
    let text = result["content"][0]["text"].as_str().unwrap();
    let record: Value = serde_json::from_str(text).unwrap();
    assert_eq!(record["status"], "success");
    assert_eq!(record["thought_number_processed"], 1);
}

#[tokio::test]
async fn test_tool_call_validation_failure_flagged_as_error() {
    let server = test_server();
    let params = json!({
        "name": "sequentialthinking",
        "arguments": { "thoughtNumber": 1 }
    });
    let response = server
        .handle_request(request("tools/call", Some(json!(7)), Some(params)))
        .await
        .unwrap();

    let result = response.result.unwrap();
    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    let record: Value = serde_json::from_str(text).unwrap();
    assert_eq!(record["status"], "failed");
}

#[tokio::test]
async fn test_tool_call_unknown_tool_flagged_as_error() {
    let server = test_server();
    let params = json!({"name": "other_tool", "arguments": {}});
    let response = server
        .handle_request(request("tools/call", Some(json!(8)), Some(params)))
        .await
        .unwrap();

    let result = response.result.unwrap();
    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Unknown tool: other_tool"));
}
