use serde_json::Value;
use tracing::info;

use super::SharedState;
use crate::error::{McpError, McpResult};

/// Route tool calls to appropriate handlers
pub async fn handle_tool_call(
    state: &SharedState,
    tool_name: &str,
    arguments: Option<Value>,
) -> McpResult<Value> {
    info!(tool = %tool_name, "Routing tool call");

    match tool_name {
        "sequentialthinking" => handle_sequential_thinking(state, arguments).await,
        _ => Err(McpError::UnknownTool {
            tool_name: tool_name.to_string(),
        }),
    }
}

/// Handle a sequentialthinking tool call.
///
/// The raw arguments are handed to the engine untyped; the engine performs
/// the full validation pass and reports failures as structured records
/// rather than protocol errors.
async fn handle_sequential_thinking(
    state: &SharedState,
    arguments: Option<Value>,
) -> McpResult<Value> {
    let args = arguments.ok_or_else(|| McpError::InvalidParameters {
        tool_name: "sequentialthinking".to_string(),
        message: "Missing arguments".to_string(),
    })?;

    let mut engine = state.engine.lock().await;
    let outcome = engine.process_step(&args);

    serde_json::to_value(outcome).map_err(McpError::Json)
}
