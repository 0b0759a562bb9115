use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration problem detected at startup.
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration.
        message: String,
    },

    /// A step payload failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// MCP protocol-level failure.
    #[error("MCP protocol error: {0}")]
    Mcp(#[from] McpError),

    /// Unexpected internal failure.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the failure.
        message: String,
    },
}

/// Step validation errors.
///
/// One message per failure, naming the offending field and the violated
/// constraint. Only the first violation encountered is reported.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required or optional field was missing, mistyped, or out of range.
    #[error("Invalid {field}: {expected}")]
    Field {
        /// The wire name of the offending field.
        field: &'static str,
        /// The constraint it violated.
        expected: &'static str,
    },

    /// A knowledge assessment entry was malformed.
    #[error("Invalid knowledgeAssessment[{index}]: {expected}")]
    KnowledgeEntry {
        /// Index of the offending entry.
        index: usize,
        /// The constraint it violated.
        expected: &'static str,
    },
}

/// MCP protocol errors
#[derive(Debug, Error)]
pub enum McpError {
    /// The request was structurally invalid.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What was wrong with the request.
        message: String,
    },

    /// The requested tool is not implemented by this server.
    #[error("Unknown tool: {tool_name}")]
    UnknownTool {
        /// Name of the unrecognized tool.
        tool_name: String,
    },

    /// The tool arguments could not be used.
    #[error("Invalid parameters for {tool_name}: {message}")]
    InvalidParameters {
        /// Name of the tool being invoked.
        tool_name: String,
        /// What was wrong with the parameters.
        message: String,
    },

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type alias for MCP operations
pub type McpResult<T> = Result<T, McpError>;
