//! Server module for MCP protocol handling.
//!
//! This module provides:
//! - MCP server implementation over stdio
//! - Tool call handlers and routing
//! - Shared application state management

mod handlers;
mod mcp;

pub use handlers::*;
pub use mcp::*;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::thinking::ThinkingEngine;

/// Application state shared across handlers.
///
/// The engine is synchronous and assumes one in-flight call at a time, so it
/// sits behind a mutex: however the transport dispatches requests, calls into
/// the core are serialized here.
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// The sequential thinking engine.
    pub engine: Mutex<ThinkingEngine>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        let engine = ThinkingEngine::new(config.display.clone());
        Self {
            config,
            engine: Mutex::new(engine),
        }
    }
}

/// Shared application state handle
pub type SharedState = Arc<AppState>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayConfig, LogFormat, LoggingConfig};

    fn create_test_config() -> Config {
        Config {
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
            },
            display: DisplayConfig {
                log_thoughts: false,
            },
        }
    }

    #[tokio::test]
    async fn test_app_state_new() {
        let state = AppState::new(create_test_config());
        assert_eq!(state.engine.lock().await.history_len(), 0);
        assert!(!state.config.display.log_thoughts);
    }

    #[tokio::test]
    async fn test_shared_state_type() {
        let state = AppState::new(create_test_config());
        let shared: SharedState = Arc::new(state);

        let shared2 = Arc::clone(&shared);
        assert_eq!(Arc::strong_count(&shared), 2);
        drop(shared2);
        assert_eq!(Arc::strong_count(&shared), 1);
    }

    #[tokio::test]
    async fn test_engine_state_persists_across_calls() {
        let state = AppState::new(create_test_config());
        let raw = serde_json::json!({
            "thought": "hello",
            "thoughtNumber": 1,
            "totalThoughts": 1,
            "nextThoughtNeeded": false
        });
        state.engine.lock().await.process_step(&raw);
        assert_eq!(state.engine.lock().await.history_len(), 1);
    }
}
