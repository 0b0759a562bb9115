//! # MCP Sequential Thinking Server
//!
//! A Model Context Protocol (MCP) server for dynamic and reflective
//! problem-solving. Callers submit one reasoning step per tool call; the
//! server validates each step, records it into an in-process history with
//! named branch tracking, renders a boxed diagnostic view to stderr, and
//! returns a structured acknowledgement.
//!
//! ## Features
//!
//! - **Step Validation**: Strict checks on required fields, permissive
//!   handling of optional metadata
//! - **History & Branches**: Append-only step history with named alternative
//!   reasoning branches
//! - **Revision Tracking**: Steps may amend earlier steps
//! - **Terminal Rendering**: Colored, framed step display for human
//!   observability
//!
//! ## Architecture
//!
//! ```text
//! MCP Client → MCP Server (stdio JSON-RPC) → Thinking Engine
//!                                                  ↓
//!                                      History + Branches (in memory)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use mcp_sequential_thinking::{Config, AppState, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let state = Arc::new(AppState::new(config));
//!     let server = McpServer::new(state);
//!     server.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Configuration management for the MCP server.
pub mod config;
/// Error types and result aliases for the application.
pub mod error;
/// MCP server implementation and request handling.
pub mod server;
/// Step validation, history/branch bookkeeping, and rendering.
pub mod thinking;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use server::{AppState, McpServer, SharedState};
pub use thinking::ThinkingEngine;
