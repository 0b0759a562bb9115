//! Core step-processing engine.
//!
//! This module contains everything with non-trivial state or logic:
//! - Validation of untyped step payloads into typed [`Step`] records
//! - The append-only history and named-branch store
//! - Terminal rendering of steps for the diagnostic channel
//! - The [`ThinkingEngine`] entry point that ties them together

mod engine;
mod render;
mod step;
mod store;
mod validate;

pub use engine::{StepOutcome, StepSummary, ThinkingEngine};
pub use render::{render_step, visible_width};
pub use step::{KnowledgeEntry, KnowledgeStatus, Step, StepKind};
pub use store::{AppendOutcome, ThoughtStore};
pub use validate::{validate_step, Advisory, ValidatedStep};
