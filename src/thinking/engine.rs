//! The single entry point tying validation, storage, and rendering together.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::DisplayConfig;
use crate::thinking::render::render_step;
use crate::thinking::store::ThoughtStore;
use crate::thinking::validate::validate_step;

/// Outcome of processing one step payload.
///
/// Serializes to the wire shape returned to the caller: a tagged record with
/// `status` of either `success` or `failed`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StepOutcome {
    /// The step was validated, stored, and rendered.
    Success(StepSummary),
    /// The payload failed validation; nothing was stored.
    Failed {
        /// Human-readable description of the violation.
        error: String,
    },
}

/// Summary returned after a step is successfully recorded
#[derive(Debug, Clone, Serialize)]
pub struct StepSummary {
    /// The step number that was recorded.
    pub thought_number_processed: i64,
    /// The sequence length estimate after any adjustment.
    pub current_total_thoughts: i64,
    /// Whether the caller declared more steps to follow.
    pub next_thought_needed: bool,
    /// Identifiers of all branches seen so far (unordered).
    pub active_branches: Vec<String>,
    /// Total number of steps recorded this process lifetime.
    pub total_history_length: usize,
}

/// Sequential thinking engine.
///
/// Owns the history/branch store and processes one step per call:
/// validate, append, render to stderr, summarize. Processing is synchronous
/// and never panics on caller input; every failure is converted into a
/// [`StepOutcome::Failed`] at this boundary.
#[derive(Debug, Default)]
pub struct ThinkingEngine {
    store: ThoughtStore,
    display: DisplayConfig,
}

impl ThinkingEngine {
    /// Create an engine with the given display settings
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            store: ThoughtStore::new(),
            display,
        }
    }

    /// Validate, record, and render one raw step payload.
    ///
    /// On success the step is appended to the history (and its branch, if
    /// any) and a summary is returned. On validation failure nothing is
    /// stored and the error is reported in the outcome; no error propagates
    /// past this method.
    pub fn process_step(&mut self, raw: &serde_json::Value) -> StepOutcome {
        let validated = match validate_step(raw) {
            Ok(v) => v,
            Err(e) => {
                debug!(error = %e, "Step rejected");
                return StepOutcome::Failed {
                    error: e.to_string(),
                };
            }
        };

        for advisory in &validated.advisories {
            warn!(advisory = %advisory, "Step advisory");
        }

        let outcome = self.store.append(validated.step);
        if let Some(adjustment) = &outcome.adjustment {
            warn!(advisory = %adjustment, "Step advisory");
        }
        if let Some(branch_id) = &outcome.created_branch {
            info!(
                branch_id = %branch_id,
                origin = ?outcome.step.branch_from_thought,
                "New branch started"
            );
        }

        if self.display.log_thoughts {
            eprintln!("{}", render_step(&outcome.step));
        }

        StepOutcome::Success(StepSummary {
            thought_number_processed: outcome.step.thought_number,
            current_total_thoughts: outcome.step.total_thoughts,
            next_thought_needed: outcome.step.next_thought_needed,
            active_branches: self.store.branch_ids(),
            total_history_length: self.store.history_len(),
        })
    }

    /// Number of steps recorded so far
    pub fn history_len(&self) -> usize {
        self.store.history_len()
    }

    /// Access the underlying store
    pub fn store(&self) -> &ThoughtStore {
        &self.store
    }
}
