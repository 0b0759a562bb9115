//! In-memory history and branch bookkeeping for validated steps.

use std::collections::HashMap;

use crate::thinking::step::Step;
use crate::thinking::validate::Advisory;

/// Process-lifetime store of validated steps.
///
/// Holds the ordered append-only history plus a mapping from branch id to the
/// subsequence of steps that declared membership in that branch. Owned by the
/// engine rather than living in module-level state, so tests and embedders
/// can hold isolated instances.
#[derive(Debug, Default)]
pub struct ThoughtStore {
    history: Vec<Step>,
    branches: HashMap<String, Vec<Step>>,
}

/// What happened while appending a step
#[derive(Debug, Clone)]
pub struct AppendOutcome {
    /// The step as stored, after any `total_thoughts` adjustment.
    pub step: Step,
    /// Advisory emitted when `total_thoughts` was raised.
    pub adjustment: Option<Advisory>,
    /// Branch id created by this append, if it was the first step seen
    /// for that branch.
    pub created_branch: Option<String>,
}

impl ThoughtStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated step to the history.
    ///
    /// If the step claims a position beyond its own estimate, the estimate is
    /// raised to match; this is the only mutation performed. Steps carrying
    /// both branch fields are also indexed into their named branch, creating
    /// it on first sight.
    pub fn append(&mut self, mut step: Step) -> AppendOutcome {
        let adjustment = if step.thought_number > step.total_thoughts {
            let previous_total = step.total_thoughts;
            step.total_thoughts = step.thought_number;
            Some(Advisory::TotalThoughtsRaised {
                previous_total,
                thought_number: step.thought_number,
            })
        } else {
            None
        };

        self.history.push(step.clone());

        let mut created_branch = None;
        if let Some((branch_id, _origin)) = step.branch_membership() {
            if !self.branches.contains_key(branch_id) {
                created_branch = Some(branch_id.to_string());
            }
            self.branches
                .entry(branch_id.to_string())
                .or_default()
                .push(step.clone());
        }

        AppendOutcome {
            step,
            adjustment,
            created_branch,
        }
    }

    /// Number of steps recorded in the history
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Identifiers of all known branches, in no particular order
    pub fn branch_ids(&self) -> Vec<String> {
        self.branches.keys().cloned().collect()
    }

    /// Number of steps recorded in a branch, if it exists
    pub fn branch_len(&self, branch_id: &str) -> Option<usize> {
        self.branches.get(branch_id).map(Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(number: i64, total: i64) -> Step {
        Step {
            thought: format!("step {number}"),
            thought_number: number,
            total_thoughts: total,
            next_thought_needed: true,
            confidence_score: None,
            knowledge_assessment: None,
            is_revision: None,
            revises_thought: None,
            branch_from_thought: None,
            branch_id: None,
        }
    }

    fn branch_step(number: i64, from: i64, branch_id: &str) -> Step {
        Step {
            branch_from_thought: Some(from),
            branch_id: Some(branch_id.to_string()),
            ..step(number, 10)
        }
    }

    #[test]
    fn test_append_grows_history() {
        let mut store = ThoughtStore::new();
        assert_eq!(store.history_len(), 0);
        store.append(step(1, 3));
        store.append(step(2, 3));
        assert_eq!(store.history_len(), 2);
    }

    #[test]
    fn test_total_thoughts_raised_to_thought_number() {
        let mut store = ThoughtStore::new();
        let outcome = store.append(step(5, 3));
        assert_eq!(outcome.step.total_thoughts, 5);
        assert_eq!(
            outcome.adjustment,
            Some(Advisory::TotalThoughtsRaised {
                previous_total: 3,
                thought_number: 5,
            })
        );
    }

    #[test]
    fn test_total_thoughts_untouched_when_consistent() {
        let mut store = ThoughtStore::new();
        let outcome = store.append(step(2, 3));
        assert_eq!(outcome.step.total_thoughts, 3);
        assert!(outcome.adjustment.is_none());
    }

    #[test]
    fn test_branch_created_on_first_sight() {
        let mut store = ThoughtStore::new();
        let outcome = store.append(branch_step(3, 2, "alt"));
        assert_eq!(outcome.created_branch.as_deref(), Some("alt"));

        let outcome = store.append(branch_step(4, 2, "alt"));
        assert!(outcome.created_branch.is_none());
        assert_eq!(store.branch_len("alt"), Some(2));
    }

    #[test]
    fn test_multiple_branches_tracked_independently() {
        let mut store = ThoughtStore::new();
        store.append(branch_step(3, 2, "A"));
        store.append(branch_step(4, 2, "A"));
        store.append(branch_step(3, 2, "B"));

        let mut ids = store.branch_ids();
        ids.sort();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(store.branch_len("A"), Some(2));
        assert_eq!(store.branch_len("B"), Some(1));
        assert_eq!(store.history_len(), 3);
    }

    #[test]
    fn test_step_without_branch_fields_not_indexed() {
        let mut store = ThoughtStore::new();
        let mut partial = step(1, 3);
        partial.branch_from_thought = Some(2);
        store.append(partial);
        assert!(store.branch_ids().is_empty());
    }

    #[test]
    fn test_branch_len_unknown_branch() {
        let store = ThoughtStore::new();
        assert_eq!(store.branch_len("missing"), None);
    }
}
