//! Conversion of untyped step payloads into well-formed [`Step`] records.
//!
//! A single explicit validation pass constructs a closed, fully-typed record
//! or fails with a descriptive error naming the first violated constraint.
//! Structurally legal but semantically odd field combinations produce
//! advisories instead of failures.

use std::fmt;

use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::thinking::step::{KnowledgeEntry, KnowledgeStatus, Step};

/// Legacy wire fields that are tolerated, warned about, and discarded.
const DEPRECATED_FIELDS: &[(&str, &str)] = &[(
    "needsMoreThoughts",
    "ignored; use nextThoughtNeeded to continue a sequence",
)];

/// Non-fatal diagnostic emitted during validation or storage
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// `isRevision` was true but no `revisesThought` was given.
    RevisionWithoutTarget,
    /// `branchFromThought` was given without a `branchId`.
    BranchWithoutId,
    /// A deprecated field was present in the payload.
    DeprecatedField {
        /// The legacy field name.
        field: &'static str,
        /// Guidance shown in the warning.
        note: &'static str,
    },
    /// `totalThoughts` was raised to match `thoughtNumber` before storing.
    TotalThoughtsRaised {
        /// The value the caller supplied.
        previous_total: i64,
        /// The step number it was raised to.
        thought_number: i64,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RevisionWithoutTarget => {
                write!(f, "isRevision is true but revisesThought is missing")
            }
            Self::BranchWithoutId => {
                write!(f, "branchFromThought is set but branchId is missing")
            }
            Self::DeprecatedField { field, note } => {
                write!(f, "deprecated field {field}: {note}")
            }
            Self::TotalThoughtsRaised {
                previous_total,
                thought_number,
            } => write!(
                f,
                "totalThoughts raised from {previous_total} to {thought_number} to match thoughtNumber"
            ),
        }
    }
}

/// A step that passed validation, plus any advisories it triggered
#[derive(Debug, Clone)]
pub struct ValidatedStep {
    /// The well-formed step.
    pub step: Step,
    /// Non-fatal warnings for the diagnostic channel.
    pub advisories: Vec<Advisory>,
}

/// Validate an untyped payload into a [`Step`].
///
/// Required fields are checked first, in a fixed order, and the first
/// violation is returned. Optional fields with hard constraints
/// (`confidenceScore`, `knowledgeAssessment`) fail the call when malformed;
/// the remaining optional fields are silently dropped when mistyped.
pub fn validate_step(raw: &Value) -> ValidationResult<ValidatedStep> {
    let thought = require_text(raw, "thought")?;
    let thought_number = require_positive_int(raw, "thoughtNumber")?;
    let total_thoughts = require_positive_int(raw, "totalThoughts")?;
    let next_thought_needed = require_bool(raw, "nextThoughtNeeded")?;

    let confidence_score = optional_confidence(raw)?;
    let knowledge_assessment = optional_knowledge_assessment(raw)?;

    // Permissive optional fields: mistyped values are treated as absent
    let is_revision = raw.get("isRevision").and_then(Value::as_bool);
    let revises_thought = optional_positive_int(raw, "revisesThought");
    let branch_from_thought = optional_positive_int(raw, "branchFromThought");
    let branch_id = raw
        .get("branchId")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let mut advisories = Vec::new();
    if is_revision == Some(true) && revises_thought.is_none() {
        advisories.push(Advisory::RevisionWithoutTarget);
    }
    if branch_from_thought.is_some() && branch_id.is_none() {
        advisories.push(Advisory::BranchWithoutId);
    }
    for &(field, note) in DEPRECATED_FIELDS {
        if raw.get(field).is_some() {
            advisories.push(Advisory::DeprecatedField { field, note });
        }
    }

    Ok(ValidatedStep {
        step: Step {
            thought,
            thought_number,
            total_thoughts,
            next_thought_needed,
            confidence_score,
            knowledge_assessment,
            is_revision,
            revises_thought,
            branch_from_thought,
            branch_id,
        },
        advisories,
    })
}

fn require_text(raw: &Value, field: &'static str) -> ValidationResult<String> {
    match raw.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(ValidationError::Field {
            field,
            expected: "must be a non-empty string",
        }),
    }
}

fn require_positive_int(raw: &Value, field: &'static str) -> ValidationResult<i64> {
    match raw.get(field).and_then(Value::as_i64) {
        Some(n) if n >= 1 => Ok(n),
        _ => Err(ValidationError::Field {
            field,
            expected: "must be an integer >= 1",
        }),
    }
}

fn require_bool(raw: &Value, field: &'static str) -> ValidationResult<bool> {
    raw.get(field)
        .and_then(Value::as_bool)
        .ok_or(ValidationError::Field {
            field,
            expected: "must be a boolean",
        })
}

fn optional_positive_int(raw: &Value, field: &str) -> Option<i64> {
    raw.get(field).and_then(Value::as_i64).filter(|n| *n >= 1)
}

fn optional_confidence(raw: &Value) -> ValidationResult<Option<f64>> {
    match raw.get("confidenceScore") {
        None => Ok(None),
        Some(value) => match value.as_f64() {
            Some(score) if (0.0..=1.0).contains(&score) => Ok(Some(score)),
            _ => Err(ValidationError::Field {
                field: "confidenceScore",
                expected: "must be a number between 0.0 and 1.0",
            }),
        },
    }
}

fn optional_knowledge_assessment(raw: &Value) -> ValidationResult<Option<Vec<KnowledgeEntry>>> {
    let value = match raw.get("knowledgeAssessment") {
        None => return Ok(None),
        Some(v) => v,
    };

    let items = value.as_array().ok_or(ValidationError::Field {
        field: "knowledgeAssessment",
        expected: "must be an array",
    })?;

    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let entry = item.as_object().ok_or(ValidationError::KnowledgeEntry {
            index,
            expected: "must be an object",
        })?;

        let entity = entry
            .get("entity")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::KnowledgeEntry {
                index,
                expected: "entity must be a non-empty string",
            })?;

        let status = entry
            .get("status")
            .and_then(Value::as_str)
            .and_then(KnowledgeStatus::parse)
            .ok_or(ValidationError::KnowledgeEntry {
                index,
                expected: "status must be one of: known, unknown, uncertain",
            })?;

        entries.push(KnowledgeEntry {
            entity: entity.to_string(),
            status,
        });
    }

    Ok(Some(entries))
}
