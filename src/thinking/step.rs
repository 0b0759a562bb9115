use std::fmt;

use serde::{Deserialize, Serialize};

/// One validated reasoning step.
///
/// Constructed only by the validator; every stored `Step` satisfies the full
/// field contract. Optional fields reflect exactly what the caller supplied
/// (after permissive parsing), except that `total_thoughts` may be raised by
/// the store to stay >= `thought_number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// The reasoning content; opaque to the server.
    pub thought: String,
    /// Position in the sequence as claimed by the caller (>= 1).
    pub thought_number: i64,
    /// Caller's current estimate of sequence length (>= 1).
    pub total_thoughts: i64,
    /// Whether the caller expects more steps to follow.
    pub next_thought_needed: bool,
    /// Caller's confidence in this step, within [0.0, 1.0].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    /// Entity knowledge self-assessment for this step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_assessment: Option<Vec<KnowledgeEntry>>,
    /// Whether this step amends an earlier step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_revision: Option<bool>,
    /// Step number being amended (>= 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revises_thought: Option<i64>,
    /// Step number an alternative line diverges from (>= 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_from_thought: Option<i64>,
    /// Identifier of the alternative reasoning line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
}

/// One entity in a step's knowledge assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// The entity being assessed.
    pub entity: String,
    /// How well the caller knows the entity.
    pub status: KnowledgeStatus,
}

/// Self-reported familiarity with an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeStatus {
    /// The entity is known.
    Known,
    /// The entity is unknown.
    Unknown,
    /// Familiarity is uncertain.
    Uncertain,
}

impl KnowledgeStatus {
    /// Parse a wire-format status value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "known" => Some(Self::Known),
            "unknown" => Some(Self::Unknown),
            "uncertain" => Some(Self::Uncertain),
            _ => None,
        }
    }
}

impl fmt::Display for KnowledgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Known => "known",
            Self::Unknown => "unknown",
            Self::Uncertain => "uncertain",
        };
        f.write_str(s)
    }
}

/// Visual classification of a step for rendering.
///
/// A step is exactly one kind; revision context takes priority over branch
/// context when a step carries both.
#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    /// Amends an earlier step.
    Revision {
        /// The step number being revised.
        revises: i64,
    },
    /// Diverges onto a named alternative line.
    Branch {
        /// The step number the branch diverges from.
        from: i64,
        /// The branch identifier.
        id: String,
    },
    /// A plain sequential thought.
    Thought,
}

impl Step {
    /// Classify this step for display purposes
    pub fn kind(&self) -> StepKind {
        if self.is_revision == Some(true) {
            if let Some(revises) = self.revises_thought {
                return StepKind::Revision { revises };
            }
        }
        if let (Some(from), Some(id)) = (self.branch_from_thought, &self.branch_id) {
            return StepKind::Branch {
                from,
                id: id.clone(),
            };
        }
        StepKind::Thought
    }

    /// Whether this step declared membership in a named branch
    pub fn branch_membership(&self) -> Option<(&str, i64)> {
        match (&self.branch_id, self.branch_from_thought) {
            (Some(id), Some(from)) => Some((id.as_str(), from)),
            _ => None,
        }
    }
}
