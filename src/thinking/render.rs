//! Terminal rendering of validated steps.
//!
//! Produces a framed, colored representation of a single step for the
//! diagnostic channel. Rendering is a pure function of the step: no state,
//! no side effects, byte-identical output for identical input.

use colored::Colorize;

use crate::thinking::step::{Step, StepKind};

/// Render a step as a framed, colored display string.
///
/// The frame is sized to the widest visible line across the header and all
/// content blocks; embedded ANSI escape sequences are kept in the output but
/// never counted toward alignment.
pub fn render_step(step: &Step) -> String {
    let header = header_line(step);

    let mut blocks: Vec<Vec<String>> = Vec::new();
    blocks.push(step.thought.split('\n').map(str::to_string).collect());
    if let Some(score) = step.confidence_score {
        blocks.push(vec![format!("Confidence: {score:.2}")]);
    }
    if let Some(entries) = &step.knowledge_assessment {
        if !entries.is_empty() {
            let mut lines = vec!["Knowledge assessment:".to_string()];
            lines.extend(
                entries
                    .iter()
                    .map(|e| format!("  {}: {}", e.entity, e.status)),
            );
            blocks.push(lines);
        }
    }

    let width = blocks
        .iter()
        .flatten()
        .map(|line| visible_width(line))
        .chain(std::iter::once(visible_width(&header)))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("┌{}┐\n", "─".repeat(width + 2)));
    out.push_str(&padded_row(&header, width));
    out.push_str(&format!("├{}┤\n", "─".repeat(width + 2)));
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push_str(&format!("├{}┤\n", "┄".repeat(width + 2)));
        }
        for line in block {
            out.push_str(&padded_row(line, width));
        }
    }
    out.push_str(&format!("└{}┘", "─".repeat(width + 2)));
    out
}

fn header_line(step: &Step) -> String {
    let (label, context) = match step.kind() {
        StepKind::Revision { revises } => (
            "🔄 Revision".yellow().to_string(),
            format!(" (revising thought {revises})"),
        ),
        StepKind::Branch { from, id } => (
            "🌿 Branch".green().to_string(),
            format!(" (from thought {from}, branch ID: {id})"),
        ),
        StepKind::Thought => ("💭 Thought".blue().to_string(), String::new()),
    };
    format!(
        "{label} {}/{}{context}",
        step.thought_number, step.total_thoughts
    )
}

fn padded_row(line: &str, width: usize) -> String {
    let padding = width.saturating_sub(visible_width(line));
    format!("│ {line}{} │\n", " ".repeat(padding))
}

/// Count the display characters in a line, ignoring ANSI escape sequences.
///
/// Escape sequences of the form `ESC [ ... <final byte>` (SGR color codes
/// and other CSI sequences) contribute zero width.
pub fn visible_width(line: &str) -> usize {
    let mut width = 0;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI sequence: optional '[', parameter bytes, then a final
            // byte in 0x40..=0x7e terminates it
            match chars.next() {
                Some('[') => {
                    for c in chars.by_ref() {
                        if ('\u{40}'..='\u{7e}').contains(&c) {
                            break;
                        }
                    }
                }
                Some(_) | None => {}
            }
        } else {
            width += 1;
        }
    }
    width
}
