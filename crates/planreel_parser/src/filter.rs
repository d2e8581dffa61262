//! Deny-list line filtering and the not-a-plan gate.
//!
//! Planner output interleaves the plan with solver banners, search
//! statistics, and cost summaries. The filter strips those before the
//! grammar matcher runs, and rejects input that is a domain or problem
//! definition rather than a plan.

use planreel_foundation::{Error, Result};

use crate::dialect::Dialect;

/// One candidate text line plus its source position and dialect tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawLine {
    /// The trimmed line text.
    pub text: String,
    /// 1-based line number in the original input.
    pub line: u32,
    /// The dialect the input was declared as.
    pub dialect: Dialect,
}

/// Filters raw planner output down to candidate plan lines.
pub struct LineFilter;

/// Substrings that mark a line as planner diagnostics rather than plan
/// content. Compared case-insensitively against the whole line.
const DENY_SUBSTRINGS: &[&str] = &[
    "states evaluated",
    "state evaluations",
    "nodes expanded",
    "expanded nodes",
    "search time",
    "planning time",
    "total time",
    "parsing time",
    "grounding",
    "preprocessing",
    "translator",
    "heuristic",
    "solution found",
    "found plan",
    "found solution",
    "plan found",
    "plan-length",
    "plan length",
    "plan cost",
    "metric value",
    "makespan:",
    "duplicates",
    "dead ends",
    "g(n)",
    "h(n)",
    "best-first",
    "iteration",
];

/// Markers that identify a domain or problem definition.
const DEFINITION_MARKERS: &[&str] = &["(define (domain", "(define(domain", "(define (problem", "(define(problem"];

impl LineFilter {
    /// Filters multi-line text into ordered candidate lines.
    ///
    /// Empty input yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`planreel_foundation::ErrorKind::InputKind`] if any
    /// surviving line carries a domain/problem definition marker; no
    /// partial result is produced in that case.
    pub fn filter(text: &str, dialect: Dialect) -> Result<Vec<RawLine>> {
        let mut candidates = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line_no = u32::try_from(index + 1).unwrap_or(u32::MAX);
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }

            let lowered = trimmed.to_ascii_lowercase();
            if let Some(marker) = DEFINITION_MARKERS.iter().find(|m| lowered.contains(**m)) {
                return Err(Error::input_kind(*marker, line_no));
            }

            if Self::is_noise(trimmed, &lowered) {
                continue;
            }

            candidates.push(RawLine {
                text: trimmed.to_string(),
                line: line_no,
                dialect,
            });
        }

        Ok(candidates)
    }

    /// Returns true for comment lines and planner-diagnostic lines.
    fn is_noise(trimmed: &str, lowered: &str) -> bool {
        if trimmed.starts_with(';') || trimmed.starts_with('#') || trimmed.starts_with("//") {
            return true;
        }
        DENY_SUBSTRINGS.iter().any(|s| lowered.contains(s))
    }
}
