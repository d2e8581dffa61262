//! Priority-ordered dialect grammars.
//!
//! Each candidate line is attempted against the grammars its dialect
//! permits, most specific first:
//!
//! 1. timestamped with explicit duration: `T ":" "(" NAME PARAM* ")" "[" ["D:"] FLOAT "]"`
//! 2. bare timestamped: `T ":" "(" NAME PARAM* ")"`
//! 3. step-indexed: `["Step"] N [":"|"."] "(" NAME PARAM* ")"`
//! 4. hybrid wait marker: `T ":" WAITMARK "[" FLOAT "]"`
//!
//! The numerical dialect additionally accepts bracketed `KEY ":"
//! SIGNED_FLOAT` annotation lists in place of or alongside a duration.
//! The hybrid dialect normalizes `start-`/`stop-` name prefixes to the
//! base action name with a process-boundary flag.
//!
//! A non-matching non-empty line is dropped with a non-fatal diagnostic;
//! matching continues with the next line.

use planreel_foundation::{Diagnostic, DiagnosticBuffer, DiagnosticKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::filter::RawLine;
use crate::scan::LineCursor;

// =============================================================================
// Matched Line
// =============================================================================

/// Process-boundary flag carried by hybrid `start-`/`stop-` actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProcessBoundary {
    /// An ordinary instantaneous-or-durative action.
    #[default]
    Instant,
    /// A `start-` prefixed process-begin event.
    Start,
    /// A `stop-` prefixed process-end event.
    Stop,
}

/// A successfully matched action line, before semantic normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchedLine {
    /// Start time (timestamp, or step index for step-indexed dialects).
    pub time: f64,
    /// Action name, lowercased, with any process prefix stripped.
    pub name: String,
    /// Ordered parameter tokens, lowercased.
    pub parameters: Vec<String>,
    /// Explicit duration, if the line carried one.
    pub explicit_duration: Option<f64>,
    /// Bracketed `key: value` annotations (numerical dialect).
    pub annotations: Vec<(String, f64)>,
    /// Process-boundary flag (hybrid dialect).
    pub boundary: ProcessBoundary,
    /// True for entity-free wait-marker lines.
    pub is_wait: bool,
    /// 1-based source line number.
    pub line: u32,
}

/// Contents of one `[...]` group.
#[derive(Debug, Default)]
struct BracketGroup {
    duration: Option<f64>,
    annotations: Vec<(String, f64)>,
}

// =============================================================================
// Matcher
// =============================================================================

/// Matches candidate lines against the grammars of one dialect.
#[derive(Clone, Copy, Debug)]
pub struct ActionLineMatcher {
    dialect: Dialect,
}

impl ActionLineMatcher {
    /// Creates a matcher for the given dialect.
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Matches every candidate line, recording a diagnostic for each
    /// non-matching one. Order is preserved.
    pub fn match_lines(
        &self,
        lines: &[RawLine],
        diagnostics: &mut DiagnosticBuffer,
    ) -> Vec<MatchedLine> {
        let mut matched = Vec::with_capacity(lines.len());
        for raw in lines {
            match self.match_line(raw) {
                Some(line) => matched.push(line),
                None => diagnostics.push(
                    Diagnostic::warning(
                        DiagnosticKind::UnparsableLine,
                        format!("no {} grammar matched: {}", self.dialect, raw.text),
                    )
                    .at_line(raw.line),
                ),
            }
        }
        matched
    }

    /// Attempts to match one candidate line.
    ///
    /// Returns `None` if no grammar of this dialect matches.
    #[must_use]
    pub fn match_line(&self, raw: &RawLine) -> Option<MatchedLine> {
        let mut cursor = LineCursor::new(&raw.text);

        let result = match self.dialect {
            Dialect::Classical => Self::match_step_indexed(&mut cursor, raw.line)
                .or_else(|| Self::match_timestamped(&mut cursor, raw.line, false)),
            Dialect::Temporal => Self::match_timestamped(&mut cursor, raw.line, false),
            Dialect::Numerical => Self::match_timestamped(&mut cursor, raw.line, true),
            Dialect::Hybrid => Self::match_wait(&mut cursor, raw.line)
                .or_else(|| Self::match_timestamped(&mut cursor, raw.line, false)),
        };

        let mut matched = result?;
        if self.dialect == Dialect::Hybrid {
            Self::normalize_boundary(&mut matched);
        }
        Some(matched)
    }

    /// `T ":" "(" NAME PARAM* ")" ["[" ... "]"]*`
    fn match_timestamped(
        cursor: &mut LineCursor<'_>,
        line: u32,
        keyed_annotations: bool,
    ) -> Option<MatchedLine> {
        let saved = cursor.position();

        let mut attempt = || -> Option<MatchedLine> {
            let time = cursor.scan_number()?;
            if time < 0.0 || !cursor.eat(':') {
                return None;
            }
            let (name, parameters) = Self::parse_paren_group(cursor)?;

            let mut duration = None;
            let mut annotations = Vec::new();
            while cursor.peek_after_whitespace() == Some('[') {
                let group = Self::parse_bracket_group(cursor, keyed_annotations)?;
                if group.duration.is_some() {
                    duration = group.duration;
                }
                annotations.extend(group.annotations);
            }

            if !Self::line_consumed(cursor) {
                return None;
            }

            Some(MatchedLine {
                time,
                name,
                parameters,
                explicit_duration: duration,
                annotations,
                boundary: ProcessBoundary::Instant,
                is_wait: false,
                line,
            })
        };

        let result = attempt();
        if result.is_none() {
            cursor.rewind(saved);
        }
        result
    }

    /// `["Step"] N [":"|"."] "(" NAME PARAM* ")"`
    fn match_step_indexed(cursor: &mut LineCursor<'_>, line: u32) -> Option<MatchedLine> {
        let saved = cursor.position();

        let mut attempt = || -> Option<MatchedLine> {
            cursor.eat_keyword("step");
            let step = cursor.scan_integer()?;
            if !cursor.eat(':') {
                cursor.eat('.');
            }
            let (name, parameters) = Self::parse_paren_group(cursor)?;
            if !Self::line_consumed(cursor) {
                return None;
            }

            #[allow(clippy::cast_precision_loss)]
            Some(MatchedLine {
                time: step as f64,
                name,
                parameters,
                explicit_duration: None,
                annotations: Vec::new(),
                boundary: ProcessBoundary::Instant,
                is_wait: false,
                line,
            })
        };

        let result = attempt();
        if result.is_none() {
            cursor.rewind(saved);
        }
        result
    }

    /// `T ":" WAITMARK "[" FLOAT "]"` - a pure delay with no entities.
    fn match_wait(cursor: &mut LineCursor<'_>, line: u32) -> Option<MatchedLine> {
        let saved = cursor.position();

        let mut attempt = || -> Option<MatchedLine> {
            let time = cursor.scan_number()?;
            if time < 0.0 || !cursor.eat(':') || !cursor.scan_wait_marker() {
                return None;
            }
            if !cursor.eat('[') {
                return None;
            }
            let duration = cursor.scan_number()?;
            if duration <= 0.0 || !cursor.eat(']') || !Self::line_consumed(cursor) {
                return None;
            }

            Some(MatchedLine {
                time,
                name: "wait".to_string(),
                parameters: Vec::new(),
                explicit_duration: Some(duration),
                annotations: Vec::new(),
                boundary: ProcessBoundary::Instant,
                is_wait: true,
                line,
            })
        };

        let result = attempt();
        if result.is_none() {
            cursor.rewind(saved);
        }
        result
    }

    /// `"(" NAME PARAM* ")"` - parameters are identifiers or bare numbers.
    fn parse_paren_group(cursor: &mut LineCursor<'_>) -> Option<(String, Vec<String>)> {
        if !cursor.eat('(') {
            return None;
        }
        let name = cursor.scan_identifier()?.to_ascii_lowercase();

        let mut parameters = Vec::new();
        loop {
            if cursor.eat(')') {
                break;
            }
            if let Some(ident) = cursor.scan_identifier() {
                parameters.push(ident.to_ascii_lowercase());
            } else if let Some(number) = cursor.scan_number() {
                parameters.push(format_number(number));
            } else {
                return None;
            }
        }
        Some((name, parameters))
    }

    /// One `[...]` group: `["D:"] FLOAT` or a `KEY ":" SIGNED_FLOAT` list.
    fn parse_bracket_group(
        cursor: &mut LineCursor<'_>,
        keyed_annotations: bool,
    ) -> Option<BracketGroup> {
        if !cursor.eat('[') {
            return None;
        }
        let mut group = BracketGroup::default();

        loop {
            if let Some(key) = cursor.scan_identifier() {
                if !cursor.eat(':') {
                    return None;
                }
                let value = cursor.scan_number()?;
                let key = key.to_ascii_lowercase();
                if key == "d" || key == "duration" {
                    if value <= 0.0 {
                        return None;
                    }
                    group.duration = Some(value);
                } else if keyed_annotations {
                    group.annotations.push((key, value));
                } else {
                    return None;
                }
            } else if let Some(value) = cursor.scan_number() {
                if value <= 0.0 {
                    return None;
                }
                group.duration = Some(value);
            } else {
                return None;
            }

            if cursor.eat(']') {
                break;
            }
            if !(cursor.eat(',') || cursor.eat(';')) {
                return None;
            }
        }
        Some(group)
    }

    /// Hybrid `start-`/`stop-` prefixes become a boundary flag on the
    /// base action name.
    fn normalize_boundary(matched: &mut MatchedLine) {
        if let Some(base) = matched.name.strip_prefix("start-") {
            if !base.is_empty() {
                matched.name = base.to_string();
                matched.boundary = ProcessBoundary::Start;
            }
        } else if let Some(base) = matched.name.strip_prefix("stop-") {
            if !base.is_empty() {
                matched.name = base.to_string();
                matched.boundary = ProcessBoundary::Stop;
            }
        }
    }

    /// A line is consumed when only whitespace or a trailing comment
    /// remains.
    fn line_consumed(cursor: &mut LineCursor<'_>) -> bool {
        cursor.skip_whitespace();
        cursor.at_end() || cursor.peek() == Some(';')
    }
}

/// Formats a numeric parameter token without a trailing `.0` for whole
/// numbers, so `(lift hoist1 crate0 pallet 2)` keeps the token `2`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
