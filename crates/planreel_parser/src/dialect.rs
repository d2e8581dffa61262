//! The four supported plan-text dialects.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A plan-text dialect.
///
/// The dialect is selected by the caller (it arrives with the file); the
/// parser never sniffs it from content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dialect {
    /// Step-indexed plans: `["Step"] INT [":"|"."] "(" NAME PARAM* ")"`.
    Classical,
    /// Timestamped plans with optional explicit durations:
    /// `FLOAT ":" "(" NAME PARAM* ")" ["[" ["D:"] FLOAT "]"]`.
    Temporal,
    /// As temporal, with optional bracketed `KEY ":" SIGNED_FLOAT`
    /// annotations (cost/resource deltas) in place of or alongside
    /// duration.
    Numerical,
    /// Timestamped plans plus wait-marker lines and `start-`/`stop-`
    /// process-boundary name prefixes.
    Hybrid,
}

impl Dialect {
    /// All dialects, in a stable order.
    pub const ALL: [Dialect; 4] = [
        Dialect::Classical,
        Dialect::Temporal,
        Dialect::Numerical,
        Dialect::Hybrid,
    ];

    /// Returns true if this dialect indexes actions by integer step
    /// rather than by timestamp.
    #[must_use]
    pub const fn is_step_indexed(self) -> bool {
        matches!(self, Self::Classical)
    }

    /// Returns the canonical lowercase name of this dialect.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classical => "classical",
            Self::Temporal => "temporal",
            Self::Numerical => "numerical",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classical" | "strips" => Ok(Self::Classical),
            "temporal" => Ok(Self::Temporal),
            "numerical" | "numeric" => Ok(Self::Numerical),
            "hybrid" | "hybrid-continuous" | "continuous" => Ok(Self::Hybrid),
            other => Err(format!("unknown dialect: {other}")),
        }
    }
}
