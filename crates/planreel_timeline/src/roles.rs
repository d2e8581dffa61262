//! Action family classification and semantic role assignment.
//!
//! The family comes from verb keywords in the action name; each family
//! then has a fixed parameter-position convention. Unknown families fall
//! back to the naming lexicon with first-matched-token positional
//! assignment. Unresolved roles stay null and are never fatal.

use planreel_foundation::{Diagnostic, DiagnosticBuffer, DiagnosticKind, Interner, NameId};
use planreel_parser::MatchedLine;

use crate::action::{ActionType, Roles};
use crate::lexicon::{EntityCategory, NamingLexicon};

/// Verb keywords per family. Checked in declaration order; `unload`
/// keywords come before `load` keywords because every "unload" contains
/// "load".
const UNLOAD_VERBS: &[&str] = &["unload", "unstack", "putdown", "put-down", "debark", "disembark"];
const LOAD_VERBS: &[&str] = &["load", "pickup", "pick-up", "stack", "board", "embark", "lift"];
const MOVE_VERBS: &[&str] = &[
    "drive", "fly", "move", "go", "walk", "travel", "sail", "navigate", "zoom", "cruise",
];
const TERMINAL_VERBS: &[&str] = &["deliver", "serve", "dropoff", "drop-off", "deposit", "handover"];
const MAINTENANCE_VERBS: &[&str] = &[
    "refuel", "recharge", "charge", "maintain", "repair", "calibrate", "service",
];

/// Extracts families and roles from matched lines.
#[derive(Clone, Debug, Default)]
pub struct RoleExtractor {
    lexicon: NamingLexicon,
}

impl RoleExtractor {
    /// Creates an extractor with the built-in lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with a custom lexicon.
    #[must_use]
    pub const fn with_lexicon(lexicon: NamingLexicon) -> Self {
        Self { lexicon }
    }

    /// Returns the lexicon this extractor classifies with.
    #[must_use]
    pub const fn lexicon(&self) -> &NamingLexicon {
        &self.lexicon
    }

    /// Classifies an action name into its family.
    #[must_use]
    pub fn classify(&self, matched: &MatchedLine) -> ActionType {
        if matched.is_wait {
            return ActionType::Wait;
        }
        let name = matched.name.as_str();

        if contains_any(name, UNLOAD_VERBS) {
            ActionType::Unload
        } else if contains_any(name, LOAD_VERBS) {
            ActionType::Load
        } else if contains_any(name, MOVE_VERBS) {
            ActionType::Move
        } else if contains_any(name, TERMINAL_VERBS) {
            ActionType::Terminal
        } else if contains_any(name, MAINTENANCE_VERBS) {
            ActionType::Maintenance
        } else {
            ActionType::Unknown
        }
    }

    /// Classifies the family and assigns roles for one matched line.
    ///
    /// Records an [`DiagnosticKind::UnresolvedRoles`] diagnostic when an
    /// unknown action yields no roles at all (a known family with short
    /// parameter lists degrades silently to partial roles).
    pub fn extract(
        &self,
        matched: &MatchedLine,
        interner: &mut Interner,
        diagnostics: &mut DiagnosticBuffer,
    ) -> (ActionType, Roles) {
        let action_type = self.classify(matched);
        let params = &matched.parameters;
        let mut roles = Roles::default();

        let mut intern = |index: usize, interner: &mut Interner| -> Option<NameId> {
            params.get(index).map(|p| interner.intern(p))
        };

        match action_type {
            // load family: (cargo, mover, location)
            ActionType::Load => {
                roles.cargo = intern(0, interner);
                roles.mover = intern(1, interner);
                roles.origin = intern(2, interner);
            }
            // unload family: (cargo, mover, location)
            ActionType::Unload => {
                roles.cargo = intern(0, interner);
                roles.mover = intern(1, interner);
                roles.destination = intern(2, interner);
            }
            // move family: (mover, origin, destination[, region])
            ActionType::Move => {
                roles.mover = intern(0, interner);
                roles.origin = intern(1, interner);
                roles.destination = intern(2, interner);
            }
            // terminal family: (cargo[, origin, destination])
            ActionType::Terminal => {
                roles.cargo = intern(0, interner);
                roles.origin = intern(1, interner);
                roles.destination = intern(2, interner);
            }
            // maintenance family: (mover[, location])
            ActionType::Maintenance => {
                roles.mover = intern(0, interner);
                roles.origin = intern(1, interner);
            }
            ActionType::Wait => {}
            ActionType::Unknown => {
                roles = self.infer_from_names(params, interner);
                if roles.is_empty() {
                    diagnostics.push(
                        Diagnostic::warning(
                            DiagnosticKind::UnresolvedRoles,
                            format!("no roles resolved for action '{}'", matched.name),
                        )
                        .at_line(matched.line),
                    );
                }
            }
        }

        (action_type, roles)
    }

    /// Naming-pattern inference for unknown families: the first token the
    /// lexicon classifies as a mover fills the mover role, the first
    /// cargo token fills cargo, and the first two location tokens fill
    /// origin and destination.
    fn infer_from_names(&self, params: &[String], interner: &mut Interner) -> Roles {
        let mut roles = Roles::default();

        for param in params {
            match self.lexicon.classify(param) {
                Some(EntityCategory::Mover) if roles.mover.is_none() => {
                    roles.mover = Some(interner.intern(param));
                }
                Some(EntityCategory::Cargo) if roles.cargo.is_none() => {
                    roles.cargo = Some(interner.intern(param));
                }
                Some(EntityCategory::Location) => {
                    if roles.origin.is_none() {
                        roles.origin = Some(interner.intern(param));
                    } else if roles.destination.is_none() {
                        roles.destination = Some(interner.intern(param));
                    }
                }
                _ => {}
            }
        }

        roles
    }
}

/// True if `name` contains any of the verb keywords. Short verbs (three
/// characters or fewer, like `go`) must match a whole `-`/`_` segment so
/// that `load-cargo` is not taken for a move.
fn contains_any(name: &str, verbs: &[&str]) -> bool {
    verbs.iter().any(|v| {
        if v.len() <= 3 {
            name.split(['-', '_']).any(|segment| segment == *v)
        } else {
            name.contains(v)
        }
    })
}
