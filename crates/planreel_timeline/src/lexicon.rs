//! Naming-pattern dictionaries for entity classification.
//!
//! Plans carry no schema, so entity kinds are inferred from identifier
//! naming conventions alone: `tru1` is a mover, `obj3` is cargo, `pos2`
//! is a location. Classification is a pure function of the identifier
//! string, which is what makes registry categorization idempotent.
//!
//! This is a best-effort heuristic. When a domain's vocabulary matches
//! none of the patterns, classification returns `None` and the caller
//! degrades gracefully (null roles, no-op replay).

/// What kind of entity an identifier names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    /// Capable of spatial relocation (vehicle, robot, elevator car).
    Mover,
    /// Relocated only by being carried (package, passenger).
    Cargo,
    /// A place entities can be at.
    Location,
}

/// Sub-tag for locations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationKind {
    /// An ordinary waypoint.
    #[default]
    Waypoint,
    /// A transit hub (airport, station, depot).
    TransitHub,
}

/// Prefix/substring dictionaries distinguishing movers, cargo, and
/// locations.
#[derive(Clone, Debug)]
pub struct NamingLexicon {
    movers: Vec<&'static str>,
    cargo: Vec<&'static str>,
    locations: Vec<&'static str>,
    hubs: Vec<&'static str>,
}

impl NamingLexicon {
    /// The built-in dictionaries, covering the common benchmark-domain
    /// vocabularies (logistics, rovers, elevators, depots, zenotravel).
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            movers: vec![
                "truck", "tru", "plane", "airplane", "apn", "jet", "robot", "rover", "drone",
                "hoist", "crane", "agent", "vehicle", "veh", "car", "bus", "ship", "boat",
                "uav", "elevator", "forklift",
            ],
            cargo: vec![
                "obj", "pkg", "package", "parcel", "crate", "box", "cargo", "container",
                "goods", "ball", "block", "passenger", "person", "sample", "rock", "soil",
                "letter", "pallet",
            ],
            locations: vec![
                "pos", "loc", "city", "depot", "room", "waypoint", "wp", "airport", "apt",
                "station", "area", "dock", "warehouse", "point", "place", "floor", "site",
                "base", "node", "junction", "gate", "district", "zone",
            ],
            hubs: vec!["airport", "apt", "station", "depot", "terminal", "hub", "dock", "gate"],
        }
    }

    /// Classifies an identifier, or `None` if no pattern matches.
    ///
    /// Prefix matches are tried across all three dictionaries before
    /// substring matches, so `truck-depot` stays a mover even though it
    /// contains a location pattern. Within a tier the order is movers,
    /// cargo, locations.
    #[must_use]
    pub fn classify(&self, identifier: &str) -> Option<EntityCategory> {
        let folded = identifier.to_ascii_lowercase();

        for (patterns, category) in self.tiers() {
            if patterns.iter().any(|p| folded.starts_with(p)) {
                return Some(category);
            }
        }
        for (patterns, category) in self.tiers() {
            if patterns.iter().any(|p| folded.contains(p)) {
                return Some(category);
            }
        }
        None
    }

    /// Sub-tags a location identifier.
    #[must_use]
    pub fn location_kind(&self, identifier: &str) -> LocationKind {
        let folded = identifier.to_ascii_lowercase();
        if self.hubs.iter().any(|p| folded.starts_with(p) || folded.contains(p)) {
            LocationKind::TransitHub
        } else {
            LocationKind::Waypoint
        }
    }

    fn tiers(&self) -> [(&[&'static str], EntityCategory); 3] {
        [
            (self.movers.as_slice(), EntityCategory::Mover),
            (self.cargo.as_slice(), EntityCategory::Cargo),
            (self.locations.as_slice(), EntityCategory::Location),
        ]
    }
}

impl Default for NamingLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
