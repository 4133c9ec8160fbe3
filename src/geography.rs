//! Static distance table between known locations
//!
//! Lookups are directional: (A, B) and (B, A) are separate entries and a
//! missing pair resolves to the table's default distance. Symmetric lookup is
//! an explicit opt-in.

use crate::models::Location;
use crate::{CommuteError, Result};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Distance used when a pair is not in the table
pub const DEFAULT_DISTANCE_KM: f64 = 10.0;

/// Start points the front end offers
pub const KNOWN_SOURCES: [&str; 11] = [
    "Kothrud",
    "Baner",
    "Hadapsar",
    "Shivajinagar",
    "Aundh",
    "Wakad",
    "Kharadi",
    "Bibwewadi",
    "Katraj",
    "Pune Station",
    "Viman Nagar",
];

/// End points the front end offers
pub const KNOWN_DESTINATIONS: [&str; 13] = [
    "Hinjewadi",
    "Shivajinagar",
    "Magarpatta",
    "Karve Nagar",
    "Deccan",
    "Pune Station",
    "Swargate",
    "Kharadi",
    "Viman Nagar",
    "Bibwewadi",
    "Camp",
    "Yerwada",
    "Baner",
];

const PUNE_DISTANCES: [(&str, &str, f64); 20] = [
    // West Pune
    ("Kothrud", "Karve Nagar", 3.0),
    ("Kothrud", "Shivajinagar", 8.0),
    ("Kothrud", "Deccan", 6.0),
    ("Kothrud", "Hinjewadi", 15.0),
    // Central Pune
    ("Shivajinagar", "Deccan", 2.0),
    ("Shivajinagar", "Pune Station", 3.0),
    ("Shivajinagar", "Swargate", 4.0),
    // IT hubs
    ("Baner", "Hinjewadi", 7.0),
    ("Aundh", "Hinjewadi", 9.0),
    ("Wakad", "Hinjewadi", 5.0),
    // East Pune
    ("Hadapsar", "Magarpatta", 4.0),
    ("Hadapsar", "Kharadi", 6.0),
    ("Kharadi", "Viman Nagar", 5.0),
    // South Pune
    ("Katraj", "Swargate", 6.0),
    ("Katraj", "Bibwewadi", 4.0),
    ("Bibwewadi", "Swargate", 3.0),
    // Railway and bus areas
    ("Pune Station", "Swargate", 4.0),
    ("Pune Station", "Camp", 2.0),
    // Short hops
    ("Aundh", "Baner", 3.0),
    ("Viman Nagar", "Yerwada", 4.0),
];

/// Distances in kilometres between ordered location pairs
#[derive(Debug, Clone)]
pub struct DistanceTable {
    entries: HashMap<(Location, Location), f64>,
    default_km: f64,
    symmetric: bool,
}

impl DistanceTable {
    /// Build a table from explicit entries.
    ///
    /// Every distance must be positive and finite, and so must the default.
    pub fn from_entries<I, S>(entries: I, default_km: f64) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: Into<Location>,
    {
        if !(default_km.is_finite() && default_km > 0.0) {
            return Err(CommuteError::invalid_input(format!(
                "Default distance must be positive, got {default_km}"
            )));
        }

        let mut table = HashMap::new();
        for (source, destination, km) in entries {
            let (source, destination) = (source.into(), destination.into());
            if !(km.is_finite() && km > 0.0) {
                return Err(CommuteError::invalid_input(format!(
                    "Distance from {source} to {destination} must be positive, got {km}"
                )));
            }
            table.insert((source, destination), km);
        }

        Ok(Self {
            entries: table,
            default_km,
            symmetric: false,
        })
    }

    /// Built-in table of Pune commutes
    #[must_use]
    pub fn pune() -> Self {
        Self {
            entries: PUNE_DISTANCES
                .iter()
                .map(|&(s, d, km)| ((Location::new(s), Location::new(d)), km))
                .collect(),
            default_km: DEFAULT_DISTANCE_KM,
            symmetric: false,
        }
    }

    /// Let (B, A) fall back to the (A, B) entry when it has none of its own
    #[must_use]
    pub fn with_symmetric(mut self, symmetric: bool) -> Self {
        self.symmetric = symmetric;
        self
    }

    /// Replace the distance used for unknown pairs
    pub fn with_default_km(mut self, default_km: f64) -> Result<Self> {
        if !(default_km.is_finite() && default_km > 0.0) {
            return Err(CommuteError::invalid_input(format!(
                "Default distance must be positive, got {default_km}"
            )));
        }
        self.default_km = default_km;
        Ok(self)
    }

    /// Distance in km from `source` to `destination`, or the default when the
    /// pair is not in the table
    #[must_use]
    pub fn get_distance(&self, source: &Location, destination: &Location) -> f64 {
        let key = (source.clone(), destination.clone());
        if let Some(&km) = self.entries.get(&key) {
            return km;
        }

        if self.symmetric {
            let reverse = (key.1, key.0);
            if let Some(&km) = self.entries.get(&reverse) {
                debug!("Using reverse entry for {} -> {}", source, destination);
                return km;
            }
        }

        debug!(
            "No distance for {} -> {}, using default {} km",
            source, destination, self.default_km
        );
        self.default_km
    }

    #[must_use]
    pub fn default_km(&self) -> f64 {
        self.default_km
    }

    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a place appears anywhere in the table or the offered lists
    #[must_use]
    pub fn is_known(&self, location: &Location) -> bool {
        KNOWN_SOURCES.contains(&location.name())
            || KNOWN_DESTINATIONS.contains(&location.name())
            || self
                .entries
                .keys()
                .any(|(s, d)| s == location || d == location)
    }

    /// Offered start points plus every source in the table, sorted
    #[must_use]
    pub fn sources(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        for name in KNOWN_SOURCES {
            names.insert(name);
        }
        for (source, _) in self.entries.keys() {
            names.insert(source.name());
        }
        names
    }

    /// Offered end points plus every destination in the table, sorted
    #[must_use]
    pub fn destinations(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        for name in KNOWN_DESTINATIONS {
            names.insert(name);
        }
        for (_, destination) in self.entries.keys() {
            names.insert(destination.name());
        }
        names
    }
}

impl Default for DistanceTable {
    fn default() -> Self {
        Self::pune()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn loc(name: &str) -> Location {
        Location::new(name)
    }

    #[test]
    fn test_every_known_pair_returns_stored_distance() {
        let table = DistanceTable::pune();
        assert_eq!(table.len(), PUNE_DISTANCES.len());
        for (source, destination, km) in PUNE_DISTANCES {
            assert_eq!(table.get_distance(&loc(source), &loc(destination)), km);
        }
    }

    #[rstest]
    #[case("X", "Y")]
    #[case("Kothrud", "Camp")]
    #[case("Karve Nagar", "Kothrud")]
    fn test_unknown_pair_returns_default(#[case] source: &str, #[case] destination: &str) {
        let table = DistanceTable::pune();
        assert_eq!(
            table.get_distance(&loc(source), &loc(destination)),
            DEFAULT_DISTANCE_KM
        );
    }

    #[test]
    fn test_symmetric_lookup_uses_reverse_entry() {
        let table = DistanceTable::pune().with_symmetric(true);
        assert_eq!(table.get_distance(&loc("Karve Nagar"), &loc("Kothrud")), 3.0);
        assert_eq!(table.get_distance(&loc("X"), &loc("Y")), DEFAULT_DISTANCE_KM);
    }

    #[test]
    fn test_symmetric_lookup_prefers_explicit_entry() {
        let table = DistanceTable::from_entries([("A", "B", 2.0), ("B", "A", 5.0)], 10.0)
            .unwrap()
            .with_symmetric(true);
        assert_eq!(table.get_distance(&loc("B"), &loc("A")), 5.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn test_non_positive_distances_are_rejected(#[case] km: f64) {
        let result = DistanceTable::from_entries([("A", "B", km)], 10.0);
        assert!(matches!(result, Err(CommuteError::InvalidInput { .. })));
    }

    #[test]
    fn test_custom_default_distance() {
        let table = DistanceTable::pune().with_default_km(12.5).unwrap();
        assert_eq!(table.get_distance(&loc("X"), &loc("Y")), 12.5);
        assert!(DistanceTable::pune().with_default_km(0.0).is_err());
    }

    #[test]
    fn test_known_locations() {
        let table = DistanceTable::pune();
        assert!(table.is_known(&loc("Yerwada")));
        assert!(table.is_known(&loc("Magarpatta")));
        assert!(!table.is_known(&loc("Mumbai")));
        assert!(table.destinations().contains("Camp"));
        assert!(table.sources().contains("Katraj"));
        assert!(!table.sources().contains("Camp"));
    }
}
