//! Restaurant search constants and helpers.
//!
//! This module lives in `core` (zero internal deps) so it can be used by the
//! HTTP layer, the provider clients and the repository tests alike.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Lookup parameters
// ---------------------------------------------------------------------------

/// Radius of the nearby-restaurant search, in metres.
pub const SEARCH_RADIUS_METERS: u32 = 5_000;

/// Place category requested from the places provider.
pub const SEARCH_CATEGORY: &str = "restaurant";

/// User-visible message shown when the form is submitted without a city.
pub const MISSING_CITY_MESSAGE: &str = "Please enter a city.";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A geocoded latitude/longitude pair.
///
/// Lookups that find nothing return `Option<Coordinate>::None`, so a pair is
/// always either fully present or absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Build a coordinate only when both components are present.
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        match (lat, lng) {
            (Some(lat), Some(lng)) => Some(Self { lat, lng }),
            _ => None,
        }
    }

    /// Format as the `lat,lng` string expected by location query parameters.
    pub fn as_query_value(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

/// How many times a place name has been searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub city: String,
    pub count: i64,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a submitted place name.
///
/// Only missing and empty names are rejected. Anything else, whitespace
/// included, is returned verbatim so the logged value matches the input.
pub fn validate_place_name(city: Option<&str>) -> Result<&str, CoreError> {
    match city {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(CoreError::Validation(MISSING_CITY_MESSAGE.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Count occurrences of each distinct place name.
///
/// Entries are ordered by count descending, then by name ascending.
pub fn count_by_place<I, S>(names: I) -> Vec<FrequencyEntry>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts: HashMap<String, i64> = HashMap::new();
    for name in names {
        *counts.entry(name.into()).or_default() += 1;
    }

    let mut entries: Vec<FrequencyEntry> = counts
        .into_iter()
        .map(|(city, count)| FrequencyEntry { city, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.city.cmp(&b.city)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_place_name -------------------------------------------------

    #[test]
    fn accepts_non_empty_name_verbatim() {
        assert_eq!(validate_place_name(Some(" Paris ")).unwrap(), " Paris ");
    }

    #[test]
    fn rejects_missing_name() {
        let err = validate_place_name(None).unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg == MISSING_CITY_MESSAGE));
    }

    #[test]
    fn rejects_empty_name() {
        assert!(validate_place_name(Some("")).is_err());
    }

    #[test]
    fn accepts_whitespace_only_name() {
        assert_eq!(validate_place_name(Some("   ")).unwrap(), "   ");
    }

    // -- Coordinate ----------------------------------------------------------

    #[test]
    fn coordinate_requires_both_parts() {
        assert_eq!(
            Coordinate::from_parts(Some(48.85), Some(2.35)),
            Some(Coordinate { lat: 48.85, lng: 2.35 })
        );
        assert_eq!(Coordinate::from_parts(Some(48.85), None), None);
        assert_eq!(Coordinate::from_parts(None, Some(2.35)), None);
        assert_eq!(Coordinate::from_parts(None, None), None);
    }

    #[test]
    fn coordinate_query_value() {
        let c = Coordinate { lat: 52.52, lng: 13.405 };
        assert_eq!(c.as_query_value(), "52.52,13.405");
    }

    // -- count_by_place ------------------------------------------------------

    #[test]
    fn counts_duplicates() {
        let entries = count_by_place(["Paris", "Paris", "Berlin"]);
        assert_eq!(
            entries,
            vec![
                FrequencyEntry { city: "Paris".into(), count: 2 },
                FrequencyEntry { city: "Berlin".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn ties_are_ordered_by_name() {
        let entries = count_by_place(vec!["Rome".to_string(), "Oslo".to_string()]);
        let names: Vec<&str> = entries.iter().map(|e| e.city.as_str()).collect();
        assert_eq!(names, ["Oslo", "Rome"]);
    }

    #[test]
    fn names_are_case_sensitive() {
        let entries = count_by_place(["paris", "Paris"]);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.count == 1));
    }

    #[test]
    fn empty_input_yields_no_entries() {
        assert!(count_by_place(Vec::<String>::new()).is_empty());
    }
}
