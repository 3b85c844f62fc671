//! Curated Siem Reap place catalog
//!
//! The catalog ships embedded in the binary; there is no external data
//! dependency and no load-time I/O beyond the first access.

use std::sync::LazyLock;

use crate::models::{Place, PlaceCategory};

static CATALOG: LazyLock<Vec<Place>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("places.json")).expect("embedded place catalog is valid")
});

/// Every place in the catalog, in curated order.
#[must_use]
pub fn all() -> &'static [Place] {
    &CATALOG
}

/// Look up a place by catalog id.
#[must_use]
pub fn find(id: u32) -> Option<&'static Place> {
    CATALOG.iter().find(|place| place.id == id)
}

/// Places of one category, in catalog order.
#[must_use]
pub fn by_category(category: PlaceCategory) -> Vec<&'static Place> {
    CATALOG
        .iter()
        .filter(|place| place.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        assert_eq!(all().len(), 20);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<u32> = all().iter().map(|place| place.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_all_coordinates_are_valid() {
        for place in all() {
            assert!(place.has_valid_coordinates(), "{}", place.name);
            // Everything in the catalog sits in Siem Reap province
            assert!(place.latitude > 13.0 && place.latitude < 14.0, "{}", place.name);
            assert!(place.longitude > 103.0 && place.longitude < 105.0, "{}", place.name);
        }
    }

    #[test]
    fn test_schedule_text_parses_cleanly() {
        // The curated data should never hit the planner's fallbacks
        assert!(crate::planner::validate_schedule_text(all()).is_ok());
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find(1).unwrap().name, "Angkor Wat");
        assert!(find(999).is_none());
    }

    #[test]
    fn test_by_category() {
        let temples = by_category(PlaceCategory::Temple);
        assert!(temples.len() >= 5);
        assert!(temples.iter().all(|p| p.category == PlaceCategory::Temple));
        assert!(temples.iter().any(|p| p.name == "Angkor Wat"));
    }

    #[test]
    fn test_khmer_names_present() {
        for place in all() {
            assert!(!place.name_km.is_empty(), "{}", place.name);
        }
    }
}
