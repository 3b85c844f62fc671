//! Place model for the curated Siem Reap catalog

use serde::{Deserialize, Serialize};

/// Display language for bilingual catalog text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Khmer
    Km,
}

/// Category of a point of interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceCategory {
    Temple,
    Nature,
    Dining,
    Shopping,
    Museum,
    Culture,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 6] = [
        PlaceCategory::Temple,
        PlaceCategory::Nature,
        PlaceCategory::Dining,
        PlaceCategory::Shopping,
        PlaceCategory::Museum,
        PlaceCategory::Culture,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceCategory::Temple => "Temple",
            PlaceCategory::Nature => "Nature",
            PlaceCategory::Dining => "Dining",
            PlaceCategory::Shopping => "Shopping",
            PlaceCategory::Museum => "Museum",
            PlaceCategory::Culture => "Culture",
        }
    }

    /// Parse a category name, case-insensitively
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
    }
}

/// Mood tag shown on place cards and used for mood filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Epic,
    Adventurous,
    Peaceful,
    #[serde(rename = "Local Life")]
    LocalLife,
    #[serde(rename = "Cultural Night")]
    CulturalNight,
}

impl Mood {
    #[must_use]
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Mood::Epic, Language::En) => "Epic",
            (Mood::Epic, Language::Km) => "អស្ចារ្យ",
            (Mood::Adventurous, Language::En) => "Adventurous",
            (Mood::Adventurous, Language::Km) => "ផ្សងព្រេង",
            (Mood::Peaceful, Language::En) => "Peaceful",
            (Mood::Peaceful, Language::Km) => "ស្ងប់ស្ងាត់",
            (Mood::LocalLife, Language::En) => "Local Life",
            (Mood::LocalLife, Language::Km) => "ជីវិតក្នុងតំបន់",
            (Mood::CulturalNight, Language::En) => "Cultural Night",
            (Mood::CulturalNight, Language::Km) => "វប្បធម៌ពេលរាត្រី",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Mood::Epic => "🌅",
            Mood::Adventurous => "🌿",
            Mood::Peaceful => "🪷",
            Mood::LocalLife => "🛍️",
            Mood::CulturalNight => "🎭",
        }
    }

    /// Mood assumed for a place that carries no explicit mood tag
    #[must_use]
    pub fn fallback_for(category: PlaceCategory) -> Self {
        match category {
            PlaceCategory::Temple => Mood::Epic,
            PlaceCategory::Nature | PlaceCategory::Museum => Mood::Peaceful,
            PlaceCategory::Dining | PlaceCategory::Shopping => Mood::LocalLife,
            PlaceCategory::Culture => Mood::CulturalNight,
        }
    }
}

const DEFAULT_PHOTO_TIP_EN: &str =
    "Try front-facing light with a slight side angle for a cleaner shot.";
const DEFAULT_PHOTO_TIP_KM: &str = "សាកល្បងមុំពន្លឺខាងមុខដើម្បីបានរូបភាពស្រស់ស្អាត។";

/// A point of interest from the curated catalog.
///
/// Read-only input to the planner. The `duration` and `best_time` fields
/// are free text loosely matching known patterns ("1-2 hours", "5:00 AM");
/// the planner parses them leniently.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Place {
    /// Catalog identifier
    pub id: u32,
    /// English name
    pub name: String,
    /// Khmer name
    pub name_km: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    pub category: PlaceCategory,
    pub description: String,
    pub description_km: String,
    /// Free-text visit duration, e.g. "1.5 hours"
    pub duration: String,
    /// Free-text best time of day to visit, e.g. "5:30 AM"
    pub best_time: String,
    pub budget: String,
    pub highlight: String,
    pub highlight_km: String,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub photo_tip: Option<String>,
    #[serde(default)]
    pub photo_tip_km: Option<String>,
}

impl Place {
    #[must_use]
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::En => &self.name,
            Language::Km => &self.name_km,
        }
    }

    #[must_use]
    pub fn description(&self, language: Language) -> &str {
        match language {
            Language::En => &self.description,
            Language::Km => &self.description_km,
        }
    }

    #[must_use]
    pub fn highlight(&self, language: Language) -> &str {
        match language {
            Language::En => &self.highlight,
            Language::Km => &self.highlight_km,
        }
    }

    /// Explicit mood tag, or the category fallback
    #[must_use]
    pub fn mood(&self) -> Mood {
        self.mood.unwrap_or_else(|| Mood::fallback_for(self.category))
    }

    /// Photography tip for this place, falling back to generic advice
    #[must_use]
    pub fn photo_tip(&self, language: Language) -> &str {
        let tip = match language {
            Language::En => self.photo_tip.as_deref(),
            Language::Km => self.photo_tip_km.as_deref(),
        };
        tip.unwrap_or(match language {
            Language::En => DEFAULT_PHOTO_TIP_EN,
            Language::Km => DEFAULT_PHOTO_TIP_KM,
        })
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180]
    #[must_use]
    pub fn has_valid_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Format coordinates as a display string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
impl Place {
    /// Minimal place for tests; schedule text defaults to parseable values.
    pub fn sample(
        id: u32,
        name: &str,
        category: PlaceCategory,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            name_km: name.to_string(),
            latitude,
            longitude,
            category,
            description: String::new(),
            description_km: String::new(),
            duration: "1 hour".to_string(),
            best_time: "8:00 AM".to_string(),
            budget: "Free".to_string(),
            highlight: String::new(),
            highlight_km: String::new(),
            mood: None,
            rating: None,
            photo_tip: None,
            photo_tip_km: None,
        }
    }
}
