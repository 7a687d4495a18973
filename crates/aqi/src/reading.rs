//! AQI reading and the EPA category scale.

use serde::Serialize;

/// An air-quality snapshot for the reference location at query time.
#[derive(Debug, Clone, Serialize)]
pub struct AqiReading {
    pub index: u32,
    pub category: AqiCategory,
}

impl AqiReading {
    #[must_use]
    pub fn from_index(index: u32) -> Self {
        Self { index, category: AqiCategory::from_index(index) }
    }
}

/// EPA AQI category bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthyForSensitiveGroups,
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        match index {
            0..=50 => Self::Good,
            51..=100 => Self::Moderate,
            101..=150 => Self::UnhealthyForSensitiveGroups,
            151..=200 => Self::Unhealthy,
            201..=300 => Self::VeryUnhealthy,
            _ => Self::Hazardous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_boundaries_follow_epa_bands() {
        assert_eq!(AqiCategory::from_index(0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_index(50), AqiCategory::Good);
        assert_eq!(AqiCategory::from_index(51), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_index(100), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_index(101), AqiCategory::UnhealthyForSensitiveGroups);
        assert_eq!(AqiCategory::from_index(150), AqiCategory::UnhealthyForSensitiveGroups);
        assert_eq!(AqiCategory::from_index(151), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_index(200), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_index(201), AqiCategory::VeryUnhealthy);
        assert_eq!(AqiCategory::from_index(300), AqiCategory::VeryUnhealthy);
        assert_eq!(AqiCategory::from_index(301), AqiCategory::Hazardous);
    }

    #[test]
    fn multi_word_categories_serialize_with_spaces() {
        let json = serde_json::to_string(&AqiCategory::UnhealthyForSensitiveGroups).unwrap();
        assert_eq!(json, "\"Unhealthy for Sensitive Groups\"");
        let json = serde_json::to_string(&AqiCategory::VeryUnhealthy).unwrap();
        assert_eq!(json, "\"Very Unhealthy\"");
    }
}
