//! Brick variants: the closed set of brick cuts a bond can place.

use serde::{Deserialize, Serialize};

/// A brick cut, named by its share of a whole stretcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrickVariant {
    Quarter,
    Half,
    ThreeQuarters,
    Whole,
}

impl BrickVariant {
    /// All variants, narrowest first.
    pub const ALL: [BrickVariant; 4] = [
        BrickVariant::Quarter,
        BrickVariant::Half,
        BrickVariant::ThreeQuarters,
        BrickVariant::Whole,
    ];

    /// Get variant name as string.
    pub fn name(self) -> &'static str {
        match self {
            BrickVariant::Quarter => "quarter",
            BrickVariant::Half => "half",
            BrickVariant::ThreeQuarters => "threeQuarters",
            BrickVariant::Whole => "whole",
        }
    }

    /// Parse variant from string.
    pub fn from_name(name: &str) -> Option<BrickVariant> {
        match name.to_lowercase().replace(['_', '-'], "").as_str() {
            "quarter" => Some(BrickVariant::Quarter),
            "half" | "header" => Some(BrickVariant::Half),
            "threequarters" | "threequarter" => Some(BrickVariant::ThreeQuarters),
            "whole" | "stretcher" => Some(BrickVariant::Whole),
            _ => None,
        }
    }
}

impl std::fmt::Display for BrickVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_ascending() {
        let mut sorted = BrickVariant::ALL;
        sorted.sort();
        assert_eq!(sorted, BrickVariant::ALL);
    }

    #[test]
    fn test_name_roundtrip() {
        for variant in BrickVariant::ALL {
            assert_eq!(BrickVariant::from_name(variant.name()), Some(variant));
        }
        assert_eq!(BrickVariant::from_name("three_quarters"), Some(BrickVariant::ThreeQuarters));
        assert_eq!(BrickVariant::from_name("brick"), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&BrickVariant::ThreeQuarters).unwrap();
        assert_eq!(json, "\"threeQuarters\"");
        let parsed: BrickVariant = serde_json::from_str("\"quarter\"").unwrap();
        assert_eq!(parsed, BrickVariant::Quarter);
    }
}
