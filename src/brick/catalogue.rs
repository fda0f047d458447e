//! Brick catalogue: the fixed extents of every brick variant.
//!
//! Extents are (width, height, depth) in centimetres. The default table is
//! the German normal format (NF) with its standard cuts.

use serde::{Deserialize, Serialize};

use crate::core::{DVec3, Error, Result};
use super::BrickVariant;

/// Extents per brick variant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrickCatalogue {
    pub quarter: DVec3,
    pub half: DVec3,
    pub three_quarters: DVec3,
    pub whole: DVec3,
}

impl Default for BrickCatalogue {
    fn default() -> Self {
        Self::normal_format()
    }
}

impl BrickCatalogue {
    /// Normal format brick (24 x 7.1 x 11.5) and its cuts
    pub fn normal_format() -> Self {
        Self {
            whole: DVec3::new(24.0, 7.1, 11.5),
            half: DVec3::new(11.5, 7.1, 11.5),
            quarter: DVec3::new(5.25, 7.1, 11.5),
            three_quarters: DVec3::new(17.5, 7.1, 11.5),
        }
    }

    /// Extent of a variant.
    #[inline]
    pub fn extent(&self, variant: BrickVariant) -> DVec3 {
        match variant {
            BrickVariant::Quarter => self.quarter,
            BrickVariant::Half => self.half,
            BrickVariant::ThreeQuarters => self.three_quarters,
            BrickVariant::Whole => self.whole,
        }
    }

    #[inline]
    pub fn width(&self, variant: BrickVariant) -> f64 {
        self.extent(variant).x
    }

    /// Height of one course, always the whole brick's height.
    #[inline]
    pub fn course_height(&self) -> f64 {
        self.whole.y
    }

    /// Variants eligible to close a row, narrowest first.
    pub fn end_bricks(&self) -> [BrickVariant; 4] {
        BrickVariant::ALL
    }

    /// The narrowest end brick, reserved by the fitter's lookahead.
    pub fn narrowest_end_brick(&self) -> BrickVariant {
        self.end_bricks()[0]
    }

    /// Check extents are positive, widths strictly ascend and heights agree.
    pub fn validate(&self) -> Result<()> {
        for variant in BrickVariant::ALL {
            let e = self.extent(variant);
            if !(e.is_finite() && e.min_element() > 0.0) {
                return Err(Error::InvalidCatalogue(format!(
                    "{variant} extent {e} must be finite and positive"
                )));
            }
        }

        for pair in BrickVariant::ALL.windows(2) {
            if self.width(pair[0]) >= self.width(pair[1]) {
                return Err(Error::InvalidCatalogue(format!(
                    "{} width {} must be narrower than {} width {}",
                    pair[0], self.width(pair[0]), pair[1], self.width(pair[1])
                )));
            }
        }

        let height = self.course_height();
        if let Some(variant) = BrickVariant::ALL
            .into_iter()
            .find(|&v| (self.extent(v).y - height).abs() > f64::EPSILON)
        {
            return Err(Error::InvalidCatalogue(format!(
                "{variant} height {} differs from course height {height}",
                self.extent(variant).y
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_format_is_valid() {
        let catalogue = BrickCatalogue::default();
        catalogue.validate().unwrap();
        assert_eq!(catalogue.width(BrickVariant::Whole), 24.0);
        assert_eq!(catalogue.width(BrickVariant::Quarter), 5.25);
        assert_eq!(catalogue.course_height(), 7.1);
    }

    #[test]
    fn test_end_bricks_ascend_by_width() {
        let catalogue = BrickCatalogue::default();
        let widths: Vec<f64> = catalogue.end_bricks().iter().map(|&v| catalogue.width(v)).collect();
        assert!(widths.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(catalogue.narrowest_end_brick(), BrickVariant::Quarter);
    }

    #[test]
    fn test_validate_rejects_non_positive_extent() {
        let mut catalogue = BrickCatalogue::default();
        catalogue.half.z = 0.0;
        assert!(matches!(catalogue.validate(), Err(Error::InvalidCatalogue(_))));
    }

    #[test]
    fn test_validate_rejects_unordered_widths() {
        let mut catalogue = BrickCatalogue::default();
        catalogue.three_quarters.x = 30.0;
        assert!(matches!(catalogue.validate(), Err(Error::InvalidCatalogue(_))));
    }

    #[test]
    fn test_validate_rejects_mixed_heights() {
        let mut catalogue = BrickCatalogue::default();
        catalogue.quarter.y = 5.0;
        assert!(matches!(catalogue.validate(), Err(Error::InvalidCatalogue(_))));
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(BrickCatalogue::default()).unwrap();
        assert!(json.get("threeQuarters").is_some());
        assert_eq!(json["whole"][0], 24.0);
    }
}
