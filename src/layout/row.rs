//! Row fitting and row layout.
//!
//! Fitting is a single greedy pass: a brick is committed only while there is
//! still room for it, one nominal joint and the narrowest end brick. When
//! that fails, the widest end brick that fits closes the row. The head
//! joints are then widened equally so bricks and joints fill the width
//! exactly.

use crate::brick::BrickVariant;
use crate::core::{DVec3, Error, Result};
use super::{Element, WallLayouter};

impl WallLayouter {
    /// Fit a sequence of bricks into `width`, querying `rule` by position.
    ///
    /// Fails with [`Error::UnfittableRemainder`] if not even the narrowest
    /// end brick fits the space left for the closer.
    pub fn fit_row(&self, width: f64, rule: impl Fn(u32) -> BrickVariant) -> Result<Vec<BrickVariant>> {
        let width = Error::check_dimension("row width", width)?;
        let catalogue = &self.config.catalogue;
        let mortar = self.config.nominal_mortar;
        let reserve = mortar + catalogue.width(catalogue.narrowest_end_brick());

        let mut used = 0.0;
        let mut bricks = Vec::new();

        loop {
            let next = rule(bricks.len() as u32);
            let next_width = catalogue.width(next);

            // Room for this brick and at least the shortest closer after it
            if used + next_width + reserve <= width {
                bricks.push(next);
                used += next_width + mortar;
                continue;
            }

            let closer = catalogue
                .end_bricks()
                .into_iter()
                .rev()
                .find(|&v| used + catalogue.width(v) <= width);

            match closer {
                Some(closer) => {
                    bricks.push(closer);
                    break;
                }
                None => {
                    return Err(Error::UnfittableRemainder { width, remainder: width - used });
                }
            }
        }

        log::trace!("Fitted {} bricks into row width {}", bricks.len(), width);
        Ok(bricks)
    }

    /// Lay out one row at height `y`: bricks with equal head joints between them.
    ///
    /// Fails with [`Error::DegenerateRow`] if only one brick fits, since the
    /// joint width would be undefined.
    pub fn layout_row(&self, width: f64, y: f64, rule: impl Fn(u32) -> BrickVariant) -> Result<Vec<Element>> {
        let bricks = self.fit_row(width, rule)?;
        if bricks.len() < 2 {
            return Err(Error::DegenerateRow { width, bricks: bricks.len() });
        }

        let catalogue = &self.config.catalogue;
        let brick_width: f64 = bricks.iter().map(|&v| catalogue.width(v)).sum();
        let mortar_width = (width - brick_width) / (bricks.len() - 1) as f64;

        let half = catalogue.extent(BrickVariant::Half);
        let mortar_size = DVec3::new(mortar_width, half.y, half.z * self.config.row_mortar_depth_ratio);

        let mut elements = Vec::with_capacity(bricks.len() * 2 - 1);
        let mut x = 0.0;
        for (i, &variant) in bricks.iter().enumerate() {
            if i > 0 {
                elements.push(Element::mortar(mortar_size, DVec3::new(x, y, 0.0)));
                x += mortar_width;
            }
            let size = catalogue.extent(variant);
            elements.push(Element::brick(size, DVec3::new(x, y, 0.0)));
            x += size.x;
        }

        Ok(elements)
    }
}
