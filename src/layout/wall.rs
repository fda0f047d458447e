//! Wall layout: stacks rows into courses separated by full-width bed joints.
//!
//! The course count is sized with the nominal joint thickness; the emitted
//! bed joints are then stretched so courses and joints fill the height
//! exactly, the same residual policy rows use for head joints.

use rayon::prelude::*;

use crate::bond::PatternRule;
use crate::core::{DVec2, DVec3, Error, Result};
use super::{Element, LayoutResult, WallLayouter};

/// Options for a single wall layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallOptions {
    /// Course index seen by the bond for this wall's first course.
    pub vertical_offset: u32,
    /// Emit a bed joint below the first course.
    pub start_with_mortar_course: bool,
    /// Emit a bed joint above the last course.
    pub end_with_mortar_course: bool,
}

impl WallOptions {
    /// Continue bond indexing at `offset`.
    pub fn with_offset(offset: u32) -> Self {
        Self { vertical_offset: offset, ..Default::default() }
    }

    /// Bed joints on both the bottom and top edge.
    pub fn mortar_faced(mut self) -> Self {
        self.start_with_mortar_course = true;
        self.end_with_mortar_course = true;
        self
    }

    /// Number of edge bed joints requested (0-2).
    pub fn extra_mortar_courses(&self) -> u32 {
        self.start_with_mortar_course as u32 + self.end_with_mortar_course as u32
    }
}

/// Vertical sizing of a wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CourseFit {
    pub courses: u32,
    /// Actual bed joint height after absorbing the vertical excess.
    pub mortar_height: f64,
}

impl WallLayouter {
    /// Compute how many courses fit in `height` and the bed joint height.
    ///
    /// Fails with [`Error::DegenerateCourseCount`] when no course fits or
    /// there would be no joint to absorb the excess height.
    pub fn fit_courses(&self, height: f64, options: WallOptions) -> Result<CourseFit> {
        let height = Error::check_dimension("wall height", height)?;
        let mortar = self.config.nominal_mortar;
        let course_height = self.config.catalogue.course_height();
        let extra = options.extra_mortar_courses();

        let courses = ((height - extra as f64 * mortar) / (course_height + mortar)).floor().max(0.0) as u32;
        let joints = (courses + extra).saturating_sub(1);

        if courses == 0 || joints == 0 {
            return Err(Error::DegenerateCourseCount { height, courses, extra_mortar_courses: extra });
        }

        let mortar_height = (height - course_height * courses as f64) / joints as f64;
        Ok(CourseFit { courses, mortar_height })
    }

    /// Lay out a `size.x` by `size.y` wall with its bottom-left corner at the origin.
    pub fn layout_wall<R>(&self, size: DVec2, rule: &R, options: WallOptions) -> Result<LayoutResult>
    where
        R: PatternRule + ?Sized,
    {
        let width = Error::check_dimension("wall width", size.x)?;
        let CourseFit { courses, mortar_height } = self.fit_courses(size.y, options)?;

        let catalogue = &self.config.catalogue;
        let course_height = catalogue.course_height();
        let bed_joint = DVec3::new(
            width,
            mortar_height,
            catalogue.whole.z * self.config.course_mortar_depth_ratio,
        );

        let base = if options.start_with_mortar_course { mortar_height } else { 0.0 };
        let course_y = |course: u32| base + course as f64 * (course_height + mortar_height);
        let lay_course = |course: u32| {
            let bond_course = course + options.vertical_offset;
            self.layout_row(width, course_y(course), |x| rule.brick_at(x, bond_course))
        };

        let parallel = self.config.parallel_rows && rule.is_deterministic();
        if self.config.parallel_rows && !parallel {
            log::warn!("Bond is nondeterministic; laying out courses sequentially");
        }

        let rows: Vec<Vec<Element>> = if parallel {
            (0..courses).into_par_iter().map(lay_course).collect::<Result<_>>()?
        } else {
            (0..courses).map(lay_course).collect::<Result<_>>()?
        };

        let row_len = rows.first().map_or(0, Vec::len);
        let mut elements = Vec::with_capacity(courses as usize * (row_len + 1) + 1);

        if options.start_with_mortar_course {
            elements.push(Element::mortar(bed_joint, DVec3::ZERO));
        }

        for (course, row) in (0..courses).zip(rows) {
            elements.extend(row);
            if course + 1 < courses || options.end_with_mortar_course {
                let y = course_y(course) + course_height;
                elements.push(Element::mortar(bed_joint, DVec3::new(0.0, y, 0.0)));
            }
        }

        log::debug!(
            "Laid out {:.2}x{:.2} wall: {} courses from bond course {}, bed joint {:.4}, {} elements",
            width, size.y, courses, options.vertical_offset, mortar_height, elements.len()
        );

        Ok(LayoutResult { courses, elements })
    }

    /// Lay out the wall spanning `from` to `to` and place it there.
    pub fn layout_wall_region<R>(&self, from: DVec2, to: DVec2, rule: &R, options: WallOptions) -> Result<LayoutResult>
    where
        R: PatternRule + ?Sized,
    {
        let local = self.layout_wall(to - from, rule, options)?;
        Ok(local.translated(from))
    }
}
