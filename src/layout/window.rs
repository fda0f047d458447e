//! Walls with a window opening.
//!
//! The wall is split into four independently laid out regions: a full-width
//! band below the window, two side columns beside it and a full-width band
//! above it. Bond continuity across the split comes only from the course
//! offset each region passes to the bond: both side columns start at the
//! bottom band's course count, and the top band continues after them.

use crate::bond::PatternRule;
use crate::core::{DVec2, Error, Result};
use crate::math::Rect;
use super::{Element, LayoutResult, WallLayouter, WallOptions};

/// The four laid out regions of a wall with a window.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WindowLayout {
    pub bottom: LayoutResult,
    pub left: LayoutResult,
    pub right: LayoutResult,
    pub top: LayoutResult,
    /// Bond course index of the first course beside the window.
    pub side_offset: u32,
    /// Bond course index of the first course above the window.
    pub top_offset: u32,
}

impl WindowLayout {
    /// Courses beside the window (zero if the window spans the full width).
    pub fn side_courses(&self) -> u32 {
        self.left.courses.max(self.right.courses)
    }

    /// All elements in region order: bottom, left, right, top.
    pub fn into_elements(self) -> Vec<Element> {
        let mut elements = self.bottom.elements;
        elements.extend(self.left.elements);
        elements.extend(self.right.elements);
        elements.extend(self.top.elements);
        elements
    }
}

impl WallLayouter {
    /// Lay out a wall of `wall_size` with a window at `window_pos` of `window_size`.
    pub fn layout_wall_with_window<R>(
        &self,
        wall_size: DVec2,
        window_pos: DVec2,
        window_size: DVec2,
        rule: &R,
    ) -> Result<Vec<Element>>
    where
        R: PatternRule + ?Sized,
    {
        Ok(self.compose_wall_with_window(wall_size, window_pos, window_size, rule)?.into_elements())
    }

    /// Like [`Self::layout_wall_with_window`], keeping the regions apart.
    ///
    /// A region with no area (window flush with a wall edge) yields no
    /// elements. Any other region failure aborts the whole wall.
    pub fn compose_wall_with_window<R>(
        &self,
        wall_size: DVec2,
        window_pos: DVec2,
        window_size: DVec2,
        rule: &R,
    ) -> Result<WindowLayout>
    where
        R: PatternRule + ?Sized,
    {
        Error::check_dimension("wall width", wall_size.x)?;
        Error::check_dimension("wall height", wall_size.y)?;
        Error::check_dimension("window width", window_size.x)?;
        Error::check_dimension("window height", window_size.y)?;

        let wall = Rect::from_size(wall_size);
        let window = Rect::from_pos_size(window_pos, window_size);
        if !window.min.is_finite() || !wall.contains_rect(&window) {
            return Err(Error::InvalidWindow(format!(
                "window {:?}..{:?} lies outside the {}x{} wall",
                window.min, window.max, wall_size.x, wall_size.y
            )));
        }

        let bottom = self.layout_region(
            Rect::new(DVec2::ZERO, DVec2::new(wall.max.x, window.min.y)),
            rule,
            WallOptions::default(),
        )?;

        // Reveals are mortar-faced top and bottom
        let side_offset = bottom.courses;
        let side_options = WallOptions::with_offset(side_offset).mortar_faced();
        let left = self.layout_region(
            Rect::new(DVec2::new(0.0, window.min.y), DVec2::new(window.min.x, window.max.y)),
            rule,
            side_options,
        )?;
        let right = self.layout_region(
            Rect::new(DVec2::new(window.max.x, window.min.y), DVec2::new(wall.max.x, window.max.y)),
            rule,
            side_options,
        )?;

        let mut layout = WindowLayout { bottom, left, right, side_offset, ..Default::default() };
        layout.top_offset = side_offset + layout.side_courses();
        layout.top = self.layout_region(
            Rect::new(DVec2::new(0.0, window.max.y), wall.max),
            rule,
            WallOptions::with_offset(layout.top_offset),
        )?;

        log::debug!(
            "Laid out wall with window: {} + {} + {} courses",
            layout.bottom.courses, layout.side_courses(), layout.top.courses
        );

        Ok(layout)
    }

    fn layout_region<R>(&self, region: Rect, rule: &R, options: WallOptions) -> Result<LayoutResult>
    where
        R: PatternRule + ?Sized,
    {
        if region.is_empty() {
            return Ok(LayoutResult::empty());
        }
        self.layout_wall_region(region.min, region.max, rule, options)
    }
}
