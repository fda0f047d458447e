//! Brick layout: fits bond patterns into walls and emits positioned elements.
//!
//! The pipeline runs bottom-up:
//! 1. Row fitting (bond rule -> brick sequence that fills a width)
//! 2. Row layout (bricks + equal head joints, exact width)
//! 3. Wall layout (courses + equal bed joints, exact height)
//! 4. Region translation (place a wall at an offset)
//! 5. Window composition (four regions around an opening)
//!
//! All output is region-local until translated, left-to-right then
//! bottom-to-top, in generation order.

pub mod config;
pub mod row;
pub mod wall;
pub mod window;
pub mod instance;

pub use config::LayoutConfig;
pub use wall::{CourseFit, WallOptions};
pub use window::WindowLayout;
pub use instance::ElementInstance;

use serde::{Deserialize, Serialize};

use crate::core::{DVec2, DVec3, Result};
use crate::math::to_3d;

/// What an element is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Brick,
    Mortar,
}

/// A positioned box: one brick or one joint.
///
/// `position` is the min corner (left, bottom, front) and `size` the extent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub size: DVec3,
    pub position: DVec3,
}

impl Element {
    pub fn brick(size: DVec3, position: DVec3) -> Self {
        Self { kind: ElementKind::Brick, size, position }
    }

    pub fn mortar(size: DVec3, position: DVec3) -> Self {
        Self { kind: ElementKind::Mortar, size, position }
    }

    #[inline]
    pub fn is_brick(&self) -> bool {
        self.kind == ElementKind::Brick
    }

    /// Copy moved by `offset` in the wall plane (z untouched).
    #[inline]
    pub fn translated(&self, offset: DVec2) -> Self {
        Self { position: self.position + to_3d(offset), ..*self }
    }
}

/// Output of every layout operation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Brick courses produced. Callers continue bond indexing from here.
    pub courses: u32,
    pub elements: Vec<Element>,
}

impl LayoutResult {
    /// Result with no courses, for regions with no area.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Move every element by `offset` in the wall plane.
    pub fn translated(self, offset: DVec2) -> Self {
        Self {
            courses: self.courses,
            elements: self.elements.iter().map(|e| e.translated(offset)).collect(),
        }
    }

    pub fn brick_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_brick()).count()
    }

    /// GPU instance records for every element, in order.
    pub fn instances(&self) -> Vec<ElementInstance> {
        self.elements.iter().map(ElementInstance::from).collect()
    }
}

/// Lays out walls from a validated [`LayoutConfig`].
#[derive(Clone, Debug)]
pub struct WallLayouter {
    config: LayoutConfig,
}

impl Default for WallLayouter {
    fn default() -> Self {
        Self { config: LayoutConfig::default() }
    }
}

impl WallLayouter {
    /// Create a layouter, rejecting configs with invalid brick or joint sizes.
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }
}
