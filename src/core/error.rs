//! Error types for brick layout

use thiserror::Error;

/// Main error type for layout generation
#[derive(Debug, Error)]
pub enum Error {
    /// A fitted row holds a single brick, so the joint width is undefined.
    #[error("row too narrow for more than one brick (width {width}, fitted {bricks} brick)")]
    DegenerateRow { width: f64, bricks: usize },

    /// The end-brick search found no variant for the remaining space.
    #[error("wall width {width} not achievable with available brick widths (remainder {remainder})")]
    UnfittableRemainder { width: f64, remainder: f64 },

    #[error(
        "wall height {height} too small for requested mortar configuration \
         ({courses} courses, {extra_mortar_courses} extra mortar courses)"
    )]
    DegenerateCourseCount {
        height: f64,
        courses: u32,
        extra_mortar_courses: u32,
    },

    #[error("invalid {what}: {value} (must be finite and positive)")]
    InvalidDimension { what: &'static str, value: f64 },

    #[error("Window error: {0}")]
    InvalidWindow(String),

    #[error("Catalogue error: {0}")]
    InvalidCatalogue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Reject dimensions that are NaN, infinite, zero or negative.
    pub(crate) fn check_dimension(what: &'static str, value: f64) -> crate::core::Result<f64> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Error::InvalidDimension { what, value })
        }
    }
}
