//! Brick variants and their extents

pub mod variant;
pub mod catalogue;

pub use variant::BrickVariant;
pub use catalogue::BrickCatalogue;
