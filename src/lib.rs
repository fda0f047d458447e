//! Brickwork - procedural brick and mortar layout for walls

pub mod core;
pub mod math;
pub mod brick;
pub mod bond;
pub mod layout;

pub use crate::core::{Error, Result};
pub use brick::{BrickCatalogue, BrickVariant};
pub use bond::{BondStyle, PatternRule};
pub use layout::{Element, ElementKind, LayoutConfig, LayoutResult, WallLayouter, WallOptions, WindowLayout};
