//! GPU-ready element instance (32 bytes).
//!
//! One record per brick or joint for instanced box rendering. Geometry is
//! narrowed to f32 here; layout itself runs in f64.

use bytemuck::{Pod, Zeroable};

use super::{Element, ElementKind};

/// Instance kind tag for bricks.
pub const INSTANCE_KIND_BRICK: u32 = 0;
/// Instance kind tag for mortar joints.
pub const INSTANCE_KIND_MORTAR: u32 = 1;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ElementInstance {
    /// Min corner of the box
    pub position: [f32; 3],
    /// INSTANCE_KIND_BRICK or INSTANCE_KIND_MORTAR
    pub kind: u32,
    // -- 16 bytes --
    pub size: [f32; 3],
    pub _pad: u32,
    // -- 16 bytes --
}

impl From<&Element> for ElementInstance {
    fn from(e: &Element) -> Self {
        Self {
            position: e.position.as_vec3().to_array(),
            kind: match e.kind {
                ElementKind::Brick => INSTANCE_KIND_BRICK,
                ElementKind::Mortar => INSTANCE_KIND_MORTAR,
            },
            size: e.size.as_vec3().to_array(),
            _pad: 0,
        }
    }
}
