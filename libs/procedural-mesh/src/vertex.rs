//! # Vertex Model
//!
//! The canonical vertex every generator emits. Downstream vertex layouts opt in
//! by implementing `From<Vertex>`; meshes convert each vertex as it is pushed.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Position, normal and texture coordinate in homogeneous, GPU-friendly form.
///
/// Positions carry `w = 1` and normals `w = 0`, so both can be pushed through
/// the same 4x4 matrix. Texture coordinates are padded to four lanes.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::Vertex;
/// use glam::{Vec2, Vec3};
///
/// let v = Vertex::new(Vec3::X, Vec3::Z, Vec2::new(0.5, 1.0));
/// assert_eq!(v.position.w, 1.0);
/// assert_eq!(v.normal.w, 0.0);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vertex {
    /// Position, `w = 1`
    pub position: Vec4,
    /// Normal, `w = 0`
    pub normal: Vec4,
    /// Texture coordinate in `xy`, `zw` unused
    pub texcoord: Vec4,
}

impl Vertex {
    /// Creates a vertex from its three attributes.
    #[inline]
    pub fn new(position: Vec3, normal: Vec3, texcoord: Vec2) -> Self {
        Self {
            position: position.extend(1.0),
            normal: normal.extend(0.0),
            texcoord: Vec4::new(texcoord.x, texcoord.y, 0.0, 0.0),
        }
    }

    /// Returns the vertex with position and normal multiplied by `matrix`.
    ///
    /// The normal goes through the same matrix as a direction, so it stays
    /// unit length only for rigid transforms and uniform scale.
    #[inline]
    pub fn transformed(self, matrix: &Mat4) -> Self {
        Self {
            position: *matrix * self.position,
            normal: *matrix * self.normal,
            texcoord: self.texcoord,
        }
    }

    /// Returns the position without the homogeneous component.
    #[inline]
    pub fn position3(&self) -> Vec3 {
        self.position.truncate()
    }

    /// Returns the normal without the homogeneous component.
    #[inline]
    pub fn normal3(&self) -> Vec3 {
        self.normal.truncate()
    }

    /// Returns the texture coordinate.
    #[inline]
    pub fn texcoord2(&self) -> Vec2 {
        Vec2::new(self.texcoord.x, self.texcoord.y)
    }
}
