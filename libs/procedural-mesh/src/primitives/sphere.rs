//! # Sphere Primitive
//!
//! Generates a unit sphere using latitude/longitude tessellation.

use std::f32::consts::PI;

use crate::error::MeshResult;
use crate::mesh::{Mesh, ShapeSize};
use crate::vertex::Vertex;
use config::constants::validate_segments;
use glam::{Mat4, Vec2, Vec3};

/// Element counts [`add_sphere`] adds for `w` longitude and `h` latitude
/// segments.
pub fn sphere_size(w: u32, h: u32) -> ShapeSize {
    let (w, h) = (w as usize, h as usize);
    ShapeSize::new(
        (w + 1).saturating_mul(h + 1),
        w.saturating_mul(h.saturating_sub(1)).saturating_mul(2),
        h.saturating_mul(4).saturating_add(w),
    )
}

/// Appends a unit sphere to `mesh`.
///
/// # Arguments
///
/// * `mesh` - Target mesh
/// * `transform` - Affine transform for the generated vertices
/// * `w` - Longitude segments (a full turn around z)
/// * `h` - Latitude segments (from the -z pole to the +z pole)
///
/// # Algorithm
///
/// - `(w + 1) * (h + 1)` grid vertices, the first and last column coincide
/// - Position and normal are the same point on the unit sphere
/// - Pole rows keep one vertex per longitude; they are coincident, not shared
/// - The first and last latitude band emit one triangle per cell, skipping
///   the one that would collapse onto the pole
///
/// Outlines are the ring at latitude `h / 2` plus four meridians at
/// longitudes `0`, `w / 4`, `w / 2` and `3w / 4`.
pub fn add_sphere<V: From<Vertex>>(mesh: &mut Mesh<V>, transform: &Mat4, w: u32, h: u32) {
    let offset = mesh.begin_shape(sphere_size(w, h));
    let width = w + 1;
    log::debug!("sphere {w}x{h} at vertex offset {offset}");

    let step_xy = 1.0 / w as f32;
    let step_z = 1.0 / h as f32;

    for z in 0..=h {
        for xy in 0..=w {
            let u = step_xy * xy as f32;
            let v = step_z * z as f32;
            let angle_xy = u * PI * 2.0;
            let angle_z = (1.0 - v) * PI;

            let position = Vec3::new(
                angle_xy.cos() * angle_z.sin(),
                angle_xy.sin() * angle_z.sin(),
                angle_z.cos(),
            );
            let vertex = Vertex::new(position, position, Vec2::new(u, v));
            mesh.push_vertex(vertex.transformed(transform));
        }
    }

    let mut vertex = offset;
    for z in 0..h {
        for _ in 0..w {
            if z != h - 1 {
                mesh.push_triangle([vertex + width + 1, vertex + width, vertex]);
            }
            if z != 0 {
                mesh.push_triangle([vertex, vertex + 1, vertex + width + 1]);
            }
            vertex += 1;
        }
        // skip the seam column
        vertex += 1;
    }

    let middle = h / 2;
    for xy in 0..w {
        mesh.push_outline([
            middle * width + xy + offset,
            middle * width + xy + 1 + offset,
        ]);
    }

    for quarter in 0..4 {
        let xy = (w * quarter) / 4;
        for z in 0..h {
            mesh.push_outline([xy + width * z + offset, xy + width * (z + 1) + offset]);
        }
    }
}

/// Creates a standalone unit sphere.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(16, 8);
/// assert_eq!(mesh.vertex_count(), 17 * 9);
/// assert!(mesh.validate().is_ok());
/// ```
pub fn create_sphere(w: u32, h: u32) -> Mesh {
    let mut mesh = Mesh::new();
    add_sphere(&mut mesh, &Mat4::IDENTITY, w, h);
    mesh
}

/// Checked variant of [`create_sphere`].
///
/// # Errors
///
/// Returns [`MeshError::Config`](crate::MeshError::Config) when either
/// segment count is zero and
/// [`MeshError::TooManyVertices`](crate::MeshError::TooManyVertices) when the
/// grid would not fit 32-bit indices.
pub fn try_create_sphere(w: u32, h: u32) -> MeshResult<Mesh> {
    let w = validate_segments(w)?;
    let h = validate_segments(h)?;
    sphere_size(w, h).check_addressable()?;
    Ok(create_sphere(w, h))
}
