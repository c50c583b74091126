//! # Plane Primitive
//!
//! Generates a subdivided square grid in the local xy plane.

use crate::error::MeshResult;
use crate::mesh::{Mesh, ShapeSize};
use crate::vertex::Vertex;
use config::constants::validate_segments;
use glam::{Mat4, Vec2, Vec3};

/// Element counts [`add_plane`] adds for a `w` by `h` grid.
pub fn plane_size(w: u32, h: u32) -> ShapeSize {
    let (w, h) = (w as usize, h as usize);
    ShapeSize::new(
        (w + 1).saturating_mul(h + 1),
        w.saturating_mul(h).saturating_mul(2),
        (w + h).saturating_mul(2),
    )
}

/// Appends a subdivided plane to `mesh`.
///
/// The plane spans `[-1, 1]` along x and y at z = 0 with normal +z, before
/// `transform` is applied to positions (as points) and normals (as
/// directions). The grid holds `(w + 1) * (h + 1)` vertices, x varying
/// fastest, with texture coordinates covering `[0, 1]`.
///
/// Each cell emits two triangles wound counter-clockwise when seen from +z.
/// Outlines follow the four border edges only.
///
/// # Arguments
///
/// * `mesh` - Target mesh, indices are offset by its current vertex count
/// * `transform` - Affine transform for the generated vertices
/// * `w` - Cells along x (at least 1)
/// * `h` - Cells along y (at least 1)
pub fn add_plane<V: From<Vertex>>(mesh: &mut Mesh<V>, transform: &Mat4, w: u32, h: u32) {
    let offset = mesh.begin_shape(plane_size(w, h));
    let width = w + 1;
    log::debug!("plane {w}x{h} at vertex offset {offset}");

    let step_x = 1.0 / w as f32;
    let step_y = 1.0 / h as f32;

    for y in 0..=h {
        for x in 0..=w {
            let u = x as f32 * step_x;
            let v = y as f32 * step_y;
            let position = Vec3::new((u - 0.5) * 2.0, (v - 0.5) * 2.0, 0.0);
            let vertex = Vertex::new(position, Vec3::Z, Vec2::new(u, v));
            mesh.push_vertex(vertex.transformed(transform));
        }
    }

    let index = |x: u32, y: u32| x + y * width + offset;

    for y in 0..h {
        for x in 0..w {
            // upper
            mesh.push_triangle([index(x, y + 1), index(x, y), index(x + 1, y + 1)]);
            // lower
            mesh.push_triangle([index(x + 1, y + 1), index(x, y), index(x + 1, y)]);
        }
    }

    for y in 0..h {
        mesh.push_outline([index(0, y), index(0, y + 1)]);
    }
    for y in 0..h {
        mesh.push_outline([index(w, y), index(w, y + 1)]);
    }
    for x in 0..w {
        mesh.push_outline([index(x, 0), index(x + 1, 0)]);
    }
    for x in 0..w {
        mesh.push_outline([index(x, h), index(x + 1, h)]);
    }
}

/// Creates a standalone square plane with `segments` cells per side.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::primitives::create_plane;
///
/// let mesh = create_plane(2);
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.triangle_count(), 8);
/// assert_eq!(mesh.outline_count(), 8);
/// ```
pub fn create_plane(segments: u32) -> Mesh {
    let mut mesh = Mesh::new();
    add_plane(&mut mesh, &Mat4::IDENTITY, segments, segments);
    mesh
}

/// Checked variant of [`create_plane`].
///
/// # Errors
///
/// Returns [`MeshError::Config`](crate::MeshError::Config) for zero segments
/// and [`MeshError::TooManyVertices`](crate::MeshError::TooManyVertices) when
/// the grid would not fit 32-bit indices. Nothing is allocated on error.
pub fn try_create_plane(segments: u32) -> MeshResult<Mesh> {
    let segments = validate_segments(segments)?;
    plane_size(segments, segments).check_addressable()?;
    Ok(create_plane(segments))
}
