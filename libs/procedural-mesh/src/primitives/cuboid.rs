//! # Box Primitive
//!
//! Generates a subdivided box from six independent planes.

use std::f32::consts::PI;

use crate::error::MeshResult;
use crate::mesh::{Mesh, ShapeSize};
use crate::primitives::plane::{add_plane, plane_size};
use crate::vertex::Vertex;
use config::constants::validate_segments;
use glam::{Mat4, Vec3};

/// Element counts [`add_box`] adds: two faces for each pair of axes.
pub fn box_size(w: u32, h: u32, d: u32) -> ShapeSize {
    (plane_size(w, h) + plane_size(d, h) + plane_size(w, d)).repeated(2)
}

/// Appends a box spanning `[-1, 1]` on every axis to `mesh`.
///
/// Each face is a plane rotated into place and pushed out to the unit
/// distance, then transformed by `transform`. A face gets the segment counts
/// of the two axes it spans, so neighbouring faces agree on vertex density
/// along shared edges. Faces are not welded: seam vertices are duplicated and
/// every face keeps its own normals and texture coordinates.
///
/// # Arguments
///
/// * `mesh` - Target mesh
/// * `transform` - Affine transform applied after face placement
/// * `w` - Segments along x
/// * `h` - Segments along y
/// * `d` - Segments along z
pub fn add_box<V: From<Vertex>>(mesh: &mut Mesh<V>, transform: &Mat4, w: u32, h: u32, d: u32) {
    log::debug!("box {w}x{h}x{d} at vertex offset {}", mesh.vertex_count());
    let size = box_size(w, h, d);
    mesh.reserve(size.vertices, size.triangles, size.outlines);

    // (rotation, segments along the plane's local x, segments along local y)
    let faces = [
        (Mat4::IDENTITY, w, h),
        (Mat4::from_rotation_y(PI), w, h),
        (Mat4::from_rotation_y(PI * 0.5), d, h),
        (Mat4::from_rotation_y(PI * 1.5), d, h),
        (Mat4::from_rotation_x(PI * 0.5), w, d),
        (Mat4::from_rotation_x(PI * 1.5), w, d),
    ];

    let push_out = Mat4::from_translation(Vec3::Z);

    for (rotation, segments_x, segments_y) in faces {
        add_plane(mesh, &(*transform * rotation * push_out), segments_x, segments_y);
    }
}

/// Creates a standalone box with `segments` cells along every edge.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::primitives::create_box;
///
/// let mesh = create_box(1);
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(segments: u32) -> Mesh {
    let mut mesh = Mesh::new();
    add_box(&mut mesh, &Mat4::IDENTITY, segments, segments, segments);
    mesh
}

/// Checked variant of [`create_box`].
///
/// # Errors
///
/// Returns [`MeshError::Config`](crate::MeshError::Config) for zero segments
/// and [`MeshError::TooManyVertices`](crate::MeshError::TooManyVertices) when
/// the faces would not fit 32-bit indices.
pub fn try_create_box(segments: u32) -> MeshResult<Mesh> {
    let segments = validate_segments(segments)?;
    box_size(segments, segments, segments).check_addressable()?;
    Ok(create_box(segments))
}
