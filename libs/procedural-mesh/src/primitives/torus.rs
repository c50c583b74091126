//! # Torus Primitive
//!
//! Generates a torus by sweeping a small circle around the y axis.

use std::f32::consts::TAU;

use config::constants::{validate_segments, TORUS_MAJOR_RADIUS, TORUS_MINOR_RADIUS};

use crate::error::MeshResult;
use crate::mesh::{Mesh, ShapeSize};
use crate::vertex::Vertex;
use glam::{Mat4, Vec2, Vec3};

/// Element counts [`add_torus`] adds for `w` major and `h` minor segments.
pub fn torus_size(w: u32, h: u32) -> ShapeSize {
    let (w, h) = (w as usize, h as usize);
    ShapeSize::new(
        (w + 1).saturating_mul(h + 1),
        w.saturating_mul(h).saturating_mul(2),
        (w + h).saturating_mul(4),
    )
}

/// Appends a torus to `mesh`.
///
/// The tube center circles the y axis at [`TORUS_MAJOR_RADIUS`], the tube
/// itself has radius [`TORUS_MINOR_RADIUS`]. Rows of the `(w + 1) * (h + 1)`
/// grid follow the major angle, columns the minor angle.
///
/// `_transform` is accepted for signature parity with the other generators
/// but is not applied: the torus is always emitted in place. Callers that need
/// it moved generate into a scratch mesh and transform it themselves.
///
/// Outlines are four rings around the axis at quarter turns of the tube, and
/// four tube cross-sections at quarter turns around the axis.
///
/// # Arguments
///
/// * `mesh` - Target mesh
/// * `w` - Segments around the major circle
/// * `h` - Segments around the tube
pub fn add_torus<V: From<Vertex>>(mesh: &mut Mesh<V>, _transform: &Mat4, w: u32, h: u32) {
    let offset = mesh.begin_shape(torus_size(w, h));
    let columns = h + 1;
    log::debug!("torus {w}x{h} at vertex offset {offset}");

    let major_step = TAU / w as f32;
    let minor_step = TAU / h as f32;

    for row in 0..=w {
        let (sin_major, cos_major) = (row as f32 * major_step).sin_cos();

        for column in 0..=h {
            let (sin_minor, cos_minor) = (column as f32 * minor_step).sin_cos();
            let radius = TORUS_MAJOR_RADIUS + TORUS_MINOR_RADIUS * cos_minor;

            let position = Vec3::new(
                radius * cos_major,
                TORUS_MINOR_RADIUS * sin_minor,
                -radius * sin_major,
            );
            let normal = Vec3::new(cos_major * cos_minor, sin_minor, -sin_major * cos_minor);
            let texcoord = Vec2::new(column as f32 / h as f32, row as f32 / w as f32);

            mesh.push_vertex(Vertex::new(position, normal, texcoord));
        }
    }

    let index = |row: u32, column: u32| row * columns + column + offset;

    for row in 0..w {
        for column in 0..h {
            let a = index(row, column);
            let b = index(row, column + 1);
            let c = index(row + 1, column);
            let d = index(row + 1, column + 1);

            mesh.push_triangle([a, c, b]);
            mesh.push_triangle([c, d, b]);
        }
    }

    // rings around the axis
    for quarter in 0..4 {
        let column = (h * quarter) / 4;
        for row in 0..w {
            mesh.push_outline([index(row, column), index(row + 1, column)]);
        }
    }

    // tube cross-sections
    for quarter in 0..4 {
        let row = (w * quarter) / 4;
        for column in 0..h {
            mesh.push_outline([index(row, column), index(row, column + 1)]);
        }
    }
}

/// Creates a standalone torus.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::primitives::create_torus;
///
/// let mesh = create_torus(16, 16);
/// assert_eq!(mesh.vertex_count(), 17 * 17);
/// assert_eq!(mesh.triangle_count(), 2 * 16 * 16);
/// ```
pub fn create_torus(w: u32, h: u32) -> Mesh {
    let mut mesh = Mesh::new();
    add_torus(&mut mesh, &Mat4::IDENTITY, w, h);
    mesh
}

/// Checked variant of [`create_torus`].
///
/// # Errors
///
/// Returns [`MeshError::Config`](crate::MeshError::Config) when either
/// segment count is zero and
/// [`MeshError::TooManyVertices`](crate::MeshError::TooManyVertices) when the
/// grid would not fit 32-bit indices.
pub fn try_create_torus(w: u32, h: u32) -> MeshResult<Mesh> {
    let w = validate_segments(w)?;
    let h = validate_segments(h)?;
    torus_size(w, h).check_addressable()?;
    Ok(create_torus(w, h))
}
