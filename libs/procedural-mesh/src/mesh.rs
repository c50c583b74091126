//! # Mesh Data Structure
//!
//! Core mesh representation: vertices, triangle indices and outline indices.

use std::mem::size_of;
use std::ops::Add;

use bytemuck::Pod;
use config::constants::MAX_VERTICES;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{IndexKind, MeshError, MeshResult};
use crate::vertex::Vertex;

/// Element counts of a mesh, or of what a generator is about to add to one.
///
/// Arithmetic saturates, so sizes requested with absurd segment counts stay
/// comparable against [`MAX_VERTICES`] instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeSize {
    /// Number of vertices
    pub vertices: usize,
    /// Number of triangles
    pub triangles: usize,
    /// Number of outline segments
    pub outlines: usize,
}

impl ShapeSize {
    /// Creates a size from its three counts.
    pub const fn new(vertices: usize, triangles: usize, outlines: usize) -> Self {
        Self {
            vertices,
            triangles,
            outlines,
        }
    }

    /// The size of `count` copies of this shape.
    pub fn repeated(self, count: usize) -> Self {
        Self {
            vertices: self.vertices.saturating_mul(count),
            triangles: self.triangles.saturating_mul(count),
            outlines: self.outlines.saturating_mul(count),
        }
    }

    /// Checks that every vertex of a mesh this size is addressable by a
    /// 32-bit index.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::TooManyVertices`] when `vertices` exceeds
    /// [`MAX_VERTICES`].
    pub fn check_addressable(&self) -> MeshResult<()> {
        if self.vertices > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: self.vertices,
                max: MAX_VERTICES,
            });
        }
        Ok(())
    }
}

impl Add for ShapeSize {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            vertices: self.vertices.saturating_add(other.vertices),
            triangles: self.triangles.saturating_add(other.triangles),
            outlines: self.outlines.saturating_add(other.outlines),
        }
    }
}

/// A triangle mesh with feature-line outlines.
///
/// Vertices keep generation order. Triangle triples define winding, outline
/// pairs mark feature edges for wireframe rendering and are independent of the
/// triangles. Generators append to a caller-owned mesh, so several shapes can
/// be composed into one set of buffers.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::{Mesh, Vertex};
/// use glam::{Vec2, Vec3};
///
/// let mut mesh: Mesh = Mesh::new();
/// mesh.push_vertex(Vertex::new(Vec3::ZERO, Vec3::Z, Vec2::ZERO));
/// mesh.push_vertex(Vertex::new(Vec3::X, Vec3::Z, Vec2::X));
/// mesh.push_vertex(Vertex::new(Vec3::Y, Vec3::Z, Vec2::Y));
/// mesh.push_triangle([0, 1, 2]);
/// mesh.push_outline([0, 1]);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh<V = Vertex> {
    vertices: Vec<V>,
    triangles: Vec<[u32; 3]>,
    outlines: Vec<[u32; 2]>,
}

impl<V> Default for Mesh<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Mesh<V> {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            outlines: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize, outline_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            outlines: Vec::with_capacity(outline_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of outline segments.
    #[inline]
    pub fn outline_count(&self) -> usize {
        self.outlines.len()
    }

    /// Returns the number of triangle indices (three per triangle).
    #[inline]
    pub fn triangle_index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns the number of outline indices (two per segment).
    #[inline]
    pub fn outline_index_count(&self) -> usize {
        self.outlines.len() * 2
    }

    /// Size of the vertex buffer in bytes.
    #[inline]
    pub fn vertices_size(&self) -> usize {
        self.vertices.len() * size_of::<V>()
    }

    /// Size of the triangle index buffer in bytes.
    #[inline]
    pub fn triangle_indices_size(&self) -> usize {
        self.triangles.len() * size_of::<[u32; 3]>()
    }

    /// Size of the outline index buffer in bytes.
    #[inline]
    pub fn outline_indices_size(&self) -> usize {
        self.outlines.len() * size_of::<[u32; 2]>()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Removes all vertices and indices, keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
        self.outlines.clear();
    }

    /// Returns the element counts of this mesh.
    pub fn size(&self) -> ShapeSize {
        ShapeSize::new(self.vertices.len(), self.triangles.len(), self.outlines.len())
    }

    /// Index the next pushed vertex will receive.
    ///
    /// Saturates at `u32::MAX` once the mesh outgrows a 32-bit index buffer,
    /// a state [`Mesh::validate`] reports as [`MeshError::TooManyVertices`].
    pub fn next_index(&self) -> u32 {
        let index = u32::try_from(self.vertices.len());
        debug_assert!(
            index.is_ok(),
            "vertex count {} exceeds 32-bit indices",
            self.vertices.len()
        );
        index.unwrap_or(u32::MAX)
    }

    /// Checks that `additional` elements can be added while keeping every
    /// vertex addressable by a 32-bit index.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::TooManyVertices`] with the resulting count.
    pub fn check_room(&self, additional: ShapeSize) -> MeshResult<()> {
        (self.size() + additional).check_addressable()
    }

    /// Reserves room for a shape about to be generated and returns the index
    /// its first vertex will receive.
    pub(crate) fn begin_shape(&mut self, shape: ShapeSize) -> u32 {
        debug_assert!(
            self.check_room(shape).is_ok(),
            "{} + {} vertices exceed 32-bit indices",
            self.vertices.len(),
            shape.vertices
        );
        self.reserve(shape.vertices, shape.triangles, shape.outlines);
        self.next_index()
    }

    /// Adds a vertex and returns its index.
    pub fn push_vertex(&mut self, vertex: impl Into<V>) -> u32 {
        let index = self.next_index();
        self.vertices.push(vertex.into());
        index
    }

    /// Adds a triangle by vertex indices.
    #[inline]
    pub fn push_triangle(&mut self, triangle: [u32; 3]) {
        self.triangles.push(triangle);
    }

    /// Adds an outline segment by vertex indices.
    #[inline]
    pub fn push_outline(&mut self, segment: [u32; 2]) {
        self.outlines.push(segment);
    }

    /// Reserves room for the given number of additional elements.
    pub fn reserve(&mut self, vertices: usize, triangles: usize, outlines: usize) {
        self.vertices.reserve(vertices);
        self.triangles.reserve(triangles);
        self.outlines.reserve(outlines);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns a reference to the outline segments.
    #[inline]
    pub fn outlines(&self) -> &[[u32; 2]] {
        &self.outlines
    }

    /// Reverses the orientation of every triangle.
    ///
    /// Swaps the first and last index of each triple. Vertices and outlines
    /// are untouched, so applying it twice restores the original mesh.
    pub fn flip_winding(&mut self) {
        log::trace!("flipping winding of {} triangles", self.triangles.len());
        for tri in &mut self.triangles {
            tri.swap(0, 2);
        }
    }

    /// Checks that every index refers to an existing vertex and that the
    /// vertex count fits a 32-bit index buffer.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();
        if vertex_count > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: vertex_count,
                max: MAX_VERTICES,
            });
        }

        let out_of_range = |kind, position, index: u32| MeshError::IndexOutOfRange {
            kind,
            position,
            index,
            vertex_count,
        };

        for (position, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(out_of_range(IndexKind::Triangle, position, index));
            }
        }
        for (position, segment) in self.outlines.iter().enumerate() {
            if let Some(&index) = segment.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(out_of_range(IndexKind::Outline, position, index));
            }
        }

        Ok(())
    }
}

impl<V: Clone> Mesh<V> {
    /// Merges another mesh into this one.
    ///
    /// Vertices are copied verbatim. Triangle and outline indices are offset by
    /// the vertex count this mesh had before the call, which keeps the topology
    /// of `other` intact.
    pub fn append(&mut self, other: &Mesh<V>) {
        let offset = self.begin_shape(other.size());
        log::trace!(
            "appending {} vertices, {} triangles at offset {offset}",
            other.vertices.len(),
            other.triangles.len()
        );

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| tri.map(|i| i + offset)),
        );
        self.outlines.extend(
            other
                .outlines
                .iter()
                .map(|segment| segment.map(|i| i + offset)),
        );
    }
}

impl<V: Pod> Mesh<V> {
    /// Raw bytes of the vertex buffer.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the triangle index buffer.
    pub fn triangle_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Raw bytes of the outline index buffer.
    pub fn outline_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.outlines)
    }
}

impl Mesh<Vertex> {
    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some(first) = self.vertices.first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        let mut min = first.position3();
        let mut max = min;

        for v in &self.vertices[1..] {
            min = min.min(v.position3());
            max = max.max(v.position3());
        }

        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn vertex(x: f32, y: f32, z: f32) -> Vertex {
        Vertex::new(Vec3::new(x, y, z), Vec3::Z, Vec2::ZERO)
    }

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.push_vertex(vertex(0.0, 0.0, 0.0));
        mesh.push_vertex(vertex(1.0, 0.0, 0.0));
        mesh.push_vertex(vertex(0.0, 1.0, 0.0));
        mesh.push_triangle([0, 1, 2]);
        mesh.push_outline([0, 1]);
        mesh.push_outline([1, 2]);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh: Mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.outline_count(), 0);
    }

    #[test]
    fn test_mesh_push_vertex() {
        let mut mesh: Mesh = Mesh::new();
        let idx = mesh.push_vertex(vertex(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertices()[0].position3(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_counts_and_sizes() {
        let mesh = triangle_mesh();
        assert_eq!(mesh.triangle_index_count(), 3);
        assert_eq!(mesh.outline_index_count(), 4);
        assert_eq!(mesh.vertices_size(), 3 * 48);
        assert_eq!(mesh.triangle_indices_size(), 12);
        assert_eq!(mesh.outline_indices_size(), 16);
    }

    #[test]
    fn test_mesh_byte_views_match_sizes() {
        let mesh = triangle_mesh();
        assert_eq!(mesh.vertex_bytes().len(), mesh.vertices_size());
        assert_eq!(mesh.triangle_index_bytes().len(), mesh.triangle_indices_size());
        assert_eq!(mesh.outline_index_bytes().len(), mesh.outline_indices_size());
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh: Mesh = Mesh::new();
        mesh.push_vertex(vertex(-1.0, -2.0, -3.0));
        mesh.push_vertex(vertex(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(triangle_mesh().validate().is_ok());
    }

    #[test]
    fn test_mesh_validate_invalid_triangle_index() {
        let mut mesh: Mesh = Mesh::new();
        mesh.push_vertex(vertex(0.0, 0.0, 0.0));
        mesh.push_triangle([0, 1, 2]);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::IndexOutOfRange {
                kind: IndexKind::Triangle,
                position: 0,
                index: 1,
                vertex_count: 1,
            })
        ));
    }

    #[test]
    fn test_mesh_validate_invalid_outline_index() {
        let mut mesh = triangle_mesh();
        mesh.push_outline([2, 3]);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::IndexOutOfRange {
                kind: IndexKind::Outline,
                position: 2,
                index: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_mesh_append() {
        let mut mesh1 = triangle_mesh();
        let mesh2 = triangle_mesh();

        mesh1.append(&mesh2);
        assert_eq!(mesh1.vertex_count(), 6);
        assert_eq!(mesh1.triangle_count(), 2);
        assert_eq!(mesh1.triangles()[1], [3, 4, 5]); // Offset by 3
        assert_eq!(mesh1.outlines()[2..], [[3, 4], [4, 5]]);
        assert_eq!(mesh1.vertices()[3..], mesh2.vertices()[..]);
        assert!(mesh1.validate().is_ok());
    }

    #[test]
    fn test_mesh_append_empty_is_noop() {
        let mut mesh = triangle_mesh();
        let before = mesh.clone();
        mesh.append(&Mesh::new());
        assert_eq!(mesh, before);
    }

    #[test]
    fn test_mesh_append_into_empty() {
        let mut mesh: Mesh = Mesh::new();
        let source = triangle_mesh();
        mesh.append(&source);
        assert_eq!(mesh, source);
    }

    #[test]
    fn test_flip_winding() {
        let mut mesh = triangle_mesh();
        mesh.flip_winding();
        assert_eq!(mesh.triangles()[0], [2, 1, 0]);
        assert_eq!(mesh.outlines(), triangle_mesh().outlines());
        mesh.flip_winding();
        assert_eq!(mesh, triangle_mesh());
    }

    #[test]
    fn test_size_reports_counts() {
        let mesh = triangle_mesh();
        assert_eq!(mesh.size(), ShapeSize::new(3, 1, 2));
        assert_eq!(mesh.size() + mesh.size(), mesh.size().repeated(2));
        assert_eq!(mesh.next_index(), 3);
    }

    #[test]
    fn test_shape_size_saturates() {
        let huge = ShapeSize::new(usize::MAX, 1, 1);
        assert_eq!((huge + huge).vertices, usize::MAX);
        assert_eq!(huge.repeated(3).vertices, usize::MAX);
        assert!(huge.check_addressable().is_err());
    }

    #[test]
    fn test_check_room_at_index_limit() {
        let mesh = triangle_mesh();
        assert!(mesh.check_room(ShapeSize::new(MAX_VERTICES - 3, 0, 0)).is_ok());
        assert!(matches!(
            mesh.check_room(ShapeSize::new(MAX_VERTICES - 2, 0, 0)),
            Err(MeshError::TooManyVertices { count, max })
                if count == MAX_VERTICES + 1 && max == MAX_VERTICES
        ));
    }

    #[test]
    fn test_clear_keeps_nothing() {
        let mut mesh = triangle_mesh();
        mesh.clear();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.outline_count(), 0);
    }
}
