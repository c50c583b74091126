//! # Node Instancing
//!
//! Placement nodes and merging of instanced meshes into a single mesh.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Mesh, ShapeSize};

/// Placement of one mesh instance.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::Node;
/// use glam::Vec3;
///
/// let node = Node {
///     translation: Vec3::X,
///     scale: Vec3::splat(2.0),
///     ..Node::default()
/// };
/// assert_eq!(node.local_matrix().transform_point3(Vec3::ONE), Vec3::new(3.0, 2.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Translation, applied last
    pub translation: Vec3,
    /// Rotation, applied after scale
    pub rotation: Quat,
    /// Per-axis scale, applied first
    pub scale: Vec3,
    /// Index of the instanced mesh
    pub mesh: usize,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            mesh: 0,
        }
    }
}

impl Node {
    /// Returns `translation * rotation * scale`.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Merges every node's mesh into one, transformed by the node placement.
///
/// Positions are transformed as points. Normals are transformed as
/// directions and renormalized, so non-uniform node scale still yields unit
/// normals. Indices are rebased exactly as in [`Mesh::append`].
///
/// # Errors
///
/// Returns [`MeshError::MissingMesh`] if a node refers past the end of
/// `meshes`, and [`MeshError::TooManyVertices`] if the merged mesh would not
/// fit 32-bit indices. Nothing is allocated on error.
pub fn merge_nodes(nodes: &[Node], meshes: &[Mesh]) -> MeshResult<Mesh> {
    let mut total = ShapeSize::default();
    for (position, node) in nodes.iter().enumerate() {
        let mesh = meshes.get(node.mesh).ok_or(MeshError::MissingMesh {
            node: position,
            mesh: node.mesh,
            available: meshes.len(),
        })?;
        total = total + mesh.size();
    }
    total.check_addressable()?;

    let mut merged = Mesh::with_capacity(total.vertices, total.triangles, total.outlines);
    log::debug!(
        "merging {} nodes into {} vertices, {} triangles",
        nodes.len(),
        total.vertices,
        total.triangles
    );

    for node in nodes {
        push_instance(&mut merged, &meshes[node.mesh], &node.local_matrix());
    }

    Ok(merged)
}

/// Instances a single mesh at every node, ignoring [`Node::mesh`].
pub fn instance(nodes: &[Node], source: &Mesh) -> Mesh {
    let total = source.size().repeated(nodes.len());
    let mut merged = Mesh::with_capacity(total.vertices, total.triangles, total.outlines);
    for node in nodes {
        push_instance(&mut merged, source, &node.local_matrix());
    }
    merged
}

fn push_instance(merged: &mut Mesh, source: &Mesh, matrix: &Mat4) {
    let offset = merged.begin_shape(source.size());

    for vertex in source.vertices() {
        let mut placed = vertex.transformed(matrix);
        placed.normal = placed.normal3().normalize_or_zero().extend(0.0);
        merged.push_vertex(placed);
    }
    for tri in source.triangles() {
        merged.push_triangle(tri.map(|i| i + offset));
    }
    for segment in source.outlines() {
        merged.push_outline(segment.map(|i| i + offset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{create_box, create_plane};
    use approx::assert_relative_eq;

    #[test]
    fn test_local_matrix_order() {
        let node = Node {
            translation: Vec3::new(1.0, 0.0, 0.0),
            rotation: Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
            scale: Vec3::splat(2.0),
            mesh: 0,
        };
        let p = node.local_matrix().transform_point3(Vec3::X);
        // scale to (2,0,0), rotate to (0,2,0), translate to (1,2,0)
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_merge_nodes_counts_and_offsets() {
        let meshes = [create_plane(1), create_box(1)];
        let nodes = [
            Node { mesh: 1, ..Node::default() },
            Node { mesh: 0, translation: Vec3::Z * 5.0, ..Node::default() },
        ];
        let merged = merge_nodes(&nodes, &meshes).unwrap();
        assert_eq!(merged.vertex_count(), 24 + 4);
        assert_eq!(merged.triangle_count(), 12 + 2);
        assert_eq!(merged.triangles()[12], meshes[0].triangles()[0].map(|i| i + 24));
        assert!(merged.validate().is_ok());
    }

    #[test]
    fn test_merge_nodes_renormalizes_normals() {
        let nodes = [Node {
            scale: Vec3::new(3.0, 1.0, 0.5),
            ..Node::default()
        }];
        let merged = merge_nodes(&nodes, &[create_box(1)]).unwrap();
        for v in merged.vertices() {
            assert_relative_eq!(v.normal3().length(), 1.0, epsilon = 1e-5);
            assert_eq!(v.normal.w, 0.0);
        }
    }

    #[test]
    fn test_merge_nodes_missing_mesh() {
        let nodes = [Node { mesh: 2, ..Node::default() }];
        let result = merge_nodes(&nodes, &[create_plane(1)]);
        assert!(matches!(
            result,
            Err(MeshError::MissingMesh { node: 0, mesh: 2, available: 1 })
        ));
    }

    #[test]
    fn test_merge_nodes_rejects_unaddressable_result() {
        // 4300 copies of a 1001x1001 grid pass 2^32 vertices
        let meshes = [create_plane(1000)];
        let nodes = vec![Node::default(); 4300];
        assert!(matches!(
            merge_nodes(&nodes, &meshes),
            Err(MeshError::TooManyVertices { count: 4_308_604_300, .. })
        ));
    }

    #[test]
    fn test_instance_ignores_mesh_index() {
        let nodes = [Node { mesh: 7, ..Node::default() }, Node::default()];
        let merged = instance(&nodes, &create_plane(2));
        assert_eq!(merged.vertex_count(), 18);
    }
}
