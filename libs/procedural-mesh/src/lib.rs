//! # Procedural Mesh
//!
//! CPU-side generation of triangle meshes with feature-line outlines.
//!
//! ## Architecture
//!
//! ```text
//! Vertex ──→ Mesh<V> ←── primitives (plane → box, sphere, torus)
//!                    ←── sponge (recursive cube splitting → boxes)
//!                    ──→ flat vertex / index buffers for an uploader
//! ```
//!
//! ## Vertex Types
//!
//! Generators always build the canonical [`Vertex`] and convert it into the
//! mesh's vertex type through `From<Vertex>`, so any GPU layout can be filled
//! directly without a second pass.
//!
//! ## Usage
//!
//! ```rust
//! use procedural_mesh::{primitives, Mesh};
//! use glam::{Mat4, Vec3};
//!
//! let mut scene: Mesh = Mesh::new();
//! primitives::add_sphere(&mut scene, &Mat4::IDENTITY, 16, 8);
//! primitives::add_box(&mut scene, &Mat4::from_translation(Vec3::X * 3.0), 2, 2, 2);
//!
//! assert!(scene.validate().is_ok());
//! assert_eq!(scene.vertex_count(), 17 * 9 + 6 * 9);
//! ```

pub mod error;
pub mod mesh;
pub mod node;
pub mod primitives;
pub mod sponge;
pub mod vertex;

pub use error::{IndexKind, MeshError, MeshResult};
pub use mesh::{Mesh, ShapeSize};
pub use node::{instance, merge_nodes, Node};
pub use sponge::{
    add_sponge, create_sponge, sponge_nodes, try_create_sponge, Cube, SplitPolicy,
};
pub use vertex::Vertex;
