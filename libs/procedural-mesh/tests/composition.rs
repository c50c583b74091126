//! Cross-generator properties: index bounds, composition and custom vertex
//! layouts.

use bytemuck::{Pod, Zeroable};
use config::constants::{SpongeConfig, DEFAULT_SPHERE_SEGMENTS, DEFAULT_TORUS_SEGMENTS};
use glam::{Mat4, Vec3};
use procedural_mesh::primitives::{add_box, add_plane, add_sphere, add_torus};
use procedural_mesh::{
    add_sponge, create_sponge, instance, sponge_nodes, Cube, Mesh, SplitPolicy, Vertex,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Minimal GPU layout: position and normal, no texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
struct LitVertex {
    position: [f32; 3],
    normal: [f32; 3],
}

impl From<Vertex> for LitVertex {
    fn from(v: Vertex) -> Self {
        Self {
            position: v.position3().to_array(),
            normal: v.normal3().to_array(),
        }
    }
}

fn assert_indices_in_range<V>(mesh: &Mesh<V>) {
    let count = mesh.vertex_count() as u32;
    assert!(mesh.triangles().iter().flatten().all(|&i| i < count));
    assert!(mesh.outlines().iter().flatten().all(|&i| i < count));
}

#[test]
fn test_all_generators_into_one_mesh() {
    let mut mesh: Mesh = Mesh::new();
    let (sw, sh) = DEFAULT_SPHERE_SEGMENTS;
    let (tw, th) = DEFAULT_TORUS_SEGMENTS;

    add_plane(&mut mesh, &Mat4::IDENTITY, 3, 2);
    add_box(&mut mesh, &Mat4::from_translation(Vec3::X * 3.0), 2, 2, 2);
    add_sphere(&mut mesh, &Mat4::IDENTITY, sw, sh);
    add_torus(&mut mesh, &Mat4::IDENTITY, tw, th);
    add_sponge(
        &mut mesh,
        &Mat4::IDENTITY,
        Cube::new(Vec3::splat(-0.25), 0.5),
        1,
        SplitPolicy::Menger,
        &mut ChaCha8Rng::seed_from_u64(1),
    );

    let sphere = ((sw + 1) * (sh + 1)) as usize;
    let torus = ((tw + 1) * (th + 1)) as usize;
    let expected = 4 * 3 + 6 * 9 + sphere + torus + 20 * 24;
    assert_eq!(mesh.vertex_count(), expected);
    assert_indices_in_range(&mesh);
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_custom_vertex_layout() {
    let mut mesh: Mesh<LitVertex> = Mesh::new();
    add_box(&mut mesh, &Mat4::IDENTITY, 1, 1, 1);
    add_sphere(&mut mesh, &Mat4::IDENTITY, 8, 4);

    assert_eq!(mesh.vertex_count(), 24 + 45);
    assert_eq!(mesh.vertices_size(), mesh.vertex_count() * 24);
    assert_eq!(mesh.vertex_bytes().len(), mesh.vertices_size());
    assert_indices_in_range(&mesh);
}

#[test]
fn test_append_matches_direct_generation() {
    let mut direct: Mesh = Mesh::new();
    add_sphere(&mut direct, &Mat4::IDENTITY, 8, 4);
    add_torus(&mut direct, &Mat4::IDENTITY, 8, 8);

    let mut sphere: Mesh = Mesh::new();
    add_sphere(&mut sphere, &Mat4::IDENTITY, 8, 4);
    let mut torus: Mesh = Mesh::new();
    add_torus(&mut torus, &Mat4::IDENTITY, 8, 8);
    sphere.append(&torus);

    assert_eq!(sphere, direct);
}

#[test]
fn test_flip_winding_is_involution_on_generated_mesh() {
    let mut mesh = create_sponge(&SpongeConfig::new(1, -1.0).unwrap());
    let original = mesh.clone();
    mesh.flip_winding();
    assert_ne!(mesh.triangles(), original.triangles());
    assert_eq!(mesh.vertices(), original.vertices());
    assert_eq!(mesh.outlines(), original.outlines());
    mesh.flip_winding();
    assert_eq!(mesh, original);
}

#[test]
fn test_probabilistic_sponge_is_reproducible() {
    let config = SpongeConfig::new(2, 0.5).unwrap().with_seed(1234);
    let a = create_sponge(&config);
    let b = create_sponge(&config);
    assert_eq!(a, b);
    assert_eq!(a.vertex_count() % 24, 0);
    assert_indices_in_range(&a);
}

#[test]
fn test_sponge_probability_extremes() {
    let none = create_sponge(&SpongeConfig::new(1, 0.0).unwrap());
    assert!(none.is_empty());

    let all = create_sponge(&SpongeConfig::new(1, 1.0).unwrap());
    assert_eq!(all.vertex_count(), 27 * 24);
}

#[test]
fn test_sponge_nodes_instance_like_mesh_sponge() {
    let nodes = sponge_nodes(2, -1.0, 0);
    assert_eq!(nodes.len(), 400);

    let mut unit_box: Mesh = Mesh::new();
    add_box(&mut unit_box, &Mat4::IDENTITY, 1, 1, 1);
    let merged = instance(&nodes, &unit_box);
    assert_eq!(merged.vertex_count(), 400 * 24);
    assert_indices_in_range(&merged);
}
