//! # Sponge Fractal
//!
//! Recursive cube splitting in the style of a Menger sponge.
//!
//! ## Algorithm
//!
//! ```text
//! seed cube ─┬─ split into 3x3x3 ─┬─ ... (level times) ─→ leaf cubes ─→ boxes
//!            └─ keep survivors    └─ keep survivors
//! ```
//!
//! Levels are processed iteratively with two cube lists that swap roles, so
//! memory holds at most two generations and the call stack stays flat.

use config::constants::{SpongeConfig, NODE_SEED_ORIGIN, NODE_SEED_SIZE};
use glam::{Mat4, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::node::Node;
use crate::primitives::cuboid::{add_box, box_size};
use crate::vertex::Vertex;

/// Rule deciding which of the 27 sub-cubes survive a split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitPolicy {
    /// Drop the center and the six face-center cubes, keeping 20.
    Menger,
    /// Keep each sub-cube independently with the given probability.
    Random {
        /// Survival probability in `0.0..=1.0`
        probability: f32,
    },
}

impl SplitPolicy {
    /// Maps a signed probability to a policy: negative values select
    /// [`SplitPolicy::Menger`], anything else [`SplitPolicy::Random`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use procedural_mesh::sponge::SplitPolicy;
    ///
    /// assert_eq!(SplitPolicy::from_probability(-1.0), SplitPolicy::Menger);
    /// assert_eq!(
    ///     SplitPolicy::from_probability(0.5),
    ///     SplitPolicy::Random { probability: 0.5 }
    /// );
    /// ```
    pub fn from_probability(probability: f32) -> Self {
        if probability < 0.0 {
            Self::Menger
        } else {
            Self::Random { probability }
        }
    }
}

/// Axis-aligned cube given by its origin corner and edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    /// Corner with the smallest coordinates
    pub origin: Vec3,
    /// Edge length
    pub size: f32,
}

impl Cube {
    /// Creates a cube.
    pub fn new(origin: Vec3, size: f32) -> Self {
        Self { origin, size }
    }

    /// Pushes the surviving third-size sub-cubes onto `out`.
    ///
    /// Sub-cubes are visited x-major, then y, then z. The random policy draws
    /// exactly one sample per sub-cube in that order.
    pub fn split<R: Rng>(&self, policy: SplitPolicy, rng: &mut R, out: &mut Vec<Cube>) {
        let size = self.size / 3.0;

        for x in 0..3 {
            for y in 0..3 {
                for z in 0..3 {
                    let keep = match policy {
                        SplitPolicy::Menger => {
                            let centered = [x, y, z].iter().filter(|&&i| i == 1).count();
                            centered < 2
                        }
                        SplitPolicy::Random { probability } => rng.random::<f32>() < probability,
                    };
                    if !keep {
                        continue;
                    }

                    let step = Vec3::new(x as f32, y as f32, z as f32) * size;
                    out.push(Cube::new(self.origin + step, size));
                }
            }
        }
    }

    /// Translate-then-scale matrix placing a unit-extent shape on this cube.
    pub fn placement(&self) -> Mat4 {
        Mat4::from_translation(self.origin) * Mat4::from_scale(Vec3::splat(self.size))
    }
}

/// Splits `seed` `level` times and returns the leaf cubes.
///
/// `level == 0` returns the seed itself.
pub fn subdivide<R: Rng>(seed: Cube, level: u32, policy: SplitPolicy, rng: &mut R) -> Vec<Cube> {
    let mut current = vec![seed];
    let mut next = Vec::new();

    for depth in 0..level {
        for cube in &current {
            cube.split(policy, rng, &mut next);
        }
        std::mem::swap(&mut current, &mut next);
        next.clear();
        log::debug!("sponge level {}: {} cubes", depth + 1, current.len());
    }

    current
}

/// Appends one box per leaf cube of the subdivided seed to `mesh`.
///
/// Each leaf becomes a 1x1x1-segment box placed with [`Cube::placement`],
/// followed by `transform`.
///
/// The box spans `[-1, 1]` before placement, so a leaf box covers
/// `origin ± size`: it is centered on the leaf's origin corner, not on the
/// leaf, and is twice the leaf's edge length. Neighbouring leaf boxes
/// therefore overlap, and a seed cube centered on the origin yields geometry
/// shifted toward negative coordinates (the default seed spans
/// `[-0.75, 0.25]` at level 0).
pub fn add_sponge<V: From<Vertex>, R: Rng>(
    mesh: &mut Mesh<V>,
    transform: &Mat4,
    seed: Cube,
    level: u32,
    policy: SplitPolicy,
    rng: &mut R,
) {
    let leaves = subdivide(seed, level, policy, rng);
    log::debug!("sponge {policy:?} level {level}: {} leaf boxes", leaves.len());

    let size = box_size(1, 1, 1).repeated(leaves.len());
    mesh.reserve(size.vertices, size.triangles, size.outlines);
    for leaf in &leaves {
        add_box(mesh, &(*transform * leaf.placement()), 1, 1, 1);
    }
}

/// Creates a standalone sponge from a validated configuration.
///
/// The random source is a ChaCha generator seeded from `config.seed`, so the
/// same configuration always produces the same mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::SpongeConfig;
/// use procedural_mesh::sponge::create_sponge;
///
/// let mesh = create_sponge(&SpongeConfig::new(1, -1.0).unwrap());
/// assert_eq!(mesh.vertex_count(), 20 * 24);
/// ```
pub fn create_sponge(config: &SpongeConfig) -> Mesh {
    let mut mesh = Mesh::new();
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    add_sponge(
        &mut mesh,
        &Mat4::IDENTITY,
        Cube::new(Vec3::from_array(config.origin), config.size),
        config.level,
        SplitPolicy::from_probability(config.probability),
        &mut rng,
    );
    mesh
}

/// Validates `level` and `probability` and creates a sponge seeded with
/// `seed`.
///
/// # Errors
///
/// Returns [`MeshError::Config`](crate::MeshError::Config) when the level is
/// too deep, the probability is out of range, or the worst case would not fit
/// 32-bit indices.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::sponge::try_create_sponge;
///
/// assert_eq!(try_create_sponge(1, -1.0, 0).unwrap().vertex_count(), 20 * 24);
/// assert!(try_create_sponge(1, 2.0, 0).is_err());
/// ```
pub fn try_create_sponge(level: u32, probability: f32, seed: u64) -> MeshResult<Mesh> {
    let config = SpongeConfig::new(level, probability)?.with_seed(seed);
    Ok(create_sponge(&config))
}

/// Returns one placement node per leaf cube instead of geometry.
///
/// The seed is the unit cube at `(-0.5, -0.5, -0.5)`. Every node refers to
/// mesh 0 and carries the leaf origin as translation and its edge length as
/// uniform scale.
pub fn sponge_nodes(level: u32, probability: f32, seed: u64) -> Vec<Node> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let seed_cube = Cube::new(Vec3::from_array(NODE_SEED_ORIGIN), NODE_SEED_SIZE);

    subdivide(seed_cube, level, SplitPolicy::from_probability(probability), &mut rng)
        .into_iter()
        .map(|cube| Node {
            translation: cube.origin,
            scale: Vec3::splat(cube.size),
            ..Node::default()
        })
        .collect()
}
