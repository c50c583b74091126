//! Centralized configuration values shared by the procedural mesh generators.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for single-precision comparisons of generated geometry.
///
/// Vertex data is stored as `f32` for GPU upload, so this is much looser than
/// a double-precision epsilon would be.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!((1.0f32 - (1.0 + 1.0e-7)).abs() < EPSILON);
/// ```
pub const EPSILON: f32 = 1.0e-5;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default subdivision count of a standalone plane along each axis.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_PLANE_SEGMENTS;
/// assert_eq!(DEFAULT_PLANE_SEGMENTS, 1);
/// ```
pub const DEFAULT_PLANE_SEGMENTS: u32 = 1;

/// Default subdivision count of a standalone box along each axis.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_BOX_SEGMENTS;
/// assert_eq!(DEFAULT_BOX_SEGMENTS, 1);
/// ```
pub const DEFAULT_BOX_SEGMENTS: u32 = 1;

/// Default `(longitude, latitude)` segment counts for spheres.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SPHERE_SEGMENTS;
/// let (w, h) = DEFAULT_SPHERE_SEGMENTS;
/// assert!(w >= h);
/// ```
pub const DEFAULT_SPHERE_SEGMENTS: (u32, u32) = (16, 8);

/// Default `(major, minor)` segment counts for tori.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_TORUS_SEGMENTS;
/// assert_eq!(DEFAULT_TORUS_SEGMENTS, (16, 16));
/// ```
pub const DEFAULT_TORUS_SEGMENTS: (u32, u32) = (16, 16);

// =============================================================================
// SHAPE CONSTANTS
// =============================================================================

/// Distance from the torus axis to the center of the tube.
pub const TORUS_MAJOR_RADIUS: f32 = 0.8;

/// Radius of the torus tube. Kept at a quarter of [`TORUS_MAJOR_RADIUS`].
pub const TORUS_MINOR_RADIUS: f32 = 0.2;

/// Origin corner of the seed cube used by the sponge mesh generator.
///
/// The seed cube itself is centered on the origin. Leaf boxes are drawn
/// around each leaf's origin corner with half-extent equal to the leaf size,
/// so the generated geometry is offset toward negative coordinates.
///
/// # Examples
/// ```
/// use config::constants::{SPONGE_SEED_ORIGIN, SPONGE_SEED_SIZE};
/// assert_eq!(SPONGE_SEED_ORIGIN[0] + SPONGE_SEED_SIZE / 2.0, 0.0);
/// ```
pub const SPONGE_SEED_ORIGIN: [f32; 3] = [-0.25, -0.25, -0.25];

/// Edge length of the seed cube used by the sponge mesh generator.
pub const SPONGE_SEED_SIZE: f32 = 0.5;

/// Origin corner of the seed cube used for sponge node placement.
pub const NODE_SEED_ORIGIN: [f32; 3] = [-0.5, -0.5, -0.5];

/// Edge length of the seed cube used for sponge node placement.
pub const NODE_SEED_SIZE: f32 = 1.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Recursion depth used when no level is requested explicitly.
pub const DEFAULT_SPONGE_LEVEL: u32 = 3;

/// Deepest sponge recursion accepted by [`SpongeConfig::new`].
///
/// Each deterministic level multiplies the cube count by 20, so level 6
/// yields 6.4e7 leaves and 1.536e9 vertices, the deepest level that still
/// fits a 32-bit index buffer. Random survival multiplies by up to 27 and is
/// additionally bounded by [`MAX_VERTICES`].
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_SPONGE_LEVEL, MAX_SPONGE_LEVEL};
/// assert!(DEFAULT_SPONGE_LEVEL <= MAX_SPONGE_LEVEL);
/// ```
pub const MAX_SPONGE_LEVEL: u32 = 6;

/// Vertices emitted for a single sponge leaf (a one-segment box).
pub const SPONGE_LEAF_VERTICES: u64 = 24;

/// Maximum number of vertices addressable by a 32-bit index buffer.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// assert_eq!(MAX_VERTICES, u32::MAX as usize);
/// ```
pub const MAX_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// COMPOSITE SETTINGS
// =============================================================================

/// Validated settings for the recursive cube-splitting generator.
///
/// A negative `probability` selects the deterministic 20-of-27 pattern, any
/// value in `0.0..=1.0` selects independent random survival.
///
/// # Examples
/// ```
/// use config::constants::SpongeConfig;
/// let config = SpongeConfig::new(2, 0.75).expect("valid config").with_seed(42);
/// assert_eq!(config.seed, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpongeConfig {
    /// Number of subdivision steps applied to the seed cube.
    pub level: u32,
    /// Survival probability of each sub-cube, or negative for the fixed pattern.
    pub probability: f32,
    /// Seed for the random source used by the probabilistic pattern.
    pub seed: u64,
    /// Origin corner of the seed cube.
    pub origin: [f32; 3],
    /// Edge length of the seed cube.
    pub size: f32,
}

impl SpongeConfig {
    /// Builds a configuration enforcing strict validation of the recursion
    /// level and survival probability.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, SpongeConfig};
    /// assert_eq!(
    ///     SpongeConfig::new(1, 1.5).unwrap_err(),
    ///     ConfigError::InvalidProbability(1.5)
    /// );
    /// ```
    pub fn new(level: u32, probability: f32) -> Result<Self, ConfigError> {
        if level > MAX_SPONGE_LEVEL {
            return Err(ConfigError::InvalidLevel(level));
        }
        if !probability.is_finite() || probability > 1.0 {
            return Err(ConfigError::InvalidProbability(probability));
        }
        let vertices = worst_case_vertices(level, probability);
        if vertices > MAX_VERTICES as u64 {
            return Err(ConfigError::TooManyVertices { level, vertices });
        }
        Ok(Self {
            level,
            probability,
            ..Self::default()
        })
    }

    /// Replaces the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the seed cube, rejecting a non-finite origin or an edge
    /// length that is not strictly positive.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, SpongeConfig, NODE_SEED_ORIGIN, NODE_SEED_SIZE};
    /// let config = SpongeConfig::default()
    ///     .with_seed_cube(NODE_SEED_ORIGIN, NODE_SEED_SIZE)
    ///     .expect("valid cube");
    /// assert_eq!(config.size, 1.0);
    /// assert_eq!(
    ///     SpongeConfig::default().with_seed_cube(NODE_SEED_ORIGIN, -1.0),
    ///     Err(ConfigError::InvalidSize(-1.0))
    /// );
    /// ```
    pub fn with_seed_cube(mut self, origin: [f32; 3], size: f32) -> Result<Self, ConfigError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(ConfigError::InvalidSize(size));
        }
        if let Some(&coordinate) = origin.iter().find(|c| !c.is_finite()) {
            return Err(ConfigError::InvalidOrigin(coordinate));
        }
        self.origin = origin;
        self.size = size;
        Ok(self)
    }

    /// Returns true when the fixed 20-of-27 pattern is selected.
    pub fn is_deterministic(&self) -> bool {
        self.probability < 0.0
    }
}

impl Default for SpongeConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_SPONGE_LEVEL,
            probability: -1.0,
            seed: 0,
            origin: SPONGE_SEED_ORIGIN,
            size: SPONGE_SEED_SIZE,
        }
    }
}

/// Upper bound on the vertices a sponge of the given level can emit.
///
/// The fixed pattern keeps 20 sub-cubes per split, random survival at most
/// 27, and a zero probability none at all. Saturates at `u64::MAX`.
///
/// # Examples
/// ```
/// use config::constants::worst_case_vertices;
/// assert_eq!(worst_case_vertices(0, -1.0), 24);
/// assert_eq!(worst_case_vertices(2, -1.0), 400 * 24);
/// assert_eq!(worst_case_vertices(2, 0.5), 729 * 24);
/// assert_eq!(worst_case_vertices(2, 0.0), 0);
/// ```
pub fn worst_case_vertices(level: u32, probability: f32) -> u64 {
    let kept_per_split: u64 = if probability < 0.0 {
        20
    } else if probability > 0.0 {
        27
    } else {
        0
    };
    kept_per_split
        .checked_pow(level)
        .map_or(u64::MAX, |leaves| leaves.saturating_mul(SPONGE_LEAF_VERTICES))
}

/// Checks that a segment count can form at least one grid cell.
///
/// # Examples
/// ```
/// use config::constants::{validate_segments, ConfigError};
/// assert_eq!(validate_segments(4), Ok(4));
/// assert_eq!(validate_segments(0), Err(ConfigError::InvalidSegments(0)));
/// ```
pub fn validate_segments(segments: u32) -> Result<u32, ConfigError> {
    if segments == 0 {
        return Err(ConfigError::InvalidSegments(segments));
    }
    Ok(segments)
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when a segment count is zero.
    InvalidSegments(u32),
    /// Raised when the recursion level exceeds [`MAX_SPONGE_LEVEL`].
    InvalidLevel(u32),
    /// Raised when the survival probability is not finite or above one.
    InvalidProbability(f32),
    /// Raised when a seed cube edge length is not finite or not positive.
    InvalidSize(f32),
    /// Raised when a seed cube origin has a non-finite coordinate.
    InvalidOrigin(f32),
    /// Raised when a sponge could emit more vertices than 32-bit indices address.
    TooManyVertices {
        /// Requested recursion level.
        level: u32,
        /// Worst-case vertex count at that level.
        vertices: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSegments(value) => {
                write!(f, "segments must be >= 1: {value}")
            }
            ConfigError::InvalidLevel(value) => {
                write!(f, "sponge level must be <= {MAX_SPONGE_LEVEL}: {value}")
            }
            ConfigError::InvalidProbability(value) => {
                write!(f, "probability must be negative or within [0, 1]: {value}")
            }
            ConfigError::InvalidSize(value) => {
                write!(f, "seed cube size must be finite and > 0: {value}")
            }
            ConfigError::InvalidOrigin(value) => {
                write!(f, "seed cube origin must be finite: {value}")
            }
            ConfigError::TooManyVertices { level, vertices } => {
                write!(
                    f,
                    "sponge level {level} can emit {vertices} vertices (max: {MAX_VERTICES})"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
