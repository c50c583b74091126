//! # Config Crate
//!
//! Centralized configuration constants for the procedural mesh generators.
//! Default subdivision counts, fixed radii, the fractal seed cube and the
//! safety limits all live here so the generator crate never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{SpongeConfig, DEFAULT_SPHERE_SEGMENTS, MAX_SPONGE_LEVEL};
//!
//! let (longitude, latitude) = DEFAULT_SPHERE_SEGMENTS;
//! assert_eq!((longitude, latitude), (16, 8));
//!
//! // Sponge configurations are validated on construction
//! let sponge = SpongeConfig::new(2, -1.0).unwrap();
//! assert_eq!(sponge.level, 2);
//! assert!(SpongeConfig::new(MAX_SPONGE_LEVEL + 1, -1.0).is_err());
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency-Free**: Plain arrays and scalars, no math library types
//! - **Validated**: Composite settings are checked when they are built

pub mod constants;
