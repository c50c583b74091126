//! # Primitives
//!
//! Parametric surface generators (plane, box, sphere, torus).
//!
//! Every `add_*` function appends to a caller-provided mesh and offsets its
//! indices by the vertex count found there, so several shapes can share one
//! set of buffers. The `create_*` variants return a fresh mesh of canonical
//! vertices. The `try_create_*` variants validate segment counts and refuse
//! shapes whose vertices would not fit 32-bit indices.

pub mod cuboid;
pub mod plane;
pub mod sphere;
pub mod torus;

pub use cuboid::{add_box, box_size, create_box, try_create_box};
pub use plane::{add_plane, create_plane, plane_size, try_create_plane};
pub use sphere::{add_sphere, create_sphere, sphere_size, try_create_sphere};
pub use torus::{add_torus, create_torus, torus_size, try_create_torus};
