//! # Mesh Errors
//!
//! Error types for the checked mesh entry points. The generators themselves
//! are total over well-formed input and never fail.

use config::constants::ConfigError;
use thiserror::Error;

/// Which index buffer an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// Triangle index triples.
    Triangle,
    /// Outline index pairs.
    Outline,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexKind::Triangle => f.write_str("triangle"),
            IndexKind::Outline => f.write_str("outline"),
        }
    }
}

/// Errors reported while checking or configuring mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Invalid generator configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// An index references a vertex that does not exist
    #[error("{kind} {position} references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        /// Buffer holding the bad index
        kind: IndexKind,
        /// Triangle or outline number within that buffer
        position: usize,
        /// The offending vertex index
        index: u32,
        /// Vertex count at the time of the check
        vertex_count: usize,
    },

    /// A node refers to a mesh that was not supplied
    #[error("node {node} refers to mesh {mesh} but only {available} meshes were given")]
    MissingMesh {
        /// Position of the node
        node: usize,
        /// Requested mesh index
        mesh: usize,
        /// Number of meshes supplied
        available: usize,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Actual vertex count
        count: usize,
        /// Largest addressable count
        max: usize,
    },
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::IndexOutOfRange {
            kind: IndexKind::Outline,
            position: 3,
            index: 9,
            vertex_count: 4,
        };
        let message = err.to_string();
        assert!(message.contains("outline 3"));
        assert!(message.contains("vertex 9"));

        let err: MeshError = ConfigError::InvalidSegments(0).into();
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
