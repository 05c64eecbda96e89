//! Typed error handling for graphwalk.
//!
//! Construction and input errors are fatal and typed so callers can match
//! on them. Queries that find nothing (no path, no cycle) are never errors;
//! they come back as `None` or `false`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for graph construction and input handling.
#[derive(Error, Debug)]
pub enum GraphError {
    /// I/O error when opening or reading an input file
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Input text does not follow the `V`, `E`, edge-list format
    #[error("Malformed input at line {line}: {message}")]
    MalformedInput {
        /// Line number (1-indexed)
        line: usize,
        message: String,
    },

    /// An edge endpoint or query source outside `[0, V)`
    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl GraphError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a malformed-input error at a 1-indexed line.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            message: message.into(),
        }
    }

    pub fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Self::VertexOutOfRange {
            vertex,
            vertex_count,
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get the input line associated with this error, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedInput { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Convenience type alias for graphwalk results.
pub type GraphResult<T> = Result<T, GraphError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> GraphResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> GraphResult<T> {
        self.map_err(|e| GraphError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let err = GraphError::io(
            PathBuf::from("/data/tinyDG.txt"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(matches!(err, GraphError::Io { .. }));
        assert_eq!(err.path(), Some(&PathBuf::from("/data/tinyDG.txt")));
        assert!(err.to_string().contains("/data/tinyDG.txt"));
    }

    #[test]
    fn test_malformed_carries_line() {
        let err = GraphError::malformed(3, "expected two vertices");
        assert_eq!(err.line(), Some(3));
        assert!(err.to_string().contains("line 3"));
        assert!(err.path().is_none());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = GraphError::out_of_range(12, 10);
        assert!(matches!(
            err,
            GraphError::VertexOutOfRange {
                vertex: 12,
                vertex_count: 10
            }
        ));
        assert!(err.to_string().contains("12"));
        assert!(err.line().is_none());
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let graph_result = result.with_path("/missing/graph.txt");
        assert!(matches!(graph_result, Err(GraphError::Io { .. })));
    }
}
