//! Error taxonomy for route registration and matching.

use std::fmt;

/// Why a path was rejected as structurally malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPathKind {
    /// The path string was empty where a route was expected.
    Empty,
    /// An interior segment was empty (double slash).
    EmptySegment,
    /// A `:` or `:*` segment with no name.
    UnnamedParam,
}

impl fmt::Display for InvalidPathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("path cannot be empty"),
            Self::EmptySegment => f.write_str("path contains double slashes"),
            Self::UnnamedParam => f.write_str("param segment has no name"),
        }
    }
}

/// Error type for trie construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("invalid path `{path}`: {kind}")]
    InvalidPath { path: String, kind: InvalidPathKind },
    #[error("path `{path}` contains duplicate param name `{name}`")]
    DuplicateParamName { path: String, name: String },
    #[error("attempt to overwrite parameter `{existing}` with `{incoming}`")]
    ParamConflict { existing: String, incoming: String },
    #[error("catch-all `{name}` may only occur at the end of a path")]
    CatchAllNotTerminal { name: String },
    #[error("attempt to overwrite existing handler for `{path}`")]
    DuplicateRoute { path: String },
    #[error("a not-found handler must be set before the router is built")]
    MissingNotFound,
}

impl RouteError {
    pub(crate) fn invalid(path: &str, kind: InvalidPathKind) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = RouteError::ParamConflict {
            existing: "b".into(),
            incoming: "d".into(),
        };
        assert_eq!(err.to_string(), "attempt to overwrite parameter `b` with `d`");

        let err = RouteError::invalid("/a//b", InvalidPathKind::EmptySegment);
        assert_eq!(err.to_string(), "invalid path `/a//b`: path contains double slashes");
    }
}
