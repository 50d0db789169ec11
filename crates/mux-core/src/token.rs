//! Path segmentation and tokenization
//!
//! Both functions borrow from the input path and never allocate per segment.

use crate::error::{InvalidPathKind, RouteError};

/// Prefix marking a named segment.
pub const PARAM_PREFIX: char = ':';
/// Suffix turning a named segment into a catch-all.
pub const CATCH_ALL_SUFFIX: char = '*';

// =============================================================================
// Tokens
// =============================================================================

/// How a path segment is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Matched by exact string equality.
    Static,
    /// Matches any single non-empty segment.
    Param,
    /// Matches one or more trailing segments.
    CatchAll,
}

/// One typed segment of a route pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Literal text for static tokens, the parameter name otherwise.
    pub name: &'a str,
}

impl<'a> Token<'a> {
    #[inline]
    pub const fn new(kind: TokenKind, name: &'a str) -> Self {
        Self { kind, name }
    }

    /// Whether this token binds a parameter.
    #[inline]
    pub fn is_named(&self) -> bool {
        self.kind != TokenKind::Static
    }
}

// =============================================================================
// Segmentation
// =============================================================================

/// Split a path on `/`, ignoring one flanking slash on each side.
///
/// `"/"` and `""` both yield no segments. Any remaining empty segment is
/// rejected.
pub fn segments(path: &str) -> Result<Vec<&str>, RouteError> {
    let mut segments: Vec<&str> = path.split('/').collect();

    // Strip leading slash
    if segments.first() == Some(&"") {
        segments.remove(0);
    }

    // Strip trailing slash
    if segments.last() == Some(&"") {
        segments.pop();
    }

    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(RouteError::invalid(path, InvalidPathKind::EmptySegment));
    }

    Ok(segments)
}

// =============================================================================
// Tokenization
// =============================================================================

/// Classify a single segment.
#[inline]
fn classify(segment: &str) -> Token<'_> {
    match segment.strip_prefix(PARAM_PREFIX) {
        None => Token::new(TokenKind::Static, segment),
        Some(name) => match name.strip_suffix(CATCH_ALL_SUFFIX) {
            Some(name) => Token::new(TokenKind::CatchAll, name),
            None => Token::new(TokenKind::Param, name),
        },
    }
}

/// Transform a route pattern into typed tokens.
///
/// Rejects unnamed params, parameter names used twice, and catch-all
/// tokens that are not the last token.
pub fn tokenize(path: &str) -> Result<Vec<Token<'_>>, RouteError> {
    let segments = segments(path)?;
    let mut tokens: Vec<Token<'_>> = Vec::with_capacity(segments.len());

    for (idx, segment) in segments.iter().enumerate() {
        let token = classify(segment);

        if token.is_named() {
            if token.name.is_empty() {
                return Err(RouteError::invalid(path, InvalidPathKind::UnnamedParam));
            }

            if tokens.iter().any(|t| t.is_named() && t.name == token.name) {
                return Err(RouteError::DuplicateParamName {
                    path: path.to_string(),
                    name: token.name.to_string(),
                });
            }

            if token.kind == TokenKind::CatchAll && idx + 1 != segments.len() {
                return Err(RouteError::CatchAllNotTerminal {
                    name: token.name.to_string(),
                });
            }
        }

        tokens.push(token);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_strip_flanking_slashes() {
        assert_eq!(segments("/a/b/").unwrap(), vec!["a", "b"]);
        assert_eq!(segments("a/b").unwrap(), vec!["a", "b"]);
        assert_eq!(segments("/").unwrap(), Vec::<&str>::new());
        assert_eq!(segments("").unwrap(), Vec::<&str>::new());
    }

    #[test]
    fn test_segments_reject_double_slashes() {
        for path in ["a//b", "//", "/a//", "//a"] {
            let err = segments(path).unwrap_err();
            assert!(matches!(
                err,
                RouteError::InvalidPath { kind: InvalidPathKind::EmptySegment, .. }
            ), "{path}");
        }
    }

    #[test]
    fn test_tokenize_kinds() {
        let tokens = tokenize("/users/:id/files/:rest*").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Static, "users"),
                Token::new(TokenKind::Param, "id"),
                Token::new(TokenKind::Static, "files"),
                Token::new(TokenKind::CatchAll, "rest"),
            ]
        );
    }

    #[test]
    fn test_tokenize_is_pure() {
        let path = "a/:b/c/:d*";
        assert_eq!(tokenize(path), tokenize(path));
    }

    #[test]
    fn test_tokenize_unnamed_param() {
        for path in ["a/:", "a/:*", ":/b"] {
            assert!(matches!(
                tokenize(path),
                Err(RouteError::InvalidPath { kind: InvalidPathKind::UnnamedParam, .. })
            ), "{path}");
        }
    }

    #[test]
    fn test_tokenize_duplicate_param_name() {
        let err = tokenize("a/:b/c/:b").unwrap_err();
        assert_eq!(err, RouteError::DuplicateParamName {
            path: "a/:b/c/:b".into(),
            name: "b".into(),
        });
        assert!(err.to_string().contains("duplicate param name `b`"));

        // Catch-all names share the namespace
        assert!(matches!(
            tokenize(":b/:b*"),
            Err(RouteError::DuplicateParamName { .. })
        ));

        // A static segment with the same text is not a parameter
        assert!(tokenize("b/:b").is_ok());
    }

    #[test]
    fn test_tokenize_catch_all_must_be_last() {
        let err = tokenize("a/:x*/b").unwrap_err();
        assert_eq!(err, RouteError::CatchAllNotTerminal { name: "x".into() });
        assert!(err.to_string().contains("end of a path"));
    }
}
