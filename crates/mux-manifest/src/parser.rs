use std::fmt;

use mux_core::RouteError;
use serde::{Deserialize, Serialize};

const COMMENT_PREFIX: char = '#';

/// One route line: a path pattern and the name of its handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    pub handler: String,
    /// 1-based line (text) or array position (JSON).
    #[serde(skip)]
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticKind {
    #[error("expected `<path> <handler>`, found {0} fields")]
    Malformed(usize),
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// A problem tied to one line of a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub path: Option<String>,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "line {} (`{}`): {}", self.line, path, self.kind),
            None => write!(f, "line {}: {}", self.line, self.kind),
        }
    }
}

/// Error type for manifests that cannot be read at all.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedManifest {
    pub entries: Vec<RouteEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse a text manifest: one `<path> <handler>` pair per line.
///
/// Blank lines and `#` comments are skipped. Malformed lines are reported
/// and do not stop parsing.
pub fn parse_manifest(text: &str) -> ParsedManifest {
    let mut manifest = ParsedManifest::default();

    for (idx, raw_line) in text.lines().enumerate() {
        let line = idx + 1;
        let fields: Vec<&str> = raw_line
            .split_whitespace()
            .take_while(|field| !field.starts_with(COMMENT_PREFIX))
            .collect();

        match fields.as_slice() {
            [] => continue,
            [path, handler] => manifest.entries.push(RouteEntry {
                path: (*path).to_string(),
                handler: (*handler).to_string(),
                line,
            }),
            other => manifest.diagnostics.push(Diagnostic {
                line,
                path: other.first().map(|path| (*path).to_string()),
                kind: DiagnosticKind::Malformed(other.len()),
            }),
        }
    }

    manifest
}

/// Parse a JSON manifest: an array of `{"path", "handler"}` objects.
pub fn parse_json_manifest(text: &str) -> Result<ParsedManifest, ManifestError> {
    let mut entries: Vec<RouteEntry> = serde_json::from_str(text)?;
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.line = idx + 1;
    }

    Ok(ParsedManifest {
        entries,
        diagnostics: Vec::new(),
    })
}
