//! trie-mux Route Manifests
//!
//! This crate reads route tables (text or JSON) and compiles them into a
//! [`mux_core::Trie`] keyed by handler name.

pub mod parser;
pub mod compiler;

pub use compiler::{compile_manifest, CompileOutcome, ManifestStats};
pub use parser::{
    parse_json_manifest, parse_manifest, Diagnostic, DiagnosticKind, ManifestError,
    ParsedManifest, RouteEntry,
};
