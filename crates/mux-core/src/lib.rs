//! trie-mux Core Library
//!
//! This crate provides the path-matching engine behind the trie-mux router.
//! Routes like `/users/:id/files/:path*` are stored in a prefix tree and
//! incoming paths are resolved to a handler plus the captured params.
//!
//! # Architecture
//!
//! Route registration and lookup both start by splitting the path on `/`.
//! Registration types every segment (literal, `:param`, `:catchall*`) and
//! extends the tree; lookup walks the tree with plain segments, preferring
//! literal children over params and falling back to the deepest catch-all.
//!
//! # Modules
//!
//! - `token`: path segmentation and route pattern tokenization
//! - `trie`: the routing trie (`append` / `match_path`)
//! - `router`: not-found substitution over a sealed trie
//! - `types`: captured params and match results
//! - `error`: the error taxonomy

pub mod error;
pub mod router;
pub mod token;
pub mod trie;
pub mod types;

// Re-export commonly used types
pub use error::{InvalidPathKind, RouteError};
pub use router::{Resolved, Router, RouterBuilder};
pub use token::{segments, tokenize, Token, TokenKind};
pub use trie::Trie;
pub use types::{Match, Params};
