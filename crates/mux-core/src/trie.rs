//! Routing Trie
//!
//! Each node dispatches the next segment three ways: a literal child, a
//! single named param child, and a single catch-all. Lookups prefer the
//! literal child, then the param child, and fall back to the deepest
//! catch-all seen on the way down. There is no backtracking.

use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{InvalidPathKind, RouteError};
use crate::token::{segments, tokenize, TokenKind, CATCH_ALL_SUFFIX, PARAM_PREFIX};
use crate::types::{Match, Params};

// =============================================================================
// Nodes
// =============================================================================

#[derive(Debug)]
struct Node<H> {
    statics: HashMap<Box<str>, Node<H>>,
    param: Option<Box<ParamChild<H>>>,
    catch_all: Option<CatchAll<H>>,
    handler: Option<H>,
}

#[derive(Debug)]
struct ParamChild<H> {
    name: Box<str>,
    node: Node<H>,
}

/// A catch-all is always terminal, so it carries a handler and no children.
#[derive(Debug)]
struct CatchAll<H> {
    name: Box<str>,
    handler: H,
}

impl<H> Node<H> {
    fn new() -> Self {
        Self {
            statics: HashMap::new(),
            param: None,
            catch_all: None,
            handler: None,
        }
    }
}

/// Name bound to an existing param or catch-all position must not change.
#[inline]
fn ensure_same_name(existing: &str, incoming: &str) -> Result<(), RouteError> {
    if existing == incoming {
        Ok(())
    } else {
        Err(RouteError::ParamConflict {
            existing: existing.to_string(),
            incoming: incoming.to_string(),
        })
    }
}

// =============================================================================
// Trie
// =============================================================================

/// A prefix tree mapping path patterns to handlers.
///
/// Handlers are opaque: the trie stores them and hands back references,
/// nothing more.
#[derive(Debug)]
pub struct Trie<H> {
    root: Node<H>,
    len: usize,
}

impl<H> Default for Trie<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Trie<H> {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            len: 0,
        }
    }

    /// Number of registered routes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Register `handler` for the route pattern `path`.
    ///
    /// Segments starting with `:` are params, `:name*` is a catch-all and
    /// must come last. The root route is `/`.
    ///
    /// # Errors
    ///
    /// Fails on malformed patterns, on a param position redefined under a
    /// different name, and on a second handler for the same position.
    /// Conflicts can only arise on nodes that already exist, so a failed
    /// append never adds nodes.
    pub fn append(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        if path.is_empty() {
            return Err(RouteError::invalid(path, InvalidPathKind::Empty));
        }

        let tokens = tokenize(path)?;
        let duplicate = || RouteError::DuplicateRoute {
            path: path.to_string(),
        };

        let mut node = &mut self.root;
        for token in &tokens {
            match token.kind {
                TokenKind::Static => {
                    node = node.statics.entry(token.name.into()).or_insert_with(Node::new);
                }
                TokenKind::Param => {
                    let param = node.param.get_or_insert_with(|| {
                        Box::new(ParamChild {
                            name: token.name.into(),
                            node: Node::new(),
                        })
                    });
                    ensure_same_name(&param.name, token.name)?;
                    node = &mut param.node;
                }
                // Tokenization guarantees this is the last token
                TokenKind::CatchAll => {
                    if let Some(existing) = &node.catch_all {
                        ensure_same_name(&existing.name, token.name)?;
                        return Err(duplicate());
                    }
                    node.catch_all = Some(CatchAll {
                        name: token.name.into(),
                        handler,
                    });
                    self.len += 1;
                    debug!("registered catch-all route `{}`", path);
                    return Ok(());
                }
            }
        }

        if node.handler.is_some() {
            return Err(duplicate());
        }

        node.handler = Some(handler);
        self.len += 1;
        debug!("registered route `{}` ({} segments)", path, tokens.len());
        Ok(())
    }

    /// Resolve `path` to its handler and captured params.
    ///
    /// Returns `Ok(None)` when nothing matches, including when the walk
    /// ends on a node that has no handler and no catch-all was passed.
    ///
    /// # Errors
    ///
    /// Fails only when `path` contains an empty interior segment.
    pub fn match_path(&self, path: &str) -> Result<Option<Match<'_, H>>, RouteError> {
        let segments = segments(path)?;

        let mut node = &self.root;
        let mut params = Params::new();
        let mut fallback: Option<Fallback<'_, H>> = None;

        for (idx, segment) in segments.iter().enumerate() {
            if let Some(catch_all) = &node.catch_all {
                fallback = Some(Fallback {
                    catch_all,
                    depth: params.len(),
                    from: idx,
                });
            }

            if let Some(child) = node.statics.get(*segment) {
                node = child;
                continue;
            }

            if let Some(param) = &node.param {
                params.push(&param.name, *segment);
                node = &param.node;
                continue;
            }

            trace!("`{}` stopped at segment {}", path, idx);
            return Ok(fallback.map(|f| f.into_match(params, &segments)));
        }

        if let Some(handler) = &node.handler {
            trace!("`{}` matched with {} params", path, params.len());
            return Ok(Some(Match { params, handler }));
        }

        Ok(fallback.map(|f| f.into_match(params, &segments)))
    }

    /// Every registered route as `(pattern, handler)`, sorted by pattern.
    ///
    /// Patterns are rendered canonically: a leading slash, no trailing
    /// slash, and `/` for the root.
    pub fn routes(&self) -> Vec<(String, &H)> {
        let mut routes = Vec::with_capacity(self.len);
        let mut stack: Vec<(String, &Node<H>)> = vec![(String::new(), &self.root)];

        while let Some((prefix, node)) = stack.pop() {
            if let Some(handler) = &node.handler {
                routes.push((render_root(&prefix), handler));
            }

            if let Some(catch_all) = &node.catch_all {
                let pattern = format!("{prefix}/{PARAM_PREFIX}{}{CATCH_ALL_SUFFIX}", catch_all.name);
                routes.push((pattern, &catch_all.handler));
            }

            if let Some(param) = &node.param {
                stack.push((format!("{prefix}/{PARAM_PREFIX}{}", param.name), &param.node));
            }

            for (segment, child) in &node.statics {
                stack.push((format!("{prefix}/{segment}"), child));
            }
        }

        routes.sort_by(|a, b| a.0.cmp(&b.0));
        routes
    }
}

#[inline]
fn render_root(prefix: &str) -> String {
    if prefix.is_empty() {
        "/".to_string()
    } else {
        prefix.to_string()
    }
}

// =============================================================================
// Catch-all fallback
// =============================================================================

/// The deepest catch-all passed so far, and where its capture starts.
struct Fallback<'a, H> {
    catch_all: &'a CatchAll<H>,
    /// Number of params bound when the catch-all was recorded.
    depth: usize,
    /// Index of the first segment it absorbs.
    from: usize,
}

impl<'a, H> Fallback<'a, H> {
    fn into_match(self, mut params: Params, segments: &[&str]) -> Match<'a, H> {
        let catch_all = self.catch_all;
        params.truncate(self.depth);
        params.push(&catch_all.name, segments[self.from..].join("/"));
        Match {
            params,
            handler: &catch_all.handler,
        }
    }
}
