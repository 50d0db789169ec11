//! Default-handler routing on top of the trie.
//!
//! The trie reports a miss as `None`. A [`Router`] is the caller that turns
//! a miss into its not-found handler. Routes can only be added while the
//! router is still a [`RouterBuilder`].

use log::debug;

use crate::error::RouteError;
use crate::trie::Trie;
use crate::types::Params;

/// Collects routes and the not-found handler.
pub struct RouterBuilder<H> {
    trie: Trie<H>,
    not_found: Option<H>,
}

impl<H> Default for RouterBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> From<Trie<H>> for RouterBuilder<H> {
    fn from(trie: Trie<H>) -> Self {
        Self {
            trie,
            not_found: None,
        }
    }
}

impl<H> RouterBuilder<H> {
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            not_found: None,
        }
    }

    /// Add a route. See [`Trie::append`] for the pattern syntax.
    pub fn route(&mut self, path: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.trie.append(path, handler)?;
        Ok(self)
    }

    /// Set the handler used when no route matches. Replaces any earlier one.
    pub fn not_found(&mut self, handler: H) -> &mut Self {
        self.not_found = Some(handler);
        self
    }

    pub fn has_not_found(&self) -> bool {
        self.not_found.is_some()
    }

    /// Seal the route table.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::MissingNotFound`] if no not-found handler was set.
    pub fn build(self) -> Result<Router<H>, RouteError> {
        let not_found = self.not_found.ok_or(RouteError::MissingNotFound)?;
        debug!("router built with {} routes", self.trie.len());
        Ok(Router {
            trie: self.trie,
            not_found,
        })
    }
}

/// A sealed route table with a not-found handler.
pub struct Router<H> {
    trie: Trie<H>,
    not_found: H,
}

/// The handler to run for a path and the params to run it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a, H> {
    pub params: Params,
    pub handler: &'a H,
    /// `false` when `handler` is the not-found handler.
    pub matched: bool,
}

impl<H> Router<H> {
    pub fn builder() -> RouterBuilder<H> {
        RouterBuilder::new()
    }

    /// Resolve `path`, substituting the not-found handler on a miss.
    pub fn resolve(&self, path: &str) -> Result<Resolved<'_, H>, RouteError> {
        Ok(match self.trie.match_path(path)? {
            Some(m) => Resolved {
                params: m.params,
                handler: m.handler,
                matched: true,
            },
            None => {
                debug!("no route for `{}`", path);
                Resolved {
                    params: Params::new(),
                    handler: &self.not_found,
                    matched: false,
                }
            }
        })
    }

    pub fn trie(&self) -> &Trie<H> {
        &self.trie
    }
}
