//! Matching context
//!
//!     A `MatchContext` tracks how deep the matching call tree has descended.
//!     The root context is created by whoever starts a parse; every nested
//!     match attempt runs under a child produced by `descend`. Children are
//!     plain values scoped to the attempt, so they are released on every exit
//!     path, match or no match, without any shared mutable state threading
//!     results back up.
//!
//!     The depth limit exists to turn a cyclic grammar into a reportable
//!     fault instead of a stack overflow. Input length and repetition bounds
//!     already bound well-formed grammars; the limit only trips on broken
//!     ones.

use super::matchable::GrammarError;

/// Default number of nested descends allowed before a cyclic grammar is
/// assumed.
pub const DEFAULT_DEPTH_LIMIT: usize = 512;

/// Depth tracking for one matching call tree.
///
/// Carries no result state; matchers read nothing back from it except the
/// ability to descend further.
#[derive(Debug, Clone)]
pub struct MatchContext {
    depth: usize,
    depth_limit: usize,
}

impl MatchContext {
    /// Root context with the default depth limit.
    pub fn root() -> Self {
        MatchContext::with_limit(DEFAULT_DEPTH_LIMIT)
    }

    /// Root context with an explicit depth limit. Mostly useful in tests
    /// that want the limit to trip quickly.
    pub fn with_limit(depth_limit: usize) -> Self {
        MatchContext {
            depth: 0,
            depth_limit,
        }
    }

    /// Current depth of this context below the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// A child context for one nested match attempt.
    ///
    /// Fails with [`GrammarError::DepthLimit`] once the limit is reached;
    /// that is a fault in the grammar, not a match failure.
    pub fn descend(&self) -> Result<MatchContext, GrammarError> {
        if self.depth >= self.depth_limit {
            return Err(GrammarError::DepthLimit(self.depth_limit));
        }
        Ok(MatchContext {
            depth: self.depth + 1,
            depth_limit: self.depth_limit,
        })
    }
}

impl Default for MatchContext {
    fn default() -> Self {
        MatchContext::root()
    }
}
