//! The matchable capability and the fatal error surface
//!
//!     Everything a combinator can try against a token sequence implements
//!     `Matchable`: terminal matchers, references to named rules, and the
//!     combinators themselves, so grammars nest arbitrarily deeply. An
//!     alternative is immutable configuration plus pure evaluation; nothing
//!     here carries mutable state between attempts.
//!
//!     "Did not match" is never an error. Matching returns `Result` only for
//!     the programming-error class of faults that must not be absorbed into a
//!     quiet non-match: runaway recursion and a broken pruning invariant.

use std::collections::BTreeSet;
use std::fmt;

use super::context::MatchContext;
use super::outcome::MatchOutcome;
use super::token::Token;

/// Candidate first-leaf strings an alternative could start with, or the
/// admission that no cheap set can be computed.
///
/// This is a FIRST-set-style summary used by pruning to rule an alternative
/// out before a full match attempt. Terms are uppercase-normalized, like the
/// leaf view they are compared against. An `Unsupported` alternative is never
/// pruned; it always gets a full attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookahead {
    /// No cheap summary is available; the alternative must always be tried.
    Unsupported,
    /// The alternative can only start with one of these normalized strings.
    Terms(BTreeSet<String>),
}

impl Lookahead {
    /// Build a term set from anything yielding strings.
    pub fn terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Lookahead::Terms(terms.into_iter().map(Into::into).collect())
    }

    /// Whether a set was computed.
    pub fn is_supported(&self) -> bool {
        matches!(self, Lookahead::Terms(_))
    }
}

/// The capability contract for grammar alternatives.
///
/// Implementations are immutable after construction. `match_tokens` borrows
/// the sequence and returns an outcome splitting it; it must uphold the
/// containment invariant (matched plus remainder is exactly the input).
pub trait Matchable {
    /// Attempt to match a prefix of `segments`.
    ///
    /// Failure is the `MatchOutcome::unmatched` value, not an `Err`. Errors
    /// are reserved for fatal faults such as exceeding the context's
    /// recursion limit.
    fn match_tokens<'a>(
        &self,
        segments: &'a [Token],
        context: &MatchContext,
    ) -> Result<MatchOutcome<'a>, GrammarError>;

    /// Cheap summary of the strings this alternative could start with.
    ///
    /// The default is `Unsupported`, which opts out of pruning entirely.
    fn lookahead(&self, _context: &MatchContext) -> Lookahead {
        Lookahead::Unsupported
    }

    /// Whether an enclosing combinator may treat absence of this alternative
    /// as acceptable rather than an error.
    fn is_optional(&self) -> bool {
        false
    }
}

/// Fatal faults distinct from ordinary match failure.
///
/// These indicate a broken grammar or a broken invariant, not an input that
/// merely failed to parse, and callers should propagate them rather than
/// treat them as "no match".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The matching call tree descended past the context's depth limit,
    /// which for a finite input means a cyclic grammar.
    DepthLimit(usize),
    /// A non-trivia lookahead candidate was checked against an input whose
    /// leaves are all trivia. Pruning only anchors candidates it has already
    /// found in the leaf view, so this cannot happen for well-formed input.
    NoAnchor {
        /// The candidate term being anchored when the invariant broke.
        candidate: String,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::DepthLimit(limit) => {
                write!(f, "match recursion exceeded depth limit {}", limit)
            }
            GrammarError::NoAnchor { candidate } => write!(
                f,
                "lookahead candidate {:?} found in a leaf view with no non-trivia leaf",
                candidate
            ),
        }
    }
}

impl std::error::Error for GrammarError {}
