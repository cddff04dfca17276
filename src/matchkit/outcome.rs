//! Match outcomes
//!
//!     Every match attempt produces a `MatchOutcome`: the prefix of the input
//!     it consumed and the suffix it left behind. The two slices always come
//!     from the same original sequence, so `matched ++ remainder` reconstructs
//!     the input exactly, token for token. Matchers never create, destroy or
//!     reorder tokens.
//!
//!     Failing to match is not an error, it is the common case while a grammar
//!     explores alternatives. The canonical failure value is an outcome with an
//!     empty matched prefix and the whole input as remainder. A zero-length
//!     *successful* match has the same shape; only the caller knows whether
//!     zero consumption was acceptable (optional alternatives, `min_times` of
//!     zero), so the distinction lives in the caller, not in this type.

use serde::Serialize;

use super::token::Token;

/// The result of a match attempt over a borrowed token sequence.
///
/// `matched` is always a prefix of the sequence the attempt was given and
/// `remainder` the adjacent suffix. The type is `Copy`: it is two slice
/// references, nothing is cloned when outcomes are passed around.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchOutcome<'a> {
    matched: &'a [Token],
    remainder: &'a [Token],
}

impl<'a> MatchOutcome<'a> {
    /// The canonical failure value: nothing consumed, everything left.
    pub fn unmatched(segments: &'a [Token]) -> Self {
        MatchOutcome {
            matched: &segments[..0],
            remainder: segments,
        }
    }

    /// An outcome consuming the first `n` tokens of `segments`.
    ///
    /// Panics if `n` exceeds the sequence length; callers track consumption
    /// against the same sequence they split.
    pub fn split_at(segments: &'a [Token], n: usize) -> Self {
        let (matched, remainder) = segments.split_at(n);
        MatchOutcome { matched, remainder }
    }

    /// An outcome consuming the whole sequence.
    pub fn complete(segments: &'a [Token]) -> Self {
        MatchOutcome {
            matched: segments,
            remainder: &segments[segments.len()..],
        }
    }

    /// The consumed prefix.
    pub fn matched(&self) -> &'a [Token] {
        self.matched
    }

    /// The unconsumed suffix.
    pub fn remainder(&self) -> &'a [Token] {
        self.remainder
    }

    /// Number of tokens consumed.
    pub fn matched_len(&self) -> usize {
        self.matched.len()
    }

    /// True iff nothing is left unconsumed.
    pub fn is_complete(&self) -> bool {
        self.remainder.is_empty()
    }

    /// True iff at least one token was consumed. This is the "did it match"
    /// test used when choosing between alternatives; a zero-length outcome is
    /// indistinguishable from failure at this level by design.
    pub fn has_match(&self) -> bool {
        !self.matched.is_empty()
    }

    /// Combine two outcomes left to right over their shared original input.
    ///
    /// `second` must have been produced from `first.remainder()`. The
    /// combination consumes both matched prefixes and keeps the second
    /// remainder, all as slices of `original`.
    pub fn combine(original: &'a [Token], first: Self, second: Self) -> Self {
        debug_assert_eq!(
            first.matched.len() + first.remainder.len(),
            original.len(),
            "first outcome does not cover the original sequence",
        );
        debug_assert_eq!(
            second.matched.len() + second.remainder.len(),
            first.remainder.len(),
            "second outcome does not cover the first remainder",
        );
        MatchOutcome::split_at(original, first.matched.len() + second.matched.len())
    }
}
