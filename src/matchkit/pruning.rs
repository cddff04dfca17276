//! Lookahead pruning
//!
//!     Before the chooser pays for full match attempts, it asks each
//!     alternative for its lookahead terms and compares them against the
//!     normalized leaf view of the input. Alternatives whose own terms prove
//!     they cannot start a match here are dropped; everything else survives.
//!     Alternatives without a computable set are always retained, so pruning
//!     can never produce a false negative. Declaration order is preserved
//!     because the chooser's tie-break depends on it.
//!
//!     A non-trivia term has to anchor: it must equal the first non-trivia
//!     leaf of the input, not merely appear somewhere ahead. A pure-trivia
//!     term skips the anchor check, since trivia does not mark where
//!     meaningful input begins.

use std::collections::BTreeSet;

use super::context::MatchContext;
use super::matchable::{GrammarError, Lookahead, Matchable};
use super::token::{raw_upper_leaves, Token};

/// Reduce `options` to the alternatives worth a full match attempt against
/// `segments`, in declaration order.
///
/// An empty result is valid: every alternative was provably unable to match,
/// and the caller can fail without attempting anything.
pub fn prune_options<'m>(
    segments: &[Token],
    options: &'m [Box<dyn Matchable>],
    context: &MatchContext,
) -> Result<Vec<&'m dyn Matchable>, GrammarError> {
    let leaves = raw_upper_leaves(segments);
    let mut available: Vec<&'m dyn Matchable> = Vec::new();

    for option in options {
        match option.lookahead(context) {
            Lookahead::Unsupported => {
                // No cheap summary; this one always gets a full attempt.
                available.push(option.as_ref());
            }
            Lookahead::Terms(terms) => {
                if retained_by_terms(&terms, &leaves)? {
                    available.push(option.as_ref());
                }
            }
        }
    }

    Ok(available)
}

/// Whether any candidate term justifies keeping its alternative.
fn retained_by_terms(terms: &BTreeSet<String>, leaves: &[String]) -> Result<bool, GrammarError> {
    for term in terms {
        if !leaves.iter().any(|leaf| leaf == term) {
            continue;
        }
        if !term.trim().is_empty() {
            // Anchor check: the term must be the first meaningful leaf.
            let first = match leaves.iter().find(|leaf| !leaf.trim().is_empty()) {
                Some(first) => first,
                None => {
                    // The term was found among the leaves yet no leaf has
                    // content. Unreachable for well-formed input.
                    return Err(GrammarError::NoAnchor {
                        candidate: term.clone(),
                    });
                }
            };
            if first != term {
                continue;
            }
        }
        return Ok(true);
    }
    Ok(false)
}
