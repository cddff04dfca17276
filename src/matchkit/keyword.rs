//! Terminal matchers
//!
//!     The smallest things a grammar can ask for: a literal keyword and a
//!     run-of-the-mill whitespace token. Both are immutable configuration
//!     plus a one-token comparison, and both can summarize themselves for
//!     lookahead pruning, which makes them the cheap, pruneable end of the
//!     alternative spectrum. Combinators supply the expensive end.

use super::context::MatchContext;
use super::matchable::{GrammarError, Lookahead, Matchable};
use super::outcome::MatchOutcome;
use super::token::Token;

/// Case-insensitive literal matcher for a single leaf token.
#[derive(Debug, Clone)]
pub struct Keyword {
    text: String,
    upper: String,
    optional: bool,
}

impl Keyword {
    /// A matcher for the given literal, compared case-insensitively.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let upper = text.to_uppercase();
        Keyword {
            text,
            upper,
            optional: false,
        }
    }

    /// Mark this keyword as optional for enclosing combinators.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The literal this matcher was built from.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Matchable for Keyword {
    fn match_tokens<'a>(
        &self,
        segments: &'a [Token],
        _context: &MatchContext,
    ) -> Result<MatchOutcome<'a>, GrammarError> {
        match segments.first() {
            Some(Token::Leaf { raw_upper, .. }) if raw_upper == &self.upper => {
                Ok(MatchOutcome::split_at(segments, 1))
            }
            _ => Ok(MatchOutcome::unmatched(segments)),
        }
    }

    fn lookahead(&self, _context: &MatchContext) -> Lookahead {
        Lookahead::terms([self.upper.clone()])
    }

    fn is_optional(&self) -> bool {
        self.optional
    }
}

/// Matcher for a single trivia token.
///
/// Its lookahead term is a lone space, which pruning treats as pure trivia:
/// presence anywhere in the leaf view is enough, no anchoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct Whitespace;

impl Matchable for Whitespace {
    fn match_tokens<'a>(
        &self,
        segments: &'a [Token],
        _context: &MatchContext,
    ) -> Result<MatchOutcome<'a>, GrammarError> {
        match segments.first() {
            Some(token) if token.is_trivia() => Ok(MatchOutcome::split_at(segments, 1)),
            _ => Ok(MatchOutcome::unmatched(segments)),
        }
    }

    fn lookahead(&self, _context: &MatchContext) -> Lookahead {
        Lookahead::terms([" "])
    }

    fn is_optional(&self) -> bool {
        false
    }
}
