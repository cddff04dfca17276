//! AnyNumberOf and OneOf
//!
//!     The repetition and alternation combinator: match any of a set of
//!     alternatives, a bounded number of times, against a token sequence.
//!     Alternatives are tried in declaration order; order matters and is part
//!     of the contract, not an implementation accident. One pass over the
//!     alternatives works like this:
//!
//!         1. prune alternatives whose lookahead terms prove they cannot
//!            start a match here
//!         2. try the survivors in order; the first *complete* match wins
//!            immediately
//!         3. otherwise keep the longest partial match, replacing it only on
//!            a strictly longer one, so the earliest-declared alternative
//!            wins length ties
//!
//!     The repetition driver runs that pass until the input runs out, an
//!     upper bound is reached, or a pass fails, optionally skipping trivia
//!     between matches. Trivia skipped ahead of a pass that then fails is put
//!     back: it was never consumed by a real match. There is no backtracking
//!     across repetitions; each pass is attempted exactly once.
//!
//!     The same input always parses identically: pruning is a pure
//!     optimization, iteration order is fixed, and nothing here caches or
//!     memoizes between calls.

use std::collections::BTreeSet;

use super::context::MatchContext;
use super::matchable::{GrammarError, Lookahead, Matchable};
use super::outcome::MatchOutcome;
use super::pruning::prune_options;
use super::token::{leading_trivia_len, Token};

/// Match any of the configured alternatives, `min_times` to `max_times`
/// times.
///
/// Configuration is fixed at construction. `exclude`, when present, vetoes
/// the whole combinator if it matches at the current position, regardless of
/// what the primary alternatives would do.
pub struct AnyNumberOf {
    elements: Vec<Box<dyn Matchable>>,
    min_times: usize,
    max_times: Option<usize>,
    allow_gaps: bool,
    exclude: Option<Box<dyn Matchable>>,
    optional: bool,
}

impl AnyNumberOf {
    /// Zero-or-more repetitions of the given alternatives, gaps allowed.
    pub fn new(elements: Vec<Box<dyn Matchable>>) -> Self {
        AnyNumberOf {
            elements,
            min_times: 0,
            max_times: None,
            allow_gaps: true,
            exclude: None,
            optional: false,
        }
    }

    /// Exactly one of the given alternatives.
    ///
    /// This is the whole OneOf shape: the driver configured to require
    /// exactly one repetition. Nothing else changes.
    pub fn one_of(elements: Vec<Box<dyn Matchable>>) -> Self {
        AnyNumberOf::new(elements).min_times(1).max_times(1)
    }

    /// Require at least `n` repetitions.
    pub fn min_times(mut self, n: usize) -> Self {
        self.min_times = n;
        self
    }

    /// Allow at most `n` repetitions. Unset means unbounded.
    pub fn max_times(mut self, n: usize) -> Self {
        self.max_times = Some(n);
        self
    }

    /// Whether trivia may be skipped between repetitions. Defaults to true.
    pub fn allow_gaps(mut self, allow: bool) -> Self {
        self.allow_gaps = allow;
        self
    }

    /// Veto alternative: if it matches at the current position, the whole
    /// combinator fails before any repetition is attempted.
    pub fn exclude(mut self, exclude: Box<dyn Matchable>) -> Self {
        self.exclude = Some(exclude);
        self
    }

    /// Mark the combinator optional for enclosing combinators, independent
    /// of `min_times`.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// One pass: try each surviving alternative once and pick a winner.
    ///
    /// Returns at most one repetition's worth of consumption. The first
    /// complete match short-circuits; among partials, strictly longer
    /// replaces the running best, so equal length keeps the earlier one.
    fn match_once<'a>(
        &self,
        segments: &'a [Token],
        context: &MatchContext,
    ) -> Result<MatchOutcome<'a>, GrammarError> {
        let available = prune_options(segments, &self.elements, context)?;
        if available.is_empty() {
            return Ok(MatchOutcome::unmatched(segments));
        }

        let mut best: Option<MatchOutcome<'a>> = None;
        for option in available {
            let child = context.descend()?;
            let outcome = option.match_tokens(segments, &child)?;
            if outcome.is_complete() {
                return Ok(outcome);
            }
            if outcome.has_match() {
                let longer = match best {
                    Some(current) => outcome.matched_len() > current.matched_len(),
                    None => true,
                };
                if longer {
                    best = Some(outcome);
                }
            }
        }

        Ok(best.unwrap_or_else(|| MatchOutcome::unmatched(segments)))
    }
}

impl Matchable for AnyNumberOf {
    fn match_tokens<'a>(
        &self,
        segments: &'a [Token],
        context: &MatchContext,
    ) -> Result<MatchOutcome<'a>, GrammarError> {
        // The veto runs once, before any repetition.
        if let Some(exclude) = &self.exclude {
            let child = context.descend()?;
            if exclude.match_tokens(segments, &child)?.has_match() {
                return Ok(MatchOutcome::unmatched(segments));
            }
        }

        let mut matched_len = 0;
        let mut n_matches = 0;
        loop {
            if let Some(max) = self.max_times {
                if n_matches >= max {
                    // A reached upper bound is satisfied by definition.
                    return Ok(MatchOutcome::split_at(segments, matched_len));
                }
            }

            let remaining = &segments[matched_len..];
            if remaining.is_empty() {
                return Ok(if n_matches >= self.min_times {
                    MatchOutcome::split_at(segments, matched_len)
                } else {
                    MatchOutcome::unmatched(segments)
                });
            }

            // Provisionally skip a gap; it only counts if a match follows.
            let gap = if n_matches > 0 && self.allow_gaps {
                leading_trivia_len(remaining)
            } else {
                0
            };

            let outcome = self.match_once(&remaining[gap..], context)?;
            if outcome.has_match() {
                matched_len += gap + outcome.matched_len();
                n_matches += 1;
                continue;
            }

            // This pass failed; the skipped gap goes back to the remainder.
            return Ok(if n_matches >= self.min_times {
                MatchOutcome::split_at(segments, matched_len)
            } else {
                MatchOutcome::unmatched(segments)
            });
        }
    }

    /// The combinator's own lookahead, for when it nests inside another one.
    ///
    /// Unlike pruning, which tolerates a mix of supported and unsupported
    /// children, the exported set is all-or-nothing: a partial union would be
    /// an unsound summary for an outer pruning decision, so one unsupported
    /// child makes the whole combinator unsupported.
    fn lookahead(&self, context: &MatchContext) -> Lookahead {
        let mut union: BTreeSet<String> = BTreeSet::new();
        for element in &self.elements {
            match element.lookahead(context) {
                Lookahead::Unsupported => return Lookahead::Unsupported,
                Lookahead::Terms(terms) => union.extend(terms),
            }
        }
        Lookahead::Terms(union)
    }

    fn is_optional(&self) -> bool {
        self.optional || self.min_times == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchkit::keyword::Keyword;
    use crate::matchkit::token::raw_list;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn seq(raws: &[&str]) -> Vec<Token> {
        raws.iter().copied().map(Token::leaf).collect()
    }

    fn keywords(words: &[&str]) -> Vec<Box<dyn Matchable>> {
        words
            .iter()
            .map(|w| Box::new(Keyword::new(*w)) as Box<dyn Matchable>)
            .collect()
    }

    /// Matches a fixed run of leading keywords, recording each attempt.
    struct Phrase {
        name: &'static str,
        words: Vec<String>,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Phrase {
        fn new(name: &'static str, words: &[&str], log: &Rc<RefCell<Vec<&'static str>>>) -> Self {
            Phrase {
                name,
                words: words.iter().map(|w| w.to_uppercase()).collect(),
                log: Rc::clone(log),
            }
        }
    }

    impl Matchable for Phrase {
        fn match_tokens<'a>(
            &self,
            segments: &'a [Token],
            _context: &MatchContext,
        ) -> Result<MatchOutcome<'a>, GrammarError> {
            self.log.borrow_mut().push(self.name);
            let mut n = 0;
            for word in &self.words {
                match segments.get(n) {
                    Some(Token::Leaf { raw_upper, .. }) if raw_upper == word => n += 1,
                    _ => return Ok(MatchOutcome::unmatched(segments)),
                }
            }
            Ok(MatchOutcome::split_at(segments, n))
        }
    }

    #[test]
    fn test_first_complete_match_short_circuits() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let segments = seq(&["a"]);
        let grammar = AnyNumberOf::one_of(vec![
            Box::new(Phrase::new("first", &["a"], &log)) as Box<dyn Matchable>,
            Box::new(Phrase::new("second", &["a"], &log)),
        ]);
        let context = MatchContext::root();
        let outcome = grammar.match_tokens(&segments, &context).unwrap();
        assert!(outcome.is_complete());
        // "first" completed, so "second" was never attempted.
        assert_eq!(*log.borrow(), vec!["first"]);
    }

    #[test]
    fn test_longest_partial_wins_across_declaration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let segments = seq(&["a", "b", "c", "x"]);
        let grammar = AnyNumberOf::one_of(vec![
            Box::new(Phrase::new("short", &["a"], &log)) as Box<dyn Matchable>,
            Box::new(Phrase::new("long", &["a", "b", "c"], &log)),
        ]);
        let context = MatchContext::root();
        let outcome = grammar.match_tokens(&segments, &context).unwrap();
        assert_eq!(raw_list(outcome.matched()), vec!["a", "b", "c"]);
        assert_eq!(*log.borrow(), vec!["short", "long"]);
    }

    #[test]
    fn test_equal_length_partials_try_all_and_keep_length() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let segments = seq(&["a", "b", "x"]);
        let grammar = AnyNumberOf::one_of(vec![
            Box::new(Phrase::new("first", &["a", "b"], &log)) as Box<dyn Matchable>,
            Box::new(Phrase::new("second", &["a", "b"], &log)),
        ]);
        let context = MatchContext::root();
        let outcome = grammar.match_tokens(&segments, &context).unwrap();
        // Both are attempted (no short circuit without a complete match) and
        // the kept outcome is the shared two-token prefix.
        assert_eq!(raw_list(outcome.matched()), vec!["a", "b"]);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_max_times_stops_before_further_matches() {
        let segments = seq(&["a", "a", "a"]);
        let grammar = AnyNumberOf::new(keywords(&["a"])).max_times(2);
        let context = MatchContext::root();
        let outcome = grammar.match_tokens(&segments, &context).unwrap();
        assert_eq!(outcome.matched_len(), 2);
        assert_eq!(raw_list(outcome.remainder()), vec!["a"]);
    }

    #[test]
    fn test_max_reached_satisfies_even_under_min() {
        // Once the upper bound is hit the match succeeds; min_times is not
        // re-checked on that path.
        let segments = seq(&["a", "a"]);
        let grammar = AnyNumberOf::new(keywords(&["a"])).min_times(5).max_times(1);
        let context = MatchContext::root();
        let outcome = grammar.match_tokens(&segments, &context).unwrap();
        assert_eq!(outcome.matched_len(), 1);
    }

    #[test]
    fn test_min_times_failure_returns_whole_input() {
        let segments = seq(&["a", "b"]);
        let grammar = AnyNumberOf::new(keywords(&["a"])).min_times(2);
        let context = MatchContext::root();
        let outcome = grammar.match_tokens(&segments, &context).unwrap();
        assert!(!outcome.has_match());
        assert_eq!(outcome.remainder().len(), 2);
    }

    #[test]
    fn test_trailing_gap_is_put_back_on_final_failure() {
        let segments = seq(&["a", " ", "b"]);
        let grammar = AnyNumberOf::new(keywords(&["a"]));
        let context = MatchContext::root();
        let outcome = grammar.match_tokens(&segments, &context).unwrap();
        assert_eq!(raw_list(outcome.matched()), vec!["a"]);
        // The space was provisionally skipped before the failing second
        // pass, then returned to the remainder.
        assert_eq!(raw_list(outcome.remainder()), vec![" ", "b"]);
    }

    #[test]
    fn test_exported_lookahead_unions_all_supported_children() {
        let grammar = AnyNumberOf::new(keywords(&["a", "b"]));
        let context = MatchContext::root();
        match grammar.lookahead(&context) {
            Lookahead::Terms(terms) => {
                assert!(terms.contains("A"));
                assert!(terms.contains("B"));
            }
            Lookahead::Unsupported => panic!("expected a term set"),
        }
    }

    #[test]
    fn test_exported_lookahead_is_all_or_nothing() {
        struct Opaque;
        impl Matchable for Opaque {
            fn match_tokens<'a>(
                &self,
                segments: &'a [Token],
                _context: &MatchContext,
            ) -> Result<MatchOutcome<'a>, GrammarError> {
                Ok(MatchOutcome::unmatched(segments))
            }
        }

        let grammar = AnyNumberOf::new(vec![
            Box::new(Keyword::new("a")) as Box<dyn Matchable>,
            Box::new(Opaque),
        ]);
        let context = MatchContext::root();
        assert_eq!(grammar.lookahead(&context), Lookahead::Unsupported);
    }

    #[test]
    fn test_optionality_follows_min_times_and_flag() {
        assert!(AnyNumberOf::new(keywords(&["a"])).is_optional());
        assert!(!AnyNumberOf::one_of(keywords(&["a"])).is_optional());
        assert!(AnyNumberOf::one_of(keywords(&["a"])).optional().is_optional());
    }

    #[test]
    fn test_nested_combinators_compose() {
        let inner = AnyNumberOf::one_of(keywords(&["b", "c"]));
        let grammar = AnyNumberOf::new(vec![
            Box::new(Keyword::new("a")) as Box<dyn Matchable>,
            Box::new(inner),
        ])
        .min_times(1);
        let segments = seq(&["a", " ", "c", " ", "b"]);
        let context = MatchContext::root();
        let outcome = grammar.match_tokens(&segments, &context).unwrap();
        assert!(outcome.is_complete());
        assert_eq!(outcome.matched_len(), 5);
    }
}
