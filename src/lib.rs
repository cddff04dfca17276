//! # matchkit
//!
//! Repetition and alternation matching combinators for token-grammar
//! parsers.
//!
//! A grammar is a tree of values implementing [`Matchable`](matchkit::Matchable):
//! terminal matchers at the leaves, combinators above them. The combinator
//! this crate is built around is [`AnyNumberOf`](matchkit::AnyNumberOf):
//! match any of N alternatives, zero-or-more (bounded) times, with
//! longest-match and first-declared tie-breaks, a lookahead pruning pass to
//! skip provably hopeless alternatives, and deterministic results for the
//! same input every time.
//!
//! Matching consumes a borrowed token sequence and returns how much of it
//! was consumed; failing to match is an ordinary returned value, never an
//! error. See the [matchkit] module for the full surface.

pub mod matchkit;
