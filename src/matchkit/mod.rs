//! Core matching combinators shared across grammar definitions and tooling.
//!
//!     The pieces compose leaf-first: tokens and sequences, outcomes that
//!     split them, the matchable capability everything implements, lookahead
//!     pruning, and on top of it all the `AnyNumberOf` repetition driver with
//!     its `one_of` specialization. Terminal matchers and test tokenization
//!     live alongside so a grammar can be built and exercised from this
//!     module alone.

pub mod any_number_of;
pub mod context;
pub mod keyword;
pub mod matchable;
pub mod outcome;
pub mod pruning;
pub mod testing;
pub mod token;

pub use any_number_of::AnyNumberOf;
pub use context::MatchContext;
pub use keyword::{Keyword, Whitespace};
pub use matchable::{GrammarError, Lookahead, Matchable};
pub use outcome::MatchOutcome;
pub use token::Token;
