//! Token types and sequence helpers shared by the matching combinators.
//!
//!     A token is the unit the matchers consume. It is either a leaf (a piece of
//!     raw text produced by some earlier tokenization stage) or a composite (a
//!     node that earlier matching passes have already recognized, wrapping the
//!     leaf tokens it was built from). Matchers never look inside the raw text
//!     beyond its normalized form; they also never mutate tokens, they only
//!     borrow sequences and split them.
//!
//!     Two properties of a leaf matter to the matchers:
//!
//!         - its uppercase-normalized form, used for case-insensitive
//!           comparison against lookahead terms and keywords
//!         - whether it is trivia, i.e. carries no non-whitespace content,
//!           which makes it skippable between repetitions when gaps are allowed
//!
//!     Sequences are plain slices. Order is document order and is preserved by
//!     every helper here: flattening walks leaves left to right, and the trivia
//!     split only ever cuts a prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit of input for the matchers, in document order.
///
/// Leaf tokens carry their raw text plus a cached uppercase form so that
/// case-insensitive comparisons during pruning don't re-normalize on every
/// attempt. Composite tokens are sub-structures recognized by earlier passes;
/// the matchers treat them as opaque except for their leaf content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// A raw piece of text.
    Leaf {
        /// The text as it appeared in the source.
        raw: String,
        /// Uppercased form of `raw`, cached at construction.
        raw_upper: String,
    },
    /// An already-recognized sub-structure wrapping its source tokens.
    Composite {
        /// The kind of structure, e.g. a rule name.
        label: String,
        /// The tokens the structure was recognized from, in order.
        children: Vec<Token>,
    },
}

impl Token {
    /// Create a leaf token from raw text.
    pub fn leaf(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let raw_upper = raw.to_uppercase();
        Token::Leaf { raw, raw_upper }
    }

    /// Create a composite token wrapping already-recognized children.
    pub fn composite(label: impl Into<String>, children: Vec<Token>) -> Self {
        Token::Composite {
            label: label.into(),
            children,
        }
    }

    /// The raw text of this token. For composites this concatenates the
    /// leaves in order.
    pub fn raw_text(&self) -> String {
        match self {
            Token::Leaf { raw, .. } => raw.clone(),
            Token::Composite { children, .. } => {
                children.iter().map(Token::raw_text).collect::<String>()
            }
        }
    }

    /// Iterate over the leaf tokens of this token in document order.
    ///
    /// A leaf yields itself once. The iterator borrows the token, so calling
    /// this again restarts the traversal from the beginning.
    pub fn iter_leaves(&self) -> LeafIter<'_> {
        LeafIter { stack: vec![self] }
    }

    /// Whether this token carries no non-whitespace content.
    ///
    /// Trivia tokens are the ones the repetition driver may skip between
    /// matches when gaps are allowed. A composite is trivia only if every
    /// leaf under it is.
    pub fn is_trivia(&self) -> bool {
        match self {
            Token::Leaf { raw, .. } => raw.trim().is_empty(),
            Token::Composite { children, .. } => children.iter().all(Token::is_trivia),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Leaf { raw, .. } => write!(f, "{:?}", raw),
            Token::Composite { label, .. } => write!(f, "<{}: {:?}>", label, self.raw_text()),
        }
    }
}

/// Depth-first, left-to-right traversal over the leaves of a token.
#[derive(Debug)]
pub struct LeafIter<'a> {
    stack: Vec<&'a Token>,
}

impl<'a> Iterator for LeafIter<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<&'a Token> {
        while let Some(token) = self.stack.pop() {
            match token {
                Token::Leaf { .. } => return Some(token),
                Token::Composite { children, .. } => {
                    // Reverse so the leftmost child is popped first.
                    self.stack.extend(children.iter().rev());
                }
            }
        }
        None
    }
}

/// Flatten a sequence into the uppercase-normalized text of its leaves,
/// expanding composites in order. This is the view lookahead pruning
/// compares candidate terms against.
pub fn raw_upper_leaves(segments: &[Token]) -> Vec<String> {
    let mut buffer = Vec::new();
    for segment in segments {
        for leaf in segment.iter_leaves() {
            if let Token::Leaf { raw_upper, .. } = leaf {
                buffer.push(raw_upper.clone());
            }
        }
    }
    buffer
}

/// Number of leading trivia tokens in the sequence.
///
/// The repetition driver uses this to provisionally skip a gap before the
/// next match attempt; the skipped run is only counted as matched if a real
/// match follows it.
pub fn leading_trivia_len(segments: &[Token]) -> usize {
    segments.iter().take_while(|t| t.is_trivia()).count()
}

/// Split a sequence into its leading trivia run and the rest.
pub fn split_leading_trivia(segments: &[Token]) -> (&[Token], &[Token]) {
    segments.split_at(leading_trivia_len(segments))
}

/// The raw text of each token in a sequence. Test and diagnostic helper.
pub fn raw_list(segments: &[Token]) -> Vec<String> {
    segments.iter().map(Token::raw_text).collect()
}
