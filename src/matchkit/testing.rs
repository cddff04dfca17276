//! Test support
//!
//!     Helpers for building token sequences and asserting over outcomes.
//!     Hand-assembling `Token` values in every test invites sequences that no
//!     tokenizer would ever produce, so tests go through `tokenize` instead:
//!     a small logos lexer that splits a plain string into word, number,
//!     whitespace and symbol leaves. The matchers themselves never tokenize
//!     raw text; this lexer exists purely so tests and examples can start
//!     from something realistic.

use logos::Logos;

use super::token::Token;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawLexeme {
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,
    #[regex(r"[0-9]+")]
    Number,
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[regex(r"[^ \t\r\nA-Za-z0-9_]")]
    Symbol,
}

/// Split a plain string into leaf tokens.
///
/// Every byte of the input ends up in exactly one token, in order, so a
/// tokenized string upholds the same containment discipline the matchers do.
/// Unrecognized bytes still become leaf tokens rather than being dropped.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = RawLexeme::lexer(source);
    let mut tokens = Vec::new();
    while let Some(_lexeme) = lexer.next() {
        tokens.push(Token::leaf(lexer.slice()));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchkit::token::raw_list;

    #[test]
    fn test_tokenize_splits_words_and_trivia() {
        let tokens = tokenize("select  x, y");
        assert_eq!(
            raw_list(&tokens),
            vec!["select", "  ", "x", ",", " ", "y"]
        );
        assert!(tokens[1].is_trivia());
        assert!(!tokens[3].is_trivia());
    }

    #[test]
    fn test_tokenize_preserves_every_byte() {
        let source = "a 12 +b\n";
        let rebuilt: String = tokenize(source)
            .iter()
            .map(|t| t.raw_text())
            .collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
    }
}
