//! Lexer
//!
//!     Tokenization is a single logos pass over the source. The output is a flat
//!     [TokenStream] of `(Token, Range<usize>)` pairs.
//!
//!     The lexer never fails. Byte sequences no rule accepts come back as
//!     [Token::Unknown] with the range logos reported, so the ranges of consecutive
//!     tokens are always contiguous and together cover the whole input. Downstream
//!     stages decide what to ignore; the lexer does not.

use crate::swift::token::{Token, TokenStream};
use logos::Logos;

/// Tokenize Swift source into core tokens with byte ranges
pub fn tokenize(source: &str) -> TokenStream {
    Token::lexer(source)
        .spanned()
        .map(|(result, span)| (result.unwrap_or(Token::Unknown), span))
        .collect()
}
