//! Token types shared by the lexer, the filter and the parser.
//!
//! Token Layers
//!
//!     Core Tokens:
//!         Every lexeme of the Swift source, trivia included, as produced by the logos
//!         lexer. See [core](self::core). Ranges carried alongside each token are byte
//!         offsets into the source and are never rewritten by later stages.
//!
//!     Structural Tokens:
//!         The handful of tokens the declaration grammar is written against: the
//!         `protocol` and `func` keywords, identifiers and six kinds of punctuation.
//!         See [structural](self::structural). They are produced only by the
//!         [filtering](crate::swift::filtering) stage.

pub mod core;
pub mod structural;

pub use self::core::Token;
pub use self::structural::StructuralToken;

use std::ops::Range;

/// A flat stream of core tokens with their byte ranges
pub type TokenStream = Vec<(Token, Range<usize>)>;

/// A flat stream of structural tokens with their byte ranges
pub type StructuralStream = Vec<(StructuralToken, Range<usize>)>;
