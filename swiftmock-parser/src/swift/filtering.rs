//! Structural filtering
//!
//!     Reduces the full token stream to the structural tokens of protocol declarations.
//!
//!     A bare kind whitelist is not enough: an identifier inside a class body looks
//!     exactly like an identifier inside a protocol body. The filter therefore tracks
//!     where it is in the source and only emits tokens that belong to a protocol
//!     declaration, from the `protocol` keyword through the brace closing its body.
//!
//!     Scopes:
//!         Outside  - between declarations. Everything is dropped until `protocol`.
//!         Header   - after `protocol`, before the body. Structural tokens pass.
//!         Body     - inside the braces. Structural tokens pass and braces are counted
//!                    so nested blocks (`{ get set }`) do not end the body early.
//!
//!     Within a protocol the rule is the plain whitelist: trivia, literals, attributes,
//!     keywords other than `protocol`/`func`, and punctuation outside the structural set
//!     are discarded. The filter never fails.
//!
//!     Type sugar is lost with that punctuation: `[Int]?` reaches the parser as `Int`.

use crate::swift::token::{StructuralStream, StructuralToken, Token, TokenStream};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Outside,
    Header,
    Body { depth: usize },
}

/// Keep the structural tokens of every protocol declaration, in source order
pub fn filter_structural(tokens: TokenStream) -> StructuralStream {
    let mut scope = Scope::Outside;
    let mut output = Vec::new();

    for (token, range) in tokens {
        let next = match (scope, &token) {
            (Scope::Outside, Token::Protocol) => Scope::Header,
            (Scope::Outside, _) => continue,
            (Scope::Header, Token::LeftBrace) => Scope::Body { depth: 1 },
            (Scope::Body { depth }, Token::LeftBrace) => Scope::Body { depth: depth + 1 },
            (Scope::Body { depth: 1 }, Token::RightBrace) => Scope::Outside,
            (Scope::Body { depth }, Token::RightBrace) => Scope::Body { depth: depth - 1 },
            (current, _) => current,
        };
        scope = next;

        if let Some(structural) = StructuralToken::from_core(&token) {
            output.push((structural, range));
        }
    }

    output
}
