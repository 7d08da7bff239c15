//! Structural tokens
//!
//! The declaration grammar is written against these ten token kinds only. They are a
//! projection of [Token](super::Token): the filtering stage maps the matching core
//! tokens across and drops everything else.

use super::core::Token;
use serde::Serialize;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize)]
pub enum StructuralToken {
    Protocol,
    Func,
    Identifier(String),
    Colon,
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    Comma,
    Arrow,
}

impl StructuralToken {
    /// Project a core token onto the structural set, if it belongs there
    pub fn from_core(token: &Token) -> Option<Self> {
        let structural = match token {
            Token::Protocol => StructuralToken::Protocol,
            Token::Func => StructuralToken::Func,
            Token::Identifier(name) => StructuralToken::Identifier(name.clone()),
            Token::Colon => StructuralToken::Colon,
            Token::LeftBrace => StructuralToken::LeftBrace,
            Token::RightBrace => StructuralToken::RightBrace,
            Token::LeftParen => StructuralToken::LeftParen,
            Token::RightParen => StructuralToken::RightParen,
            Token::Comma => StructuralToken::Comma,
            Token::Arrow => StructuralToken::Arrow,
            _ => return None,
        };
        Some(structural)
    }
}

impl fmt::Display for StructuralToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralToken::Protocol => write!(f, "`protocol`"),
            StructuralToken::Func => write!(f, "`func`"),
            StructuralToken::Identifier(name) => write!(f, "identifier `{}`", name),
            StructuralToken::Colon => write!(f, "`:`"),
            StructuralToken::LeftBrace => write!(f, "`{{`"),
            StructuralToken::RightBrace => write!(f, "`}}`"),
            StructuralToken::LeftParen => write!(f, "`(`"),
            StructuralToken::RightParen => write!(f, "`)`"),
            StructuralToken::Comma => write!(f, "`,`"),
            StructuralToken::Arrow => write!(f, "`->`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_keeps_identifier_text() {
        let token = Token::Identifier("Greeter".to_string());
        assert_eq!(
            StructuralToken::from_core(&token),
            Some(StructuralToken::Identifier("Greeter".to_string()))
        );
    }

    #[test]
    fn test_projection_drops_non_structural() {
        for token in [
            Token::Whitespace,
            Token::Class,
            Token::Var,
            Token::Modifier,
            Token::Question,
            Token::Attribute("escaping".to_string()),
            Token::Unknown,
        ] {
            assert_eq!(StructuralToken::from_core(&token), None, "{:?}", token);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            StructuralToken::Identifier("x".to_string()).to_string(),
            "identifier `x`"
        );
        assert_eq!(StructuralToken::LeftBrace.to_string(), "`{`");
    }
}
