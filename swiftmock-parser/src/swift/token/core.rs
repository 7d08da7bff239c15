//! Core token definitions for Swift source
//!
//! The tokenizer is full fidelity: every byte of the input ends up inside exactly one
//! token, trivia and unrecognised characters included. Only a small part of Swift is
//! classified precisely; everything the declaration grammar does not care about is
//! still tokenized so that it can be dropped on purpose rather than by accident.

use logos::{Lexer, Logos};
use serde::Serialize;
use std::fmt;

/// Consume a `/* ... */` comment after its opening `/*`
///
/// Unterminated comments run to the end of input. Nesting is not tracked.
fn block_comment(lex: &mut Lexer<Token>) {
    let remainder = lex.remainder();
    match remainder.find("*/") {
        Some(idx) => lex.bump(idx + 2),
        None => lex.bump(remainder.len()),
    }
}

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone, Serialize)]
pub enum Token {
    // Trivia
    #[regex(r"[ \t\r]+")]
    Whitespace,
    #[token("\n")]
    Newline,
    #[regex(r"//[^\n]*")]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,

    // Literals
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLiteral,
    #[regex(r"[0-9][0-9_]*")]
    NumberLiteral,

    // Declaration keywords
    #[token("protocol")]
    Protocol,
    #[token("func")]
    Func,
    #[token("class")]
    Class,
    #[token("struct")]
    Struct,
    #[token("enum")]
    Enum,
    #[token("extension")]
    Extension,
    #[token("import")]
    Import,
    #[token("var")]
    Var,
    #[token("let")]
    Let,
    #[token("init")]
    Init,
    #[token("typealias")]
    Typealias,
    #[token("associatedtype")]
    Associatedtype,

    // Modifier and effect keywords
    #[token("static")]
    #[token("mutating")]
    #[token("throws")]
    #[token("rethrows")]
    #[token("async")]
    #[token("where")]
    #[token("public")]
    #[token("private")]
    #[token("fileprivate")]
    #[token("internal")]
    Modifier,

    #[regex(r"@[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice()[1..].to_string())]
    Attribute(String),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Punctuation
    #[token("->")]
    Arrow,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("<")]
    LeftAngle,
    #[token(">")]
    RightAngle,
    #[token(".")]
    Dot,
    #[token("?")]
    Question,
    #[token("!")]
    Bang,
    #[token("=")]
    Equals,
    #[token(";")]
    Semicolon,
    #[token("&")]
    Ampersand,

    /// Anything the lexer has no rule for. Never produced by logos itself;
    /// [tokenize](crate::swift::lexing::tokenize) substitutes it for lexing errors.
    Unknown,
}

impl Token {
    /// Whitespace, newlines and comments
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Token::Whitespace | Token::Newline | Token::LineComment | Token::BlockComment
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Whitespace => write!(f, "whitespace"),
            Token::Newline => write!(f, "newline"),
            Token::LineComment | Token::BlockComment => write!(f, "comment"),
            Token::StringLiteral => write!(f, "string literal"),
            Token::NumberLiteral => write!(f, "number literal"),
            Token::Protocol => write!(f, "protocol"),
            Token::Func => write!(f, "func"),
            Token::Class => write!(f, "class"),
            Token::Struct => write!(f, "struct"),
            Token::Enum => write!(f, "enum"),
            Token::Extension => write!(f, "extension"),
            Token::Import => write!(f, "import"),
            Token::Var => write!(f, "var"),
            Token::Let => write!(f, "let"),
            Token::Init => write!(f, "init"),
            Token::Typealias => write!(f, "typealias"),
            Token::Associatedtype => write!(f, "associatedtype"),
            Token::Modifier => write!(f, "modifier"),
            Token::Attribute(name) => write!(f, "@{}", name),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Arrow => write!(f, "->"),
            Token::Colon => write!(f, ":"),
            Token::Comma => write!(f, ","),
            Token::LeftBrace => write!(f, "{{"),
            Token::RightBrace => write!(f, "}}"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::LeftBracket => write!(f, "["),
            Token::RightBracket => write!(f, "]"),
            Token::LeftAngle => write!(f, "<"),
            Token::RightAngle => write!(f, ">"),
            Token::Dot => write!(f, "."),
            Token::Question => write!(f, "?"),
            Token::Bang => write!(f, "!"),
            Token::Equals => write!(f, "="),
            Token::Semicolon => write!(f, ";"),
            Token::Ampersand => write!(f, "&"),
            Token::Unknown => write!(f, "unknown"),
        }
    }
}
