//! Declared type names
//!
//! Lists the types a Swift file declares or extends, in source order. A declaration
//! keyword arms the scan and the next identifier is taken as the declared name.

use crate::swift::token::{Token, TokenStream};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Class,
    Struct,
    Enum,
    Extension,
    Protocol,
}

impl DeclarationKind {
    fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Class => Some(DeclarationKind::Class),
            Token::Struct => Some(DeclarationKind::Struct),
            Token::Enum => Some(DeclarationKind::Enum),
            Token::Extension => Some(DeclarationKind::Extension),
            Token::Protocol => Some(DeclarationKind::Protocol),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Struct => "struct",
            DeclarationKind::Enum => "enum",
            DeclarationKind::Extension => "extension",
            DeclarationKind::Protocol => "protocol",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredName {
    pub kind: DeclarationKind,
    pub name: String,
}

impl fmt::Display for DeclaredName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.keyword(), self.name)
    }
}

/// Every declared or extended type name, in source order
///
/// Only a keyword immediately followed by an identifier (trivia aside) counts, so
/// `class func make()` and `protocol P: class` declare nothing through `class`.
pub fn declared_type_names(tokens: &TokenStream) -> Vec<DeclaredName> {
    let mut pending: Option<DeclarationKind> = None;
    let mut names = Vec::new();

    for (token, _) in tokens.iter().filter(|(token, _)| !token.is_trivia()) {
        if let (Some(kind), Token::Identifier(name)) = (pending.take(), token) {
            names.push(DeclaredName {
                kind,
                name: name.clone(),
            });
        }
        if let Some(kind) = DeclarationKind::from_token(token) {
            pending = Some(kind);
        }
    }

    names
}
