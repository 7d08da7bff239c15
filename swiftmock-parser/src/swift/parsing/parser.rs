//! Declaration parser
//!
//! A forward-only cursor over a [StructuralStream]. `peek` looks at the token under the
//! cursor, `advance` consumes it. Grammar checks look before they consume, so a failed
//! check leaves the cursor on the offending token and reports its range.

use super::error::ParseError;
use crate::swift::declarations::{
    ArgumentDeclaration, FunctionDeclaration, InterfaceDeclaration, VOID_TYPE,
};
use crate::swift::token::{StructuralStream, StructuralToken};
use std::ops::Range;

/// Parse a structural token stream into protocol declarations
pub fn parse_declarations(
    tokens: StructuralStream,
) -> Result<Vec<InterfaceDeclaration>, ParseError> {
    DeclarationParser::new(tokens).parse()
}

pub struct DeclarationParser {
    tokens: StructuralStream,
    index: usize,
}

impl DeclarationParser {
    pub fn new(tokens: StructuralStream) -> Self {
        DeclarationParser { tokens, index: 0 }
    }

    /// Parse every declaration in the stream, stopping at the first error
    pub fn parse(mut self) -> Result<Vec<InterfaceDeclaration>, ParseError> {
        let mut interfaces = Vec::new();

        while self.has_tokens() {
            interfaces.push(self.parse_interface()?);
        }

        Ok(interfaces)
    }

    /// Current cursor position, in tokens
    pub fn position(&self) -> usize {
        self.index
    }

    fn has_tokens(&self) -> bool {
        self.index < self.tokens.len()
    }

    fn peek(&self) -> Option<&StructuralToken> {
        self.tokens.get(self.index).map(|(token, _)| token)
    }

    fn advance(&mut self) -> Option<(StructuralToken, Range<usize>)> {
        let item = self.tokens.get(self.index).cloned();
        if item.is_some() {
            self.index += 1;
        }
        item
    }

    fn error(&self, expected: &'static str) -> ParseError {
        match self.tokens.get(self.index) {
            Some((token, range)) => ParseError::InvalidSyntax {
                expected,
                found: Some(token.clone()),
                range: range.clone(),
            },
            None => {
                let end = self.tokens.last().map_or(0, |(_, range)| range.end);
                ParseError::InvalidSyntax {
                    expected,
                    found: None,
                    range: end..end,
                }
            }
        }
    }

    fn at(&self, kind: &StructuralToken) -> bool {
        self.peek() == Some(kind)
    }

    fn expect(&mut self, kind: StructuralToken, expected: &'static str) -> Result<(), ParseError> {
        if self.at(&kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    fn expect_identifier(&mut self, expected: &'static str) -> Result<String, ParseError> {
        match self.peek() {
            Some(StructuralToken::Identifier(name)) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.error(expected)),
        }
    }

    fn parse_interface(&mut self) -> Result<InterfaceDeclaration, ParseError> {
        self.expect(StructuralToken::Protocol, "`protocol`")?;
        let name = self.expect_identifier("protocol name")?;

        let conformances = if self.at(&StructuralToken::Colon) {
            self.parse_conformances()?
        } else {
            Vec::new()
        };

        self.expect(StructuralToken::LeftBrace, "`{`")?;

        let mut functions = Vec::new();
        loop {
            match self.peek() {
                Some(StructuralToken::Func) => functions.push(self.parse_function()?),
                Some(StructuralToken::RightBrace) => break,
                _ => return Err(self.error("`func` or `}`")),
            }
        }

        self.expect(StructuralToken::RightBrace, "`}`")?;

        Ok(InterfaceDeclaration::new(name, functions, conformances))
    }

    fn parse_conformances(&mut self) -> Result<Vec<String>, ParseError> {
        self.expect(StructuralToken::Colon, "`:`")?;

        let mut conformances = vec![self.expect_identifier("conformance name")?];
        while self.at(&StructuralToken::Comma) {
            self.advance();
            conformances.push(self.expect_identifier("conformance name")?);
        }

        Ok(conformances)
    }

    fn parse_function(&mut self) -> Result<FunctionDeclaration, ParseError> {
        self.expect(StructuralToken::Func, "`func`")?;
        let name = self.expect_identifier("function name")?;
        self.expect(StructuralToken::LeftParen, "`(`")?;

        let mut arguments = Vec::new();
        if !self.at(&StructuralToken::RightParen) {
            arguments.push(self.parse_argument()?);
            while self.at(&StructuralToken::Comma) {
                self.advance();
                arguments.push(self.parse_argument()?);
            }
        }

        self.expect(StructuralToken::RightParen, "`,` or `)`")?;

        let return_type = if self.at(&StructuralToken::Arrow) {
            self.advance();
            self.parse_type()?
        } else {
            VOID_TYPE.to_string()
        };

        Ok(FunctionDeclaration::new(name, arguments, return_type))
    }

    fn parse_argument(&mut self) -> Result<ArgumentDeclaration, ParseError> {
        let first = self.expect_identifier("argument name")?;

        let argument = match self.peek() {
            Some(StructuralToken::Identifier(_)) => {
                let name = self.expect_identifier("argument name")?;
                self.expect(StructuralToken::Colon, "`:`")?;
                ArgumentDeclaration::labelled(first, name, self.parse_type()?)
            }
            _ => {
                self.expect(StructuralToken::Colon, "`:`")?;
                ArgumentDeclaration::new(first, self.parse_type()?)
            }
        };

        Ok(argument)
    }

    fn parse_type(&mut self) -> Result<String, ParseError> {
        self.expect_identifier("type name")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swift::filtering::filter_structural;
    use crate::swift::lexing::tokenize;

    fn parse(source: &str) -> Result<Vec<InterfaceDeclaration>, ParseError> {
        parse_declarations(filter_structural(tokenize(source)))
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(parse_declarations(Vec::new()), Ok(Vec::new()));
    }

    #[test]
    fn test_greeter() {
        let parsed = parse(
            "protocol Greeter: Mocking {\n    func greet(person: String) -> String\n    func bye(person: String) -> String\n}\n",
        )
        .unwrap();

        assert_eq!(
            parsed,
            vec![InterfaceDeclaration::new(
                "Greeter",
                vec![
                    FunctionDeclaration::new(
                        "greet",
                        vec![ArgumentDeclaration::new("person", "String")],
                        "String"
                    ),
                    FunctionDeclaration::new(
                        "bye",
                        vec![ArgumentDeclaration::new("person", "String")],
                        "String"
                    ),
                ],
                vec!["Mocking".to_string()],
            )]
        );
    }

    #[test]
    fn test_missing_return_clause_is_void() {
        let parsed = parse("protocol P { func reset() }").unwrap();
        assert_eq!(parsed[0].functions[0].return_type, VOID_TYPE);
        assert!(parsed[0].functions[0].arguments.is_empty());
    }

    #[test]
    fn test_conformances_keep_order_and_duplicates() {
        let parsed = parse("protocol P: B, A, B {}").unwrap();
        assert_eq!(parsed[0].conformances, vec!["B", "A", "B"]);
        assert!(parsed[0].functions.is_empty());
    }

    #[test]
    fn test_argument_labels() {
        let parsed = parse("protocol P { func send(_ message: String, to recipient: User) }").unwrap();
        assert_eq!(
            parsed[0].functions[0].arguments,
            vec![
                ArgumentDeclaration::labelled("_", "message", "String"),
                ArgumentDeclaration::labelled("to", "recipient", "User"),
            ]
        );
    }

    #[test]
    fn test_missing_close_paren_fails() {
        let err = parse("protocol P {\n    func f(a: Int\n}\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidSyntax {
                expected: "`,` or `)`",
                found: Some(StructuralToken::RightBrace),
                range: 31..32,
            }
        );
    }

    #[test]
    fn test_trailing_comma_fails() {
        let err = parse("protocol P { func f(a: Int,) }").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidSyntax {
                expected: "argument name",
                found: Some(StructuralToken::RightParen),
                ..
            }
        ));
    }

    #[test]
    fn test_truncated_input_reports_end() {
        let err = parse("protocol P { func f(").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidSyntax { found: None, .. }
        ));
    }

    #[test]
    fn test_failed_check_does_not_consume() {
        let mut parser = DeclarationParser::new(filter_structural(tokenize("protocol P {")));
        assert!(parser.parse_interface().is_err());
        assert_eq!(parser.position(), 3);
    }

    #[test]
    fn test_stray_token_in_body_fails() {
        let err = parse("protocol P {\n    var name: String { get }\n}").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidSyntax {
                expected: "`func` or `}`",
                found: Some(StructuralToken::Identifier(_)),
                ..
            }
        ));
    }
}
