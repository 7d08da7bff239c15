//! Error types for declaration parsing

use crate::swift::token::StructuralToken;
use std::fmt;
use std::ops::Range;

/// Errors that can occur while parsing structural tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token at the cursor does not fit the grammar at that position
    InvalidSyntax {
        expected: &'static str,
        /// `None` when the token stream ran out
        found: Option<StructuralToken>,
        /// Byte range of the offending token, or an empty range at the end of input
        range: Range<usize>,
    },
}

impl ParseError {
    pub fn range(&self) -> &Range<usize> {
        match self {
            ParseError::InvalidSyntax { range, .. } => range,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidSyntax {
                expected,
                found: Some(token),
                range,
            } => write!(
                f,
                "Invalid syntax: expected {}, found {} at byte {}",
                expected, token, range.start
            ),
            ParseError::InvalidSyntax {
                expected,
                found: None,
                ..
            } => write!(f, "Invalid syntax: expected {}, found end of input", expected),
        }
    }
}

impl std::error::Error for ParseError {}

/// Format source code context around an error location
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
/// All lines are numbered for easy reference.
pub fn format_source_context(source: &str, range: &Range<usize>) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let offset = range.start.min(source.len());
    // End-of-input errors after a trailing newline point at the last line
    let error_line = source[..offset]
        .matches('\n')
        .count()
        .min(lines.len().saturating_sub(1));

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (line_num, line) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, line));
    }

    context
}
