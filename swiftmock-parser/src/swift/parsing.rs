//! Parsing
//!
//!     Recursive descent over the structural token stream. The grammar:
//!
//!         Program         := Interface*
//!         Interface       := "protocol" Identifier (":" ConformanceList)? "{" Function* "}"
//!         ConformanceList := Identifier ("," Identifier)*
//!         Function        := "func" Identifier "(" ArgumentList? ")" ("->" Type)?
//!         ArgumentList    := Argument ("," Argument)*
//!         Argument        := Identifier Identifier? ":" Type
//!         Type            := Identifier
//!
//!     The cursor only moves forward and looks at most one token ahead. A token that
//!     does not fit the grammar position stops the whole parse with
//!     [ParseError::InvalidSyntax]; there is no recovery and no partial output, so
//!     every iteration of the top-level loop either consumes a full interface or
//!     returns.

pub mod error;
pub mod parser;

pub use error::{format_source_context, ParseError};
pub use parser::{parse_declarations, DeclarationParser};
