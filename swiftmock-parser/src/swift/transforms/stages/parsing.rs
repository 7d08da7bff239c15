//! Declaration parsing stage

use crate::swift::declarations::InterfaceDeclaration;
use crate::swift::parsing::parse_declarations;
use crate::swift::token::StructuralStream;
use crate::swift::transforms::{Runnable, TransformError};

/// StructuralStream → Vec<InterfaceDeclaration>
///
/// Parse errors surface as [TransformError::Parse] so callers keep the error range.
pub struct DeclarationParsing;

impl DeclarationParsing {
    pub fn new() -> Self {
        DeclarationParsing
    }
}

impl Default for DeclarationParsing {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<StructuralStream, Vec<InterfaceDeclaration>> for DeclarationParsing {
    fn run(&self, input: StructuralStream) -> Result<Vec<InterfaceDeclaration>, TransformError> {
        Ok(parse_declarations(input)?)
    }
}
