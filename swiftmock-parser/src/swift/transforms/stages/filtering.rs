//! Structural filtering stage

use crate::swift::filtering::filter_structural;
use crate::swift::token::{StructuralStream, TokenStream};
use crate::swift::transforms::{Runnable, TransformError};

/// TokenStream → StructuralStream
pub struct StructuralFiltering;

impl StructuralFiltering {
    pub fn new() -> Self {
        StructuralFiltering
    }
}

impl Default for StructuralFiltering {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<TokenStream, StructuralStream> for StructuralFiltering {
    fn run(&self, input: TokenStream) -> Result<StructuralStream, TransformError> {
        Ok(filter_structural(input))
    }
}
