//! Core tokenization stage
//!
//! Converts source text into a flat stream of tokens using the logos lexer.

use crate::swift::lexing;
use crate::swift::token::TokenStream;
use crate::swift::transforms::{Runnable, TransformError};

/// String → TokenStream
pub struct CoreTokenization;

impl CoreTokenization {
    pub fn new() -> Self {
        CoreTokenization
    }
}

impl Default for CoreTokenization {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, TokenStream> for CoreTokenization {
    fn run(&self, input: String) -> Result<TokenStream, TransformError> {
        Ok(lexing::tokenize(&input))
    }
}

impl Runnable<&str, TokenStream> for CoreTokenization {
    fn run(&self, input: &str) -> Result<TokenStream, TransformError> {
        Ok(lexing::tokenize(input))
    }
}
