//! Source loading utilities
//!
//! `SourceLoader` holds the text of one Swift file, read from disk or given as a
//! string, and runs transforms on it. The CLI and the integration tests both go
//! through it.
//!
//! ```rust,ignore
//! use swiftmock_parser::swift::loader::SourceLoader;
//! use swiftmock_parser::swift::generation::MockOptions;
//!
//! let loader = SourceLoader::from_path("Greeter.swift")?;
//! let declarations = loader.declarations()?;
//! let mocks = loader.generate_mocks(&MockOptions::default())?;
//! ```

use crate::swift::declarations::InterfaceDeclaration;
use crate::swift::generation::MockOptions;
use crate::swift::names::{declared_type_names, DeclaredName};
use crate::swift::token::{StructuralStream, TokenStream};
use crate::swift::transforms::standard::{
    mocks_transform, CORE_TOKENIZATION, DECLARATIONS, STRUCTURAL_TOKENS,
};
use crate::swift::transforms::{Transform, TransformError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Error that can occur when loading sources
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading file
    IoError(String),
    /// Transform/parsing error
    TransformError(TransformError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
            LoaderError::TransformError(err) => write!(f, "Transform error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::IoError(err.to_string())
    }
}

impl From<TransformError> for LoaderError {
    fn from(err: TransformError) -> Self {
        LoaderError::TransformError(err)
    }
}

/// Swift source with transform shortcuts
pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = source.len(), "loaded source");
        Ok(SourceLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SourceLoader {
            source: source.into(),
        }
    }

    /// Run a custom transform on the source
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Full core token stream, trivia included
    pub fn tokenize(&self) -> Result<TokenStream, LoaderError> {
        let tokens = self.with(&CORE_TOKENIZATION)?;
        debug!(count = tokens.len(), "tokenized");
        Ok(tokens)
    }

    /// Structural tokens of the protocol declarations
    pub fn structural_tokens(&self) -> Result<StructuralStream, LoaderError> {
        let tokens = self.with(&STRUCTURAL_TOKENS)?;
        debug!(count = tokens.len(), "filtered structural tokens");
        Ok(tokens)
    }

    /// Parsed protocol declarations
    pub fn declarations(&self) -> Result<Vec<InterfaceDeclaration>, LoaderError> {
        let declarations = self.with(&DECLARATIONS)?;
        debug!(count = declarations.len(), "parsed declarations");
        Ok(declarations)
    }

    /// Rendered mocks for every protocol conforming to `options.marker`
    pub fn generate_mocks(&self, options: &MockOptions) -> Result<String, LoaderError> {
        let output = self.with(&mocks_transform(options.clone()))?;
        debug!(bytes = output.len(), marker = %options.marker, "generated mocks");
        Ok(output)
    }

    /// Declared and extended type names
    pub fn type_names(&self) -> Result<Vec<DeclaredName>, LoaderError> {
        Ok(declared_type_names(&self.tokenize()?))
    }

    /// Get the raw source string
    pub fn source(&self) -> String {
        self.source.clone()
    }

    /// Get a reference to the raw source string
    pub fn source_ref(&self) -> &str {
        &self.source
    }
}
