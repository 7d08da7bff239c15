//! Transform pipeline infrastructure
//!
//! Every stage of swiftmock is a `Runnable<I, O>`: tokenization, structural filtering,
//! declaration parsing and mock generation. `Transform<I, O>` wraps a chain of them so
//! that any prefix of the pipeline can be run on its own:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(CoreTokenization::new())      // String → TokenStream
//!     .then(StructuralFiltering::new())   // TokenStream → StructuralStream
//!     .then(DeclarationParsing::new());   // StructuralStream → Vec<InterfaceDeclaration>
//! ```
//!
//! The compiler checks that each stage's input matches the previous output. Common
//! prefixes are pre-built in [`standard`].

pub mod stages;
pub mod standard;

use crate::swift::parsing::ParseError;
use std::fmt;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The declaration parser rejected the token stream
    Parse(ParseError),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Parse(err) => write!(f, "Stage 'parsing' failed: {}", err),
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransformError::Parse(err) => Some(err),
        }
    }
}

impl From<ParseError> for TransformError {
    fn from(err: ParseError) -> Self {
        TransformError::Parse(err)
    }
}

/// Trait for anything that can transform an input to an output
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from `I` to `O`
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain a stage onto this transform's output
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chain a pre-built static transform onto this transform's output
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
