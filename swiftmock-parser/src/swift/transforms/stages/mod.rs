//! Individual transformation stages
//!
//! Each stage implements the `Runnable` trait.

pub mod filtering;
pub mod generation;
pub mod parsing;
pub mod tokenization;

pub use filtering::StructuralFiltering;
pub use generation::MockGeneration;
pub use parsing::DeclarationParsing;
pub use tokenization::CoreTokenization;
