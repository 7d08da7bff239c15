//! Standard transform definitions
//!
//! Pre-built prefixes of the pipeline, defined as statics with `once_cell::sync::Lazy`.
//! Mock generation depends on [MockOptions](crate::swift::generation::MockOptions) and is
//! therefore chained on demand, see [mocks_transform].

use crate::swift::declarations::InterfaceDeclaration;
use crate::swift::generation::MockOptions;
use crate::swift::token::{StructuralStream, TokenStream};
use crate::swift::transforms::stages::{
    CoreTokenization, DeclarationParsing, MockGeneration, StructuralFiltering,
};
use crate::swift::transforms::Transform;
use once_cell::sync::Lazy;

/// Type alias for the tokenizing transform
pub type LexingTransform = Transform<String, TokenStream>;

/// Type alias for the filtering transform
pub type StructuralTransform = Transform<String, StructuralStream>;

/// Type alias for the parsing transform
pub type DeclarationsTransform = Transform<String, Vec<InterfaceDeclaration>>;

/// String → TokenStream
pub static CORE_TOKENIZATION: Lazy<LexingTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(CoreTokenization::new()));

/// String → StructuralStream
///
/// 1. Core tokenization (logos)
/// 2. Structural filtering
pub static STRUCTURAL_TOKENS: Lazy<StructuralTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(CoreTokenization::new())
        .then(StructuralFiltering::new())
});

/// String → Vec<InterfaceDeclaration>
///
/// 1. Core tokenization (logos)
/// 2. Structural filtering
/// 3. Declaration parsing
pub static DECLARATIONS: Lazy<DeclarationsTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(CoreTokenization::new())
        .then(StructuralFiltering::new())
        .then(DeclarationParsing::new())
});

/// String → String, the full pipeline with the given rendering options
pub fn mocks_transform(options: MockOptions) -> Transform<String, String> {
    Transform::from_fn(Ok)
        .then_transform(&DECLARATIONS)
        .then(MockGeneration::new(options))
}
