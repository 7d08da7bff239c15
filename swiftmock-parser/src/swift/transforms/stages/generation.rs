//! Mock generation stage

use crate::swift::declarations::InterfaceDeclaration;
use crate::swift::generation::{MockGenerator, MockOptions};
use crate::swift::transforms::{Runnable, TransformError};

/// Vec<InterfaceDeclaration> → String
pub struct MockGeneration {
    generator: MockGenerator,
}

impl MockGeneration {
    pub fn new(options: MockOptions) -> Self {
        MockGeneration {
            generator: MockGenerator::new(options),
        }
    }
}

impl Default for MockGeneration {
    fn default() -> Self {
        Self::new(MockOptions::default())
    }
}

impl Runnable<Vec<InterfaceDeclaration>, String> for MockGeneration {
    fn run(&self, input: Vec<InterfaceDeclaration>) -> Result<String, TransformError> {
        Ok(self.generator.generate(&input))
    }
}
