//! Declaration model
//!
//! Immutable value records built once by the parser and read by the generator.
//! Types are opaque names; nothing here is resolved against a type system.

use serde::Serialize;

/// Return type recorded for functions without a return clause
pub const VOID_TYPE: &str = "Void";

/// A `protocol` declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceDeclaration {
    pub name: String,
    pub functions: Vec<FunctionDeclaration>,
    /// Declared order, duplicates kept
    pub conformances: Vec<String>,
}

impl InterfaceDeclaration {
    pub fn new(
        name: impl Into<String>,
        functions: Vec<FunctionDeclaration>,
        conformances: Vec<String>,
    ) -> Self {
        InterfaceDeclaration {
            name: name.into(),
            functions,
            conformances,
        }
    }

    /// Whether `capability` appears in the conformance list (exact, case-sensitive)
    pub fn conforms_to(&self, capability: &str) -> bool {
        self.conformances.iter().any(|name| name == capability)
    }
}

/// A `func` requirement inside a protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub arguments: Vec<ArgumentDeclaration>,
    pub return_type: String,
}

impl FunctionDeclaration {
    pub fn new(
        name: impl Into<String>,
        arguments: Vec<ArgumentDeclaration>,
        return_type: impl Into<String>,
    ) -> Self {
        FunctionDeclaration {
            name: name.into(),
            arguments,
            return_type: return_type.into(),
        }
    }

    /// A function with no return clause
    pub fn void(name: impl Into<String>, arguments: Vec<ArgumentDeclaration>) -> Self {
        Self::new(name, arguments, VOID_TYPE)
    }

    pub fn returns_value(&self) -> bool {
        self.return_type != VOID_TYPE
    }
}

/// One parameter of a function requirement
///
/// `label` is the external argument label when the declaration spells one out
/// (`to person: String`, `_ person: String`); `name` is always the internal name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentDeclaration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub name: String,
    pub type_name: String,
}

impl ArgumentDeclaration {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        ArgumentDeclaration {
            label: None,
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    pub fn labelled(
        label: impl Into<String>,
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        ArgumentDeclaration {
            label: Some(label.into()),
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conforms_to_is_exact() {
        let decl = InterfaceDeclaration::new(
            "Greeter",
            Vec::new(),
            vec!["AnyConformance".to_string(), "Mocking".to_string()],
        );
        assert!(decl.conforms_to("Mocking"));
        assert!(!decl.conforms_to("mocking"));
        assert!(!decl.conforms_to("Mock"));
    }

    #[test]
    fn test_void_sentinel() {
        assert!(!FunctionDeclaration::void("reset", Vec::new()).returns_value());
        assert!(!FunctionDeclaration::new("reset", Vec::new(), "Void").returns_value());
        assert!(FunctionDeclaration::new("count", Vec::new(), "Int").returns_value());
    }
}
