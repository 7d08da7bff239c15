//! CLI-specific transforms
//!
//! This module defines the intermediate stages `swiftmock inspect` can print.
//! Each transform is a stage + format combination (e.g., "token-core-json").

use serde::Serialize;
use std::ops::Range;
use swiftmock_parser::swift::loader::SourceLoader;
use swiftmock_parser::swift::transforms::standard::{
    CORE_TOKENIZATION, DECLARATIONS, STRUCTURAL_TOKENS,
};

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "token-core-json",
    "token-structural-json",
    "declarations-json",
];

/// Execute a named transform on a source file
pub fn execute_transform(source: &str, transform_name: &str) -> Result<String, String> {
    let loader = SourceLoader::from_string(source);

    match transform_name {
        "token-core-json" => {
            let tokens = loader
                .with(&CORE_TOKENIZATION)
                .map_err(|e| format!("Transform failed: {}", e))?;
            tokens_to_json(&tokens)
        }
        "token-structural-json" => {
            let tokens = loader
                .with(&STRUCTURAL_TOKENS)
                .map_err(|e| format!("Transform failed: {}", e))?;
            tokens_to_json(&tokens)
        }
        "declarations-json" => {
            let declarations = loader
                .with(&DECLARATIONS)
                .map_err(|e| format!("Transform failed: {}", e))?;
            serde_json::to_string_pretty(&declarations)
                .map_err(|e| format!("JSON serialization failed: {}", e))
        }
        _ => Err(format!("Unknown transform: {}", transform_name)),
    }
}

/// A token with its byte range, as printed by the token transforms
#[derive(Serialize)]
struct SpannedToken<'a, T> {
    token: &'a T,
    start: usize,
    end: usize,
}

/// Serialize a spanned token stream as a pretty JSON array
fn tokens_to_json<T: Serialize>(tokens: &[(T, Range<usize>)]) -> Result<String, String> {
    let spanned: Vec<SpannedToken<'_, T>> = tokens
        .iter()
        .map(|(token, range)| SpannedToken {
            token,
            start: range.start,
            end: range.end,
        })
        .collect();
    serde_json::to_string_pretty(&spanned).map_err(|e| format!("JSON serialization failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "protocol Greeter: Mocking {\n    func greet(name: String) -> String\n}\n";

    #[test]
    fn every_listed_transform_runs() {
        for name in AVAILABLE_TRANSFORMS {
            let output = execute_transform(SOURCE, name).expect("transform to run");
            assert!(output.starts_with('['), "{} output: {}", name, output);
        }
    }

    #[test]
    fn core_tokens_include_trivia() {
        let output = execute_transform(SOURCE, "token-core-json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["token"], "Protocol");
        assert_eq!(value[0]["start"], 0);
        assert_eq!(value[1]["token"], "Whitespace");
    }

    #[test]
    fn structural_tokens_drop_trivia() {
        let output = execute_transform(SOURCE, "token-structural-json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["token"], "Protocol");
        assert_eq!(value[1]["token"]["Identifier"], "Greeter");
        assert_eq!(value[1]["start"], 9);
        assert_eq!(value[1]["end"], 16);
        assert!(!output.contains("Whitespace"));
    }

    #[test]
    fn declarations_are_serialized() {
        let output = execute_transform(SOURCE, "declarations-json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["name"], "Greeter");
        assert_eq!(value[0]["functions"][0]["return_type"], "String");
        assert_eq!(value[0]["conformances"][0], "Mocking");
    }

    #[test]
    fn parse_errors_are_reported() {
        let err = execute_transform("protocol {", "declarations-json").unwrap_err();
        assert!(err.starts_with("Transform failed:"));
    }

    #[test]
    fn unknown_transform() {
        let err = execute_transform(SOURCE, "ast-tag").unwrap_err();
        assert_eq!(err, "Unknown transform: ast-tag");
    }
}
