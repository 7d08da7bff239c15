//! Declaration parsing over fixture sources
//!
//! Sources come from `tests/fixtures/` via the crate's testing helpers; each test checks
//! the complete declaration values, not just counts.

use rstest::rstest;
use swiftmock_parser::swift::declarations::{
    ArgumentDeclaration, FunctionDeclaration, InterfaceDeclaration,
};
use swiftmock_parser::swift::loader::{LoaderError, SourceLoader};
use swiftmock_parser::swift::parsing::ParseError;
use swiftmock_parser::swift::testing::fixture_path;
use swiftmock_parser::swift::token::StructuralToken;
use swiftmock_parser::swift::transforms::TransformError;

fn declarations(fixture: &str) -> Result<Vec<InterfaceDeclaration>, LoaderError> {
    SourceLoader::from_path(fixture_path(fixture))
        .expect("fixture to load")
        .declarations()
}

fn hello_world() -> InterfaceDeclaration {
    InterfaceDeclaration::new(
        "HelloWorld",
        vec![
            FunctionDeclaration::new(
                "greet",
                vec![ArgumentDeclaration::new("person", "String")],
                "String",
            ),
            FunctionDeclaration::new(
                "bye",
                vec![ArgumentDeclaration::new("person", "String")],
                "String",
            ),
        ],
        vec!["AnyConformance".to_string(), "Mocking".to_string()],
    )
}

fn non_mockable_protocol() -> InterfaceDeclaration {
    InterfaceDeclaration::new(
        "NonMockableProtocol",
        vec![FunctionDeclaration::new(
            "nonMockableGreet",
            vec![ArgumentDeclaration::new("person", "String")],
            "String",
        )],
        Vec::new(),
    )
}

fn buy_animating() -> InterfaceDeclaration {
    InterfaceDeclaration::new(
        "BuyAnimating",
        vec![FunctionDeclaration::void(
            "animateBuy",
            vec![
                ArgumentDeclaration::new("view", "UIView"),
                ArgumentDeclaration::new("detailsView", "VinylDetailsView"),
                ArgumentDeclaration::new("barView", "ShoppingBarView"),
            ],
        )],
        vec!["Mocking".to_string()],
    )
}

#[test]
fn test_storefront_protocols() {
    let parsed = declarations("Storefront.swift").unwrap();

    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[0], hello_world());
    assert_eq!(parsed[1], non_mockable_protocol());
    assert_eq!(parsed[2], buy_animating());
}

#[test]
fn test_greeter_scenario() {
    let parsed = declarations("Greeter.swift").unwrap();

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].name, "Greeter");
    assert_eq!(parsed[0].conformances, vec!["Mocking"]);
    assert_eq!(
        parsed[0]
            .functions
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>(),
        vec!["greet", "bye"]
    );
}

#[test]
fn test_labels_and_comments() {
    let parsed = declarations("Session.swift").unwrap();

    assert_eq!(
        parsed,
        vec![InterfaceDeclaration::new(
            "SessionStoring",
            vec![
                FunctionDeclaration::void("reset", Vec::new()),
                FunctionDeclaration::new(
                    "token",
                    vec![ArgumentDeclaration::labelled("for", "account", "Account")],
                    "Token",
                ),
                FunctionDeclaration::void(
                    "store",
                    vec![
                        ArgumentDeclaration::labelled("_", "token", "Token"),
                        ArgumentDeclaration::new("account", "Account"),
                        ArgumentDeclaration::new("expiry", "Date"),
                    ],
                ),
            ],
            vec!["Mocking".to_string()],
        )]
    );
}

#[test]
fn test_malformed_fixture_fails_whole_parse() {
    let err = declarations("Malformed.swift").unwrap_err();

    match err {
        LoaderError::TransformError(TransformError::Parse(ParseError::InvalidSyntax {
            expected,
            found,
            ..
        })) => {
            assert_eq!(expected, "`,` or `)`");
            assert_eq!(found, Some(StructuralToken::RightBrace));
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_parsing_is_repeatable() {
    let loader = SourceLoader::from_path(fixture_path("Storefront.swift")).unwrap();
    assert_eq!(loader.declarations().unwrap(), loader.declarations().unwrap());
}

#[rstest]
#[case("")]
#[case("import Foundation\n")]
#[case("// just a comment\n")]
#[case("struct Point { let x: Int; let y: Int }\n")]
#[case("func helper(a: Int) -> Int { return a }\n")]
fn test_sources_without_protocols(#[case] source: &str) {
    let parsed = SourceLoader::from_string(source).declarations().unwrap();
    assert!(parsed.is_empty());
}

#[rstest]
#[case("protocol P { func f(a: Int }", "`,` or `)`")]
#[case("protocol P { func f(a: Int,) }", "argument name")]
#[case("protocol P { func f(a Int) }", "`:`")]
#[case("protocol P { func f() -> }", "type name")]
#[case("protocol P: { }", "conformance name")]
#[case("protocol P: A, { }", "conformance name")]
#[case("protocol { }", "protocol name")]
#[case("protocol P func f()", "`{`")]
#[case("protocol P { var x: Int }", "`func` or `}`")]
#[case("protocol P { func f()", "`func` or `}`")]
#[case("protocol P {} protocol", "protocol name")]
fn test_invalid_syntax(#[case] source: &str, #[case] expected_message: &str) {
    let err = SourceLoader::from_string(source)
        .declarations()
        .unwrap_err();

    match err {
        LoaderError::TransformError(TransformError::Parse(ParseError::InvalidSyntax {
            expected,
            ..
        })) => assert_eq!(expected, expected_message),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[rstest]
#[case("func f()", 0)]
#[case("func f(a: A)", 1)]
#[case("func f(a: A, b: B)", 2)]
#[case("func f(a: A, b: B, c: C, d: D)", 4)]
fn test_argument_counts(#[case] function: &str, #[case] count: usize) {
    let source = format!("protocol P {{ {} }}", function);
    let parsed = SourceLoader::from_string(source).declarations().unwrap();
    assert_eq!(parsed[0].functions[0].arguments.len(), count);
}
