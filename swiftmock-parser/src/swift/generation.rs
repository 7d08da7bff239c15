//! Mock generation
//!
//!     Renders one Swift class per protocol that conforms to the marker protocol
//!     (`Mocking` unless configured otherwise). For a protocol `I` the class is `IMock`
//!     and its body is laid out in three groups, each in function declaration order:
//!
//!         1. `var fReturnValue: R!` for every function that returns a value. Tests
//!            assign it before calling; reading it unset traps.
//!         2. `private(set) var fInvoked: T?` for every function. `T` is `Void` with no
//!            arguments, the argument type with one, a labelled tuple with more.
//!         3. The function itself, recording its arguments into `fInvoked` and
//!            returning `fReturnValue` when it has a return type.
//!
//!     Only the latest call is remembered. Rendering is a single pass of line appends
//!     into a [SwiftWriter]; the same declarations always render to the same bytes.

pub mod writer;

pub use writer::SwiftWriter;

use crate::swift::declarations::{FunctionDeclaration, InterfaceDeclaration};

/// Knobs for mock rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockOptions {
    /// Conformance that selects a protocol for mocking
    pub marker: String,
    /// Appended to the protocol name to name the mock class
    pub suffix: String,
    /// One level of indentation
    pub indent: String,
    /// Declare the mock class as conforming to the protocol it mocks
    pub conform_to_protocol: bool,
}

impl Default for MockOptions {
    fn default() -> Self {
        MockOptions {
            marker: "Mocking".to_string(),
            suffix: "Mock".to_string(),
            indent: "    ".to_string(),
            conform_to_protocol: true,
        }
    }
}

/// Render mocks with the default options
pub fn generate_mocks(interfaces: &[InterfaceDeclaration]) -> String {
    MockGenerator::default().generate(interfaces)
}

#[derive(Debug, Clone, Default)]
pub struct MockGenerator {
    options: MockOptions,
}

impl MockGenerator {
    pub fn new(options: MockOptions) -> Self {
        MockGenerator { options }
    }

    pub fn options(&self) -> &MockOptions {
        &self.options
    }

    /// Declarations selected for mocking, in input order
    pub fn mockable<'a>(
        &'a self,
        interfaces: &'a [InterfaceDeclaration],
    ) -> impl Iterator<Item = &'a InterfaceDeclaration> + 'a {
        interfaces
            .iter()
            .filter(move |interface| interface.conforms_to(&self.options.marker))
    }

    /// Render every selected declaration, separated by a blank line
    pub fn generate(&self, interfaces: &[InterfaceDeclaration]) -> String {
        self.mockable(interfaces)
            .map(|interface| self.render_mock(interface))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the mock class for a single declaration
    pub fn render_mock(&self, interface: &InterfaceDeclaration) -> String {
        let mut writer = SwiftWriter::new(&self.options.indent);

        writer.open(&self.class_header(interface));

        let mut needs_gap = false;

        let mut stubs = interface
            .functions
            .iter()
            .filter(|function| function.returns_value())
            .peekable();
        if stubs.peek().is_some() {
            for function in stubs {
                writer.line(&stub_property(function));
            }
            needs_gap = true;
        }

        if !interface.functions.is_empty() {
            if needs_gap {
                writer.blank();
            }
            for function in &interface.functions {
                writer.line(&invocation_property(function));
            }
            for function in &interface.functions {
                writer.blank();
                render_method(&mut writer, function);
            }
        }

        writer.close("}");
        writer.finish()
    }

    fn class_header(&self, interface: &InterfaceDeclaration) -> String {
        let class_name = format!("{}{}", interface.name, self.options.suffix);
        if self.options.conform_to_protocol {
            format!("class {}: {} {{", class_name, interface.name)
        } else {
            format!("class {} {{", class_name)
        }
    }
}

fn render_method(writer: &mut SwiftWriter, function: &FunctionDeclaration) {
    writer.open(&format!("{} {{", signature(function)));
    writer.line(&format!(
        "{}Invoked = {}",
        function.name,
        invocation_value(function)
    ));
    if function.returns_value() {
        writer.line(&format!("return {}ReturnValue", function.name));
    }
    writer.close("}");
}

/// `var greetReturnValue: String!`
pub fn stub_property(function: &FunctionDeclaration) -> String {
    format!(
        "var {}ReturnValue: {}!",
        function.name, function.return_type
    )
}

/// `private(set) var greetInvoked: String?`
pub fn invocation_property(function: &FunctionDeclaration) -> String {
    format!(
        "private(set) var {}Invoked: {}?",
        function.name,
        invocation_type(function)
    )
}

/// Type of the invocation record, by arity
pub fn invocation_type(function: &FunctionDeclaration) -> String {
    match function.arguments.as_slice() {
        [] => "Void".to_string(),
        [single] => single.type_name.clone(),
        arguments => {
            let slots = arguments
                .iter()
                .map(|argument| format!("{}: {}", argument.name, argument.type_name))
                .collect::<Vec<_>>();
            format!("({})", slots.join(", "))
        }
    }
}

/// Value assigned to the invocation record when the mock is called
pub fn invocation_value(function: &FunctionDeclaration) -> String {
    match function.arguments.as_slice() {
        [] => "()".to_string(),
        [single] => single.name.clone(),
        arguments => {
            let slots = arguments
                .iter()
                .map(|argument| format!("{}: {}", argument.name, argument.name))
                .collect::<Vec<_>>();
            format!("({})", slots.join(", "))
        }
    }
}

/// `func greet(person: String) -> String`
pub fn signature(function: &FunctionDeclaration) -> String {
    let parameters = function
        .arguments
        .iter()
        .map(|argument| match &argument.label {
            Some(label) => format!("{} {}: {}", label, argument.name, argument.type_name),
            None => format!("{}: {}", argument.name, argument.type_name),
        })
        .collect::<Vec<_>>()
        .join(", ");

    if function.returns_value() {
        format!(
            "func {}({}) -> {}",
            function.name, parameters, function.return_type
        )
    } else {
        format!("func {}({})", function.name, parameters)
    }
}
