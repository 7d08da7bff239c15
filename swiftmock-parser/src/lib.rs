//! # swiftmock-parser
//!
//! Reads Swift protocol declarations and renders mock classes for the ones that
//! conform to the `Mocking` marker protocol.
//!
//! File Layout
//!
//! src/swift
//!   ├── token          Full lexer tokens and the structural subset the parser reads
//!   ├── lexing         logos tokenization
//!   ├── filtering      Reduces the token stream to protocol structure
//!   ├── parsing        Recursive descent over structural tokens
//!   ├── declarations   The declaration model shared by parser and generator
//!   ├── generation     Mock rendering
//!   ├── names          Declared type name listing
//!   ├── transforms     Composable pipeline stages
//!   └── loader         Source loading with stage shortcuts
//!
//! The contract between stages is plain owned data: each stage consumes the previous
//! stage's output by value and hands its own output forward.

pub mod swift;
