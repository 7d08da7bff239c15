//! Main module for swiftmock library functionality

pub mod declarations;
pub mod filtering;
pub mod generation;
pub mod lexing;
pub mod loader;
pub mod names;
pub mod parsing;
pub mod testing;
pub mod token;
pub mod transforms;
