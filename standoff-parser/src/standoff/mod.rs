//! Main module for standoff library functionality

pub mod ast;
pub mod error;
pub mod loader;
pub mod parsing;
