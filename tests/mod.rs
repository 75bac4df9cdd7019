//! Integration tests for revscript
//!
//! `render` exercises the library against whole operation trees;
//! `cli` drives the compiled binary.

pub mod cli;
pub mod helpers;
pub mod render;
