pub mod operations;
pub mod script;
