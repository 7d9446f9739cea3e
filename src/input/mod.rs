pub mod reader;
pub mod validate;
