pub mod ast;
pub mod interpreter;
pub mod parser;
pub mod prompt;
pub mod runfile;
mod tests;
