#[cfg(test)]
use {
    crate::rspascal::interpreted::ast::Program,
    crate::rspascal::interpreted::interpreter::{GlobalScope, Interpreter},
    crate::rspascal::interpreted::parser::parse,
};

#[cfg(test)]
pub fn unsafe_parse(program: Vec<&str>) -> Program {
    parse(program.join("\n").as_ref()).expect("Failed to parse")
}

#[cfg(test)]
pub fn unsafe_interpret(program: Vec<&str>) -> GlobalScope {
    let parsed = unsafe_parse(program);
    let mut interpreter = Interpreter::new();
    interpreter.interpret(&parsed).expect("Failed to interpret");
    interpreter.into_global_scope()
}
