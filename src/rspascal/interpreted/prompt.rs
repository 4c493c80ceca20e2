use std::io;
use std::io::{BufRead, Write};

use crate::rspascal::common::error::{PascalError, PascalResult};
use crate::rspascal::interpreted::interpreter::{GlobalScope, Interpreter};
use crate::rspascal::interpreted::parser::parse;

pub fn run_prompt() -> () {
    let stdin = io::stdin();
    let mut line_read: String = "".to_owned();
    loop {
        print!("> ");
        io::stdout().flush().expect("Failed to flush stdout");
        line_read.clear();
        let read = stdin.lock().read_line(&mut line_read).expect("Failed to read line from input");
        if read == 0 {
            break;
        }
        if line_read.trim().is_empty() {
            continue;
        }
        report(run(&line_read));
    }
}

pub fn run(source: &str) -> PascalResult<GlobalScope> {
    let program = parse(source)?;
    let mut interpreter = Interpreter::new();
    interpreter.interpret(&program)?;
    Ok(interpreter.into_global_scope())
}

pub fn report(result: PascalResult<GlobalScope>) -> () {
    match result {
        Ok(scope) => {
            let mut entries: Vec<(String, i64)> =
                scope.iter().map(|(k, v)| (k.to_owned(), v)).collect();
            entries.sort();
            for (name, value) in entries {
                println!("{} = {}", name, value);
            }
        }
        Err(errors) =>
            for error in errors {
                eprintln!("{}", error.get_message());
            },
    }
}
