use std::fs::read_to_string;

use crate::rspascal::interpreted::prompt::{report, run};

pub fn run_file(file: &str) -> () {
    let source = read_to_string(file).expect(format!("Cannot open file {}", file).as_ref());
    report(run(&source));
}
