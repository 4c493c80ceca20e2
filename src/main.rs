use std::env;

use rspascal::calc;
use rspascal::interpreted::prompt::run_prompt;
use rspascal::interpreted::runfile::run_file;

pub mod rspascal;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        panic!("Usage: rspascal [script | --calc]");
    } else if args.len() == 2 {
        if args[1] == "--calc" {
            calc::run_prompt();
        } else {
            run_file(&args[1]);
        }
    } else {
        run_prompt();
    }
}
