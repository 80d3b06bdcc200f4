use std::env::args_os;

use nary_huffman::{run_entropy_coder, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run_entropy_coder(&arguments) {
        Ok(_) => println!("Coding successful"),
        Err(e) => eprintln!("Coding failed because of: {}", e),
    }
}
