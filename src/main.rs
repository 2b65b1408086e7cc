//! Style specification command line tool

use std::process;
use stylespec::SpecCli;

fn main() {
    let mut cli = SpecCli::new();
    if let Err(e) = cli.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
