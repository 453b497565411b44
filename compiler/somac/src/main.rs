//! Soma CLI
//!
//! Thin wrapper over [`somac::run`].

use somac::{init_tracing, run, usage, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(err @ CliError::Usage) => {
            eprintln!("{}", usage());
            std::process::exit(err.exit_code());
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
