//! `fhevm-examples` - scaffolding and documentation tooling for FHEVM examples

use clap::Parser;

use fhevm_examples::cli::args::Cli;
use fhevm_examples::cli::commands;
use fhevm_examples::error::ExitCode;
use fhevm_examples::observability::init_logging;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let printed = e.print();
            std::process::exit(ExitCode::for_parse_error(&e, &printed));
        }
    };

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
