use std::{env, process};

use upkeep_core::{
    cli::{output, run_cli, CliError},
    init,
};

fn main() {
    init();

    match run_cli(env::args().skip(1)) {
        Ok(()) => {}
        Err(CliError::Usage(message)) => {
            eprintln!("{message}");
            process::exit(2);
        }
        Err(err) => {
            output::error(format!("Error: {err}"));
            process::exit(1);
        }
    }
}
