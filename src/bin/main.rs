use std::process;

use clap::Parser;
use getfields::cli::{init_logging, Args};
use getfields::{load, print_fields};

fn main() {
    let args = Args::parse();
    init_logging(args.log_level());

    let value = match load(&args.path) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = print_fields(&value, &args.fields) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
