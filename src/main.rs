use clap::Parser;
use std::process;

use hashmark::error::Error;
use hashmark::{registry, run, Args};

fn main() {
    let args = Args::parse();

    let Some(name) = args.benchmark else {
        eprint!("{}", registry::usage());
        process::exit(2);
    };

    if let Err(err) = run(&name) {
        eprintln!("{err}");
        if matches!(err.downcast_ref::<Error>(), Some(Error::UnknownBenchmark(_))) {
            eprint!("{}", registry::usage());
        }
        process::exit(1);
    }
}
