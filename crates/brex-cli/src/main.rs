//! brex CLI entry point.

use std::{
    io::{self, BufWriter},
    process,
    str::FromStr,
};

use clap::Parser;
use log::{LevelFilter, debug, info};

use brex_cli::{
    Args,
    error_adapter::{ReportStyle, render_report},
};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting brex");
    debug!(args:?; "Parsed arguments");

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    if let Err(err) = brex_cli::run(&args, stdin, stdout) {
        let exit_code = err.exit_code();
        debug!(exit_code = exit_code; "Run failed");

        if args.is_verbose() {
            let style = if args.fancy {
                ReportStyle::Fancy
            } else {
                ReportStyle::Plain
            };
            eprint!("{}", render_report(&err, style));
        }

        process::exit(exit_code);
    }

    info!("Completed successfully");
}
