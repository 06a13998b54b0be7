// src/main.rs
use clap::Parser;
use loc_total::args::Args;
use loc_total::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    match loc_total::run(&config) {
        Ok(total) => {
            println!("Total lines of code: {total}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
