// src/main.rs
use clap::Parser;
use log::debug;
use std::process;

use file_analyzer::{Args, USAGE, run};

fn main() {
    env_logger::init();

    let Ok(args) = Args::try_parse() else {
        println!("{USAGE}");
        process::exit(1);
    };

    if let Err(e) = run(args) {
        debug!("Analysis failed: {e:?}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
