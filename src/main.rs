//! CLI entry point for treedump

use std::path::PathBuf;
use std::process;

use clap::Parser;
use treedump::output::{print_saved, should_use_color};
use treedump::ReportGenerator;

#[derive(Parser, Debug)]
#[command(name = "treedump")]
#[command(about = "Write the directory tree of PATH to PATH/docs/project_tree.txt")]
#[command(version)]
struct Args {
    /// Directory to dump
    #[arg(default_value = ".")]
    path: PathBuf,
}

fn main() {
    let args = Args::parse();
    treedump::logging::init();

    let report = match ReportGenerator::default().generate(&args.path) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("treedump: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = print_saved(&report.output_path, should_use_color()) {
        eprintln!("treedump: error writing output: {}", e);
        process::exit(1);
    }
}
