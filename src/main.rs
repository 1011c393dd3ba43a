//! CLI entry point for pulp

use std::io;
use std::process;

use clap::Parser;
use pulp::{OUTPUT_FILE_NAME, Snapshot, SnapshotError, StatusPrinter, should_use_color};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "pulp")]
#[command(about = "Write the current directory's structure and source into full_codebase.txt")]
#[command(version)]
struct Args {}

fn main() {
    let _args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        eprintln!("pulp: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), SnapshotError> {
    let snapshot = Snapshot::new(".")?;
    let mut status = StatusPrinter::new(should_use_color());

    // Status lines are cosmetic; a closed stdout must not fail the run
    let _ = status.started();
    let report = snapshot.write()?;

    let _ = status.finished(OUTPUT_FILE_NAME, report.files, report.inlined);
    if report.unreadable > 0 {
        let _ = status.unreadable(report.unreadable);
    }
    Ok(())
}
