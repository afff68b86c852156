//! Command-line entry point for repo-minify.
//!
//! Exit codes:
//!   0  success
//!   1  general error
//!   2  input file not found
//!   3  permission denied
//!   4  parse/validation failure
//!   5  graph-build failure

use clap::Parser;
use repo_minify::Error;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const EXIT_GENERAL_ERROR: u8 = 1;
const EXIT_FILE_NOT_FOUND: u8 = 2;
const EXIT_PERMISSION_ERROR: u8 = 3;
const EXIT_PARSE_ERROR: u8 = 4;
const EXIT_GRAPH_ERROR: u8 = 5;

/// Analyze a Repomix codebase dump and emit its dependency graph.
#[derive(Debug, Parser)]
#[command(name = "repo-minify", version)]
struct Cli {
    /// Path to the Repomix output file.
    input_file: PathBuf,

    /// Output directory for the graph artifacts.
    #[arg(short = 'o', long, default_value = "repo_minify_output")]
    output_dir: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match repo_minify::run::run(&cli.input_file, &cli.output_dir) {
        Ok(report) => {
            println!("Found {} files to analyze", report.units);
            println!(
                "Built graph with {} nodes and {} edges",
                report.nodes, report.edges
            );
            println!("\nOutput files saved to: {}/", cli.output_dir.display());
            println!("- GraphML file: {}", report.artifacts.graphml.display());
            println!("- JSON file: {}", report.artifacts.json.display());
            println!("- Statistics: {}", report.artifacts.statistics.display());
            println!("- Text representation: {}", report.artifacts.text.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn exit_code_for(err: &Error) -> u8 {
    match err.io_kind() {
        Some(ErrorKind::NotFound) => return EXIT_FILE_NOT_FOUND,
        Some(ErrorKind::PermissionDenied) => return EXIT_PERMISSION_ERROR,
        _ => {}
    }
    match err {
        Error::Parse(_) => EXIT_PARSE_ERROR,
        Error::GraphBuild(_) => EXIT_GRAPH_ERROR,
        _ => EXIT_GENERAL_ERROR,
    }
}
