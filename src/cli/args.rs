use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "complaints",
    version,
    about = "Summarize consumer complaints per product and year"
)]
pub struct Cli {
    /// Complaint CSV to read (first row is a header)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
    /// Report CSV to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
    /// Settings file (defaults to ./complaints.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Print a run summary to stderr
    #[arg(long, short)]
    pub verbose: bool,
}
