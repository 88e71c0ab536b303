use clap::Parser;
use complaints_core::cli::{handlers, Cli};
use complaints_core::exit::ReportExit;
use complaints_core::reporting;

fn main() -> ReportExit {
    let cli = Cli::parse();

    match handlers::handle_report(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            reporting::print_error(&e);
            ReportExit::for_error(&e)
        }
    }
}
