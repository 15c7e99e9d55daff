//! muonbatch command-line driver.
//!
//! With `-d`, every raw data file is first handed to the converter and lands
//! in the `-a` folder as `<name>.txt`; then each file in the `-a` folder goes
//! through the histogram builder and the plotting macro. The process exits
//! non-zero when any of those steps failed.

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::run(cli::CliArgs::parse())
}
