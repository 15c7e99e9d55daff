use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "muonbatch",
    version,
    about = "Convert a folder of muon data files to ASCII and build histograms and plots for each"
)]
pub struct CliArgs {
    /// Directory holding the raw .dat files. If given, every file is converted into --ascii-dir first
    #[arg(short = 'd', long)]
    pub data_dir: Option<PathBuf>,

    /// Directory holding the converted ASCII files (written by conversion, read by processing)
    #[arg(short = 'a', long)]
    pub ascii_dir: Option<PathBuf>,

    /// JSON file describing the external tools
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Raw-to-ASCII converter (default ./anamu)
    #[arg(long)]
    pub converter: Option<PathBuf>,

    /// Histogram builder (default ./muonHistogram)
    #[arg(long)]
    pub histogram_builder: Option<PathBuf>,

    /// ROOT launcher used for the plotting macro (default rt)
    #[arg(long)]
    pub plotter: Option<PathBuf>,

    /// Plotting macro (default muonHistogramPlot.C)
    #[arg(long)]
    pub plot_macro: Option<String>,

    /// Working directory for the histogram and plot steps
    #[arg(long)]
    pub work_dir: Option<PathBuf>,

    /// Stop at the first failed step instead of continuing with the next file
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// Log the commands that would run without running them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
