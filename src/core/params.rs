use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Suffix appended to every converted file name
pub const CONVERTED_SUFFIX: &str = ".txt";

/// External tools and how to call them; loadable from a JSON config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Raw-to-ASCII converter, called as `<converter> [converter_args] -i <in> -o <out>`
    pub converter: PathBuf,
    /// Extra converter options placed before `-i`, e.g. `--nevt=100`
    pub converter_args: Vec<String>,
    /// Histogram builder, called with the converted file as its only argument
    pub histogram_builder: PathBuf,
    pub plotter: PathBuf,
    pub plotter_args: Vec<String>,
    /// Plotting macro; fixed per run, never receives the current file
    pub plot_macro: String,
    /// Working directory for the histogram and plot steps; None means inherit
    pub work_dir: Option<PathBuf>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            converter: PathBuf::from("./anamu"),
            converter_args: Vec::new(),
            histogram_builder: PathBuf::from("./muonHistogram"),
            plotter: PathBuf::from("rt"),
            plotter_args: vec!["-q".to_string()],
            plot_macro: "muonHistogramPlot.C".to_string(),
            work_dir: None,
        }
    }
}

impl ToolConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Everything a batch run needs, built once at startup and passed down explicitly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchParams {
    /// Raw data directory; when None the conversion pass is skipped
    pub data_dir: Option<PathBuf>,
    /// Converted ASCII directory, written by conversion and walked by processing
    pub ascii_dir: PathBuf,
    pub tools: ToolConfig,
    /// If false, the first failed step aborts the run
    pub continue_on_error: bool,
}

impl BatchParams {
    pub fn new(ascii_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: None,
            ascii_dir: ascii_dir.into(),
            tools: ToolConfig::default(),
            continue_on_error: true,
        }
    }
}
