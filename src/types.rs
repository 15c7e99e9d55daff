//! Shared types used across muonbatch.
//! Includes the subprocess `Invocation`, the `Step` it belongs to, its
//! `StepStatus`, and the per-pass/per-run reports.
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// External collaborator an invocation targets
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Convert,
    Histogram,
    Plot,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Step::Convert => "convert",
            Step::Histogram => "histogram",
            Step::Plot => "plot",
        };
        write!(f, "{}", s)
    }
}

/// A program plus its argument vector, run without a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub current_dir: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn current_dir(mut self, dir: Option<&Path>) -> Self {
        self.current_dir = dir.map(Path::to_path_buf);
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {:?}", arg)?;
        }
        Ok(())
    }
}

/// Exit status of a finished invocation
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepStatus {
    Success,
    /// `code` is None when the process was terminated by a signal
    Failed { code: Option<i32> },
}

impl StepStatus {
    pub fn success(&self) -> bool {
        matches!(self, StepStatus::Success)
    }
}

impl From<std::process::ExitStatus> for StepStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        if status.success() {
            StepStatus::Success
        } else {
            StepStatus::Failed {
                code: status.code(),
            }
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Success => write!(f, "success"),
            StepStatus::Failed { code: Some(code) } => write!(f, "exit code {}", code),
            StepStatus::Failed { code: None } => write!(f, "terminated by signal"),
        }
    }
}

/// One failed invocation, kept for the end-of-run summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepFailure {
    pub step: Step,
    pub file: PathBuf,
    pub reason: String,
}

/// Outcome of a single conversion or processing pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassReport {
    pub files: usize,
    pub invocations: usize,
    pub failures: Vec<StepFailure>,
    /// Set when the pass stopped at its first failure
    #[serde(default)]
    pub aborted: bool,
}

impl PassReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of a full run: optional conversion pass followed by processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub conversion: Option<PassReport>,
    pub processing: PassReport,
}

impl BatchReport {
    pub fn failed_steps(&self) -> usize {
        self.conversion.as_ref().map_or(0, |c| c.failures.len()) + self.processing.failures.len()
    }

    pub fn aborted(&self) -> bool {
        self.conversion.as_ref().is_some_and(|c| c.aborted) || self.processing.aborted
    }

    pub fn total_invocations(&self) -> usize {
        self.conversion.as_ref().map_or(0, |c| c.invocations) + self.processing.invocations
    }

    /// Write the report as pretty JSON
    pub fn write_json(&self, path: &Path) -> crate::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_display_quotes_arguments() {
        let inv = Invocation::new("./anamu")
            .arg("-i")
            .arg("raw/run 1.dat");
        assert_eq!(inv.to_string(), "./anamu \"-i\" \"raw/run 1.dat\"");
    }

    #[test]
    fn failed_steps_sums_both_passes() {
        let failure = StepFailure {
            step: Step::Plot,
            file: PathBuf::from("a.txt"),
            reason: "exit code 1".to_string(),
        };
        let report = BatchReport {
            started_at: Utc::now(),
            finished_at: Utc::now(),
            dry_run: false,
            conversion: Some(PassReport {
                files: 1,
                invocations: 1,
                failures: vec![failure.clone()],
                aborted: false,
            }),
            processing: PassReport {
                files: 1,
                invocations: 2,
                failures: vec![failure],
                aborted: true,
            },
        };
        assert_eq!(report.failed_steps(), 2);
        assert_eq!(report.total_invocations(), 3);
        assert!(report.aborted());
    }

    #[test]
    fn report_json_omits_missing_conversion() {
        let report = BatchReport {
            started_at: Utc::now(),
            finished_at: Utc::now(),
            dry_run: true,
            conversion: None,
            processing: PassReport::default(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("conversion").is_none());
        assert_eq!(json["processing"]["invocations"], 0);
        assert_eq!(json["dry_run"], true);
    }

    #[test]
    fn step_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Step::Histogram).unwrap(), "\"histogram\"");
    }
}
