//! High-level library API: the conversion pass, the processing pass, and
//! `run_batch` which chains them. Every function takes its configuration
//! explicitly and a `CommandRunner` that performs the actual invocations.
use std::path::Path;

use chrono::Utc;
use tracing::{info, warn};

use crate::core::exec::CommandRunner;
use crate::core::params::{BatchParams, ToolConfig};
use crate::core::traversal::{converted_path, walk_files};
use crate::error::{Error, Result};
use crate::types::{BatchReport, Invocation, PassReport, Step, StepFailure, StepStatus};

/// Converter call for one raw file
pub fn conversion_invocation(tools: &ToolConfig, input: &Path, output: &Path) -> Invocation {
    Invocation::new(&tools.converter)
        .args(&tools.converter_args)
        .arg("-i")
        .arg(input)
        .arg("-o")
        .arg(output)
}

/// Histogram builder call for one converted file. With a work dir set the
/// path is made absolute, since the builder no longer runs where it was walked.
pub fn histogram_invocation(tools: &ToolConfig, file: &Path) -> Result<Invocation> {
    let file = match &tools.work_dir {
        Some(_) => std::path::absolute(file)?,
        None => file.to_path_buf(),
    };
    Ok(Invocation::new(&tools.histogram_builder)
        .arg(&file)
        .current_dir(tools.work_dir.as_deref()))
}

/// Plot call; identical for every file since the macro reads the
/// histogram builder's artifact from the working directory
pub fn plot_invocation(tools: &ToolConfig) -> Invocation {
    Invocation::new(&tools.plotter)
        .args(&tools.plotter_args)
        .arg(&tools.plot_macro)
        .current_dir(tools.work_dir.as_deref())
}

fn run_step<R: CommandRunner + ?Sized>(
    runner: &mut R,
    step: Step,
    file: &Path,
    invocation: &Invocation,
    report: &mut PassReport,
    continue_on_error: bool,
) -> Result<()> {
    report.invocations += 1;
    let reason = match runner.run(invocation) {
        Ok(StepStatus::Success) => return Ok(()),
        Ok(status) => status.to_string(),
        Err(e @ Error::Spawn { .. }) => e.to_string(),
        Err(e) => return Err(e),
    };

    warn!("{} step failed for {}: {}", step, file.display(), reason);
    report.failures.push(StepFailure {
        step,
        file: file.to_path_buf(),
        reason,
    });
    if !continue_on_error {
        report.aborted = true;
    }
    Ok(())
}

/// Convert every file under `input_dir` into `output_dir/<name>.txt`.
/// `output_dir` is created before the first converter call.
/// Failures are always recorded in the report. If `continue_on_error` is false
/// the pass stops at the first one and the report is marked `aborted`.
pub fn convert_all<R: CommandRunner + ?Sized>(
    input_dir: &Path,
    output_dir: &Path,
    tools: &ToolConfig,
    continue_on_error: bool,
    runner: &mut R,
) -> Result<PassReport> {
    let files = walk_files(input_dir)?;
    std::fs::create_dir_all(output_dir)?;

    let mut report = PassReport::default();
    for input in files {
        let Some(output) = converted_path(&input, output_dir) else {
            continue;
        };
        info!("From: {} To: {}", input.display(), output.display());
        report.files += 1;

        let invocation = conversion_invocation(tools, &input, &output);
        run_step(
            runner,
            Step::Convert,
            &input,
            &invocation,
            &mut report,
            continue_on_error,
        )?;
        if report.aborted {
            break;
        }
    }

    Ok(report)
}

/// Run the histogram builder and then the plotting macro for every file
/// under `ascii_dir`. Failure handling follows `convert_all`.
pub fn process_all<R: CommandRunner + ?Sized>(
    ascii_dir: &Path,
    tools: &ToolConfig,
    continue_on_error: bool,
    runner: &mut R,
) -> Result<PassReport> {
    let files = walk_files(ascii_dir)?;

    let mut report = PassReport::default();
    let plot = plot_invocation(tools);
    for file in files {
        info!("Processing: {}", file.display());
        report.files += 1;

        let histogram = histogram_invocation(tools, &file)?;
        run_step(
            runner,
            Step::Histogram,
            &file,
            &histogram,
            &mut report,
            continue_on_error,
        )?;
        if report.aborted {
            break;
        }
        // The macro runs even after a failed histogram step, as the plain
        // script sequence did; both failures end up in the report.
        run_step(
            runner,
            Step::Plot,
            &file,
            &plot,
            &mut report,
            continue_on_error,
        )?;
        if report.aborted {
            break;
        }
    }

    Ok(report)
}

/// Conversion pass (only when `params.data_dir` is set) followed by the
/// processing pass over `params.ascii_dir`. A conversion pass that stopped
/// early leaves the processing pass empty.
pub fn run_batch<R: CommandRunner + ?Sized>(
    params: &BatchParams,
    runner: &mut R,
) -> Result<BatchReport> {
    if params.ascii_dir.as_os_str().is_empty() {
        return Err(Error::MissingArgument {
            arg: "ascii_dir".to_string(),
        });
    }

    let started_at = Utc::now();

    let conversion = match &params.data_dir {
        Some(data_dir) => {
            info!(
                "Converting {} into {}",
                data_dir.display(),
                params.ascii_dir.display()
            );
            Some(convert_all(
                data_dir,
                &params.ascii_dir,
                &params.tools,
                params.continue_on_error,
                runner,
            )?)
        }
        None => None,
    };

    let processing = if conversion.as_ref().is_some_and(|c| c.aborted) {
        warn!("Conversion stopped at the first failure; skipping processing");
        PassReport::default()
    } else {
        info!("Processing {}", params.ascii_dir.display());
        process_all(
            &params.ascii_dir,
            &params.tools,
            params.continue_on_error,
            runner,
        )?
    };

    Ok(BatchReport {
        started_at,
        finished_at: Utc::now(),
        dry_run: false,
        conversion,
        processing,
    })
}
