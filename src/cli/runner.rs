use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use muonbatch::{
    BatchParams, BatchReport, CommandRunner, DryRunRunner, PassReport, SystemRunner, ToolConfig,
    run_batch,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Merge the optional config file with per-tool flags; flags win.
fn build_params(args: &CliArgs) -> Result<BatchParams, AppError> {
    let ascii_dir = args.ascii_dir.clone().ok_or(AppError::MissingArgument {
        arg: "-a/--ascii-dir".to_string(),
    })?;

    let mut tools = match &args.config {
        Some(path) => ToolConfig::from_json_file(path)?,
        None => ToolConfig::default(),
    };
    if let Some(converter) = &args.converter {
        tools.converter = converter.clone();
    }
    if let Some(builder) = &args.histogram_builder {
        tools.histogram_builder = builder.clone();
    }
    if let Some(plotter) = &args.plotter {
        tools.plotter = plotter.clone();
    }
    if let Some(plot_macro) = &args.plot_macro {
        tools.plot_macro = plot_macro.clone();
    }
    if let Some(work_dir) = &args.work_dir {
        tools.work_dir = Some(work_dir.clone());
    }

    Ok(BatchParams {
        data_dir: args.data_dir.clone(),
        ascii_dir,
        tools,
        continue_on_error: !args.fail_fast,
    })
}

fn log_pass(name: &str, pass: &PassReport) {
    info!(
        "{}: {} file(s), {} invocation(s), {} failure(s)",
        name,
        pass.files,
        pass.invocations,
        pass.failures.len()
    );
    for failure in &pass.failures {
        warn!(
            "  {} failed for {}: {}",
            failure.step,
            failure.file.display(),
            failure.reason
        );
    }
}

fn log_summary(report: &BatchReport) {
    info!("Batch processing complete!");
    match &report.conversion {
        Some(conversion) => log_pass("Conversion", conversion),
        None => info!("Conversion: skipped (no data directory)"),
    }
    log_pass("Processing", &report.processing);
    if report.aborted() {
        warn!("Stopped at the first failed step (--fail-fast)");
    }
    info!(
        "Elapsed: {:.1}s",
        (report.finished_at - report.started_at).num_milliseconds() as f64 / 1000.0
    );
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = build_params(&args)?;

    if let Some(data_dir) = &params.data_dir {
        info!("Data directory: {}", data_dir.display());
    }
    info!("ASCII directory: {}", params.ascii_dir.display());

    let mut runner: Box<dyn CommandRunner> = if args.dry_run {
        Box::new(DryRunRunner)
    } else {
        Box::new(SystemRunner)
    };

    let mut report = run_batch(&params, &mut runner)?;
    report.dry_run = args.dry_run;

    log_summary(&report);

    if let Some(path) = &args.report {
        report.write_json(path)?;
        info!("Report written to {}", path.display());
    }

    let failed = report.failed_steps();
    if failed > 0 {
        return Err(AppError::StepsFailed { failed }.into());
    }
    Ok(())
}
