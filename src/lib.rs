#![doc = r#"
muonbatch — batch driver for muon detector data folders.

The crate walks a folder of raw muon buffers, converts each file to ASCII with the
external `anamu` converter, then runs the histogram builder and the ROOT plotting
macro over every converted file. It does not read the data itself; all three tools
are opaque programs called with structured argument lists (never through a shell).

Quick start: convert and process a folder
-----------------------------------------
```rust,no_run
use muonbatch::{run_batch, BatchParams, SystemRunner};

fn main() -> muonbatch::Result<()> {
    let mut params = BatchParams::new("/data/ascii");
    params.data_dir = Some("/data/raw".into());

    let report = run_batch(&params, &mut SystemRunner)?;
    println!(
        "invocations={} failed={}",
        report.total_invocations(),
        report.failed_steps()
    );
    Ok(())
}
```

Custom tools
------------
```rust,no_run
use std::path::Path;
use muonbatch::{process_all, SystemRunner, ToolConfig};

fn main() -> muonbatch::Result<()> {
    let tools = ToolConfig {
        histogram_builder: "/opt/auger/bin/muonHistogram".into(),
        plot_macro: "muonHistBatchPlot.C".to_string(),
        work_dir: Some("/tmp/muon-work".into()),
        ..ToolConfig::default()
    };
    let report = process_all(Path::new("/data/ascii"), &tools, true, &mut SystemRunner)?;
    for failure in &report.failures {
        eprintln!("{} failed for {}: {}", failure.step, failure.file.display(), failure.reason);
    }
    Ok(())
}
```

Error handling
--------------
All public functions return `muonbatch::Result<T>`. A tool that exits non-zero or
cannot be started is not an error: it is recorded as a `StepFailure` in the report.
With `continue_on_error` unset the run stops at the first one and the report is
marked aborted, so callers still get the summary.

Useful modules
--------------
- [`api`] — conversion pass, processing pass, and `run_batch`.
- [`types`] — `Invocation`, `Step`, `StepStatus` and the reports.
- [`core`] — parameters, traversal, and the `CommandRunner` implementations.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

pub use crate::core::exec::{CommandRunner, DryRunRunner, SystemRunner};
pub use crate::core::params::{BatchParams, CONVERTED_SUFFIX, ToolConfig};
pub use crate::core::traversal::{converted_path, walk_files};
pub use error::{Error, Result};
pub use types::{BatchReport, Invocation, PassReport, Step, StepFailure, StepStatus};

pub use api::{
    conversion_invocation, convert_all, histogram_invocation, plot_invocation, process_all,
    run_batch,
};
