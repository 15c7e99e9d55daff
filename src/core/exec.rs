//! Subprocess execution behind the `CommandRunner` seam.
use std::process::Command;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::{Invocation, StepStatus};

/// Runs one invocation to completion and reports how it exited.
/// A program that cannot be started is an `Error::Spawn`, not a `StepStatus`.
pub trait CommandRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<StepStatus>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for Box<R> {
    fn run(&mut self, invocation: &Invocation) -> Result<StepStatus> {
        (**self).run(invocation)
    }
}

/// Spawns real processes and blocks until each exits. Stdio is inherited.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<StepStatus> {
        debug!("Running: {}", invocation);
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(dir) = &invocation.current_dir {
            cmd.current_dir(dir);
        }
        let status = cmd.status().map_err(|source| Error::Spawn {
            program: invocation.program.clone(),
            source,
        })?;
        Ok(StepStatus::from(status))
    }
}

/// Logs what would run and reports success without spawning anything
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<StepStatus> {
        info!("[dry-run] {}", invocation);
        Ok(StepStatus::Success)
    }
}
