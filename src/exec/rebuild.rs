// src/exec/rebuild.rs

use anyhow::{anyhow, bail, Context};
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::Result;

/// Seam between the dispatch loop and the external build tool.
///
/// The loop only needs "run the build, tell me if it failed"; tests swap in a
/// recording implementation.
#[allow(async_fn_in_trait)]
pub trait RebuildAction {
    async fn rebuild(&mut self) -> Result<()>;
}

/// The real rebuild action: an external build command plus the pass-through
/// arguments the program itself was invoked with.
#[derive(Debug, Clone)]
pub struct BuildCommand {
    program: String,
    args: Vec<String>,
}

impl BuildCommand {
    /// Split `command` on whitespace into program + base arguments and append
    /// `extra_args` verbatim.
    pub fn new(command: &str, extra_args: &[String]) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| anyhow!("build command is empty"))?;

        let mut args: Vec<String> = parts.collect();
        args.extend(extra_args.iter().cloned());

        Ok(Self { program, args })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl RebuildAction for BuildCommand {
    /// Run the build to completion, capturing stdout and stderr.
    ///
    /// Follows the quiet-on-success convention: any combined output at all is
    /// treated as a failure and surfaced verbatim, so compiler diagnostics
    /// reach the user even when the tool exits zero. An abnormal exit with no
    /// output produces a plain error instead.
    async fn rebuild(&mut self) -> Result<()> {
        println!("Recompiling...");
        info!(program = %self.program, args = ?self.args, "running build command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .await
            .with_context(|| format!("spawning build command '{}'", self.program))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        debug!(exit = ?output.status.code(), bytes = combined.len(), "build finished");

        if !combined.trim().is_empty() {
            bail!("{}", combined.trim_end());
        }
        if !output.status.success() {
            bail!("'{}' exited with {}", self.program, output.status);
        }

        Ok(())
    }
}
