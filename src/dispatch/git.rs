//! Git Commit Execution
//!
//! Runs `git commit` with the composed message, streaming git's own output to
//! the console.

use std::{
    path::PathBuf,
    process::{Command, ExitStatus},
};

use tracing::debug;

use crate::{
    errors::{DispatchError, Result},
    utils::print_success,
};

use super::{CommitInvocation, Dispatcher};

/// Dispatcher that runs `git commit`.
#[derive(Debug, Clone, Default)]
pub struct GitCommitRunner {
    work_dir: Option<PathBuf>,
}

impl GitCommitRunner {
    /// Creates a runner committing in the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a runner committing in `work_dir`.
    #[must_use]
    pub fn in_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: Some(work_dir.into()),
        }
    }

    fn command(&self, invocation: &CommitInvocation) -> Command {
        let mut command = Command::new("git");
        command.args(invocation.git_args());

        if let Some(dir) = &self.work_dir {
            command.current_dir(dir);
        }

        command
    }
}

impl Dispatcher for GitCommitRunner {
    /// Commits with the invocation's message.
    ///
    /// # Errors
    /// * If `git` cannot be started
    /// * If `git commit` exits with a non-zero status
    fn dispatch(&self, invocation: &CommitInvocation) -> Result<()> {
        debug!(args = ?invocation.git_args(), dir = ?self.work_dir, "running git");

        let status = self
            .command(invocation)
            .status()
            .map_err(DispatchError::Spawn)?;

        handle_status(&status, invocation)
    }
}

/// Turns git's exit status into the run's outcome.
///
/// Echoes the equivalent command on success.
fn handle_status(status: &ExitStatus, invocation: &CommitInvocation) -> Result<()> {
    if status.success() {
        print_success("Committed", &invocation.shell_command());
        Ok(())
    } else {
        Err(DispatchError::CommandFailed {
            command: invocation.shell_command(),
            status: status.to_string(),
        }
        .into())
    }
}
