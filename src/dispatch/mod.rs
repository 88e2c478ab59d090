//! Dispatch Module
//!
//! Hands a formatted commit message to its destination. Every destination
//! implements [`Dispatcher`]; exactly one is picked per run.

pub mod clipboard;
pub mod git;

use std::fmt::Display;

use crate::{errors::Result, utils::print_info};

pub use clipboard::ClipboardCopier;
pub use git::GitCommitRunner;

/// Whether git hooks run for the commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookPolicy {
    Run,
    #[default]
    Skip,
}

/// A commit ready to be handed off: the message plus the hook policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInvocation {
    pub message: String,
    pub hooks: HookPolicy,
}

impl CommitInvocation {
    #[must_use]
    pub fn new(message: impl Into<String>, hooks: HookPolicy) -> Self {
        Self {
            message: message.into(),
            hooks,
        }
    }

    /// Arguments passed to the `git` binary.
    ///
    /// # Examples
    ///
    /// ```
    /// use kommit::dispatch::{CommitInvocation, HookPolicy};
    ///
    /// let invocation = CommitInvocation::new("fix: typo", HookPolicy::Skip);
    /// assert_eq!(invocation.git_args(), ["commit", "-m", "fix: typo", "--no-verify"]);
    /// ```
    #[must_use]
    pub fn git_args(&self) -> Vec<&str> {
        let mut args = vec!["commit", "-m", self.message.as_str()];

        if self.hooks == HookPolicy::Skip {
            args.push("--no-verify");
        }

        args
    }

    /// The equivalent command line, for copying or echoing.
    ///
    /// The message goes between double quotes as is, without escaping.
    #[must_use]
    pub fn shell_command(&self) -> String {
        match self.hooks {
            HookPolicy::Run => format!("git commit -m \"{}\"", self.message),
            HookPolicy::Skip => format!("git commit -m \"{}\" --no-verify", self.message),
        }
    }
}

/// Destination for a finished commit message.
#[cfg_attr(test, mockall::automock)]
pub trait Dispatcher {
    /// Delivers the commit.
    ///
    /// # Errors
    /// * If the destination rejects the commit
    fn dispatch(&self, invocation: &CommitInvocation) -> Result<()>;
}

/// Which dispatcher a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// Run `git commit` directly.
    Run,
    /// Copy the `git commit` command to the clipboard.
    Copy,
}

impl DispatchMode {
    /// The mode selected when the binary was built.
    #[must_use]
    pub const fn build_default() -> Self {
        if cfg!(feature = "clipboard") {
            DispatchMode::Copy
        } else {
            DispatchMode::Run
        }
    }

    /// Creates the dispatcher for this mode.
    #[must_use]
    pub fn dispatcher(self) -> Box<dyn Dispatcher> {
        match self {
            DispatchMode::Run => Box::new(GitCommitRunner::new()),
            DispatchMode::Copy => Box::new(ClipboardCopier),
        }
    }
}

impl Display for DispatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchMode::Run => write!(f, "run git commit"),
            DispatchMode::Copy => write!(f, "copy to clipboard"),
        }
    }
}

/// Prints what would happen without committing or copying anything.
#[derive(Debug, Clone, Copy)]
pub struct DryRun {
    pub mode: DispatchMode,
}

impl DryRun {
    /// The preview shown in place of the real dispatch.
    #[must_use]
    pub fn preview(&self, invocation: &CommitInvocation) -> String {
        format!(
            "Would {} with message:\n---\n{}\n---",
            self.mode, invocation.message
        )
    }
}

impl Dispatcher for DryRun {
    fn dispatch(&self, invocation: &CommitInvocation) -> Result<()> {
        println!("{}", self.preview(invocation));
        print_info("Command", &invocation.shell_command());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_args_with_hooks() {
        let invocation = CommitInvocation::new("feat(api): add login endpoint", HookPolicy::Run);

        assert_eq!(
            invocation.git_args(),
            ["commit", "-m", "feat(api): add login endpoint"]
        );
    }

    #[test]
    fn test_git_args_keep_multiline_message_as_one_argument() {
        let invocation = CommitInvocation::new("fix: x\n\nbody", HookPolicy::Skip);

        assert_eq!(
            invocation.git_args(),
            ["commit", "-m", "fix: x\n\nbody", "--no-verify"]
        );
    }

    #[test]
    fn test_shell_command() {
        assert_eq!(
            CommitInvocation::new("fix: null pointer", HookPolicy::Run).shell_command(),
            "git commit -m \"fix: null pointer\""
        );
        assert_eq!(
            CommitInvocation::new("fix: null pointer", HookPolicy::Skip).shell_command(),
            "git commit -m \"fix: null pointer\" --no-verify"
        );
    }

    #[test]
    fn test_shell_command_does_not_escape() {
        assert_eq!(
            CommitInvocation::new("docs: say \"hi\"", HookPolicy::Run).shell_command(),
            "git commit -m \"docs: say \"hi\"\""
        );
    }

    #[test]
    fn test_hooks_are_skipped_by_default() {
        assert_eq!(HookPolicy::default(), HookPolicy::Skip);
    }

    #[test]
    fn test_build_default_matches_feature() {
        let expected = if cfg!(feature = "clipboard") {
            DispatchMode::Copy
        } else {
            DispatchMode::Run
        };

        assert_eq!(DispatchMode::build_default(), expected);
    }

    #[test]
    fn test_dry_run_preview() {
        let invocation = CommitInvocation::new("fix: null pointer\n\nFixes crash.", HookPolicy::Skip);

        assert_eq!(
            DryRun { mode: DispatchMode::Run }.preview(&invocation),
            "Would run git commit with message:\n---\nfix: null pointer\n\nFixes crash.\n---"
        );
        assert_eq!(
            DryRun { mode: DispatchMode::Copy }.preview(&invocation),
            "Would copy to clipboard with message:\n---\nfix: null pointer\n\nFixes crash.\n---"
        );
    }

    #[test]
    fn test_dry_run_never_fails() {
        // Unlike the real dispatchers it needs neither git nor a display
        for mode in [DispatchMode::Run, DispatchMode::Copy] {
            assert!(
                DryRun { mode }
                    .dispatch(&CommitInvocation::new("test: cover dry run", HookPolicy::Run))
                    .is_ok()
            );
        }
    }
}
