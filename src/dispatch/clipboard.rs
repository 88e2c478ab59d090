//! Clipboard Copy
//!
//! Puts the `git commit` command line on the system clipboard instead of
//! running it.

use arboard::Clipboard;
use tracing::debug;

use crate::{
    errors::{DispatchError, Result},
    utils::print_success,
};

use super::{CommitInvocation, Dispatcher};

/// Dispatcher that copies the commit command to the clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipboardCopier;

impl Dispatcher for ClipboardCopier {
    fn dispatch(&self, invocation: &CommitInvocation) -> Result<()> {
        let command = invocation.shell_command();
        debug!(bytes = command.len(), "writing commit command to clipboard");

        let mut clipboard = Clipboard::new().map_err(DispatchError::from)?;
        write_text(&mut clipboard, &command).map_err(DispatchError::from)?;

        print_success("Copied to clipboard", &command);

        Ok(())
    }
}

/// On Linux the copying process serves the selection itself, so the text is
/// gone once the clipboard is dropped. Hold it until another program takes
/// ownership (a clipboard manager or the next copy).
#[cfg(target_os = "linux")]
fn write_text(clipboard: &mut Clipboard, text: &str) -> std::result::Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    use crate::utils::print_info;

    print_info(
        "Holding clipboard",
        "Paste the command where you need it. kommit exits once something else is copied.",
    );

    clipboard.set().wait().text(text)
}

#[cfg(not(target_os = "linux"))]
fn write_text(clipboard: &mut Clipboard, text: &str) -> std::result::Result<(), arboard::Error> {
    clipboard.set_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dispatch::HookPolicy, errors::KommitError};

    #[cfg(target_os = "linux")]
    #[test]
    fn test_headless_copy_reports_failure() {
        // Only meaningful without any display server to own the selection
        if std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some() {
            return;
        }

        let invocation = CommitInvocation::new("fix: null pointer", HookPolicy::Skip);

        assert!(matches!(
            ClipboardCopier.dispatch(&invocation),
            Err(KommitError::Dispatch(DispatchError::Clipboard(_)))
        ));
    }
}
