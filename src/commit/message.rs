//! Commit Message Formatting
//!
//! Builds conventional commit messages (Angular style) out of the answers
//! collected from the user.

use super::types::CommitType;

/// The answers needed to build one commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    pub commit_type: CommitType,
    pub scope: String,
    pub subject: String,
    pub description: String,
    pub breaking_change: String,
}

impl CommitRequest {
    /// Formats the request as a commit message.
    #[must_use]
    pub fn message(&self) -> String {
        format_commit_message(
            self.commit_type.as_str(),
            &self.scope,
            &self.subject,
            &self.description,
            &self.breaking_change,
        )
    }
}

/// Formats a commit message following the conventional commits convention.
///
/// The header is `type(scope): subject`, or `type: subject` when the scope is
/// blank. A non-empty breaking change appends `!` to the type and adds a
/// `BREAKING CHANGE:` footer. The description, when non-empty, becomes the
/// body between header and footer.
///
/// Only the scope is checked after trimming. Description and breaking change
/// count as present as soon as they are non-empty, whitespace included.
///
/// # Arguments
/// * `commit_type` - The commit type token (not validated here)
/// * `scope` - Optional scope, may be empty
/// * `subject` - The subject line
/// * `description` - Optional body, may span several lines
/// * `breaking_change` - Optional breaking change note
///
/// # Examples
///
/// ```
/// use kommit::commit::format_commit_message;
///
/// assert_eq!(
///     format_commit_message("refactor", "core", "rename module", "", "Config file format changed."),
///     "refactor!(core): rename module\n\nBREAKING CHANGE: Config file format changed."
/// );
/// ```
#[must_use]
pub fn format_commit_message(
    commit_type: &str,
    scope: &str,
    subject: &str,
    description: &str,
    breaking_change: &str,
) -> String {
    let marker = if breaking_change.is_empty() { "" } else { "!" };

    let mut message = if scope.trim().is_empty() {
        format!("{commit_type}{marker}: {subject}")
    } else {
        format!("{commit_type}{marker}({scope}): {subject}")
    };

    if !description.is_empty() {
        message.push_str("\n\n");
        message.push_str(description);
    }

    if !breaking_change.is_empty() {
        message.push_str("\n\nBREAKING CHANGE: ");
        message.push_str(breaking_change);
    }

    message
}
