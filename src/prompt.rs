//! Interactive Prompts
//!
//! Asks the user for every part of the commit message, one blocking question
//! at a time. The questions are behind the [`Prompter`] trait so the flow can
//! run against something other than a terminal.

use std::io::IsTerminal;

use inquire::{CustomUserError, Select, Text, validator::Validation};
use tracing::debug;

use crate::{
    commit::{CommitRequest, CommitType},
    dispatch::HookPolicy,
    errors::{KommitError, Result},
};

pub const SUBJECT_EMPTY_MESSAGE: &str = "❌ Subject cannot be empty";

const HOOK_CHOICES: [&str; 2] = ["No", "Yes"];

/// Source of answers for the commit questions.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Asks for the commit type.
    ///
    /// # Errors
    /// * If the prompt fails or is cancelled
    fn commit_type(&self) -> Result<CommitType>;

    /// Asks for the optional scope.
    ///
    /// # Errors
    /// * If the prompt fails or is cancelled
    fn scope(&self) -> Result<String>;

    /// Asks for the subject, re-asking until it is not blank.
    ///
    /// # Errors
    /// * If the prompt fails or is cancelled
    fn subject(&self) -> Result<String>;

    /// Asks for the optional description.
    ///
    /// # Errors
    /// * If the prompt fails or is cancelled
    fn description(&self) -> Result<String>;

    /// Asks for the optional breaking change note.
    ///
    /// # Errors
    /// * If the prompt fails or is cancelled
    fn breaking_change(&self) -> Result<String>;

    /// Asks whether git hooks should run.
    ///
    /// # Errors
    /// * If the prompt fails or is cancelled
    fn hook_policy(&self) -> Result<HookPolicy>;
}

/// Everything collected from the user for one commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub request: CommitRequest,
    pub hooks: HookPolicy,
}

/// Checks that a subject is not blank.
///
/// # Errors
/// * If the subject is empty after trimming whitespace
pub fn validate_subject(input: &str) -> std::result::Result<(), &'static str> {
    if input.trim().is_empty() {
        Err(SUBJECT_EMPTY_MESSAGE)
    } else {
        Ok(())
    }
}

fn subject_validator(input: &str) -> std::result::Result<Validation, CustomUserError> {
    Ok(match validate_subject(input) {
        Ok(()) => Validation::Valid,
        Err(message) => Validation::Invalid(message.into()),
    })
}

/// Maps the hook question's answer to a policy. Anything but `Yes` skips hooks.
#[must_use]
pub fn hook_policy_for(choice: &str) -> HookPolicy {
    if choice == "Yes" {
        HookPolicy::Run
    } else {
        HookPolicy::Skip
    }
}

/// Runs the questions in order and gathers the answers.
///
/// Stops at the first failing question, so a cancelled prompt never yields
/// partial answers.
///
/// # Errors
/// * If any prompt fails or is cancelled
/// * If the prompter hands back a blank subject
pub fn collect_answers<P: Prompter + ?Sized>(prompter: &P) -> Result<Answers> {
    let commit_type = prompter.commit_type()?;
    let scope = prompter.scope()?;

    let subject = prompter.subject()?;
    validate_subject(&subject).map_err(|message| KommitError::InvalidInput(message.to_string()))?;

    let description = prompter.description()?;
    let breaking_change = prompter.breaking_change()?;
    let hooks = prompter.hook_policy()?;

    debug!(%commit_type, ?hooks, "collected commit answers");

    Ok(Answers {
        request: CommitRequest {
            commit_type,
            scope,
            subject,
            description,
            breaking_change,
        },
        hooks,
    })
}

/// Terminal prompter backed by `inquire`.
#[derive(Debug, Clone, Copy)]
pub struct InquirePrompter {
    _private: (),
}

impl InquirePrompter {
    /// Creates a prompter reading from the terminal.
    ///
    /// # Errors
    /// * If stdin is not a terminal
    pub fn new() -> Result<Self> {
        if !std::io::stdin().is_terminal() {
            return Err(KommitError::Prompt(
                "stdin is not a terminal, cannot ask questions".to_string(),
            ));
        }

        Ok(Self { _private: () })
    }
}

impl Prompter for InquirePrompter {
    fn commit_type(&self) -> Result<CommitType> {
        let commit_type = Select::new("🔧 Choose commit type", CommitType::ALL.to_vec())
            .with_starting_cursor(0)
            .prompt()?;

        Ok(commit_type)
    }

    fn scope(&self) -> Result<String> {
        Ok(Text::new("📦 Enter scope (optional)").prompt()?)
    }

    fn subject(&self) -> Result<String> {
        let subject = Text::new("🖍️  Enter commit subject")
            .with_validator(subject_validator)
            .prompt()?;

        Ok(subject)
    }

    fn description(&self) -> Result<String> {
        Ok(Text::new("📋 Enter description (optional)").prompt()?)
    }

    fn breaking_change(&self) -> Result<String> {
        Ok(Text::new("🔥 Enter Breaking Change (optional)").prompt()?)
    }

    fn hook_policy(&self) -> Result<HookPolicy> {
        let choice = Select::new("🚀 Should run git hooks?", HOOK_CHOICES.to_vec())
            .with_starting_cursor(0)
            .prompt()?;

        Ok(hook_policy_for(choice))
    }
}
