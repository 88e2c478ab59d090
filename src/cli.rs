use std::io::{self, Write};

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing::debug;

use crate::{
    commit::CommitType,
    dispatch::{CommitInvocation, DispatchMode, Dispatcher, DryRun},
    errors::{KommitError, Result},
    logging,
    prompt::{InquirePrompter, Prompter, collect_answers},
    utils::{format_list, print_error, print_warning},
};

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Print shell completions to stdout
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// List the available commit types
    Types,
}

#[derive(Parser, Debug)]
#[command(about = "Compose a conventional commit message interactively, then:\n\
\t- run `git commit` with it, or\n\
\t- copy the `git commit` command to the clipboard.")]
#[command(help_template = "{about}\n\nUSAGE:\n{usage}\n\n{all-args}\n")]
#[command(name = "kommit", version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Copy the `git commit` command to the clipboard instead of running it
    #[arg(long, conflicts_with = "run")]
    copy: bool,

    /// Run `git commit` directly
    #[arg(long)]
    run: bool,

    /// Show the message and command without committing or copying
    #[arg(short = 'n', long = "dry-run", default_value_t = false)]
    dry_run: bool,

    /// Print more diagnostics (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Resolved run options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub mode: DispatchMode,
    pub dry_run: bool,
    pub verbosity: u8,
}

impl Settings {
    /// Resolves the dispatch mode: explicit flags first, then the build default.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let mode = if cli.copy {
            DispatchMode::Copy
        } else if cli.run {
            DispatchMode::Run
        } else {
            DispatchMode::build_default()
        };

        Settings {
            mode,
            dry_run: cli.dry_run,
            verbosity: cli.verbose,
        }
    }

    /// The dispatcher for this run.
    #[must_use]
    pub fn dispatcher(&self) -> Box<dyn Dispatcher> {
        if self.dry_run {
            Box::new(DryRun { mode: self.mode })
        } else {
            self.mode.dispatcher()
        }
    }
}

/// # `run`
/// Runs the program.
///
/// ## Errors
/// Returns an error if a prompt fails or the commit cannot be dispatched.
pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

/// # `run_with`
/// Runs the program with already parsed arguments.
///
/// ## Errors
/// Returns an error if a prompt fails or the commit cannot be dispatched.
pub fn run_with(cli: Cli) -> Result<()> {
    let settings = Settings::from_cli(&cli);
    logging::init(settings.verbosity);
    debug!(?settings, "starting");

    match cli.command {
        Some(Commands::Completion { shell }) => {
            write_completions(shell, &mut io::stdout())?;
        }
        Some(Commands::Types) => {
            println!("{}", format_list(&CommitType::ALL));
        }
        None => {
            let prompter = InquirePrompter::new()?;
            compose(&prompter, settings.dispatcher().as_ref())?;
        }
    }

    Ok(())
}

/// # `write_completions`
/// Generates the completion script for `shell` and writes it to `out`.
///
/// ## Errors
/// * If writing to `out` fails
pub fn write_completions<W: Write + ?Sized>(shell: Shell, out: &mut W) -> Result<()> {
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut Cli::command(), "kommit", &mut script);

    out.write_all(&script)?;
    out.flush()?;

    Ok(())
}

/// # `compose`
/// Asks every question, formats the message and hands it to the dispatcher.
///
/// Nothing is dispatched when a question fails.
///
/// ## Errors
/// * If a prompt fails or is cancelled
/// * If the dispatcher fails
pub fn compose<P, D>(prompter: &P, dispatcher: &D) -> Result<()>
where
    P: Prompter + ?Sized,
    D: Dispatcher + ?Sized,
{
    let answers = collect_answers(prompter)?;
    let invocation = CommitInvocation::new(answers.request.message(), answers.hooks);

    dispatcher.dispatch(&invocation)
}

/// # `report_error`
/// Prints a failed run to the user.
pub fn report_error(error: &KommitError) {
    match error {
        KommitError::UserCancelled => {
            print_warning("Cancelled", "Nothing was committed.");
        }
        KommitError::Prompt(_) | KommitError::InvalidInput(_) => print_error(
            "Prompt failed",
            &error.to_string(),
            "Run kommit from an interactive terminal and answer every question.",
        ),
        KommitError::Dispatch(_) => print_error(
            "Commit failed",
            &error.to_string(),
            "Check the output above. Nothing was committed or copied.",
        ),
        KommitError::Io(_) => print_error(
            "IO error",
            &error.to_string(),
            "Check that stdout is writable.",
        ),
    }
}
