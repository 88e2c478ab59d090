use std::fmt::Display;

use console::{Style, style};

/// # `MessageType`
/// Trait for message types.
trait MessageType {
    /// The label shown before the title (e.g., "🚨 ERROR")
    const PREFIX: &'static str;

    /// Whether to output to stderr (true) or stdout (false)
    const TO_STDERR: bool = false;

    /// Style applied to the label.
    fn style() -> Style;
}

struct Error;
struct Warning;
struct Success;
struct Info;

impl MessageType for Error {
    const PREFIX: &'static str = "🚨 ERROR";
    const TO_STDERR: bool = true;

    fn style() -> Style {
        Style::new().red().bold()
    }
}

impl MessageType for Warning {
    const PREFIX: &'static str = "⚠️ WARNING";
    const TO_STDERR: bool = true;

    fn style() -> Style {
        Style::new().yellow().bold()
    }
}

impl MessageType for Success {
    const PREFIX: &'static str = "✅ SUCCESS";

    fn style() -> Style {
        Style::new().green().bold()
    }
}

impl MessageType for Info {
    const PREFIX: &'static str = "ℹ️ INFO";

    fn style() -> Style {
        Style::new().cyan()
    }
}

/// # `format_message`
/// Formats a message as `PREFIX: title` followed by the details.
///
/// Details go on the same line when they are a single line, and below the
/// title otherwise.
fn format_message<T: MessageType>(title: &str, details: &str) -> String {
    let label = T::style().apply_to(T::PREFIX);

    if details.is_empty() {
        format!("{label}: {title}")
    } else if details.contains('\n') {
        format!("{label}: {title}\n\n{details}")
    } else {
        format!("{label}: {title} {}", style(details).dim())
    }
}

fn emit<T: MessageType>(message: &str) {
    if T::TO_STDERR {
        eprintln!("{message}");
    } else {
        println!("{message}");
    }
}

/// # `print_error`
/// Prints an error message with a suggestion for resolving it.
///
/// ## Arguments
/// - `title`: The title of the error message.
/// - `details`: The details of the error message.
/// - `suggestion`: The suggestion for resolving the error.
pub fn print_error(title: &str, details: &str, suggestion: &str) {
    let message = format_message::<Error>(title, details);
    emit::<Error>(&format!("{message}\n\n{suggestion}"));
}

/// # `print_warning`
/// Prints a warning message.
pub fn print_warning(title: &str, details: &str) {
    emit::<Warning>(&format_message::<Warning>(title, details));
}

/// # `print_success`
/// Prints a success message.
pub fn print_success(title: &str, details: &str) {
    emit::<Success>(&format_message::<Success>(title, details));
}

/// # `print_info`
/// Prints an informational message.
pub fn print_info(title: &str, details: &str) {
    emit::<Info>(&format_message::<Info>(title, details));
}

/// # `format_list`
/// Formats a list of items, one per line.
///
/// ## Returns
/// * String - A formatted string representation of the list.
pub fn format_list<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| format!("  - {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
