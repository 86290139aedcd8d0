//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Render a header line.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// Render a generator label.
#[must_use]
pub fn label(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).green().to_string()
    }
}

/// Print a styled header.
pub fn print_header(text: &str) {
    println!("{}", header(text));
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_contains_text() {
        assert!(header("Demo").contains("=== Demo ==="));
    }

    #[test]
    fn label_contains_text() {
        assert!(label("FibonacciSequenceGenerator").contains("FibonacciSequenceGenerator"));
    }

    #[test]
    fn print_functions_do_not_panic() {
        print_header("");
        print_error("Something went wrong");
        print_header("Header with <special> & \"chars\"");
    }
}
