// Rust guideline compliant 2026-02-09

//! Terminal helpers for the `jdki` CLI.
//!
//! Color detection, terminal width, word wrapping for descriptions and
//! colored status lines on stderr.

use std::env;
use std::io::Write;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Gets the terminal width in columns.
///
/// # Returns
/// The terminal width, or 80 if it cannot be determined
pub fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Wraps text to the terminal width.
///
/// Continuation lines are prefixed with `indent` spaces. Widths are counted
/// in characters so multi-byte text wraps at the same column as ASCII.
pub fn wrap_text(text: &str, indent: usize) -> String {
    wrap_text_to(text, indent, get_terminal_width())
}

/// Wraps text to an explicit width.
pub fn wrap_text_to(text: &str, indent: usize, width: usize) -> String {
    let available_width = width.saturating_sub(indent);

    if available_width < 10 {
        return text.to_string();
    }

    let mut result = String::new();
    let indent_str = " ".repeat(indent);

    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            result.push('\n');
            result.push_str(&indent_str);
        }

        if line.chars().count() <= available_width {
            result.push_str(line);
            continue;
        }

        let mut current_line = String::new();
        let mut current_len = 0;
        for word in line.split_whitespace() {
            let word_len = word.chars().count();
            if current_line.is_empty() {
                current_line.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= available_width {
                current_line.push(' ');
                current_line.push_str(word);
                current_len += 1 + word_len;
            } else {
                result.push_str(&current_line);
                result.push('\n');
                result.push_str(&indent_str);
                current_line = word.to_string();
                current_len = word_len;
            }
        }
        result.push_str(&current_line);
    }

    result
}

/// Renders text with a foreground color into a string.
///
/// Returns the text unchanged when `use_color` is false.
pub fn paint(text: &str, color: Color, bold: bool, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    let mut buffer = Buffer::ansi();
    let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    let _ = write!(buffer, "{}", text);
    let _ = buffer.reset();
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

fn print_status(prefix: &str, prefix_color: Color, message: &str, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}: ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints a warning message to stderr.
pub fn print_warning(message: &str, use_color: bool) {
    print_status("⚠", Color::Yellow, message, use_color);
}
