//! ANSI-colored formatter

use colored::Color;

use super::Formatter;
use crate::core::log_level::LogLevel;
use crate::core::log_source::LogSource;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Colored variant of the basic layout, reordered to
/// `[<level>] <source>: <message>` with the source unbracketed. The level
/// is painted with its fixed color and the source is bolded, but only
/// when the style hint is true; with the hint off the output carries no
/// escape sequences at all.
///
/// Escapes are built from [`colored::Color`] foreground codes rather than
/// the crate's terminal auto-detection, so the hint alone decides whether
/// styling appears. Every styled segment is individually reset; text
/// after a segment never inherits its color.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiFormatter;

impl AnsiFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn paint(text: &str, color: Color) -> String {
    format!("\x1b[{}m{}{}", color.to_fg_str(), text, RESET)
}

impl Formatter for AnsiFormatter {
    fn render(&self, level: LogLevel, message: &str, source: &LogSource, styled: bool) -> String {
        let level_name = if styled {
            paint(level.name(), level.color())
        } else {
            level.name().to_string()
        };

        match source.display_name() {
            Some(name) => {
                let source_name = if styled {
                    format!("{}{}{}", BOLD, name, RESET)
                } else {
                    name
                };
                format!("[{}] {}: {}", level_name, source_name, message)
            }
            None => format!("[{}] {}", level_name, message),
        }
    }
}
