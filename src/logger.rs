// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Colored, timestamped console lines for per-file progress, diagnostics and the
// end-of-run summary. Warnings and errors go to stderr so a redirected stdout
// keeps only the progress record.

use colored::*;
use chrono::Local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
	Info,
	Success,
	Warning,
	Error,
}

impl LogLevel {
	fn glyph(self) -> ColoredString {
		match self {
			LogLevel::Info => "𝒊 ".blue().bold(),
			LogLevel::Success => "✔ ".green().bold(),
			LogLevel::Warning => "⚠ ".yellow().bold(),
			LogLevel::Error => "✘ ".red().bold(),
		}
	}

	fn is_diagnostic(self) -> bool {
		matches!(self, LogLevel::Warning | LogLevel::Error)
	}
}

/// Renders one log line with the given `HH:MM:SS` timestamp.
pub fn format_line(level: LogLevel, timestamp: &str, message: &str) -> String {
	format!("[{}] {} {}", timestamp.dimmed(), level.glyph(), message)
}

pub fn log(level: LogLevel, message: &str) {
	let timestamp = Local::now().format("%H:%M:%S").to_string();
	let line = format_line(level, &timestamp, message);
	if level.is_diagnostic() {
		eprintln!("{}", line);
	} else {
		println!("{}", line);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn line_carries_timestamp_and_message() {
		colored::control::set_override(false);
		assert_eq!(format_line(LogLevel::Error, "12:00:01", "boom"), "[12:00:01] ✘  boom");
		assert_eq!(format_line(LogLevel::Info, "00:00:00", "hi"), "[00:00:00] 𝒊  hi");
	}

	#[test]
	fn only_warnings_and_errors_are_diagnostics() {
		assert!(LogLevel::Warning.is_diagnostic());
		assert!(LogLevel::Error.is_diagnostic());
		assert!(!LogLevel::Info.is_diagnostic());
		assert!(!LogLevel::Success.is_diagnostic());
	}
}
