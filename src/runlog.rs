// ══════════════════════════════════════════════════════════════════════════════
// RUN LOG MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Appends a Markdown record of a finished run (parameters, counts, one line per
// file) to a log file. Only consumes the run summary.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use chrono::Local;
use crate::clean::{FileOutcome, Summary};
use crate::config::{Config, Destination};
use crate::io::ensure_parent_dirs;

pub fn render_entry(config: &Config, destination: &Destination, summary: &Summary) -> String {
	let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
	let mut lines = vec![
		format!("## PNG metadata cleanup run - {}", timestamp),
		String::new(),
		format!("- Input: {}", config.input.display()),
		format!("- Output: {}", destination.describe()),
		format!("- Recursive: {}", config.recursive),
		format!("- Backup: {}", config.backup),
		format!("- Dry-run: {}", config.dry_run),
		format!("- PNGs found: {}", summary.total),
		format!("- PNGs processed: {}", summary.processed),
		format!("- PNGs failed: {}", summary.failed),
		format!("- Metadata chunks removed: {}", summary.removed_chunks),
		String::new(),
	];

	for outcome in &summary.outcomes {
		lines.push(match outcome {
			FileOutcome::Cleaned { src, dest, report } if src == dest => {
				format!("- {}: removed {} metadata chunk(s)", src.display(), report.removed_chunks)
			}
			FileOutcome::Cleaned { src, dest, report } => {
				format!(
					"- {} -> {}: removed {} metadata chunk(s)",
					src.display(),
					dest.display(),
					report.removed_chunks
				)
			}
			FileOutcome::Failed { src, kind, message } => {
				format!("- {}: {} ERROR: {}", src.display(), kind.to_string().to_uppercase(), message)
			}
		});
	}

	let mut entry = String::from("\n");
	entry.push_str(&lines.join("\n"));
	entry.push('\n');
	entry
}

/// Appends the entry for this run to `path`, creating the file if needed.
pub fn append_run_log(path: &Path, config: &Config, destination: &Destination, summary: &Summary) -> io::Result<()> {
	ensure_parent_dirs(path)?;
	let mut file = OpenOptions::new().create(true).append(true).open(path)?;
	file.write_all(render_entry(config, destination, summary).as_bytes())
}
