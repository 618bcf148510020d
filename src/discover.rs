// ══════════════════════════════════════════════════════════════════════════════
// DISCOVER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Finds the PNG files a run should process. A file input is taken as-is when it
// has a png extension; a directory is globbed for *.png and *.PNG, optionally
// recursively.

use std::path::{Path, PathBuf};
use glob::{MatchOptions, Pattern};
use crate::io::has_png_extension;
use crate::logger::{log, LogLevel};

pub fn collect_png_files(input: &Path, recursive: bool) -> Vec<PathBuf> {
	if input.is_file() {
		return if has_png_extension(input) { vec![input.to_path_buf()] } else { Vec::new() };
	}
	if !input.is_dir() {
		return Vec::new();
	}

	let prefix = if recursive { "**/" } else { "" };
	let mut files: Vec<PathBuf> = Vec::new();
	for ext in ["png", "PNG"] {
		let mut matched = glob_files(input, &format!("{}*.{}", prefix, ext));
		matched.sort();
		for path in matched {
			if !files.contains(&path) {
				files.push(path);
			}
		}
	}
	files
}

fn glob_files(dir: &Path, suffix: &str) -> Vec<PathBuf> {
	let pattern = format!("{}/{}", Pattern::escape(&dir.to_string_lossy()), suffix);
	let options = MatchOptions { case_sensitive: true, ..MatchOptions::new() };

	let entries = match glob::glob_with(&pattern, options) {
		Ok(entries) => entries,
		Err(e) => {
			log(LogLevel::Warning, &format!("Invalid search pattern '{}': {}", pattern, e));
			return Vec::new();
		}
	};

	entries
		.filter_map(|entry| match entry {
			Ok(path) => Some(path),
			Err(e) => {
				log(LogLevel::Warning, &format!("Skipping unreadable path: {}", e));
				None
			}
		})
		.filter(|path| path.is_file())
		.collect()
}
