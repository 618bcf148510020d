// ══════════════════════════════════════════════════════════════════════════════
// CLEAN MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Drives a cleaning run. Each file goes through read → (backup) → filter →
// write on its own; a failure at any step is reported for that file and the
// run moves on to the next one.

use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use crate::config::{Config, Destination};
use crate::constants::BUFFER_SIZE;
use crate::error::{ChunkError, Error, ErrorKind};
use crate::filter::{Filtered, filter_chunks};
use crate::io::{backup_file, backup_path, ensure_parent_dirs, human_bytes, open_file};
use crate::logger::{log, LogLevel};
use crate::reader::read_chunks;
use crate::writer::{encoded_size, write_file};

/// What cleaning one file did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileReport {
	pub kept_chunks: usize,
	pub removed_chunks: usize,
	pub original_size: u64,
	pub filtered_size: u64,
}

#[derive(Debug)]
pub enum FileOutcome {
	Cleaned {
		src: PathBuf,
		dest: PathBuf,
		report: FileReport,
	},
	Failed {
		src: PathBuf,
		kind: ErrorKind,
		message: String,
	},
}

#[derive(Debug)]
pub struct Summary {
	pub total: usize,
	pub processed: usize,
	pub failed: usize,
	pub removed_chunks: usize,
	pub original_bytes: u64,
	pub filtered_bytes: u64,
	pub elapsed: Duration,
	pub dry_run: bool,
	pub outcomes: Vec<FileOutcome>,
}

impl Summary {
	pub fn has_failures(&self) -> bool {
		self.failed > 0
	}
}

/// Cleans a single file from `src` into `dest` (which may be the same path).
/// With `dry_run` nothing is written and `filtered_size` is what would have been.
pub fn clean_file(src: &Path, dest: &Path, backup: bool, dry_run: bool) -> Result<FileReport, Error> {
	// 1. Read the whole chunk list
	let read_error = |source: ChunkError| Error::Read { path: src.to_path_buf(), source };
	let file = open_file(src).map_err(|e| read_error(e.into()))?;
	let chunks = read_chunks(&mut BufReader::with_capacity(BUFFER_SIZE, file)).map_err(read_error)?;
	let original_size = encoded_size(&chunks);

	// 2. Backup must be complete before anything targets the source path
	if backup && !dry_run {
		backup_file(src).map_err(|source| Error::Backup {
			path: src.to_path_buf(),
			backup: backup_path(src),
			source,
		})?;
	}

	// 3. Filter
	let Filtered { kept, removed } = filter_chunks(chunks);

	// 4. Write
	let filtered_size = if dry_run {
		encoded_size(&kept)
	} else {
		ensure_parent_dirs(dest)
			.and_then(|_| write_file(&kept, dest))
			.map_err(|source| Error::Write { path: dest.to_path_buf(), source })?
	};

	Ok(FileReport {
		kept_chunks: kept.len(),
		removed_chunks: removed,
		original_size,
		filtered_size,
	})
}

/// Processes `files` in order and returns the run summary.
pub fn run(config: &Config, destination: &Destination, files: &[PathBuf]) -> Summary {
	let start = Instant::now();
	let total = files.len();
	let mut summary = Summary {
		total,
		processed: 0,
		failed: 0,
		removed_chunks: 0,
		original_bytes: 0,
		filtered_bytes: 0,
		elapsed: Duration::ZERO,
		dry_run: config.dry_run,
		outcomes: Vec::with_capacity(total),
	};

	for (i, src) in files.iter().enumerate() {
		let idx = i + 1;
		let dest = destination.resolve(src, &config.input);

		match clean_file(src, &dest, config.backup, config.dry_run) {
			Ok(report) => {
				let percent = idx * 100 / total;
				let verb = if config.dry_run { "would write" } else { "->" };
				log(LogLevel::Success, &format!(
					"[{}/{}] {} {} {} | removed: {} chunks | size: {} -> {} | {}%",
					idx,
					total,
					src.display(),
					verb,
					dest.display(),
					report.removed_chunks,
					human_bytes(report.original_size),
					human_bytes(report.filtered_size),
					percent
				));

				summary.processed += 1;
				summary.removed_chunks += report.removed_chunks;
				summary.original_bytes += report.original_size;
				summary.filtered_bytes += report.filtered_size;
				summary.outcomes.push(FileOutcome::Cleaned { src: src.clone(), dest, report });
			}
			Err(e) => {
				log(LogLevel::Error, &format!("[{}/{}] Failed while {}: {} ({} error)", idx, total, e.stage(), e, e.kind()));
				summary.failed += 1;
				summary.outcomes.push(FileOutcome::Failed {
					src: src.clone(),
					kind: e.kind(),
					message: e.to_string(),
				});
			}
		}
	}

	summary.elapsed = start.elapsed();
	summary
}

pub fn print_summary(summary: &Summary) {
	log(LogLevel::Info, "Summary:");
	log(LogLevel::Info, &format!("  Total input PNGs: {}", summary.total));
	log(LogLevel::Info, &format!("  Processed: {}", summary.processed));
	if summary.failed > 0 {
		log(LogLevel::Warning, &format!("  Failed: {}", summary.failed));
	}
	log(LogLevel::Info, &format!("  Total metadata chunks removed: {}", summary.removed_chunks));
	log(LogLevel::Info, &format!(
		"  Size: {} -> {}",
		human_bytes(summary.original_bytes),
		human_bytes(summary.filtered_bytes)
	));
	log(LogLevel::Info, &format!("  Time elapsed: {:.2}s", summary.elapsed.as_secs_f64()));
	log(LogLevel::Info, &format!("  Dry-run: {}", if summary.dry_run { "Yes" } else { "No" }));
}
