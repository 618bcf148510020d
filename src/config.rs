// ══════════════════════════════════════════════════════════════════════════════
// CONFIG MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Validated settings for a cleaning run, and the rules that map each input file
// to the path its cleaned copy is written to.

use std::path::{self, Path, PathBuf};
use crate::error::Error;
use crate::io::has_png_extension;

#[derive(Debug, Clone)]
pub struct Config {
	pub input: PathBuf,
	pub output: Option<PathBuf>,
	pub recursive: bool,
	pub backup: bool,
	pub dry_run: bool,
	pub log_file: Option<PathBuf>,
}

impl Config {
	/// Builds a config with absolute input/output paths.
	pub fn new(
		input: &Path,
		output: Option<&Path>,
		recursive: bool,
		backup: bool,
		dry_run: bool,
		log_file: Option<PathBuf>,
	) -> Result<Self, Error> {
		let input = absolute(input)?;
		let output = output.map(absolute).transpose()?;
		Ok(Config { input, output, recursive, backup, dry_run, log_file })
	}

	/// Decides where cleaned files go for a run over `file_count` inputs.
	pub fn destination(&self, file_count: usize) -> Result<Destination, Error> {
		let Some(output) = &self.output else {
			return Ok(Destination::InPlace);
		};

		if output.is_dir() {
			return Ok(Destination::Directory(output.clone()));
		}

		if has_png_extension(output) || output.is_file() {
			if file_count > 1 {
				return Err(Error::Config(format!(
					"{} input files but output path '{}' looks like a single file",
					file_count,
					output.display()
				)));
			}
			return Ok(Destination::File(output.clone()));
		}

		Ok(Destination::Directory(output.clone()))
	}
}

fn absolute(path: &Path) -> Result<PathBuf, Error> {
	path::absolute(path).map_err(|e| Error::Config(format!("invalid path '{}': {}", path.display(), e)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
	/// Overwrite each source file.
	InPlace,
	/// Write the single input to this file.
	File(PathBuf),
	/// Mirror inputs into this directory, keeping paths relative to the input root.
	Directory(PathBuf),
}

impl Destination {
	pub fn resolve(&self, src: &Path, input_root: &Path) -> PathBuf {
		match self {
			Destination::InPlace => src.to_path_buf(),
			Destination::File(path) => path.clone(),
			Destination::Directory(dir) => {
				let base = if input_root.is_dir() { input_root } else { src.parent().unwrap_or(input_root) };
				match src.strip_prefix(base) {
					Ok(relative) => dir.join(relative),
					Err(_) => dir.join(src.file_name().unwrap_or_default()),
				}
			}
		}
	}

	pub fn describe(&self) -> String {
		match self {
			Destination::InPlace => "in-place".to_string(),
			Destination::File(path) | Destination::Directory(path) => path.display().to_string(),
		}
	}
}
