// ══════════════════════════════════════════════════════════════════════════════
// I/O MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Shared file-system helpers used by the cleaning pipeline and inspection:
// opening and creating files, backup copies, parent directory creation and
// human-readable byte sizes.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use crate::constants::BACKUP_SUFFIX;

pub fn open_file(path: &Path) -> io::Result<File> {
	File::open(path)
}

pub fn create_file(path: &Path) -> io::Result<File> {
	File::create(path)
}

/// `image.png` → `image.png.bak`, beside the original.
pub fn backup_path(src: &Path) -> PathBuf {
	let mut name = src.file_name().map(|n| n.to_os_string()).unwrap_or_default();
	name.push(BACKUP_SUFFIX);
	src.with_file_name(name)
}

/// Copies `src` to its backup path. Returns the backup path once the copy is complete.
pub fn backup_file(src: &Path) -> io::Result<PathBuf> {
	let dest = backup_path(src);
	fs::copy(src, &dest)?;
	Ok(dest)
}

pub fn ensure_parent_dirs(path: &Path) -> io::Result<()> {
	match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => fs::create_dir_all(parent),
		_ => Ok(()),
	}
}

/// True for `.png` in any letter case.
pub fn has_png_extension(path: &Path) -> bool {
	path.extension()
		.map(|ext| ext.eq_ignore_ascii_case("png"))
		.unwrap_or(false)
}

/// Formats a byte count as "512 B", "3 KB", "1.5 GB".
pub fn human_bytes(bytes: u64) -> String {
	let mut n = bytes as f64;
	for unit in ["B", "KB", "MB"] {
		if n < 1024.0 {
			return format!("{:.0} {}", n, unit);
		}
		n /= 1024.0;
	}
	format!("{:.1} GB", n)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn backup_path_appends_suffix() {
		assert_eq!(backup_path(Path::new("/a/b/img.PNG")), PathBuf::from("/a/b/img.PNG.bak"));
	}

	#[test]
	fn backup_file_copies_contents() {
		let dir = tempfile::tempdir().unwrap();
		let src = dir.path().join("img.png");
		fs::write(&src, b"original").unwrap();

		let backup = backup_file(&src).unwrap();
		assert_eq!(backup, dir.path().join("img.png.bak"));
		assert_eq!(fs::read(&backup).unwrap(), b"original");
	}

	#[test]
	fn ensure_parent_dirs_creates_nested() {
		let dir = tempfile::tempdir().unwrap();
		let target = dir.path().join("x").join("y").join("out.png");
		ensure_parent_dirs(&target).unwrap();
		assert!(dir.path().join("x").join("y").is_dir());
		ensure_parent_dirs(Path::new("bare.png")).unwrap();
	}

	#[test]
	fn png_extension_any_case() {
		assert!(has_png_extension(Path::new("a.png")));
		assert!(has_png_extension(Path::new("a.PNG")));
		assert!(has_png_extension(Path::new("a.Png")));
		assert!(!has_png_extension(Path::new("a.jpg")));
		assert!(!has_png_extension(Path::new("png")));
	}

	#[test]
	fn human_bytes_units() {
		assert_eq!(human_bytes(512), "512 B");
		assert_eq!(human_bytes(2048), "2 KB");
		assert_eq!(human_bytes(5 * 1024 * 1024), "5 MB");
		assert_eq!(human_bytes(3 * 1024 * 1024 * 1024 / 2), "1.5 GB");
	}
}
