// ══════════════════════════════════════════════════════════════════════════════
// WRITER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Serializes a chunk list back into PNG bytes: signature, then each chunk with
// its stored CRC. File output goes through a sibling temporary file and a
// rename so a failed write never leaves a half-written image at the target.
// A symlinked target is resolved first so the rename replaces the linked file,
// and an existing target's permissions carry over to the new file.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use crate::chunk::Chunk;
use crate::constants::{BUFFER_SIZE, PNG_SIGNATURE};
use crate::io::create_file;

/// Writes the signature and every chunk. Returns total bytes written.
pub fn write_chunks<W: Write>(chunks: &[Chunk], sink: &mut W) -> io::Result<u64> {
	sink.write_all(&PNG_SIGNATURE)?;
	let mut total = PNG_SIGNATURE.len() as u64;
	for chunk in chunks {
		total += chunk.write_to(sink)?;
	}
	sink.flush()?;
	Ok(total)
}

/// Size `write_chunks` would produce, without writing anything.
pub fn encoded_size(chunks: &[Chunk]) -> u64 {
	PNG_SIGNATURE.len() as u64 + chunks.iter().map(Chunk::encoded_len).sum::<u64>()
}

/// Writes the chunks to `dest`, replacing it if it exists. Returns the file size.
pub fn write_file(chunks: &[Chunk], dest: &Path) -> io::Result<u64> {
	let target = resolve_target(dest)?;
	let permissions = match fs::metadata(&target) {
		Ok(meta) => Some(meta.permissions()),
		Err(e) if e.kind() == io::ErrorKind::NotFound => None,
		Err(e) => return Err(e),
	};

	let temp = temp_path(&target);
	let result = write_temp(chunks, &temp).and_then(|size| {
		if let Some(permissions) = permissions {
			fs::set_permissions(&temp, permissions)?;
		}
		fs::rename(&temp, &target)?;
		Ok(size)
	});
	if result.is_err() {
		let _ = fs::remove_file(&temp);
	}
	result
}

/// Follows `dest` through symlinks. A path that does not exist yet is kept as is.
fn resolve_target(dest: &Path) -> io::Result<PathBuf> {
	match fs::symlink_metadata(dest) {
		Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(dest),
		_ => Ok(dest.to_path_buf()),
	}
}

fn write_temp(chunks: &[Chunk], temp: &Path) -> io::Result<u64> {
	let file = create_file(temp)?;
	let mut writer = BufWriter::with_capacity(BUFFER_SIZE, file);
	let size = write_chunks(chunks, &mut writer)?;
	let file = writer.into_inner().map_err(|e| e.into_error())?;
	file.sync_all()?;
	Ok(size)
}

fn temp_path(dest: &Path) -> PathBuf {
	let name = dest.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
	dest.with_file_name(format!(".{}.pngclean-tmp", name))
}
