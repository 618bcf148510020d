// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Two layers of errors. `ChunkError` is what the reader reports about a byte
// stream; `Error` scopes a failure to one file (or to the run configuration)
// so the batch loop can report it and move on.

use std::fmt;
use std::io;
use std::path::PathBuf;
use crate::chunk::ChunkType;

/// Which field of a chunk was being read when the stream ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkField {
	Length,
	Type,
	Data,
	Crc,
}

impl fmt::Display for ChunkField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ChunkField::Length => "length",
			ChunkField::Type => "type",
			ChunkField::Data => "data",
			ChunkField::Crc => "CRC",
		};
		f.write_str(name)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ChunkError {
	#[error("not a PNG file (missing or invalid signature)")]
	Signature,

	#[error("unexpected end of file while reading {field} of chunk #{index}{}", type_suffix(.chunk_type))]
	Truncated {
		field: ChunkField,
		index: usize,
		chunk_type: Option<ChunkType>,
	},

	#[error("CRC mismatch for chunk #{index} {chunk_type}: expected 0x{expected:08X}, got 0x{stored:08X}")]
	CrcMismatch {
		index: usize,
		chunk_type: ChunkType,
		expected: u32,
		stored: u32,
	},

	#[error("read failed: {0}")]
	Io(#[from] io::Error),
}

fn type_suffix(chunk_type: &Option<ChunkType>) -> String {
	match chunk_type {
		Some(t) => format!(" ({})", t),
		None => String::new(),
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: ChunkError,
	},

	#[error("cannot write '{}': {source}", .path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("cannot back up '{}' to '{}': {source}", .path.display(), .backup.display())]
	Backup {
		path: PathBuf,
		backup: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("{0}")]
	Config(String),
}

/// Coarse classification used for reporting and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	Format,
	Truncation,
	Integrity,
	Io,
	Config,
}

impl fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ErrorKind::Format => "format",
			ErrorKind::Truncation => "truncation",
			ErrorKind::Integrity => "integrity",
			ErrorKind::Io => "io",
			ErrorKind::Config => "config",
		};
		f.write_str(name)
	}
}

impl ChunkError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			ChunkError::Signature => ErrorKind::Format,
			ChunkError::Truncated { .. } => ErrorKind::Truncation,
			ChunkError::CrcMismatch { .. } => ErrorKind::Integrity,
			ChunkError::Io(_) => ErrorKind::Io,
		}
	}
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Error::Read { source, .. } => source.kind(),
			Error::Write { .. } | Error::Backup { .. } => ErrorKind::Io,
			Error::Config(_) => ErrorKind::Config,
		}
	}

	/// Short label for the stage that failed, used in progress lines.
	pub fn stage(&self) -> &'static str {
		match self {
			Error::Read { .. } => "reading",
			Error::Write { .. } => "writing",
			Error::Backup { .. } => "backing up",
			Error::Config(_) => "configuring",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn truncation_message_names_field_and_type() {
		let err = ChunkError::Truncated {
			field: ChunkField::Data,
			index: 2,
			chunk_type: Some(ChunkType(*b"IDAT")),
		};
		let msg = err.to_string();
		assert!(msg.contains("data"));
		assert!(msg.contains("#2"));
		assert!(msg.contains("IDAT"));
	}

	#[test]
	fn truncation_before_type_has_no_type_suffix() {
		let err = ChunkError::Truncated { field: ChunkField::Length, index: 0, chunk_type: None };
		assert_eq!(err.to_string(), "unexpected end of file while reading length of chunk #0");
	}

	#[test]
	fn crc_mismatch_reports_both_values() {
		let err = ChunkError::CrcMismatch {
			index: 1,
			chunk_type: ChunkType(*b"tEXt"),
			expected: 0x1234_ABCD,
			stored: 0x0000_0001,
		};
		let msg = err.to_string();
		assert!(msg.contains("0x1234ABCD"));
		assert!(msg.contains("0x00000001"));
	}

	#[test]
	fn read_error_includes_path_and_kind() {
		let err = Error::Read { path: PathBuf::from("/tmp/a.png"), source: ChunkError::Signature };
		assert!(err.to_string().starts_with("/tmp/a.png: "));
		assert_eq!(err.kind(), ErrorKind::Format);
		assert_eq!(err.stage(), "reading");
	}

	#[test]
	fn write_and_backup_errors_are_io() {
		let write = Error::Write {
			path: PathBuf::from("out.png"),
			source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
		};
		let backup = Error::Backup {
			path: PathBuf::from("a.png"),
			backup: PathBuf::from("a.png.bak"),
			source: io::Error::new(io::ErrorKind::Other, "disk full"),
		};
		assert_eq!(write.kind(), ErrorKind::Io);
		assert_eq!(backup.kind(), ErrorKind::Io);
		assert!(backup.to_string().contains("a.png.bak"));
	}
}
