// ══════════════════════════════════════════════════════════════════════════════
// FILTER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Three-way classification of chunks by type: core chunks stay, known metadata
// chunks go, anything else passes through. Filtering selects whole chunks and
// never reorders them.

use std::fmt;
use crate::chunk::{Chunk, ChunkType};
use crate::constants::{CORE_CHUNKS, DROP_CHUNKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
	Core,
	Drop,
	PassThrough,
}

impl fmt::Display for Disposition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Disposition::Core => "core",
			Disposition::Drop => "drop",
			Disposition::PassThrough => "keep",
		};
		f.write_str(label)
	}
}

pub fn classify(chunk_type: &ChunkType) -> Disposition {
	let bytes = chunk_type.as_bytes();
	if CORE_CHUNKS.contains(bytes) {
		Disposition::Core
	} else if DROP_CHUNKS.contains(bytes) {
		Disposition::Drop
	} else {
		Disposition::PassThrough
	}
}

/// Kept chunks in original order, plus how many were dropped.
#[derive(Debug, PartialEq, Eq)]
pub struct Filtered {
	pub kept: Vec<Chunk>,
	pub removed: usize,
}

pub fn filter_chunks(chunks: Vec<Chunk>) -> Filtered {
	let mut kept = Vec::with_capacity(chunks.len());
	let mut removed = 0;
	for chunk in chunks {
		match classify(&chunk.chunk_type()) {
			Disposition::Core | Disposition::PassThrough => kept.push(chunk),
			Disposition::Drop => removed += 1,
		}
	}
	Filtered { kept, removed }
}
