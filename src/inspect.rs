// ══════════════════════════════════════════════════════════════════════════════
// INSPECT MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Reads a PNG, verifies every chunk CRC, and lists the chunks together with
// what a clean would do to each of them. Never writes anything.

use std::io::BufReader;
use std::path::Path;
use crate::chunk::Chunk;
use crate::constants::BUFFER_SIZE;
use crate::error::{ChunkError, Error};
use crate::filter::{classify, Disposition};
use crate::io::{human_bytes, open_file};
use crate::logger::{log, LogLevel};
use crate::reader::read_chunks;
use crate::writer::encoded_size;

pub struct ChunkListing {
	pub chunks: Vec<Chunk>,
	pub dispositions: Vec<Disposition>,
}

impl ChunkListing {
	pub fn removable(&self) -> usize {
		self.dispositions.iter().filter(|d| **d == Disposition::Drop).count()
	}
}

/// Reads and classifies every chunk in the file.
pub fn list_chunks(path: &Path) -> Result<ChunkListing, Error> {
	let read_error = |source: ChunkError| Error::Read { path: path.to_path_buf(), source };
	let file = open_file(path).map_err(|e| read_error(e.into()))?;
	let chunks = read_chunks(&mut BufReader::with_capacity(BUFFER_SIZE, file)).map_err(read_error)?;
	let dispositions = chunks.iter().map(|c| classify(&c.chunk_type())).collect();
	Ok(ChunkListing { chunks, dispositions })
}

/// Logs the chunk table for `path`.
pub fn inspect(path: &Path) -> Result<(), Error> {
	log(LogLevel::Info, &format!("Inspecting file: {}", path.display()));

	let listing = list_chunks(path)?;
	log(LogLevel::Success, "Signature and all chunk CRCs are valid.");

	for (i, (chunk, disposition)) in listing.chunks.iter().zip(&listing.dispositions).enumerate() {
		let level = match disposition {
			Disposition::Drop => LogLevel::Warning,
			_ => LogLevel::Info,
		};
		log(level, &format!(
			"  [{}] {} len={} crc=0x{:08X} | {}",
			i,
			chunk.chunk_type(),
			chunk.length(),
			chunk.crc(),
			disposition
		));
	}

	let removable = listing.removable();
	let kept: Vec<Chunk> = listing
		.chunks
		.iter()
		.zip(&listing.dispositions)
		.filter(|(_, d)| **d != Disposition::Drop)
		.map(|(c, _)| c.clone())
		.collect();
	log(LogLevel::Info, &format!(
		"{} chunk(s), {} removable | size: {} -> {}",
		listing.chunks.len(),
		removable,
		human_bytes(encoded_size(&listing.chunks)),
		human_bytes(encoded_size(&kept))
	));
	Ok(())
}
