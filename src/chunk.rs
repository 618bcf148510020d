// ══════════════════════════════════════════════════════════════════════════════
// CHUNK MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The in-memory record for one PNG chunk. A chunk keeps the CRC it was read
// with; nothing in this crate edits chunk data, so the stored CRC stays valid
// and is written back untouched.

use std::fmt;
use std::io::{self, Write};
use crc32fast::Hasher;
use crate::constants::CHUNK_OVERHEAD;

/// Four-byte chunk type tag, compared as raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
	pub fn as_bytes(&self) -> &[u8; 4] {
		&self.0
	}
}

impl fmt::Display for ChunkType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for &b in &self.0 {
			let c = if b.is_ascii_graphic() { b as char } else { char::REPLACEMENT_CHARACTER };
			write!(f, "{}", c)?;
		}
		Ok(())
	}
}

impl fmt::Debug for ChunkType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "\"{}\"", self)
	}
}

/// One length/type/data/CRC unit of a PNG stream.
#[derive(Clone, PartialEq, Eq)]
pub struct Chunk {
	chunk_type: ChunkType,
	data: Vec<u8>,
	crc: u32,
}

impl Chunk {
	/// Builds a chunk from parts as they appeared on the wire. The CRC is stored as given.
	pub fn from_parts(chunk_type: ChunkType, data: Vec<u8>, crc: u32) -> Self {
		Chunk { chunk_type, data, crc }
	}

	/// Builds a chunk with a freshly computed CRC.
	pub fn new(chunk_type: ChunkType, data: Vec<u8>) -> Self {
		let crc = compute_crc(&chunk_type, &data);
		Chunk { chunk_type, data, crc }
	}

	pub fn chunk_type(&self) -> ChunkType {
		self.chunk_type
	}

	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// Data length in bytes. Only lengths up to `u32::MAX` can be written.
	pub fn length(&self) -> u64 {
		self.data.len() as u64
	}

	pub fn crc(&self) -> u32 {
		self.crc
	}

	/// Bytes this chunk occupies on the wire, framing included.
	pub fn encoded_len(&self) -> u64 {
		self.data.len() as u64 + CHUNK_OVERHEAD
	}

	/// Writes length, type, data and the stored CRC. Returns bytes written.
	/// Fails before writing anything if the data does not fit a 32-bit length.
	pub fn write_to<W: Write>(&self, sink: &mut W) -> io::Result<u64> {
		let length = wire_length(self.chunk_type, self.data.len())?;
		sink.write_all(&length.to_be_bytes())?;
		sink.write_all(self.chunk_type.as_bytes())?;
		sink.write_all(&self.data)?;
		sink.write_all(&self.crc.to_be_bytes())?;
		Ok(self.encoded_len())
	}
}

impl fmt::Debug for Chunk {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<Chunk {} len={} crc=0x{:08X}>", self.chunk_type, self.data.len(), self.crc)
	}
}

fn wire_length(chunk_type: ChunkType, len: usize) -> io::Result<u32> {
	u32::try_from(len).map_err(|_| {
		io::Error::new(
			io::ErrorKind::InvalidInput,
			format!("{} chunk data is {} bytes, over the 32-bit length limit", chunk_type, len),
		)
	})
}

/// CRC-32 over the type bytes followed by the data bytes.
pub fn compute_crc(chunk_type: &ChunkType, data: &[u8]) -> u32 {
	let mut hasher = Hasher::new();
	hasher.update(chunk_type.as_bytes());
	hasher.update(data);
	hasher.finalize()
}
