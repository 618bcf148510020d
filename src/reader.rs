// ══════════════════════════════════════════════════════════════════════════════
// READER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Parses a PNG byte stream into an ordered list of chunks. Validates the
// signature, reads each length/type/data/CRC unit and checks the CRC. The
// stream is expected to end exactly on a chunk boundary; ordering of chunks
// (IHDR first, IEND last) is not checked.

use std::io::{self, Read};
use crate::chunk::{Chunk, ChunkType, compute_crc};
use crate::constants::PNG_SIGNATURE;
use crate::error::{ChunkError, ChunkField};

/// Reads the signature and every chunk that follows it.
/// Fails without returning any chunk if the stream is malformed.
pub fn read_chunks<R: Read>(source: &mut R) -> Result<Vec<Chunk>, ChunkError> {
	let mut signature = [0u8; 8];
	if fill(source, &mut signature)? < signature.len() || signature != PNG_SIGNATURE {
		return Err(ChunkError::Signature);
	}

	let mut chunks = Vec::new();
	loop {
		let index = chunks.len();

		// 1. Length (a clean EOF here ends the stream)
		let mut len_buf = [0u8; 4];
		match fill(source, &mut len_buf)? {
			0 => break,
			4 => {}
			_ => return Err(truncated(ChunkField::Length, index, None)),
		}
		let length = u32::from_be_bytes(len_buf);

		// 2. Type
		let mut type_buf = [0u8; 4];
		if fill(source, &mut type_buf)? < 4 {
			return Err(truncated(ChunkField::Type, index, None));
		}
		let chunk_type = ChunkType(type_buf);

		// 3. Data. `take` keeps a bogus length from allocating up front.
		let mut data = Vec::new();
		source.by_ref().take(u64::from(length)).read_to_end(&mut data)?;
		if data.len() < length as usize {
			return Err(truncated(ChunkField::Data, index, Some(chunk_type)));
		}

		// 4. CRC
		let mut crc_buf = [0u8; 4];
		if fill(source, &mut crc_buf)? < 4 {
			return Err(truncated(ChunkField::Crc, index, Some(chunk_type)));
		}
		let stored = u32::from_be_bytes(crc_buf);

		let expected = compute_crc(&chunk_type, &data);
		if expected != stored {
			return Err(ChunkError::CrcMismatch { index, chunk_type, expected, stored });
		}

		chunks.push(Chunk::from_parts(chunk_type, data, stored));
	}

	Ok(chunks)
}

fn truncated(field: ChunkField, index: usize, chunk_type: Option<ChunkType>) -> ChunkError {
	ChunkError::Truncated { field, index, chunk_type }
}

/// Reads until `buf` is full or the source is exhausted. Returns bytes read.
fn fill<R: Read>(source: &mut R, buf: &mut [u8]) -> io::Result<usize> {
	let mut total = 0;
	while total < buf.len() {
		match source.read(&mut buf[total..]) {
			Ok(0) => break,
			Ok(n) => total += n,
			Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
			Err(e) => return Err(e),
		}
	}
	Ok(total)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::writer::write_chunks;

	fn chunk(kind: &[u8; 4], data: &[u8]) -> Chunk {
		Chunk::new(ChunkType(*kind), data.to_vec())
	}

	fn encode(chunks: &[Chunk]) -> Vec<u8> {
		let mut out = Vec::new();
		write_chunks(chunks, &mut out).unwrap();
		out
	}

	fn sample() -> Vec<Chunk> {
		vec![
			chunk(b"IHDR", &[0, 0, 0, 1, 0, 0, 0, 1, 8, 0, 0, 0, 0]),
			chunk(b"tEXt", b"Comment\0hi"),
			chunk(b"IDAT", &[0x78, 0x9C, 0x62, 0x60, 0x00, 0x00, 0x00, 0x02, 0x00, 0x01]),
			chunk(b"IEND", &[]),
		]
	}

	/// Reader that hands out one byte per call.
	struct Trickle<'a>(&'a [u8]);

	impl Read for Trickle<'_> {
		fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
			if self.0.is_empty() || buf.is_empty() {
				return Ok(0);
			}
			buf[0] = self.0[0];
			self.0 = &self.0[1..];
			Ok(1)
		}
	}

	#[test]
	fn reads_chunks_in_order() {
		let bytes = encode(&sample());
		let chunks = read_chunks(&mut bytes.as_slice()).unwrap();
		assert_eq!(chunks, sample());
	}

	#[test]
	fn short_reads_are_reassembled() {
		let bytes = encode(&sample());
		let chunks = read_chunks(&mut Trickle(&bytes)).unwrap();
		assert_eq!(chunks.len(), 4);
	}

	#[test]
	fn signature_only_yields_no_chunks() {
		let chunks = read_chunks(&mut &PNG_SIGNATURE[..]).unwrap();
		assert!(chunks.is_empty());
	}

	#[test]
	fn rejects_wrong_signature() {
		let mut bytes = encode(&sample());
		bytes[1] = b'J';
		let err = read_chunks(&mut bytes.as_slice()).unwrap_err();
		assert!(matches!(err, ChunkError::Signature));
	}

	#[test]
	fn rejects_short_signature() {
		let err = read_chunks(&mut &PNG_SIGNATURE[..5]).unwrap_err();
		assert!(matches!(err, ChunkError::Signature));
		let err = read_chunks(&mut &b""[..]).unwrap_err();
		assert!(matches!(err, ChunkError::Signature));
	}

	#[test]
	fn declared_length_past_eof_names_chunk_type() {
		let mut bytes = PNG_SIGNATURE.to_vec();
		bytes.extend_from_slice(&100u32.to_be_bytes());
		bytes.extend_from_slice(b"IDAT");
		bytes.extend_from_slice(&[0u8; 10]);

		let err = read_chunks(&mut bytes.as_slice()).unwrap_err();
		match err {
			ChunkError::Truncated { field, index, chunk_type } => {
				assert_eq!(field, ChunkField::Data);
				assert_eq!(index, 0);
				assert_eq!(chunk_type, Some(ChunkType(*b"IDAT")));
			}
			other => panic!("unexpected error: {other:?}"),
		}
		assert!(read_chunks(&mut bytes.as_slice()).unwrap_err().to_string().contains("IDAT"));
	}

	#[test]
	fn partial_length_field_is_truncation() {
		let mut bytes = encode(&sample()[..1]);
		bytes.extend_from_slice(&[0, 0]);
		let err = read_chunks(&mut bytes.as_slice()).unwrap_err();
		assert!(matches!(
			err,
			ChunkError::Truncated { field: ChunkField::Length, index: 1, chunk_type: None }
		));
	}

	#[test]
	fn partial_type_field_is_truncation() {
		let mut bytes = PNG_SIGNATURE.to_vec();
		bytes.extend_from_slice(&0u32.to_be_bytes());
		bytes.extend_from_slice(b"IE");
		let err = read_chunks(&mut bytes.as_slice()).unwrap_err();
		assert!(matches!(err, ChunkError::Truncated { field: ChunkField::Type, .. }));
	}

	#[test]
	fn missing_crc_is_truncation() {
		let mut bytes = encode(&sample());
		bytes.truncate(bytes.len() - 2);
		let err = read_chunks(&mut bytes.as_slice()).unwrap_err();
		assert!(matches!(
			err,
			ChunkError::Truncated { field: ChunkField::Crc, index: 3, chunk_type: Some(t) } if t == ChunkType(*b"IEND")
		));
	}

	#[test]
	fn corrupted_data_byte_fails_crc_check() {
		let chunks = sample();
		let mut bytes = encode(&chunks);
		// first data byte of the tEXt chunk
		let offset = 8 + chunks[0].encoded_len() as usize + 8;
		bytes[offset] ^= 0x01;

		let err = read_chunks(&mut bytes.as_slice()).unwrap_err();
		match err {
			ChunkError::CrcMismatch { index, chunk_type, expected, stored } => {
				assert_eq!(index, 1);
				assert_eq!(chunk_type, ChunkType(*b"tEXt"));
				assert_eq!(stored, chunks[1].crc());
				assert_ne!(expected, stored);
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn chunk_order_is_not_validated() {
		let chunks = vec![chunk(b"IEND", &[]), chunk(b"IHDR", &[1, 2, 3]), chunk(b"zzZZ", b"x")];
		let bytes = encode(&chunks);
		assert_eq!(read_chunks(&mut bytes.as_slice()).unwrap(), chunks);
	}

	#[test]
	fn non_ascii_type_bytes_are_tolerated() {
		let chunks = vec![chunk(&[0xC3, 0xA9, b'x', b'Y'], b"payload")];
		let bytes = encode(&chunks);
		let read = read_chunks(&mut bytes.as_slice()).unwrap();
		assert_eq!(read[0].chunk_type().as_bytes(), &[0xC3, 0xA9, b'x', b'Y']);
	}
}
