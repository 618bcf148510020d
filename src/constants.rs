// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines application-wide constants used throughout the codebase.
// - PNG_SIGNATURE: the fixed 8-byte header every PNG starts with
// - CORE_CHUNKS / DROP_CHUNKS: the two fixed sets the filter classifies against
// - CHUNK_OVERHEAD: length + type + CRC bytes framing every chunk
// - BUFFER_SIZE: Optimal buffer size for file I/O operations

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Image-data chunks. Never removed.
pub const CORE_CHUNKS: [[u8; 4]; 4] = [*b"IHDR", *b"PLTE", *b"IDAT", *b"IEND"];

/// Metadata chunks. Always removed.
pub const DROP_CHUNKS: [[u8; 4]; 6] = [
	*b"tEXt", // Uncompressed text
	*b"zTXt", // Compressed text
	*b"iTXt", // International text
	*b"tIME", // Last modification time
	*b"pHYs", // Physical pixel dimensions
	*b"gAMA", // Gamma
];

pub const CHUNK_OVERHEAD: u64 = 12;

pub const BUFFER_SIZE: usize = 16384;

pub const BACKUP_SUFFIX: &str = ".bak";
