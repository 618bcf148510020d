// ══════════════════════════════════════════════════════════════════════════════
// PNGCLEAN LIBRARY
// ══════════════════════════════════════════════════════════════════════════════
//
// Chunk codec (reader, filter, writer) plus the batch pipeline built on top of
// it. The binary in main.rs is a thin clap front end over these modules.

pub mod chunk;
pub mod clean;
pub mod config;
pub mod constants;
pub mod discover;
pub mod error;
pub mod filter;
pub mod inspect;
pub mod io;
pub mod logger;
pub mod reader;
pub mod runlog;
pub mod writer;

pub use chunk::{Chunk, ChunkType};
pub use clean::{clean_file, FileReport, Summary};
pub use config::{Config, Destination};
pub use error::{ChunkError, Error, ErrorKind};
pub use filter::{classify, filter_chunks, Disposition, Filtered};
pub use reader::read_chunks;
pub use writer::write_chunks;
