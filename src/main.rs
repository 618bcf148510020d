// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                               PNGCLEAN                                       ║
// ║                      PNG Metadata Chunk Stripper                             ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 PROJECT GOAL
// ---------------
// PNG files carry more than pixels. Text comments, modification times, and
// physical dimensions ride along in ancillary chunks and leak where an image
// came from. pngclean removes those chunks and leaves everything else alone.
//
// 📦 HOW IT WORKS
// ---------------
//   [Signature] [IHDR] [tEXt] [pHYs] [IDAT] [tIME] [IEND]
//                  ↓ read, verify every CRC
//   keep core (IHDR PLTE IDAT IEND), drop tEXt zTXt iTXt tIME pHYs gAMA,
//   keep anything else untouched
//                  ↓ write back verbatim
//   [Signature] [IHDR] [IDAT] [IEND]
//
// Kept chunks are written byte for byte with their original CRC. Pixel data is
// never decoded or recompressed.
//
// 🛡️ FAILURE MODEL
// ----------------
// A bad signature, a truncated chunk, or a CRC mismatch skips that file and
// leaves it untouched. The rest of the batch carries on.
//
// ══════════════════════════════════════════════════════════════════════════════

use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use colored::*;
use pngclean::clean::{print_summary, run};
use pngclean::config::Config;
use pngclean::discover::collect_png_files;
use pngclean::inspect::inspect;
use pngclean::logger::{log, LogLevel};
use pngclean::runlog::append_run_log;

/// Strip metadata chunks from PNG images
#[derive(Parser)]
#[command(name = "pngclean")]
#[command(version)]
#[command(about = "Batch remove PNG metadata chunks (tEXt, zTXt, iTXt, tIME, pHYs, gAMA)", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Remove metadata chunks from a PNG file or a directory of PNGs
	Clean {
		/// Input PNG file or directory
		#[arg(short, long)]
		input: PathBuf,

		/// Output file or directory (in-place when omitted)
		#[arg(short, long)]
		output: Option<PathBuf>,

		/// Recurse into subdirectories when the input is a directory
		#[arg(short, long)]
		recursive: bool,

		/// Copy each original to <name>.bak before writing
		#[arg(short, long)]
		backup: bool,

		/// Show what would be done without writing any files
		#[arg(long)]
		dry_run: bool,

		/// Append a Markdown record of the run to this file
		#[arg(long)]
		log_file: Option<PathBuf>,
	},

	/// List the chunks of a PNG and what cleaning would do to them
	Inspect {
		/// Path to the PNG file
		image: PathBuf,
	},
}

fn main() -> ExitCode {
	log(LogLevel::Info, &format!("Welcome to {}!", "pngclean".cyan()));

	let cli = Cli::parse();

	match cli.command {
		Commands::Clean { input, output, recursive, backup, dry_run, log_file } => {
			let config = match Config::new(&input, output.as_deref(), recursive, backup, dry_run, log_file) {
				Ok(c) => c,
				Err(e) => { log(LogLevel::Error, &e.to_string()); return ExitCode::from(2); }
			};
			clean(&config)
		}

		Commands::Inspect { image } => {
			match inspect(&image) {
				Ok(()) => ExitCode::SUCCESS,
				Err(e) => { log(LogLevel::Error, &e.to_string()); ExitCode::FAILURE }
			}
		}
	}
}

fn clean(config: &Config) -> ExitCode {
	// 1. Gather PNGs
	let files = collect_png_files(&config.input, config.recursive);
	if files.is_empty() {
		log(LogLevel::Warning, "No PNG files found to process.");
		return ExitCode::SUCCESS;
	}

	// 2. Validate the output target before touching anything
	let destination = match config.destination(files.len()) {
		Ok(d) => d,
		Err(e) => { log(LogLevel::Error, &e.to_string()); return ExitCode::from(2); }
	};

	log(LogLevel::Info, &format!("Found {} PNG file(s) | output: {}", files.len(), destination.describe()));
	if config.dry_run {
		log(LogLevel::Warning, "Dry run: no files will be written.");
	}

	// 3. Process
	let summary = run(config, &destination, &files);
	print_summary(&summary);

	// 4. Run log
	if let Some(path) = &config.log_file {
		if let Err(e) = append_run_log(path, config, &destination, &summary) {
			log(LogLevel::Warning, &format!("Could not write run log {}: {}", path.display(), e));
		}
	}

	if summary.has_failures() {
		log(LogLevel::Warning, "Done, with errors.");
		ExitCode::FAILURE
	} else {
		log(LogLevel::Success, "Done.");
		ExitCode::SUCCESS
	}
}
