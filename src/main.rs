use clap::Parser;
use squeeze_bench::cmd;
use squeeze_bench::codec::{DEFAULT_LEVEL, MAX_LEVEL};
use squeeze_bench::config::{BenchOptions, OutputFormat};
use std::path::PathBuf;
use std::process;

/// Rank compression codecs on a JSON file
///
/// squeeze-bench minifies the input as JSON, compresses it with gzip, zlib,
/// raw DEFLATE and LZW, and ranks each codec by how much it saves against the
/// original file size.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File to benchmark
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Benchmark the file as-is, without JSON minification
    #[arg(long)]
    raw: bool,

    /// Compression level for gzip, zlib and flate (0-9)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_LEVEL,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_LEVEL))
    )]
    level: u32,

    /// Only benchmark this codec (repeatable)
    #[arg(short, long = "codec", value_name = "NAME")]
    codecs: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_options(self) -> BenchOptions {
        BenchOptions {
            input: self.file,
            minify: !self.raw,
            level: self.level,
            codecs: self.codecs,
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Table
            },
        }
    }
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let options = Cli::parse().into_options();

    if let Err(e) = cmd::cmd_bench(&options) {
        use squeeze_bench::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        process::exit(ErrorFormatter::exit_code(&e));
    }
}
