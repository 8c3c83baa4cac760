use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use md5_digest::md5::round_constants;
use md5_digest::{digest, digest_file, digest_reader, Digest, Result};

/// Print MD5 digests of files, standard input, or literal strings.
#[derive(Debug, Parser)]
#[command(name = "md5sum", version)]
struct Args {
    /// Files to hash; `-` or no files reads standard input.
    files: Vec<PathBuf>,

    /// Hash a literal string instead of reading input.
    #[arg(short, long, value_name = "TEXT", conflicts_with = "files")]
    string: Option<String>,

    /// How to render each digest.
    #[arg(long, value_enum, default_value_t = Format::Hex)]
    format: Format,

    /// Print the 64 round constants and exit.
    #[arg(long)]
    constants: bool,

    /// Hash the listed files concurrently.
    #[arg(short = 'j', long)]
    parallel: bool,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// 32 lowercase hex characters.
    Hex,
    /// 128 `0`/`1` characters, most significant bit of each byte first.
    Binary,
}

impl Format {
    fn render(self, digest: &Digest) -> String {
        match self {
            Format::Hex => digest.to_hex(),
            Format::Binary => digest
                .as_ref()
                .iter()
                .map(|byte| format!("{byte:08b}"))
                .collect(),
        }
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_logging(verbose: u8) {
    // records from the library's `log` calls are forwarded by the subscriber's log bridge
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == OsStr::new("-")
}

fn hash_input(path: &Path) -> Result<Digest> {
    if is_stdin(path) {
        digest_reader(io::stdin().lock())
    } else {
        digest_file(path)
    }
}

#[cfg(feature = "parallel")]
fn hash_all(files: &[PathBuf], parallel: bool) -> Vec<Result<Digest>> {
    if parallel && !files.iter().any(|f| is_stdin(f)) {
        tracing::info!("hashing {} files in parallel", files.len());
        return md5_digest::digest_files(files);
    }
    files.iter().map(|f| hash_input(f)).collect()
}

#[cfg(not(feature = "parallel"))]
fn hash_all(files: &[PathBuf], parallel: bool) -> Vec<Result<Digest>> {
    if parallel {
        tracing::warn!("built without the `parallel` feature; hashing sequentially");
    }
    files.iter().map(|f| hash_input(f)).collect()
}

/// Writes one line per input to `out` and per-input errors to `err`.
///
/// Returns `false` if any input could not be hashed.
fn run<W: Write, E: Write>(args: Args, out: &mut W, err: &mut E) -> io::Result<bool> {
    if args.constants {
        for (i, k) in round_constants().iter().enumerate() {
            writeln!(out, "{i:2}: {k:#010x}")?;
        }
        return Ok(true);
    }

    if let Some(text) = &args.string {
        debug!("hashing {} byte string", text.len());
        let rendered = args.format.render(&digest(text.as_bytes()));
        writeln!(out, "{rendered}  \"{text}\"")?;
        return Ok(true);
    }

    let files = if args.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        args.files
    };

    let mut ok = true;
    for (path, result) in files.iter().zip(hash_all(&files, args.parallel)) {
        match result {
            Ok(d) => writeln!(out, "{}  {}", args.format.render(&d), path.display())?,
            Err(e) => {
                writeln!(err, "md5sum: {}: {e}", path.display())?;
                ok = false;
            }
        }
    }
    Ok(ok)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run(args, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("md5sum: {e}");
            ExitCode::FAILURE
        }
    }
}
