// Command-line interface for blockdelta.
//
// Two subcommands mirroring the library API: `encode` produces a delta
// from a source and target file, `decode` replays a delta against a
// source file. Stats go to stderr, optionally as JSON.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueHint};
use log::debug;

use crate::io::{self, IoError};

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Block-indexed binary delta codec.
#[derive(Parser, Debug)]
#[command(
    name = "blockdelta",
    version,
    about = "Binary delta encoder/decoder",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Compute the delta from SOURCE to TARGET.
    Encode {
        /// Source file the delta will be applied against.
        #[arg(value_hint = ValueHint::FilePath)]
        source: PathBuf,
        /// Target file the delta reconstructs.
        #[arg(value_hint = ValueHint::FilePath)]
        target: PathBuf,
        /// Delta output file.
        #[arg(value_hint = ValueHint::FilePath)]
        delta: PathBuf,
    },
    /// Replay a delta against SOURCE to reconstruct the target.
    Decode {
        /// Source file the delta was encoded against.
        #[arg(value_hint = ValueHint::FilePath)]
        source: PathBuf,
        /// Delta input file.
        #[arg(value_hint = ValueHint::FilePath)]
        delta: PathBuf,
        /// Reconstructed output file.
        #[arg(value_hint = ValueHint::FilePath)]
        output: PathBuf,
    },
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn check_overwrite(path: &Path, force: bool) -> Result<(), String> {
    if path.exists() && !force {
        return Err(format!(
            "output file '{}' exists (use --force to overwrite)",
            path.display()
        ));
    }
    Ok(())
}

fn cmd_encode(
    source: &Path,
    target: &Path,
    delta: &Path,
    cli: &Cli,
) -> Result<(), String> {
    check_overwrite(delta, cli.force)?;
    let stats = io::encode_file(source, target, delta).map_err(|e| e.to_string())?;
    debug!("encode stats: {stats:?}");

    if cli.quiet {
        return Ok(());
    }
    if cli.json_output {
        let json = serde_json::json!({
            "command": "encode",
            "source_size": stats.source_size,
            "target_size": stats.target_size,
            "delta_size": stats.delta_size,
            "ratio": ratio(stats.delta_size, stats.target_size),
        });
        eprintln!("{json}");
    } else {
        eprintln!(
            "encoded: {} target bytes -> {} delta bytes ({:.1}%)",
            stats.target_size,
            stats.delta_size,
            ratio(stats.delta_size, stats.target_size) * 100.0
        );
    }
    Ok(())
}

fn cmd_decode(
    source: &Path,
    delta: &Path,
    output: &Path,
    cli: &Cli,
) -> Result<(), String> {
    check_overwrite(output, cli.force)?;
    let stats = io::decode_file(source, delta, output).map_err(|e| match e {
        IoError::Apply(inner) => format!("{inner} (incompatible source or corrupted delta)"),
        other => other.to_string(),
    })?;
    debug!("decode stats: {stats:?}");

    if cli.quiet {
        return Ok(());
    }
    if cli.json_output {
        let json = serde_json::json!({
            "command": "decode",
            "source_size": stats.source_size,
            "delta_size": stats.delta_size,
            "output_size": stats.output_size,
        });
        eprintln!("{json}");
    } else {
        eprintln!(
            "decoded: {} delta bytes -> {} output bytes",
            stats.delta_size, stats.output_size
        );
    }
    Ok(())
}

fn ratio(delta: u64, target: u64) -> f64 {
    if target == 0 {
        return 0.0;
    }
    delta as f64 / target as f64
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Cmd::Encode {
            source,
            target,
            delta,
        } => cmd_encode(source, target, delta, &cli),
        Cmd::Decode {
            source,
            delta,
            output,
        } => cmd_decode(source, delta, output, &cli),
    };

    if let Err(msg) = result {
        eprintln!("blockdelta: {msg}");
        process::exit(1);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
