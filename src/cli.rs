use crate::logger::{Logger, Policies};
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use nub::{yaml, Queryable, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug, PartialEq)]
#[command(
    name = "nub",
    version,
    about = "Query YAML and shuffle files around.",
    arg_required_else_help = true
)]
struct Args {
    /// Only print results and failures.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print the value at a dotted path, like `spec.containers.[name:web].image`.
    Query {
        file: PathBuf,
        path: String,
        /// Print scalars as JSON too, instead of bare.
        #[arg(long)]
        json: bool,
    },
    /// Print the SHA-256 of a file.
    Checksum { file: PathBuf },
    /// Copy a file or directory tree.
    Copy { src: PathBuf, dst: PathBuf },
    /// Pack a directory into a gzipped tarball.
    Tar { src: PathBuf, tarfile: PathBuf },
    /// Unpack a gzipped tarball into a directory.
    Untar { tarfile: PathBuf, dest: PathBuf },
}

/// What we decide to do based on CLI arguments
#[derive(PartialEq, Debug)]
pub enum Behavior {
    Help(String),
    Version,
    UnexpectedArg(String),
    Run { command: Command, quiet: bool },
}

pub fn parse<S>(args: impl Iterator<Item = S>) -> Behavior
where
    S: AsRef<str>,
{
    let argv = std::iter::once("nub".to_owned()).chain(args.map(|a| a.as_ref().to_owned()));
    match Args::try_parse_from(argv) {
        Ok(parsed) => Behavior::Run {
            command: parsed.command,
            quiet: parsed.quiet,
        },
        Err(e) => match e.kind() {
            ErrorKind::DisplayVersion => Behavior::Version,
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Behavior::Help(e.render().to_string())
            }
            _ => Behavior::UnexpectedArg(e.render().to_string()),
        },
    }
}

pub fn execute<OUT, ERR>(behavior: Behavior, log: &mut Logger<OUT, ERR>) -> ExitCode
where
    OUT: Write,
    ERR: Write,
{
    let result: Result<bool> = match behavior {
        Behavior::Help(usage) => write!(log.stdout, "{}", usage)
            .map(|_| true)
            .map_err(Into::into),
        Behavior::Version => writeln!(log.stdout, "{}", env!("CARGO_PKG_VERSION"))
            .map(|_| true)
            .map_err(Into::into),
        Behavior::UnexpectedArg(msg) => write!(log.failure(), "{}", msg)
            .map(|_| false)
            .map_err(Into::into),
        Behavior::Run { command, quiet } => {
            if quiet {
                log.pol = Policies::quiet();
            }
            run(command, log)
        }
    };
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            // Nothing else to report to if this fails.
            let _ = writeln!(log.failure(), "Failed to execute: {:#}", e);
            ExitCode::from(1)
        }
    }
}

/// Perform a command. `Ok(false)` means it ran, but found nothing.
fn run<OUT, ERR>(command: Command, log: &mut Logger<OUT, ERR>) -> Result<bool>
where
    OUT: Write,
    ERR: Write,
{
    tracing::debug!(?command, "running");
    match command {
        Command::Query { file, path, json } => query(&file, &path, json, log),
        Command::Checksum { file } => {
            let digest = nub_sys::checksum(&file)?;
            writeln!(log.result(), "{}  {}", digest, file.display())?;
            Ok(true)
        }
        Command::Copy { src, dst } => {
            let out = nub_sys::fs::copy(&src, &dst)?;
            writeln!(log.notice(), "Copied {} to {}", src.display(), out.display())?;
            Ok(true)
        }
        Command::Tar { src, tarfile } => {
            nub_sys::tar::create(&tarfile, &src)?;
            writeln!(log.notice(), "Packed {} into {}", src.display(), tarfile.display())?;
            Ok(true)
        }
        Command::Untar { tarfile, dest } => {
            nub_sys::tar::extract_all(&tarfile, &dest)?;
            writeln!(log.notice(), "Unpacked {} into {}", tarfile.display(), dest.display())?;
            Ok(true)
        }
    }
}

fn query<OUT, ERR>(file: &Path, path: &str, json: bool, log: &mut Logger<OUT, ERR>) -> Result<bool>
where
    OUT: Write,
    ERR: Write,
{
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let doc = yaml::load(&text).with_context(|| format!("failed to parse {}", file.display()))?;
    let found = Queryable::new(doc).yaml(path);
    if !found.any() {
        writeln!(log.notice(), "Nothing at '{}' in {}", path, file.display())?;
        return Ok(false);
    }

    let value = found.o();
    match (&value, json) {
        (Value::Seq(_) | Value::Map(_), _) | (_, true) => {
            writeln!(log.result(), "{}", serde_json::to_string_pretty(&value)?)?
        }
        _ => writeln!(log.result(), "{}", value)?,
    }
    Ok(true)
}
