//! Command line front end of the dictionary converter.
//!
//! Reads one XML dictionary (file or stdin), converts it and writes the JSON
//! result (file or stdout). Log events, including converter diagnostics, go to
//! stderr and are filtered with `RUST_LOG` (default `warn`).

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use fixdict_dictionary::{ConversionOutcome, Converter, DEFAULT_MSG_CAT};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;


/// Converts a quickfix XML dictionary to JSON.
#[derive(Debug, Parser)]
#[command(name = "fixdict", version, about, long_about = None)]
pub struct Args {
    /// Input XML dictionary, stdin when missing or `-`
    pub input: Option<PathBuf>,

    /// Output JSON file, stdout when missing
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write `{"data": ..., "error": ...}` instead of the bare dictionary,
    /// conversion errors are then reported in the output and do not fail the run
    #[arg(long)]
    pub envelope: bool,

    /// Fail the run when header/trailer fields could not be resolved
    #[arg(long)]
    pub deny_warnings: bool,

    /// Category of messages declared without `msgcat`
    #[arg(long, default_value = DEFAULT_MSG_CAT)]
    pub default_msg_cat: String,

    /// Emit log events as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

pub fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

pub fn run(args: &Args) -> Result<()> {
    let xml = read_input(args.input.as_deref())?;
    let converter = Converter::builder()
        .with_default_msg_cat(args.default_msg_cat.as_str())
        .build();

    let conversion = match converter.convert(&xml) {
        Ok(conversion) => conversion,
        Err(err) if args.envelope => {
            warn!(%err, "conversion failed");
            let outcome = ConversionOutcome::from(Err(err));
            return write_output(args.output.as_deref(), &to_json(&outcome, args.pretty)?);
        }
        Err(err) => return Err(err).context("failed to convert dictionary"),
    };

    let diagnostics = conversion.diagnostics().len();
    let dictionary = conversion.dictionary();
    info!(
        version = %dictionary.version(),
        fields = dictionary.fields().len(),
        messages = dictionary.messages().len(),
        diagnostics,
        "dictionary converted"
    );

    let json = if args.envelope {
        to_json(&ConversionOutcome::from(Ok(conversion)), args.pretty)?
    } else {
        to_json(dictionary, args.pretty)?
    };
    write_output(args.output.as_deref(), &json)?;

    if args.deny_warnings && diagnostics > 0 {
        bail!("{diagnostics} diagnostic(s) recorded while converting dictionary");
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut xml = String::new();
            io::stdin()
                .read_to_string(&mut xml)
                .context("failed to read stdin")?;
            Ok(xml)
        }
    }
}

fn write_output(path: Option<&Path>, json: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, format!("{json}\n"))
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write stdout")
        }
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
