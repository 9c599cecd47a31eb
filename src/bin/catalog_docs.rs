//! Generates the Functions Catalog markdown page from `catalog.json`.
//!
//! Reads the catalog from a file or stdin, reports entries that would be
//! dropped or rendered incompletely, and prints the page, writes it in place,
//! or checks that the checked-in page is current.

use anyhow::{Context, Result, bail};
use fncatalog::{
    Freshness, decode_entries, document_freshness, parse_catalog_values, render_document,
    validate_catalog_values, validate_entries, write_document,
};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;
    init_tracing(args.verbose);

    let input = args.source.read()?;
    let values = parse_catalog_values(&input)?;
    if args.strict {
        validate_catalog_values(&values)?;
    }
    let entries = decode_entries(values)?;
    info!(entries = entries.len(), "loaded function catalog");

    let issues = validate_entries(&entries);
    if !issues.is_empty() {
        if args.strict {
            bail!(
                "function catalog has {} issue(s):\n{}",
                issues.len(),
                issues.join("\n")
            );
        }
        for issue in &issues {
            warn!("{issue}");
        }
    }

    let document = render_document(&entries);
    match (args.output, args.check) {
        (Some(path), true) => match document_freshness(&path, &document)? {
            Freshness::UpToDate => info!(path = %path.display(), "catalog page is up to date"),
            Freshness::Stale => bail!("{} is out of date; regenerate it", path.display()),
            Freshness::Missing => bail!("{} does not exist; generate it", path.display()),
        },
        (Some(path), false) => write_document(&path, &document)?,
        (None, _) => print!("{document}"),
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    // Logs go to stderr; stdout may carry the page itself.
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[derive(Debug)]
struct CliArgs {
    source: InputSource,
    output: Option<PathBuf>,
    check: bool,
    strict: bool,
    verbose: bool,
}

#[derive(Debug, PartialEq)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    fn read(&self) -> Result<String> {
        match self {
            InputSource::File(path) => {
                if !path.is_file() {
                    bail!("catalog file not found: {}", path.display());
                }
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
            }
            InputSource::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading stdin")?;
                Ok(buf)
            }
        }
    }
}

impl CliArgs {
    fn parse() -> Result<Self> {
        Self::parse_from(env::args_os().skip(1))
    }

    fn parse_from(args: impl IntoIterator<Item = std::ffi::OsString>) -> Result<Self> {
        let mut args = args.into_iter();
        let mut source: Option<InputSource> = None;
        let mut output: Option<PathBuf> = None;
        let mut check = false;
        let mut strict = false;
        let mut verbose = false;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--catalog" => {
                    let path = next_value(&mut args, "--catalog")?;
                    if source.is_some() {
                        bail!("--catalog/--stdin may only be provided once");
                    }
                    source = Some(InputSource::File(PathBuf::from(path)));
                }
                "--stdin" => {
                    if source.is_some() {
                        bail!("--catalog/--stdin may only be provided once");
                    }
                    source = Some(InputSource::Stdin);
                }
                "--output" => {
                    output = Some(PathBuf::from(next_value(&mut args, "--output")?));
                }
                "--check" => check = true,
                "--strict" => strict = true,
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}"),
            }
        }

        if check && output.is_none() {
            bail!("--check requires --output PATH");
        }

        Ok(CliArgs {
            source: source.unwrap_or(InputSource::Stdin),
            output,
            check,
            strict,
            verbose,
        })
    }
}

fn next_value(args: &mut impl Iterator<Item = std::ffi::OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: catalog-docs [--catalog PATH|--stdin] [--output PATH [--check]] [--strict] [--verbose]\n\
Renders the Functions Catalog page from a catalog JSON array (or NDJSON).\n\
Without --output the page is printed to stdout. --check compares the page at\n\
--output with a fresh render and fails if they differ. --strict fails on\n\
schema violations and on entries that would be dropped from the page.\n"
}

fn print_usage() {
    print!("{}", usage());
}
