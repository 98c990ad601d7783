// src/cli.rs
use std::{env, io::Write};

use crate::config::options::{FetchConfig, LeaderboardKind, Sector, Selections, Track};
use crate::csv::{rows_to_string, Delim};
use crate::error::{Error, Result};
use crate::leaderboard::{self, RenderPayload};
use crate::progress::Progress;
use crate::specs::{HttpSource, Source};
use crate::table::TableData;

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Output {
    Delimited(Delim),
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub selections: Selections,
    pub output: Output,
    pub list_tracks: bool,
    pub help: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            selections: Selections::default(),
            output: Output::Delimited(Delim::Tsv),
            list_tracks: false,
            help: false,
        }
    }
}

/// Status lines to stderr; stdout stays clean for the table.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, what: &str) {
        eprintln!("Fetching {what}…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn finish(&mut self, ok: bool) {
        if !ok {
            eprintln!("Fetch failed");
        }
    }
}

/// Entry point for the `cli` binary.
pub fn run() -> Result<()> {
    let params = parse_args(env::args().skip(1))?;
    let mut stdout = std::io::stdout().lock();

    if params.help {
        write!(stdout, "{HELP}")?;
        return Ok(());
    }
    if params.list_tracks {
        for t in Track::ALL {
            writeln!(stdout, "{}", t.slug())?;
        }
        return Ok(());
    }

    let source = HttpSource::new(FetchConfig::from_env())?;
    run_with(&params, &source, &mut stdout)
}

/// Recompute once for `params` and print the result to `out`.
pub fn run_with<W: Write>(params: &Params, source: &dyn Source, out: &mut W) -> Result<()> {
    let payload = leaderboard::recompute(source, &params.selections, Some(&mut CliProgress))?;

    if payload.is_fallback() {
        eprintln!(
            "No entries for car {:?}; showing all {} entries",
            params.selections.car().unwrap_or_default(),
            payload.full.len()
        );
    }
    if let Some(driver) = params.selections.driver() {
        match payload.highlight {
            Some(b) => eprintln!("{driver}: highlighted bucket {b}"),
            None => eprintln!("{driver}: not in this table"),
        }
    }

    write_payload(&payload, params.output, out)
}

pub fn write_payload<W: Write>(payload: &RenderPayload, output: Output, out: &mut W) -> Result<()> {
    match output {
        Output::Json => {
            serde_json::to_writer_pretty(&mut *out, payload)?;
            writeln!(out)?;
        }
        Output::Delimited(delim) => {
            let table = TableData::from_records(&payload.table);
            out.write_all(rows_to_string(Some(table.headers.as_slice()), &table.rows, delim).as_bytes())?;
        }
    }
    Ok(())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Params> {
    let mut params = Params::default();
    let mut args = args.into_iter();

    fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
        args.next().ok_or_else(|| Error::Usage(format!("Missing value for {flag}")))
    }

    while let Some(a) = args.next() {
        match a.as_str() {
            "-b" | "--board" => {
                let v = value(&mut args, &a)?;
                params.selections.kind = LeaderboardKind::parse(&v)
                    .ok_or_else(|| Error::Usage(format!("Unknown leaderboard: {v}")))?;
            }
            "-t" | "--track" => {
                let v = value(&mut args, &a)?;
                params.selections.track = Track::from_slug(&v)
                    .ok_or_else(|| Error::Usage(format!("Unknown track: {v} (try --list-tracks)")))?;
            }
            "-s" | "--sector" => {
                let v = value(&mut args, &a)?;
                params.selections.sector = Some(
                    v.trim()
                        .parse::<u8>()
                        .ok()
                        .and_then(Sector::from_number)
                        .ok_or_else(|| Error::Usage(format!("Sector must be 1, 2 or 3, got {v}")))?,
                );
            }
            "-c" | "--car" => params.selections.car = Some(value(&mut args, &a)?),
            "-d" | "--driver" => params.selections.driver = Some(value(&mut args, &a)?),
            "-f" | "--format" => {
                let v = value(&mut args, &a)?;
                params.output = match v.to_ascii_lowercase().as_str() {
                    "csv" => Output::Delimited(Delim::Csv),
                    "tsv" => Output::Delimited(Delim::Tsv),
                    "json" => Output::Json,
                    other => return Err(Error::Usage(format!("Unknown format: {other}"))),
                };
            }
            "--list-tracks" => params.list_tracks = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(Error::Usage(format!("Unknown arg: {a}"))),
        }
    }

    Ok(params)
}
