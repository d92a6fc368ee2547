//! Highlight search-result lines from the command line.
//!
//! Usage:
//!     boldface "wif on" "Turn on Wi-Fi"
//!     cat rows.txt | boldface --json "tap to clic"
//!
//! With no TEXT arguments, every stdin line is one result row. Set
//! `RUST_LOG=boldface=trace` to see the tokens each row produced.

use anyhow::{Context, Result};
use boldface::render::{bold_ranges, render_ansi};
use clap::Parser;
use std::io::{self, BufRead, BufWriter, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "boldface", about = "Bold the parts of result rows that match a search query")]
struct Args {
    /// Search query as typed by the user
    query: String,

    /// Result rows; read from stdin when omitted
    texts: Vec<String>,

    /// Print each row as a JSON array of {text, bold} spans
    #[arg(long, conflicts_with = "ranges")]
    json: bool,

    /// Print each row's bold character ranges as JSON
    #[arg(long)]
    ranges: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let texts = if args.texts.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .context("Failed to read result rows from stdin")?
    } else {
        args.texts
    };

    let rows = boldface::highlight_all(&args.query, &texts);

    let mut out = BufWriter::new(io::stdout().lock());
    for spans in &rows {
        if args.json {
            serde_json::to_writer(&mut out, spans)?;
            writeln!(out)?;
        } else if args.ranges {
            serde_json::to_writer(&mut out, &bold_ranges(spans))?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", render_ansi(spans))?;
        }
    }
    out.flush().context("Failed to write output")?;
    Ok(())
}
