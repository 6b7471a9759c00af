use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use parity_avl::{parse_keys, write_report, RenderStyle, ReportConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "parity-avl",
    about = "Build a parity-routed AVL tree from a comma-separated key list and print it"
)]
struct Cli {
    /// Keys, e.g. `9,6,2,1,4`. Read from the first line of stdin when omitted.
    #[arg(allow_hyphen_values = true)]
    keys: Option<String>,

    /// Read the key list from the first line of a file instead.
    #[arg(long, short, conflicts_with = "keys")]
    input: Option<PathBuf>,

    /// Drawings to print after the post-order dump (repeatable).
    #[arg(long = "style", value_enum, default_values_t = [RenderStyle::Sideways, RenderStyle::Levels])]
    styles: Vec<RenderStyle>,

    /// Print the tree before every insertion.
    #[arg(long)]
    steps: bool,

    /// Skip the post-order dump.
    #[arg(long)]
    no_post_order: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let line = match (&cli.keys, &cli.input) {
        (Some(keys), _) => keys.clone(),
        (None, Some(path)) => read_first_line(path)?,
        (None, None) => read_stdin_line()?,
    };
    let keys = parse_keys(&line).context("failed to parse key list")?;

    let config = ReportConfig::default()
        .with_styles(cli.styles)
        .with_step_by_step(cli.steps)
        .with_post_order(!cli.no_post_order);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_report(&mut out, &keys, &config).context("failed to write report")?;
    out.flush()?;

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_first_line(path: &PathBuf) -> Result<String> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read keys from {}", path.display()))?;
    Ok(contents.lines().next().unwrap_or_default().to_string())
}

fn read_stdin_line() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read keys from stdin")?;
    Ok(line)
}
