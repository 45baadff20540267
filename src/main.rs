use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use percolation::sites::{read_sites, read_sites_file};
use percolation::{Percolation, Result};

/// Opens a list of sites on a square grid and reports whether it percolates
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("dimension").required(true).args(["side", "sites"])))]
struct Args {
    /// Number of sites along each edge of the grid
    #[arg(long)]
    side: Option<usize>,

    /// Total number of sites, must be a perfect square
    #[arg(long)]
    sites: Option<usize>,

    /// File of zero-based `row col` pairs, one per line (stdin when omitted)
    input: Option<PathBuf>,
}

fn run<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let mut percolation = match (args.side, args.sites) {
        (Some(side), _) => Percolation::new(side)?,
        // clap requires one of the two, a missing count is rejected as zero
        (None, sites) => Percolation::from_site_count(sites.unwrap_or_default())?,
    };

    let sites = match &args.input {
        Some(path) => read_sites_file(path)?,
        None => read_sites(io::stdin().lock())?,
    };
    log::info!("opening {} sites", sites.len());

    for (row, col) in sites {
        percolation.open(row, col)?;
    }

    writeln!(out, "open sites: {}", percolation.open_site_count())?;
    writeln!(out, "percolates: {}", percolation.percolates())?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse(), &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
