#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use minegrid::{init_logging, render, render_json, Grid, Specification};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Read a mine specification and print the solved grid.
    Render {
        /// Specification file; reads stdin when omitted or `-`.
        path: Option<PathBuf>,
        #[arg(long, help = "Print the grid as JSON instead of a bordered table")]
        json: bool,
    },
    /// Print a random mine specification.
    Generate {
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        columns: usize,
        #[arg(long)]
        mines: usize,
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { path, json } => {
            let spec = read_specification(path.as_ref())?;
            let grid = Grid::build(&spec)?;
            if json {
                println!("{}", render_json(&grid)?);
            } else {
                print!("{}", render(&grid));
            }
        }
        Commands::Generate {
            rows,
            columns,
            mines,
            seed,
        } => {
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let spec = Specification::random(&mut rng, rows, columns, mines)?;
            print!("{}", spec);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn read_specification(path: Option<&PathBuf>) -> anyhow::Result<Specification> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            let file = std::fs::File::open(p)
                .with_context(|| format!("failed to open {}", p.display()))?;
            Specification::from_reader(file)
                .with_context(|| format!("invalid specification in {}", p.display()))
        }
        _ => Specification::from_reader(std::io::stdin().lock())
            .context("invalid specification on stdin"),
    }
}
