use std::path::PathBuf;

use aoc23::{read_input, time};
use clap::Parser;
use day10::{area, farthest, field::Field, parse, pipe_loop};
use eyre::{Result, WrapErr};

#[derive(Parser)]
#[command(about = "Pipe maze: how far the loop reaches, and how much it encloses")]
struct Cli {
    #[arg(short, long)]
    /// Print out how long parsing and each part took
    timings: bool,

    #[arg(short, long)]
    /// Draw the classified grid (I = inside, O = outside)
    draw: bool,

    /// Puzzle input, read from stdin when omitted
    file: Option<PathBuf>,
}

fn setup_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();

    let input = read_input(cli.file.as_deref()).wrap_err("Could not read puzzle input")?;

    let (grid, took) = time(|| parse(&input));
    let grid = grid.wrap_err("Could not parse puzzle input")?;
    if cli.timings {
        eprintln!("Parsed in {took:?}");
    }

    let (path, took) = time(|| pipe_loop(&grid));
    let path = path?;
    if cli.timings {
        eprintln!("First part in {took:?}");
    }

    println!("{}", farthest(&path));

    let (classified, took) = time(|| area::classify(&grid, &path));
    if cli.timings {
        eprintln!("Bonus in {took:?}");
    }

    println!("{}", area::interior(&classified));

    if cli.draw {
        eprint!(
            "{}",
            classified.map(|&f| match f {
                Field::Empty => 'I',
                f => f.to_char(),
            })
        );
    }

    Ok(())
}
