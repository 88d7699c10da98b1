use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use aoc_init::fetch::HttpFetcherBuilder;
use aoc_init::identity::PuzzleIdentity;
use aoc_init::workspace::{Initializer, Prompt};
use clap::Parser;

/// Scaffold a workspace folder for one Advent of Code day: notebook,
/// puzzle input, and any example blocks from the puzzle page.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Day to initialize (1-25); prompts interactively when omitted
    #[arg(short, long)]
    day: Option<u32>,
    /// Puzzle year
    #[arg(short, long, default_value_t = 2025)]
    year: i32,
}

struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        Ok(ask(message)?.eq_ignore_ascii_case("y"))
    }
}

fn ask(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let session = std::env::var("AOC_SESSION")
        .context("AOC_SESSION is not set; put your adventofcode.com session cookie in .env")?;

    let day = match args.day {
        Some(day) => day,
        None => ask("Which day would you like to initialize? (1-25): ")?
            .parse()
            .context("day must be a number")?,
    };
    let identity = PuzzleIdentity::new(args.year, day)?;

    let fetcher = HttpFetcherBuilder::default().session(session).build()?;
    let mut init = Initializer::new(fetcher, StdinPrompt, PathBuf::from("."));
    init.run(&identity).await?;

    Ok(())
}
