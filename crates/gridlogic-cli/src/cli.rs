use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use gridlogic_core::{Difficulty, PuzzleKind};
use gridlogic_generator::{DEFAULT_DAILY_COUNT, PuzzleSeed};

/// Generate, inspect and auto-play daily grid logic puzzles.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print a generated puzzle.
    Generate(GenerateArgs),
    /// Print the puzzle kinds offered on a day and their seeds.
    Daily(DailyArgs),
    /// Play a puzzle with one hint per timer tick until it completes or fails.
    Autoplay(AutoplayArgs),
}

#[derive(Debug, Args)]
pub(crate) struct PuzzleArgs {
    /// Puzzle kind (sudoku or hitori).
    #[arg(short, long, value_name = "KIND", default_value = "sudoku")]
    pub(crate) kind: PuzzleKind,

    /// Difficulty level (1-5).
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        default_value = "1",
        value_parser = parse_difficulty
    )]
    pub(crate) difficulty: Difficulty,

    /// Date whose daily seed is used (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_name = "DATE", conflicts_with = "seed")]
    pub(crate) date: Option<NaiveDate>,

    /// Explicit seed, overriding the date.
    #[arg(long, value_name = "SEED", allow_hyphen_values = true)]
    pub(crate) seed: Option<PuzzleSeed>,
}

impl PuzzleArgs {
    /// Returns the explicit seed, or the daily seed of the chosen date.
    pub(crate) fn resolve_seed(&self) -> PuzzleSeed {
        self.seed.unwrap_or_else(|| {
            let date = self.date.unwrap_or_else(today);
            PuzzleSeed::for_puzzle(date, self.kind, self.difficulty)
        })
    }
}

#[derive(Debug, Args)]
pub(crate) struct GenerateArgs {
    #[command(flatten)]
    pub(crate) puzzle: PuzzleArgs,

    /// Also print the solution.
    #[arg(long)]
    pub(crate) solution: bool,
}

#[derive(Debug, Args)]
pub(crate) struct DailyArgs {
    /// Day to list (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_name = "DATE")]
    pub(crate) date: Option<NaiveDate>,

    /// Number of puzzle kinds offered.
    #[arg(short, long, value_name = "COUNT", default_value_t = DEFAULT_DAILY_COUNT)]
    pub(crate) count: usize,
}

#[derive(Debug, Args)]
pub(crate) struct AutoplayArgs {
    #[command(flatten)]
    pub(crate) puzzle: PuzzleArgs,

    /// JSON settings file. Missing fields keep their defaults.
    #[arg(long, value_name = "FILE")]
    pub(crate) settings: Option<PathBuf>,

    /// Seconds the timer advances between hints.
    #[arg(long, value_name = "SECONDS", default_value_t = 5.0)]
    pub(crate) tick: f64,
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    let level: u8 = s.parse().map_err(|err| format!("{err}"))?;
    Difficulty::try_from(level).map_err(|err| err.to_string())
}
