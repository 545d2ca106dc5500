//! Command-line front end for the daily puzzle engine.

use std::process::ExitCode;

use clap::Parser as _;
use gridlogic_core::{Difficulty, PuzzleKind};
use gridlogic_generator::{HitoriGenerator, PuzzleSeed, SudokuGenerator, daily_lineup};

use self::{
    cli::{Cli, Command, DailyArgs, GenerateArgs},
    error::CliError,
};

mod autoplay;
mod cli;
mod error;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Command::Generate(args) => generate(args),
        Command::Daily(args) => {
            daily(args);
            Ok(())
        }
        Command::Autoplay(args) => autoplay::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn generate(args: &GenerateArgs) -> Result<(), CliError> {
    let seed = args.puzzle.resolve_seed();
    let difficulty = args.puzzle.difficulty;
    match args.puzzle.kind {
        PuzzleKind::Sudoku => {
            let puzzle = SudokuGenerator::new(difficulty).generate_with_seed(seed);
            println!("sudoku level {difficulty} (seed {seed})");
            println!("{}", puzzle.problem);
            if args.solution {
                println!();
                println!("{}", puzzle.solution);
            }
        }
        PuzzleKind::Hitori => {
            let puzzle = HitoriGenerator::new(difficulty).generate_with_seed(seed);
            println!("hitori level {difficulty} (seed {seed})");
            println!("{}", puzzle.numbers);
            if puzzle.shortfall() > 0 {
                log::warn!(
                    "placed {} of {} black cells",
                    puzzle.black_count(),
                    puzzle.black_target
                );
            }
            if args.solution {
                println!();
                println!("{}", puzzle.solution_mask);
            }
        }
        kind @ (PuzzleKind::Streams | PuzzleKind::Nurikabe) => {
            return Err(CliError::UnsupportedKind(kind));
        }
    }
    Ok(())
}

fn daily(args: &DailyArgs) {
    let date = args.date.unwrap_or_else(cli::today);
    println!("{date}");
    for kind in daily_lineup(date, args.count) {
        let seeds = Difficulty::ALL
            .iter()
            .map(|&difficulty| {
                format!(
                    "L{difficulty}={}",
                    PuzzleSeed::for_puzzle(date, kind, difficulty)
                )
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {:<8} {seeds}", kind.to_string());
    }
}
