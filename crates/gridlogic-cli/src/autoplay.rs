//! Plays a puzzle by taking one hint per timer tick.

use std::{cell::RefCell, fs, rc::Rc};

use gridlogic_core::PuzzleKind;
use gridlogic_game::{
    CountdownTimer, EngineSettings, HitoriPuzzle, PuzzleEngine, PuzzleEvent, PuzzleLifecycle,
    ScoreBoard, ScoreService as _, Services, SudokuPuzzle, TimerEvent,
};

use crate::{cli::AutoplayArgs, error::CliError};

pub(crate) fn run(args: &AutoplayArgs) -> Result<(), CliError> {
    let settings = load_settings(args)?;
    match args.puzzle.kind {
        PuzzleKind::Sudoku => play::<SudokuPuzzle>(args, settings),
        PuzzleKind::Hitori => play::<HitoriPuzzle>(args, settings),
        kind @ (PuzzleKind::Streams | PuzzleKind::Nurikabe) => {
            return Err(CliError::UnsupportedKind(kind));
        }
    }
    Ok(())
}

fn load_settings(args: &AutoplayArgs) -> Result<EngineSettings, CliError> {
    let Some(path) = &args.settings else {
        return Ok(EngineSettings::default());
    };
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadSettings {
        path: path.clone(),
        source,
    })?;
    let settings = serde_json::from_str(&text)?;
    log::debug!("loaded settings from {}", path.display());
    Ok(settings)
}

fn play<E: PuzzleEngine>(args: &AutoplayArgs, settings: EngineSettings) {
    let EngineSettings {
        score,
        timer,
        lifecycle,
    } = settings;
    let timer = Rc::new(RefCell::new(CountdownTimer::new(&timer)));
    let board = Rc::new(RefCell::new(ScoreBoard::new(score)));
    let services = Services::new()
        .with_timer(timer.clone())
        .with_score(board.clone());

    let mut game = PuzzleLifecycle::<E>::new(services, lifecycle);
    let seed = args.puzzle.resolve_seed();
    game.initialize_with_seed(seed, args.puzzle.difficulty);
    println!(
        "{} level {} (seed {seed})",
        E::KIND,
        args.puzzle.difficulty
    );
    report(&mut game);

    while game.state().is_playing() {
        let ticked = timer.borrow_mut().tick(args.tick);
        for event in ticked {
            match event {
                TimerEvent::Warning(remaining) => println!("warning: {remaining:.0}s left"),
                TimerEvent::TimeUp => game.handle_time_up(),
                TimerEvent::Changed(_) => {}
            }
        }
        if !game.state().is_playing() {
            report(&mut game);
            break;
        }
        game.provide_hint();
        if report(&mut game) == 0 {
            break;
        }
    }

    println!(
        "{}: {} left, {} hints, score {}",
        game.state(),
        timer.borrow().formatted(),
        board.borrow().hints_used(),
        board.borrow().current_score(),
    );
}

/// Prints the pending events and returns how many there were.
fn report<E>(game: &mut PuzzleLifecycle<E>) -> usize {
    let events = game.take_events();
    for event in &events {
        match event {
            PuzzleEvent::Generated { values, .. } => println!("{values}"),
            PuzzleEvent::CellSelected(pos) => println!("select {pos}"),
            PuzzleEvent::CellChanged { pos, value } => println!("set {pos} = {value}"),
            PuzzleEvent::Completed(result) => println!(
                "completed: score {}, {:.1}s remaining",
                result.score, result.time_remaining
            ),
            PuzzleEvent::Failed => println!("failed: time up"),
        }
    }
    events.len()
}
