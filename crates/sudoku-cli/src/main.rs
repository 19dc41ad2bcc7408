//! Interactive terminal frontend: menus, animated solving, CSV logging.

mod animate;
mod logger;
mod menu;
mod render;

use clap::Parser;
use menu::{DifficultyChoice, ModeChoice};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use sudoku_engine::{
    generate_valid_puzzle, AcceptError, AcceptanceConfig, AcceptedPuzzle, BacktrackGenerator,
    Difficulty, SolveMode, SolveRecord, Solver, MAX_SEED,
};

/// Interactive Sudoku solver with animated backtracking and MRV.
#[derive(Parser)]
#[command(name = "sudoku-solver", version, about)]
struct Cli {
    /// Run one non-interactive solve at this difficulty (easy, medium, hard)
    #[arg(long, value_parser = menu::parse_difficulty_name)]
    difficulty: Option<Difficulty>,

    /// Generation seed (0-99999); a fresh random seed per attempt otherwise
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=99_999))]
    seed: Option<u32>,

    /// Cell-selection strategy: naive or mrv
    #[arg(long, default_value = "mrv", value_parser = menu::parse_mode_name)]
    mode: SolveMode,

    /// Animate the search step by step
    #[arg(long)]
    animate: bool,

    /// Delay between animation frames, in milliseconds
    #[arg(long, default_value_t = 30)]
    delay_ms: u64,

    /// Result log path
    #[arg(long, default_value = "sudoku_log.csv")]
    log_file: PathBuf,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    match cli.difficulty {
        Some(difficulty) => {
            let accepted = match generate_puzzle(difficulty, cli.seed) {
                Ok(accepted) => accepted,
                Err(err) => {
                    eprintln!("{}", err);
                    std::process::exit(1);
                }
            };
            run_solve(&cli, difficulty, accepted, cli.mode, cli.animate)
        }
        None => run_interactive(&cli),
    }
}

/// One run of the acceptance loop against the built-in generator.
fn generate_puzzle(
    difficulty: Difficulty,
    seed: Option<u32>,
) -> Result<AcceptedPuzzle, AcceptError> {
    let mut rng = StdRng::from_entropy();
    generate_valid_puzzle(
        &mut BacktrackGenerator,
        difficulty,
        seed,
        &AcceptanceConfig::default(),
        &mut rng,
    )
}

fn run_interactive(cli: &Cli) -> io::Result<()> {
    loop {
        println!("\nPick a difficulty:");
        println!("1. Easy");
        println!("2. Medium");
        println!("3. Hard");
        println!("4. Quit");
        let answer = menu::prompt("Choice (1-4): ")?;
        let difficulty = match menu::parse_difficulty_choice(&answer) {
            Some(DifficultyChoice::Level(level)) => level,
            Some(DifficultyChoice::Quit) => return Ok(()),
            None => {
                println!("Unrecognized choice, try again.");
                continue;
            }
        };

        let seed = match cli.seed {
            Some(seed) => Some(seed),
            None => ask_seed()?,
        };

        'session: loop {
            let accepted = match generate_puzzle(difficulty, seed) {
                Ok(accepted) => accepted,
                Err(err) => {
                    // Exhaustion and manual-seed failures alike go back to
                    // the menus; the message tells them apart.
                    println!("{}", err);
                    break 'session;
                }
            };

            let mode = loop {
                println!("\nPick an algorithm:");
                println!("1. Backtracking (naive)");
                println!("2. Backtracking + MRV");
                println!("q. Back to difficulty");
                let answer = menu::prompt("Mode (1/2/q): ")?;
                match menu::parse_mode_choice(&answer) {
                    Some(ModeChoice::Mode(mode)) => break mode,
                    Some(ModeChoice::Back) => break 'session,
                    None => println!("Invalid mode, try again."),
                }
            };

            let animate = menu::parse_yes_no(&menu::prompt("Animate the solve? (y/n): ")?);
            run_solve(cli, difficulty, accepted, mode, animate)?;

            if !menu::parse_yes_no(&menu::prompt("\nPlay again? (y/n): ")?) {
                println!("Thanks for playing!");
                return Ok(());
            }
        }
    }
}

/// Random seed or a validated manual one.
fn ask_seed() -> io::Result<Option<u32>> {
    println!("\nSeed:");
    println!("1. Random");
    println!("2. Manual");
    if menu::prompt("Choice (1/2): ")? != "2" {
        return Ok(None);
    }
    loop {
        let raw = menu::prompt(&format!("Seed (0-{}): ", MAX_SEED))?;
        match menu::parse_seed_value(&raw) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => println!("{}", err),
        }
    }
}

/// Solve an accepted puzzle, show the result and log it.
fn run_solve(
    cli: &Cli,
    difficulty: Difficulty,
    accepted: AcceptedPuzzle,
    mode: SolveMode,
    animate: bool,
) -> io::Result<()> {
    let initial = accepted.grid;
    let color = render::supports_color();

    println!("\nSeed: {} (certified to have exactly one solution)", accepted.seed);
    println!("\nPuzzle:");
    print!("{}", render::format_board(&initial, None, &initial, color));

    let mut grid = accepted.grid;
    let solver = Solver::new();
    let outcome = if animate {
        let mut animator = animate::Animator::new(
            io::stdout(),
            initial,
            mode,
            Duration::from_millis(cli.delay_ms),
            color,
        );
        solver.solve_with(&mut grid, mode, Some(&mut animator))
    } else {
        solver.solve(&mut grid, mode)
    };

    if outcome.solved {
        println!("\nMode: {}", mode.label());
        println!("{}", "-".repeat(30));
        print!("{}", render::format_board(&grid, None, &initial, color));
        println!("\nSolved!");
        println!("Difficulty: {}", difficulty);
        println!("Steps: {}", outcome.steps);
        println!("Time: {:.2} s", outcome.duration.as_secs_f64());
        println!("Animation: {}", if animate { "on" } else { "off" });

        let record = SolveRecord::new(difficulty, mode, &outcome, accepted.seed, animate);
        if let Err(err) = logger::append_record(&cli.log_file, &record) {
            eprintln!("could not write {}: {}", cli.log_file.display(), err);
        }
    } else {
        println!("\nThis puzzle cannot be solved.");
    }
    Ok(())
}
