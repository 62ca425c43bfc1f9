use anyhow::{anyhow, bail, Context};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use slidesolve::board::heuristic::MAX_MANHATTAN_WEIGHT;
use slidesolve::board::{format_board, parse_board, scramble_seeded, BoardState, Heuristic, Tiles};
use slidesolve::search::{run_search_with_progress, ParallelConfig, SearchConfig, SearchOutcome};

/// Exit code for a search that ended without reaching the goal.
const EXIT_NO_SOLUTION: u8 = 2;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "slidesolve")]
#[command(about = "slidesolve - 15-puzzle A* solver")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the cheapest move count that solves a board
    Solve {
        /// File with 16 tokens (1-15, '-' for the blank); stdin when omitted or '-'
        board: Option<PathBuf>,

        // --- Heuristic selection ---
        /// Heuristic ordering the frontier (manhattan, misplaced)
        #[arg(long, default_value = "manhattan")]
        heuristic: Heuristic,
        /// Scale the Manhattan estimate; weights above 1 trade optimality for speed
        #[arg(long, default_value = "1")]
        weight: u32,

        // --- Worker pool ---
        /// Number of worker threads (defaults to the number of CPUs)
        #[arg(long, short = 'j')]
        workers: Option<usize>,

        // --- Limits ---
        /// Give up after this many expansions
        #[arg(long)]
        max_expansions: Option<u64>,
        /// Timeout in seconds for the search
        #[arg(long)]
        timeout: Option<u64>,
        /// Search even when the parity test says the board cannot be solved
        #[arg(long)]
        no_solvability_check: bool,

        /// Print a progress line every N expansions per worker
        #[arg(long)]
        progress: Option<u64>,
    },
    /// Print a solvable board made by sliding randomly away from the goal
    Scramble {
        /// Number of random slides
        #[arg(long, default_value = "40")]
        moves: usize,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Report whether a board can reach the goal
    Check {
        /// File with 16 tokens; stdin when omitted or '-'
        board: Option<PathBuf>,
    },
}

/// Options for a solve run
struct SolveOptions {
    heuristic: Heuristic,
    workers: Option<usize>,
    max_expansions: Option<u64>,
    timeout: Option<Duration>,
    check_solvability: bool,
    progress: Option<u64>,
    verbose: bool,
}

// --- Input ---

fn read_board(path: Option<&Path>) -> anyhow::Result<Tiles> {
    let text = match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read board file {}", path.display()))?,
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read board from stdin")?;
            text
        }
    };
    let tiles = parse_board(&text).context("Invalid board")?;
    Ok(tiles)
}

fn select_heuristic(heuristic: Heuristic, weight: u32) -> anyhow::Result<Heuristic> {
    let selected = match (heuristic, weight) {
        (_, 0) => bail!("--weight must be at least 1"),
        (heuristic, 1) => heuristic,
        (Heuristic::Manhattan, w) => Heuristic::WeightedManhattan(w),
        (Heuristic::WeightedManhattan(base), w) => base
            .checked_mul(w)
            .map(Heuristic::WeightedManhattan)
            .ok_or_else(|| anyhow!("--weight {} overflows on top of {}", w, heuristic))?,
        (other, _) => bail!("--weight only applies to the manhattan heuristic, not {}", other),
    };

    if let Heuristic::WeightedManhattan(w) = selected {
        if w > MAX_MANHATTAN_WEIGHT {
            bail!(
                "--weight {} is too large (at most {})",
                w,
                MAX_MANHATTAN_WEIGHT
            );
        }
    }
    Ok(selected)
}

// --- Commands ---

fn solve(tiles: &Tiles, options: &SolveOptions) -> anyhow::Result<ExitCode> {
    let config = SearchConfig::default()
        .with_heuristic(options.heuristic)
        .with_max_expansions_option(options.max_expansions)
        .with_timeout_option(options.timeout)
        .with_solvability_check(options.check_solvability)
        .with_progress_interval(options.progress)
        .with_verbose(options.verbose);
    let parallel_config = ParallelConfig::default().with_workers_option(options.workers);

    log::info!(
        "solving with {} on {} worker(s)",
        config.heuristic,
        parallel_config.num_workers
    );

    let result = run_search_with_progress(tiles, &config, &parallel_config, |report| {
        eprintln!(
            "[worker {}] {} expanded, g = {}, h = {}",
            report.worker_id, report.expanded, report.path_cost, report.heuristic_cost
        );
    })
    .context("Search failed")?;

    if options.verbose {
        print!("{}", result);
    } else {
        match result.outcome {
            SearchOutcome::Solved {
                path_cost,
                proven_optimal,
            } => {
                println!("Found a solution!");
                println!("Total cost: {}", path_cost);
                if !proven_optimal {
                    println!("Search stopped before optimality was proven.");
                }
            }
            outcome => println!("No solution found ({}).", outcome),
        }
    }

    if result.outcome.is_solved() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_NO_SOLUTION))
    }
}

fn check(tiles: &Tiles) -> anyhow::Result<ExitCode> {
    let state = BoardState::new(*tiles, Heuristic::default())?;
    let (_, blank_row) = state.blank_position();

    println!("{}", state);
    println!("Inversions: {}", state.inversions());
    println!("Blank row: {}", blank_row);
    println!("Manhattan distance: {}", state.heuristic_cost());

    if state.is_solvable() {
        println!("Solvable");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("Unsolvable");
        Ok(ExitCode::from(EXIT_NO_SOLUTION))
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let verbose = args.verbose > 0;

    match args.command {
        Commands::Solve {
            board,
            heuristic,
            weight,
            workers,
            max_expansions,
            timeout,
            no_solvability_check,
            progress,
        } => {
            let options = SolveOptions {
                heuristic: select_heuristic(heuristic, weight)?,
                workers,
                max_expansions,
                timeout: timeout.map(Duration::from_secs),
                check_solvability: !no_solvability_check,
                progress,
                verbose,
            };
            let tiles = read_board(board.as_deref())?;
            solve(&tiles, &options)
        }
        Commands::Scramble { moves, seed } => {
            let tiles = scramble_seeded(moves, seed).context("Scramble failed")?;
            println!("{}", format_board(&tiles));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { board } => {
            let tiles = read_board(board.as_deref())?;
            check(&tiles)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
