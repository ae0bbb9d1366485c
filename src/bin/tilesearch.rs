use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tilesearch::search::{
    scramble::random_walk, validate::validate, Board, HeuristicName, Solution, SolveError,
    Solver, SolverConfig, Verbosity,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Solve sliding-tile puzzles with A* search.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        global = true,
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(
        help = "Whether to use coloured output",
        short = 'c',
        long = "colour",
        global = true
    )]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board. Boards are given as N² tiles separated by commas,
    /// slashes or spaces, with 0 for the blank.
    Solve {
        #[arg(help = "The initial board, e.g. \"7,2,4,5,0,6,8,3,1\"")]
        initial: Board,
        #[arg(help = "The goal board, defaults to 1, 2, ..., N²-1 followed by the blank")]
        goal: Option<Board>,
        #[arg(
            value_enum,
            help = "The heuristic evaluator to use, overrides the config file",
            long = "heuristic",
            id = "HEURISTIC"
        )]
        heuristic_name: Option<HeuristicName>,
        #[arg(help = "A TOML solver configuration file", long = "config", id = "CONFIG")]
        config: Option<PathBuf>,
        #[arg(
            help = "Stop the search after this long, e.g. \"30s\"",
            long = "time-limit",
            id = "TIME_LIMIT",
            value_parser = humantime::parse_duration
        )]
        time_limit: Option<Duration>,
        #[arg(help = "Stop the search after this many expansions", long = "max-expansions")]
        max_expansions: Option<usize>,
        #[arg(
            help = "Stop the search once resident memory exceeds this many MiB",
            long = "memory-limit-mb"
        )]
        memory_limit_mb: Option<usize>,
        #[arg(help = "Skip the parity check before searching", long = "no-solvability-check")]
        no_solvability_check: bool,
        #[arg(help = "The output plan file", short = 'o', long = "output", id = "OUTPUT")]
        plan: Option<PathBuf>,
        #[arg(help = "Print the solution as JSON", long = "json")]
        json: bool,
    },
    /// Print a board reached by a random walk of the blank from the goal.
    Scramble {
        #[arg(help = "The side length of the board", long = "side", default_value_t = 3)]
        side: usize,
        #[arg(help = "The number of random moves", long = "moves", default_value_t = 30)]
        moves: usize,
        #[arg(help = "The random seed, random if omitted", long = "seed")]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match cli.command {
        Commands::Solve {
            initial,
            goal,
            heuristic_name,
            config,
            time_limit,
            max_expansions,
            memory_limit_mb,
            no_solvability_check,
            plan,
            json,
        } => {
            let mut solver_config = match config {
                Some(path) => match SolverConfig::from_path(&path) {
                    Ok(solver_config) => solver_config,
                    Err(e) => {
                        error!("{}", e);
                        return ExitCode::FAILURE;
                    }
                },
                None => SolverConfig::default(),
            };
            if let Some(heuristic_name) = heuristic_name {
                solver_config.heuristic = heuristic_name;
            }
            if time_limit.is_some() {
                solver_config.time_limit = time_limit;
            }
            if max_expansions.is_some() {
                solver_config.max_expansions = max_expansions;
            }
            if memory_limit_mb.is_some() {
                solver_config.memory_limit_mb = memory_limit_mb;
            }
            if no_solvability_check {
                solver_config.check_solvability = false;
            }

            let goal = match goal.map_or_else(|| Board::goal(initial.side()), Ok) {
                Ok(goal) => goal,
                Err(e) => {
                    error!("invalid goal state: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            solve(Solver::new(solver_config), initial, goal, plan, json)
        }
        Commands::Scramble { side, moves, seed } => {
            let goal = match Board::goal(side) {
                Ok(goal) => goal,
                Err(e) => {
                    error!("{}", e);
                    return ExitCode::FAILURE;
                }
            };
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let board = random_walk(&goal, moves, &mut rng);
            let tiles: Vec<String> = board.tiles().iter().map(ToString::to_string).collect();
            println!("{}", tiles.join(","));
            ExitCode::SUCCESS
        }
    }
}

fn solve(
    solver: Solver,
    initial: Board,
    goal: Board,
    plan_path: Option<PathBuf>,
    json: bool,
) -> ExitCode {
    let solution = match solver.solve_boards(initial.clone(), &goal) {
        Ok(solution) => solution,
        Err(e @ SolveError::Unsolvable) | Err(e @ SolveError::Exhausted(_)) => {
            info!("no plan found");
            println!("No plan found: {}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("validating plan");
    if let Err(e) = validate(&solution.plan, &initial, &goal) {
        error!("plan is invalid: {}", e);
        return ExitCode::FAILURE;
    }
    info!("plan is valid");

    if json {
        match serde_json::to_string_pretty(&solution) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("failed to serialise solution: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_solution(&solution);
    }

    if let Some(plan_path) = plan_path {
        if let Err(e) = std::fs::write(&plan_path, solution.plan.to_file_contents()) {
            error!("failed to write plan file {}: {}", plan_path.display(), e);
            return ExitCode::FAILURE;
        }
        info!(plan_file = %plan_path.display(), "plan written");
    }
    ExitCode::SUCCESS
}

fn print_solution(solution: &Solution) {
    println!("Final state:");
    println!("{}", solution.final_state);
    println!("Plan found:");
    if !solution.plan.is_empty() {
        println!("{}", solution.plan);
    }
    println!("Plan length: {}", solution.plan.len());
    println!("Elapsed time: {}", humantime::format_duration(solution.elapsed));
}
