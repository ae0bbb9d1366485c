use clap::Parser;
use std::{path::PathBuf, process::ExitCode};
use tilesearch::search::{validate::validate, Board, Plan};

#[derive(Parser)]
#[command(version)]
/// Check that a plan file turns the initial board into the goal.
struct Cli {
    #[arg(help = "The initial board, e.g. \"7,2,4,5,0,6,8,3,1\"")]
    initial: Board,
    #[arg(help = "The goal board")]
    goal: Board,
    #[arg(help = "The plan file to validate")]
    plan: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let plan = match Plan::from_path(&cli.plan) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    match validate(&plan, &cli.initial, &cli.goal) {
        Ok(()) => {
            println!("Plan is valid, length {}", plan.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Plan is invalid: {}", e);
            ExitCode::FAILURE
        }
    }
}
