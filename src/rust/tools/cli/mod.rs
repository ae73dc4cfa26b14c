// Parent `tools` module controls `cli` gating; avoid duplicating crate-level cfg here.
mod commands;
pub mod io;
pub mod state;

use anyhow::Result;
use clap::{Parser, Subcommand};
use state::CliContext;

pub use commands::PracticeArgs;

#[derive(Parser, Debug)]
#[command(name = "practime")]
#[command(
    version,
    about = "⏱️ Practime – how long will that tempo ladder take?"
)]
pub struct Cli {
    /// Only print errors and requested output
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    /// Print debug output
    #[arg(short, long, global = true, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute exact and approximate practice time
    Calc(commands::calc::CalcCommand),
    /// List every tempo step with its time
    Schedule(commands::schedule::ScheduleCommand),
    /// Compare the approximation error across step sizes
    Sweep(commands::sweep::SweepCommand),
    /// Write a default practime.json
    Init(commands::init::InitCommand),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = CliContext::new();

    let logger = ctx.logger();
    logger.set_quiet(cli.quiet);
    logger.set_debug(cli.debug);

    match cli.command {
        Commands::Calc(command) => command.execute(&ctx)?,
        Commands::Schedule(command) => command.execute(&ctx)?,
        Commands::Sweep(command) => command.execute(&ctx)?,
        Commands::Init(command) => command.execute(&ctx)?,
    }
    Ok(())
}
