use clap::{Parser, ValueEnum};
use log::info;
use minichess::agents::{EngineAgent, HumanAgent, RandomAgent};
use minichess::algorithms::DEFAULT_DEPTH;
use minichess::game::{Agent, Game};
use minichess::Variant;
use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Player {
    /// Moves typed on stdin, e.g. `d2d3`
    Human,
    /// Negamax search
    Engine,
    /// Random legal moves
    Random,
}

/// Play a chess variant on a small board against a negamax engine.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Board variant: 6 (6x6), 5 (5x5) or 4 (4x5)
    #[arg(short = 'n', long, default_value_t = 6)]
    variant: u8,

    /// Engine search depth in plies, at least 1
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_DEPTH,
        value_parser = clap::value_parser!(u8).range(1..)
    )]
    depth: u8,

    /// Who plays the uppercase pieces, which move first
    #[arg(long, value_enum, default_value_t = Player::Human)]
    white: Player,

    /// Who plays the lowercase pieces
    #[arg(long, value_enum, default_value_t = Player::Engine)]
    black: Player,

    /// Seed for random players
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many moves
    #[arg(long)]
    max_turns: Option<u32>,
}

fn make_agent(player: Player, args: &Args, seed: u64) -> Box<dyn Agent> {
    match player {
        Player::Human => Box::new(HumanAgent::new()),
        Player::Engine => Box::new(EngineAgent::new(args.depth)),
        Player::Random => Box::new(RandomAgent::new(seed)),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let variant = Variant::from_mode(args.variant)?;
    let white = make_agent(args.white, &args, args.seed);
    let black = make_agent(args.black, &args, args.seed.wrapping_add(1));
    info!("{} board, {:?} vs {:?}", variant, args.white, args.black);

    let outcome = Game::new(variant.setup(), white, black)
        .with_turn_limit(args.max_turns)
        .play()?;
    info!("{:?}", outcome);
    Ok(())
}
