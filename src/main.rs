use clap::Parser;
use rand::SeedableRng;
use simple_logger::SimpleLogger;

use turncube::prelude::*;

/// Plays a move sequence through the turn animator and prints the cube.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Moves to play, e.g. "R U R' U'"
    #[arg(short, long, conflicts_with = "scramble")]
    moves: Option<String>,

    /// Play a random 20-move scramble instead
    #[arg(short, long)]
    scramble: bool,

    /// Seed for the scramble
    #[arg(long)]
    seed: Option<u64>,

    /// Animation speed multiplier
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Print the solver request body for the final cube
    #[arg(long)]
    json: bool,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level: log::LevelFilter = args
        .log_level
        .parse()
        .map_err(|_| anyhow::anyhow!("Unrecognized log level {}", args.log_level))?;
    SimpleLogger::new().with_level(level).env().init()?;

    let config = AnimationConfig::default().with_speed(args.speed)?;
    let mut session = Session::new(config);

    let moves = if args.scramble {
        let mut rng = match args.seed {
            Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
            None => rand::rngs::StdRng::from_entropy(),
        };
        session.scramble(&mut rng)?
    } else {
        let moves = Move::parse_sequence(args.moves.as_deref().unwrap_or(""))?;
        session.load_sequence(moves.clone(), SessionMode::Playback)?;
        moves
    };
    println!("{}", Move::format_sequence(&moves));

    let mut ticks = 0u64;
    loop {
        if session.mode() == SessionMode::Playback && session.animator().is_idle() {
            if !session.step_forward()? {
                break;
            }
        }
        if session.mode() == SessionMode::Interactive && session.animator().is_idle() {
            break;
        }
        session.tick();
        ticks += 1;
    }
    log::info!(
        "Played {} moves in {} ticks ({:?})",
        moves.len(),
        ticks,
        config.tick_duration() * ticks as u32
    );

    print!("{}", session.cube());
    println!("solved: {}", session.cube().is_solved());

    if args.json {
        println!("{}", turncube::solver::json::encode_request(&session.cube().stickers())?);
    }

    Ok(())
}
