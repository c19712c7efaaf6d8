//! Headless self-play
//!
//! Pits two computer players against each other and prints the result.

use chain_reaction::ai::{HeuristicPolicy, MovePolicy, RandomPolicy};
use chain_reaction::core::{Board, GameConfig, GameRng, Player, Position};
use chain_reaction::play::{Match, MatchConfig};
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    Heuristic,
    Random,
}

/// Chain-reaction self-play - AI vs AI on a rectangular board
#[derive(Parser, Debug)]
#[command(name = "self_play")]
struct Args {
    /// Board rows
    #[arg(long, default_value_t = 5)]
    rows: usize,

    /// Board columns
    #[arg(long, default_value_t = 5)]
    columns: usize,

    /// Random seed for side assignment and random policies
    #[arg(long)]
    seed: Option<u64>,

    /// Policy for the first seat (White unless sides are randomized)
    #[arg(long, value_enum, default_value_t = PolicyKind::Heuristic)]
    white: PolicyKind,

    /// Policy for the second seat
    #[arg(long, value_enum, default_value_t = PolicyKind::Random)]
    black: PolicyKind,

    /// Flip a coin for who plays White
    #[arg(long)]
    random_sides: bool,

    /// Turn cap before the match is abandoned
    #[arg(long, default_value_t = 1_000)]
    max_turns: u32,

    /// Waves resolved after the game is decided
    #[arg(long, default_value_t = 10)]
    ending_waves: usize,
}

fn build_policy(kind: PolicyKind, rng: &mut GameRng) -> Box<dyn MovePolicy> {
    match kind {
        PolicyKind::Heuristic => Box::new(HeuristicPolicy::default()),
        PolicyKind::Random => Box::new(RandomPolicy::from_rng(rng.fork())),
    }
}

fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..board.rows() {
        for col in 0..board.columns() {
            let pos = Position::new(row, col);
            let glyph = match board.owner(pos) {
                Some(Player::White) => 'W',
                Some(Player::Black) => 'B',
                None => '.',
            };
            out.push(glyph);
            out.push_str(&board.value(pos).to_string());
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chain_reaction=info")),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let config = MatchConfig::new(GameConfig::new(args.rows, args.columns))
        .with_max_turns(args.max_turns)
        .with_ending_waves(args.ending_waves)
        .with_random_sides(args.random_sides)
        .with_seed(seed);

    let mut rng = GameRng::new(seed);
    let first = build_policy(args.white, &mut rng);
    let second = build_policy(args.black, &mut rng);
    let mut runner = Match::new(config, first, second);

    match runner.run() {
        Ok(report) => {
            print!("{}", render(&report.final_board));
            println!(
                "White: {}  Black: {}  seed: {}",
                report.white, report.black, seed
            );
            match report.winner() {
                Some(player) => println!(
                    "{} ({}) wins after {} turns, {} waves",
                    player.name(),
                    report.winner_name().unwrap_or("?"),
                    report.turns,
                    report.waves
                ),
                None => println!("No winner ({:?}) after {} turns", report.end, report.turns),
            }
        }
        Err(err) => {
            tracing::error!("{}", err);
            std::process::exit(2);
        }
    }
}
