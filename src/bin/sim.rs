use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use warships::{random_board, AiAgent, Side, Turn, TurnController};

fn main() -> anyhow::Result<()> {
    warships::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let first_board = random_board(&mut rng)?;
    let second_board = random_board(&mut rng)?;
    let mut game = TurnController::new(
        AiAgent::new().with_name("player1"),
        first_board,
        AiAgent::new().with_name("player2"),
        second_board,
    );

    let mut turns: Vec<Turn> = Vec::new();
    while !game.is_over() {
        turns.push(game.play_turn(&mut rng)?);
    }

    let winner = game.winner().map(|side| game.agent_name(side).to_string());
    let sunk = |side: Side| game.board(side).sunk_lengths().collect::<Vec<_>>();
    let result = json!({
        "seed": seed,
        "player1": {"shots": game.shots(Side::First), "ships_lost": sunk(Side::First)},
        "player2": {"shots": game.shots(Side::Second), "ships_lost": sunk(Side::Second)},
        "winner": winner,
        "turns": turns,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
