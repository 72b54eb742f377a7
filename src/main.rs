#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use warships::{
    init_logging, random_board, ui, AiAgent, CliAgent, GameError, LineInput, Side,
    TurnController,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer (the default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Show the computer's ships during play")]
        reveal: bool,
    },
    /// Watch the computer play against itself.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play {
        seed: None,
        reveal: false,
    }) {
        Commands::Play { seed, reveal } => play(seed, reveal),
        Commands::Watch { seed } => watch(seed),
    }
}

#[cfg(feature = "std")]
fn play(seed: Option<u64>, reveal: bool) -> anyhow::Result<()> {
    println!("{}", ui::greeting());
    let mut rng = seeded_rng(seed);
    let player_board = random_board(&mut rng)?;
    let mut computer_board = random_board(&mut rng)?;
    computer_board.set_ships_visible(reveal);
    println!("Boards are ready.");

    let mut game = TurnController::new(
        CliAgent::new(LineInput::stdin()),
        player_board,
        AiAgent::new(),
        computer_board,
    );
    ui::print_boards(game.board(Side::First), game.board(Side::Second));

    while !game.is_over() {
        match game.play_turn(&mut rng) {
            Ok(turn) => {
                if turn.side == Side::Second {
                    ui::print_boards(game.board(Side::First), game.board(Side::Second));
                }
            }
            Err(GameError::InputClosed) => {
                println!("\nInput closed, leaving the game.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    }

    game.set_ships_visible(Side::Second, true);
    ui::print_boards(game.board(Side::First), game.board(Side::Second));
    announce(&game);
    Ok(())
}

#[cfg(feature = "std")]
fn watch(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = seeded_rng(seed);
    let first_board = random_board(&mut rng)?;
    let second_board = random_board(&mut rng)?;

    let mut game = TurnController::new(
        AiAgent::new().with_name("Computer 1"),
        first_board,
        AiAgent::new().with_name("Computer 2"),
        second_board,
    );
    while !game.is_over() {
        let turn = game.play_turn(&mut rng)?;
        let shooter = game.agent_name(turn.side);
        println!("{}", ui::describe_shot(shooter, turn.target, turn.result));
    }
    println!("\nComputer 1:");
    println!("{}", ui::format_view(&game.board(Side::First).render(true)));
    println!("\nComputer 2:");
    println!("{}", ui::format_view(&game.board(Side::Second).render(true)));
    announce(&game);
    Ok(())
}

#[cfg(feature = "std")]
fn announce<A: warships::Agent, B: warships::Agent>(game: &TurnController<A, B>) {
    if let Some(winner) = game.winner() {
        println!(
            "\nGame over! {} wins after {} shots.",
            game.agent_name(winner),
            game.shots(winner)
        );
    }
}
