use std::io::Cursor;

use rand::{rngs::SmallRng, SeedableRng};
use warships::{
    parse_coordinate, random_board, Agent, AiAgent, Board, CliAgent, Coordinate,
    CoordinateInput, GameError, LineInput, Orientation, Ship, Side, TurnController,
};

fn scripted(input: &str) -> LineInput<Cursor<Vec<u8>>, Vec<u8>> {
    LineInput::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_parse_coordinate() {
    assert_eq!(parse_coordinate("3 5"), Ok((3, 5)));
    assert_eq!(parse_coordinate(" 1,6 "), Ok((1, 6)));
    assert_eq!(parse_coordinate("-1 9"), Ok((-1, 9)));
    assert!(parse_coordinate("").is_err());
    assert!(parse_coordinate("3").is_err());
    assert!(parse_coordinate("a b").is_err());
    assert!(parse_coordinate("1 2 3").is_err());
}

#[test]
fn test_line_input_reprompts_on_garbage() {
    let mut input = scripted("hello\n4\n2 3\n");
    assert_eq!(input.read_coordinate().unwrap(), (2, 3));
    let out = String::from_utf8(input.into_output()).unwrap();
    assert_eq!(out.matches("Enter target x y: ").count(), 3);
    assert!(out.contains("Expected two numbers"));
}

#[test]
fn test_end_of_input_closes_agent() {
    let mut rng = SmallRng::seed_from_u64(1);
    let board = Board::new();
    let mut agent = CliAgent::new(scripted(""));
    assert_eq!(
        agent
            .choose_target(&mut rng, &board, &board.fog_view())
            .unwrap_err(),
        GameError::InputClosed
    );
}

#[test]
fn test_human_retries_bad_targets() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut enemy = Board::new();
    enemy
        .place_ship(Ship::new(1, Coordinate::new(2, 2), Orientation::Vertical))
        .unwrap();
    let own = random_board(&mut rng).unwrap();

    // off board, then a hit that sinks the only ship
    let human = CliAgent::new(scripted("7 7\n0 3\n2 2\n"));
    let mut game = TurnController::new(human, own, AiAgent::new(), enemy);
    assert_eq!(game.run(&mut rng).unwrap(), Side::First);
    assert_eq!(game.shots(Side::First), 1);

    let (human, _) = game.into_agents();
    let out = String::from_utf8(human.into_input().into_output()).unwrap();
    assert_eq!(out.matches("Target is off the board").count(), 2);
    assert!(out.contains("[You] shot at (2, 2): ship of length 1 sunk!"));
}
