use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{anyhow, Result};
use common::create_rng;
use engine::{apply_human_move, Evaluator, GameResult, GameState, Player};
use log::{debug, info};
use minimax::{choose_computer_move, Policy};
use rand::Rng;
use serde::Serialize;

use super::render::{BoardView, LastMoves, Seats};

/// Who makes the first move of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstMover {
    Human,
    Computer,
    /// Decided by the seeded rng.
    CoinToss,
}

#[derive(Serialize)]
struct GameRecord<'a, A> {
    game: &'a str,
    human: Player,
    seed: Option<u64>,
    moves: &'a [A],
    result: GameResult,
}

/// Plays one game on the terminal. Returns `None` when the human quits.
pub fn play_game<B, E, I, O>(
    board: &B,
    evaluator: &E,
    policy: &Policy,
    first_mover: FirstMover,
    seed: Option<u64>,
    input: &mut I,
    output: &mut O,
) -> Result<Option<GameResult>>
where
    B: BoardView + Sync,
    B::State: Send + Sync,
    B::Action: Send + Sync + Display + FromStr + Serialize,
    <B::Action as FromStr>::Err: Display,
    E: Evaluator<State = B::State> + Sync,
    I: BufRead,
    O: Write,
{
    let mut rng = create_rng(seed);
    let human_starts = match first_mover {
        FirstMover::Human => true,
        FirstMover::Computer => false,
        FirstMover::CoinToss => rng.gen_bool(0.5),
    };
    let seats = Seats::new(if human_starts { Player::P1 } else { Player::P2 });

    info!(
        "Starting {} with the {} moving first",
        board.name(),
        if human_starts { "human" } else { "computer" }
    );

    let mut game_state = B::State::initial();
    let mut last_moves = LastMoves::default();
    let mut moves = vec![];

    writeln!(output, "{}", board.intro())?;
    writeln!(output, "{}", board.render(&game_state, &seats, &last_moves))?;

    loop {
        let result = board.terminal_state(&game_state);
        if result.is_over() {
            writeln!(output, "{}", result_message(result, &seats))?;

            let record = GameRecord {
                game: board.name(),
                human: seats.human,
                seed,
                moves: &moves,
                result,
            };
            info!("{}", serde_json::to_string(&record)?);

            return Ok(Some(result));
        }

        if seats.is_human(board.player_to_move(&game_state)) {
            let action = match read_human_move(board, &mut game_state, input, output)? {
                Some(action) => action,
                None => {
                    info!("Game abandoned after {} moves", moves.len());
                    return Ok(None);
                }
            };

            last_moves.human = Some(board.placed_cell(&game_state, &action));
            moves.push(action);
            writeln!(output)?;
        } else {
            writeln!(output, "Computer thinking...")?;

            let action =
                choose_computer_move(board, evaluator, &mut game_state, policy, &mut rng)
                    .ok_or_else(|| anyhow!("No move available for the computer"))?;
            board.apply(&mut game_state, &action)?;

            debug!("Computer played {}", action);
            writeln!(output, "Computer played {}", action)?;

            last_moves.computer = Some(board.placed_cell(&game_state, &action));
            moves.push(action);
        }

        writeln!(output, "{}", board.render(&game_state, &seats, &last_moves))?;
    }
}

/// Prompts until a legal move is entered and applies it. `None` on `q` or end of input.
fn read_human_move<B, I, O>(
    board: &B,
    game_state: &mut B::State,
    input: &mut I,
    output: &mut O,
) -> Result<Option<B::Action>>
where
    B: BoardView,
    B::Action: FromStr,
    <B::Action as FromStr>::Err: Display,
    I: BufRead,
    O: Write,
{
    loop {
        write!(output, "{}", board.prompt())?;
        output.flush()?;

        let mut buffer = String::new();
        if input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }

        let line = buffer.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        let action = match line.parse::<B::Action>() {
            Ok(action) => action,
            Err(err) => {
                writeln!(output, "Invalid move: {}", err)?;
                continue;
            }
        };

        match apply_human_move(board, game_state, &action) {
            Ok(_) => return Ok(Some(action)),
            Err(err) => writeln!(output, "Illegal move: {}", err)?,
        }
    }
}

fn result_message(result: GameResult, seats: &Seats) -> &'static str {
    match result {
        GameResult::Win(player) if seats.is_human(player) => "You won!",
        GameResult::Win(_) => "Computer won!",
        GameResult::Draw | GameResult::InProgress => "Tie!",
    }
}
