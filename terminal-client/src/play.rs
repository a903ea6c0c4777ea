use std::io::{self, BufRead, Write};

use common::games::tictactoe::{GameController, OpponentKind};
use common::log;

use crate::input::{Command, parse_command};
use crate::render::{describe_outcome, render_board};

fn read_trimmed_line<R: BufRead>(input: &mut R) -> Result<Option<String>, String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<(), String> {
    write!(output, "{}", text)
        .and_then(|_| output.flush())
        .map_err(|e| format!("Failed to write prompt: {}", e))
}

pub fn ask_opponent_kind<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<OpponentKind, String> {
    prompt(output, "Choose your opponent (1 for Minimax, 2 for DLS, 3 for Alpha-Beta Pruning): ")?;
    let choice = read_trimmed_line(input)?.ok_or("No opponent chosen")?;
    choice.parse()
}

pub fn ask_search_depth<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<u32, String> {
    prompt(output, "What depth? ")?;
    let answer = read_trimmed_line(input)?.ok_or("No depth given")?;
    match answer.parse::<u32>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(format!("Invalid depth '{}', expected a positive number", answer)),
    }
}

fn show_board<W: Write>(game: &GameController, output: &mut W) -> io::Result<()> {
    let line = game.winning_line();
    writeln!(output, "{}", render_board(game.board(), line.as_ref()))?;
    if !game.is_running() {
        writeln!(output, "{}", describe_outcome(game.outcome(), line.as_ref()))?;
        writeln!(output, "Enter r for a new game or q to quit.")?;
    }
    Ok(())
}

/// Alternates human input and opponent moves until `q` or end of input.
pub fn run_game<R: BufRead, W: Write>(
    game: &mut GameController,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "Playing against {}. You are X.", game.engine_name())?;
    show_board(game, output)?;

    let mut line = String::new();
    loop {
        if game.is_running() && !game.is_human_turn() {
            match game.play_opponent_turn() {
                Ok(pos) => writeln!(output, "{} marks {}", game.engine_name(), pos)?,
                Err(e) => {
                    log!("Opponent failed to move: {}", e);
                    writeln!(output, "{}", e)?;
                    return Ok(());
                }
            }
            show_board(game, output)?;
            continue;
        }

        if game.is_running() {
            write!(output, "Your move (row col): ")?;
        } else {
            write!(output, "> ")?;
        }
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => return Ok(()),
            Command::Reset => {
                game.reset();
                log!("New game against {}", game.engine_name());
                show_board(game, output)?;
            }
            Command::Place(_) if !game.is_running() => {
                writeln!(output, "The game is over. Enter r for a new game or q to quit.")?;
            }
            Command::Place(pos) if !game.board().is_empty(pos.row, pos.col) => {
                writeln!(output, "Cell {} is already marked", pos)?;
            }
            Command::Place(pos) => match game.apply_human_move(pos.row, pos.col) {
                Ok(()) => show_board(game, output)?,
                Err(e) => writeln!(output, "{}", e)?,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use common::games::tictactoe::{GameOutcome, Mark, Minimax, Position};

    fn run_script(game: &mut GameController, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_game(game, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_ask_opponent_kind() {
        let mut output = Vec::new();
        let kind = ask_opponent_kind(&mut Cursor::new("3\n"), &mut output).unwrap();
        assert_eq!(kind, OpponentKind::AlphaBeta);
        assert!(String::from_utf8(output).unwrap().starts_with("Choose your opponent"));

        let err = ask_opponent_kind(&mut Cursor::new("7\n"), &mut Vec::new()).unwrap_err();
        assert!(err.contains("Invalid opponent choice"));
        assert!(ask_opponent_kind(&mut Cursor::new(""), &mut Vec::new()).is_err());
    }

    #[test]
    fn test_ask_search_depth() {
        assert_eq!(ask_search_depth(&mut Cursor::new("4\n"), &mut Vec::new()), Ok(4));
        assert!(ask_search_depth(&mut Cursor::new("0\n"), &mut Vec::new()).is_err());
        assert!(ask_search_depth(&mut Cursor::new("deep\n"), &mut Vec::new()).is_err());
    }

    #[test]
    fn test_scripted_game_ends_in_draw() {
        let mut game = GameController::new(Box::new(Minimax::default())).unwrap();
        let output = run_script(&mut game, "0 0\n0 1\n2 0\n1 2\n2 2\nq\n");
        assert_eq!(game.outcome(), GameOutcome::Draw);
        assert!(output.contains("AI_minimax marks (1, 1)"));
        assert!(output.contains("Draw"));
    }

    #[test]
    fn test_bad_and_repeated_moves_are_reported() {
        let mut game = GameController::new(Box::new(Minimax::default())).unwrap();
        let output = run_script(&mut game, "9 9\n0 0\n1 1\nhello\n");
        assert!(output.contains("out of range"));
        assert!(output.contains("Cell (1, 1) is already marked"));
        assert!(output.contains("Expected 'row col'"));
        assert_eq!(game.board().marked_count(), 2);
        assert_eq!(game.board().cell(Position::new(0, 0)), Mark::PlayerOne);
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut game = GameController::new(Box::new(Minimax::default())).unwrap();
        let output = run_script(&mut game, "0 0\n0 1\n2 0\n1 2\n2 2\n1 1\nr\n");
        assert!(output.contains("The game is over"));
        assert!(game.is_running());
        assert!(game.board().is_empty_board());
    }
}
