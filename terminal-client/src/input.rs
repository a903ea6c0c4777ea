use common::games::tictactoe::{BOARD_SIZE, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    Reset,
    Quit,
}

/// Parses `row col` (also `row,col`), `r`/`reset` and `q`/`quit`.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "r" | "reset" => return Ok(Command::Reset),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err(format!("Expected 'row col', got '{}'", line));
    };

    let row = parse_coordinate(row, "row")?;
    let col = parse_coordinate(col, "column")?;
    Ok(Command::Place(Position::new(row, col)))
}

fn parse_coordinate(value: &str, name: &str) -> Result<usize, String> {
    let index: usize = value
        .parse()
        .map_err(|_| format!("Invalid {} '{}'", name, value))?;
    if index >= BOARD_SIZE {
        return Err(format!(
            "{} {} is out of range, use 0 to {}",
            name,
            index,
            BOARD_SIZE - 1
        ));
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        assert_eq!(parse_command("1 2\n"), Ok(Command::Place(Position::new(1, 2))));
        assert_eq!(parse_command(" 0,0 "), Ok(Command::Place(Position::new(0, 0))));
        assert_eq!(parse_command("2, 1"), Ok(Command::Place(Position::new(2, 1))));
    }

    #[test]
    fn test_parse_control_commands() {
        assert_eq!(parse_command("Q"), Ok(Command::Quit));
        assert_eq!(parse_command("reset"), Ok(Command::Reset));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_command("").is_err());
        assert!(parse_command("1").is_err());
        assert!(parse_command("1 2 3").is_err());
        assert!(parse_command("a 1").unwrap_err().contains("Invalid row"));
        assert!(parse_command("1 3").unwrap_err().contains("out of range"));
    }
}
