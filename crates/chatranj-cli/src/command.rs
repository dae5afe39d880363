//! Session command parsing.

use chatranj_core::{Move, Square};

use crate::error::CliError;

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `show` -- print the current board.
    Show,
    /// `new` -- reset to the starting position.
    New,
    /// `moves <rc>` -- list the destinations of the piece on a square.
    Moves(Square),
    /// `move <rrcc>` -- attempt a move for the side to play.
    Move(Move),
    /// `help` -- print command usage.
    Help,
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command (reported, then ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "show" => Ok(Command::Show),
        "new" => Ok(Command::New),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "moves" => {
            let arg = tokens
                .get(1)
                .ok_or(CliError::MissingArgument { command: "moves" })?;
            let square = Square::from_digits(arg).ok_or_else(|| CliError::InvalidSquare {
                value: (*arg).to_string(),
            })?;
            Ok(Command::Moves(square))
        }
        "move" => {
            let arg = tokens
                .get(1)
                .ok_or(CliError::MissingArgument { command: "move" })?;
            let mv = Move::from_digits(arg).ok_or_else(|| CliError::InvalidMove {
                value: (*arg).to_string(),
            })?;
            Ok(Command::Move(mv))
        }
        other => Ok(Command::Unknown(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use chatranj_core::{Move, Square};

    use super::{Command, parse_command};
    use crate::error::CliError;

    #[test]
    fn bare_commands() {
        assert_eq!(parse_command("show").unwrap(), Command::Show);
        assert_eq!(parse_command("new").unwrap(), Command::New);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn moves_with_square() {
        let cmd = parse_command("moves 64").unwrap();
        assert_eq!(cmd, Command::Moves(Square::at(6, 4).unwrap()));
    }

    #[test]
    fn move_with_coordinates() {
        let cmd = parse_command("move 6444").unwrap();
        assert_eq!(cmd, Command::Move(Move::from_digits("6444").unwrap()));
    }

    #[test]
    fn whitespace_tolerated() {
        assert_eq!(parse_command("  show  ").unwrap(), Command::Show);
        assert_eq!(
            parse_command("\tmoves\t01").unwrap(),
            Command::Moves(Square::at(0, 1).unwrap())
        );
    }

    #[test]
    fn missing_arguments() {
        assert!(matches!(
            parse_command("moves"),
            Err(CliError::MissingArgument { command: "moves" })
        ));
        assert!(matches!(
            parse_command("move"),
            Err(CliError::MissingArgument { command: "move" })
        ));
    }

    #[test]
    fn invalid_arguments() {
        assert!(matches!(
            parse_command("moves 99"),
            Err(CliError::InvalidSquare { .. })
        ));
        assert!(matches!(
            parse_command("move 9999"),
            Err(CliError::InvalidMove { .. })
        ));
        assert!(matches!(
            parse_command("move 64"),
            Err(CliError::InvalidMove { .. })
        ));
    }

    #[test]
    fn unknown_commands_pass_through() {
        assert_eq!(
            parse_command("castle").unwrap(),
            Command::Unknown("castle".to_string())
        );
        assert_eq!(parse_command("").unwrap(), Command::Unknown(String::new()));
    }
}
