//! Line-oriented console front end.
//!
//! Stands in for a windowed UI: it turns typed coordinates into board
//! positions (applying the configured orientation), forwards them to the
//! engine as selections, and prints the board snapshot back.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{Board, Move, Position, PositionParseError};
use crate::engine::{Engine, GameStatus, MoveOutcome, SelectionEvent};

pub mod options;

pub use options::{ConsoleOptions, Orientation, LOG_ENV};

/// Error type for console command parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First word is not a known command
    UnknownCommand { command: String },
    /// Command needs more arguments
    MissingArgument { command: String },
    /// Coordinate text could not be parsed
    BadPosition(PositionParseError),
    /// Coordinate lies off the board
    OffBoard { position: Position },
    /// No option with this name
    UnknownOption { name: String },
    /// Option value not understood
    BadValue { name: String, value: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCommand { command } => {
                write!(f, "Unknown command '{command}' (try 'help')")
            }
            CommandError::MissingArgument { command } => {
                write!(f, "Missing argument for '{command}'")
            }
            CommandError::BadPosition(e) => write!(f, "{e}"),
            CommandError::OffBoard { position } => {
                write!(f, "Position {position} is off the board")
            }
            CommandError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            CommandError::BadValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for CommandError {}

impl From<PositionParseError> for CommandError {
    fn from(e: PositionParseError) -> Self {
        CommandError::BadPosition(e)
    }
}

const HELP: &str = "\
commands:
  <r> <c> | select <r> <c>   select a square (first = piece, second = destination)
  move <r>,<c> <r>,<c>       play a move directly
  board                      show the board
  moves                      list playable moves
  new                        start a new game
  set <name> <value>         change an option
  options                    list options
  help                       this text
  quit                       leave
";

/// What the caller should do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Text(String),
    Quit,
}

/// Console session: one engine plus display settings.
pub struct Console {
    engine: Engine,
    options: ConsoleOptions,
}

impl Console {
    #[must_use]
    pub fn new(options: ConsoleOptions) -> Self {
        Console {
            engine: Engine::new(),
            options,
        }
    }

    /// Start from a prepared engine, e.g. a puzzle position.
    #[must_use]
    pub fn with_engine(engine: Engine, options: ConsoleOptions) -> Self {
        Console { engine, options }
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn options(&self) -> &ConsoleOptions {
        &self.options
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", self.render())?;
        for line in input.lines() {
            let line = line?;
            match self.execute(&line) {
                Ok(Response::Quit) => break,
                Ok(Response::Text(text)) => {
                    if !text.is_empty() {
                        write!(output, "{text}")?;
                    }
                }
                Err(e) => writeln!(output, "error: {e}")?,
            }
            output.flush()?;
        }
        Ok(())
    }

    /// Run one command line.
    pub fn execute(&mut self, line: &str) -> Result<Response, CommandError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(Response::Text(String::new()));
        };

        match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" => Ok(Response::Quit),
            "help" => Ok(Response::Text(HELP.to_string())),
            "board" => Ok(Response::Text(self.render())),
            "moves" => Ok(Response::Text(self.list_moves())),
            "options" => Ok(Response::Text(self.options.describe())),
            "new" => {
                self.engine.new_game();
                Ok(Response::Text(self.render()))
            }
            "set" => {
                let (name, value) = match args {
                    [name, value, ..] => (*name, *value),
                    _ => {
                        return Err(CommandError::MissingArgument {
                            command: "set".to_string(),
                        })
                    }
                };
                self.options.apply(name, value)?;
                Ok(Response::Text(self.options.describe()))
            }
            "select" => {
                let position = self.parse_position(&args.join(" "), "select")?;
                Ok(Response::Text(self.select(position)))
            }
            "move" => {
                let (from, to) = match args {
                    [from, to] => (*from, *to),
                    _ => {
                        return Err(CommandError::MissingArgument {
                            command: "move".to_string(),
                        })
                    }
                };
                let mv = Move::new(
                    self.parse_position(from, "move")?,
                    self.parse_position(to, "move")?,
                );
                self.engine.clear_selection();
                let outcome = self.engine.attempt_move(mv);
                Ok(Response::Text(self.report_outcome(&outcome)))
            }
            _ if command.starts_with(|c: char| c.is_ascii_digit() || c == '(' || c == '-') => {
                let position = self.parse_position(line, "select")?;
                Ok(Response::Text(self.select(position)))
            }
            _ => Err(CommandError::UnknownCommand {
                command: command.to_string(),
            }),
        }
    }

    /// Parse typed coordinates into an in-bounds engine position.
    fn parse_position(&self, text: &str, command: &str) -> Result<Position, CommandError> {
        if text.trim().is_empty() {
            return Err(CommandError::MissingArgument {
                command: command.to_string(),
            });
        }
        let typed: Position = text.parse()?;
        let position = self.options.orientation.apply(typed);
        if !self.engine.board().is_in_bounds(position) {
            return Err(CommandError::OffBoard { position: typed });
        }
        Ok(position)
    }

    fn select(&mut self, position: Position) -> String {
        match self.engine.on_selection(position) {
            SelectionEvent::OutOfBounds(p) => format!("{} is off the board\n", self.shown(p)),
            SelectionEvent::IgnoredEmpty(p) => format!("{} is empty\n", self.shown(p)),
            SelectionEvent::SourceLatched(p) => format!("selected {}\n", self.shown(p)),
            SelectionEvent::Cancelled(p) => format!("deselected {}\n", self.shown(p)),
            SelectionEvent::Attempted(outcome) => self.report_outcome(&outcome),
        }
    }

    fn report_outcome(&self, outcome: &MoveOutcome) -> String {
        let mut text = match outcome {
            MoveOutcome::Executed { captured, promoted, continued_jump } => {
                let mut line = String::from("moved");
                if let Some(square) = captured {
                    line.push_str(&format!(", captured {}", self.shown(*square)));
                }
                if *promoted {
                    line.push_str(", crowned");
                }
                if *continued_jump {
                    line.push_str(", jump again");
                }
                line
            }
            MoveOutcome::Rejected { reason } => format!("illegal: {reason}"),
        };
        text.push('\n');
        if outcome.is_executed() && self.options.show_board {
            text.push_str(&self.render());
        }
        text
    }

    fn list_moves(&self) -> String {
        let moves = self.engine.playable_moves();
        let kind = if self.engine.jump_moves().is_empty() { "moves" } else { "jumps" };
        let mut text = format!("{} {kind}:", self.engine.side_to_move());
        for mv in moves {
            text.push_str(&format!(" {}->{}", self.shown(mv.source), self.shown(mv.destination)));
        }
        text.push('\n');
        text
    }

    /// Board snapshot in the configured orientation, plus whose turn it is.
    #[must_use]
    pub fn render(&self) -> String {
        let board = self.engine.board();
        let mut text = match self.options.orientation {
            Orientation::RowCol => board.to_string(),
            Orientation::ColRow => transposed(board).to_string(),
        };
        match self.engine.status() {
            GameStatus::InProgress => {
                text.push_str(&format!("{} to move", self.engine.side_to_move()));
                if let Some(square) = self.engine.chain_square() {
                    text.push_str(&format!(", continue jumping from {}", self.shown(square)));
                }
                text.push('\n');
            }
            GameStatus::Won(winner) => text.push_str(&format!("game over: {winner} wins\n")),
        }
        text
    }

    /// An engine position as the user types it
    fn shown(&self, position: Position) -> Position {
        self.options.orientation.apply(position)
    }
}

/// Mirror the board across its main diagonal for display.
fn transposed(board: &Board) -> Board {
    let mut out = Board::empty();
    for (r, row) in board.rows().iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            out.cells[c][r] = cell;
        }
    }
    out
}
