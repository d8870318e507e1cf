use std::fmt;
use std::str::FromStr;

use log::LevelFilter;

use super::CommandError;
use crate::board::Position;

/// Environment variable read by the log backend, in `env_logger` filter syntax
pub const LOG_ENV: &str = "CHECKERS_LOG";

/// How typed coordinates map onto engine `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Typed `row col` passes straight through
    #[default]
    RowCol,
    /// Typed coordinates are `col row` and get transposed
    ColRow,
}

impl Orientation {
    /// Translate between typed and engine coordinates. Both conventions are
    /// their own inverse, so the same call serves input and output.
    #[inline]
    #[must_use]
    pub const fn apply(self, position: Position) -> Position {
        match self {
            Orientation::RowCol => position,
            Orientation::ColRow => position.transposed(),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::RowCol => write!(f, "row-col"),
            Orientation::ColRow => write!(f, "col-row"),
        }
    }
}

impl FromStr for Orientation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "row-col" | "rowcol" | "normal" => Ok(Orientation::RowCol),
            "col-row" | "colrow" | "transposed" => Ok(Orientation::ColRow),
            _ => Err(()),
        }
    }
}

/// Console settings, from the command line or `set <name> <value>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleOptions {
    pub orientation: Orientation,
    pub show_board: bool,
    /// Level given with `--log` or `set log`; `None` defers to `CHECKERS_LOG`
    pub log_level: Option<LevelFilter>,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        ConsoleOptions {
            orientation: Orientation::RowCol,
            show_board: true,
            log_level: None,
        }
    }
}

impl ConsoleOptions {
    /// Parse command-line flags: `--transpose`, `--quiet`, `--log <level>`.
    pub fn from_args<I>(args: I) -> Result<Self, CommandError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = ConsoleOptions::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--transpose" => options.orientation = Orientation::ColRow,
                "--quiet" => options.show_board = false,
                "--log" => {
                    let value = args.next().ok_or(CommandError::MissingArgument {
                        command: "--log".to_string(),
                    })?;
                    options.apply("log", &value)?;
                }
                other => {
                    return Err(CommandError::UnknownOption {
                        name: other.to_string(),
                    })
                }
            }
        }
        Ok(options)
    }

    /// Apply a single named option.
    pub fn apply(&mut self, name: &str, value: &str) -> Result<(), CommandError> {
        let bad_value = || CommandError::BadValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "orientation" => {
                self.orientation = value.parse().map_err(|()| bad_value())?;
            }
            "board" | "show_board" => {
                self.show_board = match value.trim().to_ascii_lowercase().as_str() {
                    "on" | "true" | "1" => true,
                    "off" | "false" | "0" => false,
                    _ => return Err(bad_value()),
                };
            }
            "log" | "log_level" => {
                let level = LevelFilter::from_str(value.trim()).map_err(|_| bad_value())?;
                self.log_level = Some(level);
                log::set_max_level(level);
            }
            _ => {
                return Err(CommandError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Human-readable listing of the current settings
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "option orientation {} (row-col|col-row)\n\
             option board {}\n\
             option log {}\n",
            self.orientation,
            if self.show_board { "on" } else { "off" },
            self.log_level
                .map_or_else(|| "default".to_string(), |l| l.to_string().to_ascii_lowercase()),
        )
    }
}
