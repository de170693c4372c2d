//! Shell command parsing.

use std::fmt;
use thiserror::Error;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `GET key`
    Get {
        /// Key to look up.
        key: String,
    },
    /// `SET key value`
    Set {
        /// Key to write.
        key: String,
        /// Value to store.
        value: String,
    },
    /// `UNSET key`
    Unset {
        /// Key to remove.
        key: String,
    },
    /// `BEGIN`
    Begin,
    /// `COMMIT`
    Commit,
    /// `ROLLBACK`
    Rollback,
    /// `EXIT`
    Exit,
    /// A blank line.
    Empty,
}

/// Errors produced while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The first token is not a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A required argument is missing.
    #[error("{command} requires a {argument} argument")]
    MissingArgument {
        /// Command name.
        command: &'static str,
        /// Name of the missing argument.
        argument: &'static str,
    },
}

impl Command {
    /// Parses one input line.
    ///
    /// Tokens are separated by whitespace and command names are
    /// case-sensitive. Tokens beyond the ones a command needs are ignored.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(Command::Empty);
        };

        let mut arg = |command: &'static str, argument: &'static str| {
            tokens
                .next()
                .map(str::to_string)
                .ok_or(ParseError::MissingArgument { command, argument })
        };

        match verb {
            "GET" => Ok(Command::Get {
                key: arg("GET", "key")?,
            }),
            "SET" => {
                let key = arg("SET", "key")?;
                let value = arg("SET", "value")?;
                Ok(Command::Set { key, value })
            }
            "UNSET" => Ok(Command::Unset {
                key: arg("UNSET", "key")?,
            }),
            "BEGIN" => Ok(Command::Begin),
            "COMMIT" => Ok(Command::Commit),
            "ROLLBACK" => Ok(Command::Rollback),
            "EXIT" => Ok(Command::Exit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }

    /// Returns the command name as typed.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::Get { .. } => "GET",
            Command::Set { .. } => "SET",
            Command::Unset { .. } => "UNSET",
            Command::Begin => "BEGIN",
            Command::Commit => "COMMIT",
            Command::Rollback => "ROLLBACK",
            Command::Exit => "EXIT",
            Command::Empty => "",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Get { key } | Command::Unset { key } => write!(f, "{} {key}", self.name()),
            Command::Set { key, value } => write!(f, "SET {key} {value}"),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_get() {
        assert_eq!(
            Command::parse("GET a"),
            Ok(Command::Get {
                key: "a".to_string()
            })
        );
    }

    #[test]
    fn parse_set() {
        assert_eq!(
            Command::parse("SET a 10"),
            Ok(Command::Set {
                key: "a".to_string(),
                value: "10".to_string()
            })
        );
    }

    #[test]
    fn parse_unset() {
        assert_eq!(
            Command::parse("UNSET a"),
            Ok(Command::Unset {
                key: "a".to_string()
            })
        );
    }

    #[test]
    fn parse_bare_commands() {
        assert_eq!(Command::parse("BEGIN"), Ok(Command::Begin));
        assert_eq!(Command::parse("COMMIT"), Ok(Command::Commit));
        assert_eq!(Command::parse("ROLLBACK"), Ok(Command::Rollback));
        assert_eq!(Command::parse("EXIT"), Ok(Command::Exit));
    }

    #[test]
    fn parse_tolerates_extra_whitespace() {
        assert_eq!(
            Command::parse("  SET   a\t10  \n"),
            Ok(Command::Set {
                key: "a".to_string(),
                value: "10".to_string()
            })
        );
    }

    #[test]
    fn parse_ignores_trailing_tokens() {
        assert_eq!(Command::parse("BEGIN now"), Ok(Command::Begin));
        assert_eq!(
            Command::parse("SET a 1 2"),
            Ok(Command::Set {
                key: "a".to_string(),
                value: "1".to_string()
            })
        );
    }

    #[test]
    fn parse_blank_line() {
        assert_eq!(Command::parse(""), Ok(Command::Empty));
        assert_eq!(Command::parse("   \n"), Ok(Command::Empty));
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(
            Command::parse("get a"),
            Err(ParseError::UnknownCommand("get".to_string()))
        );
    }

    #[test]
    fn parse_missing_arguments() {
        assert_eq!(
            Command::parse("GET"),
            Err(ParseError::MissingArgument {
                command: "GET",
                argument: "key"
            })
        );
        assert_eq!(
            Command::parse("SET a"),
            Err(ParseError::MissingArgument {
                command: "SET",
                argument: "value"
            })
        );
    }

    #[test]
    fn display_matches_input_form() {
        let cmd = Command::parse("SET a 10").unwrap();
        assert_eq!(cmd.to_string(), "SET a 10");
        assert_eq!(Command::Rollback.to_string(), "ROLLBACK");
    }
}
