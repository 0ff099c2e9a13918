//! Turns a line of user text into a command.

use thiserror::Error;

use clinic_core::{KeywordPredicate, SearchMode};

use crate::find::{Command, FindCommand};
use crate::messages::{
    FIND_COMMAND_ALIAS, FIND_COMMAND_WORD, FIND_USAGE, LIST_COMMAND_WORD, PREFIX_ID, PREFIX_NAME,
};

/// Parse errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid command format!\n{0}")]
    InvalidFormat(&'static str),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parse a full command line such as `find n/alice bob` or `f id/S872D`.
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let input = input.trim();
    let (word, args) = input
        .split_once(char::is_whitespace)
        .unwrap_or((input, ""));

    let command = match word {
        FIND_COMMAND_WORD | FIND_COMMAND_ALIAS => Command::Find(parse_find_args(args)?),
        LIST_COMMAND_WORD => Command::List,
        "" => return Err(ParseError::InvalidFormat(FIND_USAGE)),
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    tracing::debug!(?command, "parsed command");
    Ok(command)
}

/// Parse the arguments of a find command: exactly one prefix followed by at
/// least one keyword.
pub fn parse_find_args(args: &str) -> ParseResult<FindCommand> {
    let args = args.trim();
    let invalid = || ParseError::InvalidFormat(FIND_USAGE);

    let (mode, rest) = if let Some(rest) = args.strip_prefix(PREFIX_NAME) {
        (SearchMode::ByName, rest)
    } else if let Some(rest) = args.strip_prefix(PREFIX_ID) {
        (SearchMode::ById, rest)
    } else {
        return Err(invalid());
    };

    let keywords: Vec<String> = rest.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(invalid());
    }
    if keywords
        .iter()
        .any(|k| k.starts_with(PREFIX_NAME) || k.starts_with(PREFIX_ID))
    {
        return Err(invalid());
    }

    Ok(FindCommand::new(KeywordPredicate::new(mode, keywords)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_find_by_name() {
        let command = parse_command("find n/alice bob").unwrap();
        assert_eq!(
            command,
            Command::Find(FindCommand::new(KeywordPredicate::by_name(["alice", "bob"])))
        );
    }

    #[test]
    fn test_parse_alias_by_id() {
        let command = parse_command("  f id/S872D  ").unwrap();
        assert_eq!(
            command,
            Command::Find(FindCommand::new(KeywordPredicate::by_id(["S872D"])))
        );
    }

    #[test]
    fn test_keyword_order_does_not_matter() {
        assert_eq!(
            parse_command("find n/bob \t alice").unwrap(),
            parse_command("find n/alice bob").unwrap()
        );
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_command("list").unwrap(), Command::List);
    }

    #[test]
    fn test_invalid_find_arguments() {
        let invalid = Err(ParseError::InvalidFormat(FIND_USAGE));
        assert_eq!(parse_command("find"), invalid);
        assert_eq!(parse_command("find alice"), invalid);
        assert_eq!(parse_command("find n/"), invalid);
        assert_eq!(parse_command("find n/   "), invalid);
        assert_eq!(parse_command("find n/alice id/S872D"), invalid);
        assert_eq!(parse_command(""), invalid);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_command("search n/alice"),
            Err(ParseError::UnknownCommand("search".into()))
        );
    }
}
