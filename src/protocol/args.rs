//! Command-line arguments.
//!
//! ```text
//! kalah                                    prompt for depth and strategies
//! kalah -d <2|4> -1 <file> -2 <file>       read strategies from files
//! ```
//!
//! `--json` may be added to either form.

use std::path::PathBuf;

use thiserror::Error;

use super::strategy::{parse_depth, ConfigError};

/// Errors raised while reading the command line.
#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("option '{0}' needs a value")]
    MissingValue(String),

    #[error("no strategy file given for player {0}")]
    MissingStrategyFile(u8),

    #[error("no depth given, use -d 2 or -d 4")]
    MissingDepth,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    /// Ask for depth and strategies on the console.
    Interactive { json: bool },
    /// Read both strategies from files.
    Files {
        depth: i32,
        player1: PathBuf,
        player2: PathBuf,
        json: bool,
    },
}

/// Parses the arguments following the program name.
pub fn parse_args(args: &[String]) -> Result<Invocation, ArgsError> {
    let mut depth = None;
    let mut player1 = None;
    let mut player2 = None;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-d" | "-1" | "-2" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))?;
                match flag {
                    "-d" => depth = Some(parse_depth(value)?),
                    "-1" => player1 = Some(PathBuf::from(value)),
                    _ => player2 = Some(PathBuf::from(value)),
                }
            }
            "--json" => json = true,
            "--help" | "-h" => return Ok(Invocation::Help),
            other => return Err(ArgsError::UnknownOption(other.to_string())),
        }
        i += 1;
    }

    if depth.is_none() && player1.is_none() && player2.is_none() {
        return Ok(Invocation::Interactive { json });
    }
    Ok(Invocation::Files {
        depth: depth.ok_or(ArgsError::MissingDepth)?,
        player1: player1.ok_or(ArgsError::MissingStrategyFile(1))?,
        player2: player2.ok_or(ArgsError::MissingStrategyFile(2))?,
        json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_is_interactive() {
        assert_eq!(parse_args(&[]).unwrap(), Invocation::Interactive { json: false });
        assert_eq!(
            parse_args(&args(&["--json"])).unwrap(),
            Invocation::Interactive { json: true }
        );
    }

    #[test]
    fn full_file_invocation() {
        let parsed = parse_args(&args(&["-d", "4", "-1", "one.txt", "-2", "two.txt"])).unwrap();
        assert_eq!(
            parsed,
            Invocation::Files {
                depth: 4,
                player1: PathBuf::from("one.txt"),
                player2: PathBuf::from("two.txt"),
                json: false,
            }
        );
    }

    #[test]
    fn flags_in_any_order() {
        let parsed = parse_args(&args(&["-2", "b", "--json", "-1", "a", "-d", "2"])).unwrap();
        assert_eq!(
            parsed,
            Invocation::Files {
                depth: 2,
                player1: PathBuf::from("a"),
                player2: PathBuf::from("b"),
                json: true,
            }
        );
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse_args(&args(&["-d", "2", "-h"])).unwrap(), Invocation::Help);
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), Invocation::Help);
    }

    #[test]
    fn missing_pieces_are_reported() {
        assert!(matches!(
            parse_args(&args(&["-d", "2", "-1", "a"])),
            Err(ArgsError::MissingStrategyFile(2))
        ));
        assert!(matches!(
            parse_args(&args(&["-1", "a", "-2", "b"])),
            Err(ArgsError::MissingDepth)
        ));
        assert!(matches!(
            parse_args(&args(&["-d"])),
            Err(ArgsError::MissingValue(f)) if f == "-d"
        ));
    }

    #[test]
    fn bad_depth_and_options() {
        assert!(matches!(
            parse_args(&args(&["-d", "3", "-1", "a", "-2", "b"])),
            Err(ArgsError::Config(ConfigError::InvalidDepth(_)))
        ));
        assert!(matches!(
            parse_args(&args(&["--threads", "4"])),
            Err(ArgsError::UnknownOption(o)) if o == "--threads"
        ));
    }
}
