//! Line-oriented front end for headless use.
//!
//! Stands in for the graphical launcher: each input line is one UI action,
//! dispatched to the [`ConfigBridge`] exactly as a button press would be.
//!
//! ```text
//! > list
//! > add
//! > upsert {"id":"...","location":"/games/d2","instances":2}
//! > move 1 0
//! > delete <id>
//! > persist
//! > errors        (starts a background fetch; the result prints when ready)
//! > log           (prints the last published error log)
//! > version
//! > quit
//! ```

use std::io::{self, BufRead, Write};

use super::ui_bridge::ConfigBridge;

/// One parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Upsert(String),
    Delete(String),
    Move { from: usize, to: usize },
    Persist,
    Errors,
    Log,
    Version,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line.  Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a human-readable message for unknown commands or missing
    /// arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let cmd = match word {
            "list" | "ls" => Self::List,
            "add" => Self::Add,
            "upsert" if !rest.is_empty() => Self::Upsert(rest.to_string()),
            "upsert" => return Err("usage: upsert <json>".into()),
            "delete" | "rm" if !rest.is_empty() => Self::Delete(rest.to_string()),
            "delete" | "rm" => return Err("usage: delete <id>".into()),
            "move" => {
                let mut args = rest.split_whitespace().map(str::parse::<usize>);
                match (args.next(), args.next(), args.next()) {
                    (Some(Ok(from)), Some(Ok(to)), None) => Self::Move { from, to },
                    _ => return Err("usage: move <from> <to>".into()),
                }
            }
            "persist" | "save" => Self::Persist,
            "errors" => Self::Errors,
            "log" => Self::Log,
            "version" => Self::Version,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("unknown command: {other} (try `help`)")),
        };
        Ok(Some(cmd))
    }
}

const HELP: &str = "\
commands:
  list                      show games in display order
  add                       add a blank game
  upsert <json>             insert or update a game
  delete <id>               remove a game
  move <from> <to>          reorder and save
  persist                   save the current list
  errors                    fetch the last error log lines in the background
  log                       print the last fetched error log
  version                   print the launcher version
  quit                      exit";

/// Reads commands from `input` until EOF or `quit`, writing replies to
/// `output`.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `output`.
pub fn run<R: BufRead, W: Write>(
    bridge: &ConfigBridge,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let cmd = match Command::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(output, "{msg}")?;
                continue;
            }
        };

        match cmd {
            Command::List => {
                let games = bridge.games();
                if games.is_empty() {
                    writeln!(output, "no games")?;
                }
                for (i, g) in games.iter().enumerate() {
                    writeln!(
                        output,
                        "{i}: {} {} x{}{}{}",
                        g.id,
                        if g.location.is_empty() { "<unset>" } else { g.location.as_str() },
                        g.instances,
                        if g.maphack { " maphack" } else { "" },
                        if g.hd { " hd" } else { "" },
                    )?;
                }
            }
            Command::Add => {
                bridge.add_game();
                writeln!(output, "added")?;
            }
            Command::Upsert(body) => report(&mut output, bridge.upsert_game(&body))?,
            Command::Delete(id) => {
                bridge.delete_game(&id);
                writeln!(output, "deleted")?;
            }
            Command::Move { from, to } => report(&mut output, bridge.move_game(from, to))?,
            Command::Persist => report(&mut output, bridge.persist_game_model())?,
            Command::Errors => {
                // Completion is observed through the error log subscription.
                drop(bridge.get_error_log());
                writeln!(output, "fetching error log")?;
            }
            Command::Log => write!(output, "{}", bridge.error_log())?,
            Command::Version => writeln!(output, "{}", bridge.build_version())?,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => break,
        }
    }
    Ok(())
}

fn report<W: Write>(output: &mut W, ok: bool) -> io::Result<()> {
    writeln!(output, "{}", if ok { "ok" } else { "failed" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("list"), Ok(Some(Command::List)));
        assert_eq!(Command::parse("  add  "), Ok(Some(Command::Add)));
        assert_eq!(Command::parse("save"), Ok(Some(Command::Persist)));
        assert_eq!(Command::parse("exit"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse(""), Ok(None));
    }

    #[test]
    fn test_parse_upsert_keeps_json_body_intact() {
        let body = r#"{"id":"g1", "location":"/games/d 2"}"#;
        assert_eq!(
            Command::parse(&format!("upsert {body}")),
            Ok(Some(Command::Upsert(body.to_string())))
        );
    }

    #[test]
    fn test_parse_move_requires_two_indices() {
        assert_eq!(
            Command::parse("move 2 0"),
            Ok(Some(Command::Move { from: 2, to: 0 }))
        );
        assert!(Command::parse("move 2").is_err());
        assert!(Command::parse("move a b").is_err());
        assert!(Command::parse("move 1 2 3").is_err());
    }

    #[test]
    fn test_parse_missing_arguments_and_unknown_words() {
        assert!(Command::parse("delete").is_err());
        assert!(Command::parse("upsert").is_err());
        assert!(Command::parse("launch").unwrap_err().contains("unknown command"));
    }
}
