//! Interactive line commands.
//!
//! A line starting with `:` is a command standing in for one of the window
//! buttons. An empty line recalculates the current field. Anything else is
//! typed into the field and submitted.

use crate::shell::ShellEvent;

/// What one line of interactive input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    /// Forward an event to the shell.
    Event(ShellEvent),
    /// Print the command list.
    Help,
    /// Leave the loop.
    Quit,
    /// A `:`-prefixed word that is not a command.
    Unknown(String),
}

pub const HELP_TEXT: &str = "\
Type a dose time (yyyy-MM-dd HH:mm) and press Enter to calculate.
Press Enter on an empty line to recalculate the current dose time.
  :now    set the dose time to the current time
  :calc   calculate % remaining for the current dose time
  :clear  clear the dose time
  :help   show this help
  :quit   exit (also :q or Ctrl-D)";

/// Parse one raw line read from the terminal.
///
/// Only the trailing line terminator is stripped; the rest of the line is
/// submitted verbatim so the strict timestamp parser sees exactly what was
/// typed.
pub fn parse_line(line: &str) -> LineCommand {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        return LineCommand::Event(ShellEvent::Calculate);
    }

    let Some(word) = line.strip_prefix(':') else {
        return LineCommand::Event(ShellEvent::Submit(line.to_string()));
    };

    match word.trim() {
        "now" => LineCommand::Event(ShellEvent::SetToNow),
        "calc" => LineCommand::Event(ShellEvent::Calculate),
        "clear" => LineCommand::Event(ShellEvent::Edit(String::new())),
        "help" | "h" | "?" => LineCommand::Help,
        "quit" | "q" | "exit" => LineCommand::Quit,
        other => LineCommand::Unknown(other.to_string()),
    }
}
