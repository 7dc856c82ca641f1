//! Line-oriented interactive session over any reader and writers.
//!
//! Result lines with [`Tone::Error`] go to `err`, everything else to `out`.

use std::io::{self, BufRead, Write};

use dose_core::constants::{DISCLAIMER, TIMESTAMP_PATTERN};
use dose_core::traits::{Clock, DecayCalculator, PreferenceStore};

use crate::command::{parse_line, LineCommand, HELP_TEXT};
use crate::readout::{Readout, Tone};
use crate::shell::{Shell, ShellEvent};

/// Print the banner shown when a session starts.
pub fn write_banner<C, S, K>(shell: &Shell<C, S, K>, out: &mut impl Write) -> io::Result<()>
where
    C: DecayCalculator,
    S: PreferenceStore,
    K: Clock,
{
    writeln!(out, "{}", shell.half_life_label())?;
    writeln!(out, "{DISCLAIMER}")?;
    writeln!(out, "Type :help for commands.")
}

/// Write a result line to the stream matching its tone.
pub fn write_readout(
    readout: &Readout,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match readout.tone {
        Tone::Error => writeln!(err, "{readout}"),
        Tone::Prompt | Tone::Result => writeln!(out, "{readout}"),
    }
}

/// Run until `:quit` or end of input.
pub fn run_session<C, S, K>(
    shell: &mut Shell<C, S, K>,
    mut input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()>
where
    C: DecayCalculator,
    S: PreferenceStore,
    K: Clock,
{
    write_banner(shell, out)?;

    let mut line = String::new();
    loop {
        write!(out, "Last dose ({TIMESTAMP_PATTERN}) [{}]: ", shell.input())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match parse_line(&line) {
            LineCommand::Event(event @ (ShellEvent::Edit(_) | ShellEvent::SetToNow)) => {
                shell.handle(event);
                writeln!(out, "Dose time: {}", shell.input())?;
            }
            LineCommand::Event(event) => {
                let readout = shell.handle(event);
                write_readout(readout, out, err)?;
            }
            LineCommand::Help => writeln!(out, "{HELP_TEXT}")?,
            LineCommand::Quit => return Ok(()),
            LineCommand::Unknown(word) => {
                writeln!(err, "Unknown command :{word} (type :help)")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::store::MemoryPreferenceStore;
    use dose_core::types::DoseTime;
    use dose_decay::HalfLifeEngine;
    use std::io::Cursor;

    fn run(script: &str) -> (String, String, usize) {
        let now = DoseTime::parse("2024-05-10 09:15").unwrap();
        let mut shell = Shell::new(
            HalfLifeEngine::new(),
            MemoryPreferenceStore::new(),
            FixedClock(now),
        );
        let mut out = Vec::new();
        let mut err = Vec::new();
        run_session(&mut shell, Cursor::new(script), &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            shell.store().write_count(),
        )
    }

    #[test]
    fn banner_and_eof() {
        let (out, err, writes) = run("");
        assert!(out.starts_with("Using Vortioxetine half-life: 66.0 hours.\n"));
        assert!(out.contains("NOT medical advice"));
        assert!(err.is_empty());
        assert_eq!(writes, 0);
    }

    #[test]
    fn submit_valid_time() {
        let (out, _, writes) = run("2024-05-07 15:15\n:quit\n");
        assert!(out.contains("Result: 50.00 % remaining.\n"), "{out}");
        assert_eq!(writes, 1);
    }

    #[test]
    fn invalid_goes_to_err() {
        let (out, err, writes) = run("not-a-date\n");
        assert!(err.contains("Result: Invalid date/time format. Use yyyy-MM-dd HH:mm"));
        assert!(!out.contains("Invalid"));
        assert_eq!(writes, 0);
    }

    #[test]
    fn now_then_enter() {
        let (out, _, _) = run(":now\n\n");
        assert!(out.contains("Dose time: 2024-05-10 09:15\n"));
        assert!(out.contains("Result: 100.00 % remaining.\n"));
        assert!(out.contains("[2024-05-10 09:15]: "));
    }

    #[test]
    fn clear_then_calc_prompts() {
        let (out, _, _) = run(":now\n:clear\n:calc\n");
        assert!(out.contains("Result: Please enter dose time.\n"));
    }

    #[test]
    fn quit_stops_reading() {
        let (out, _, writes) = run(":q\n2024-05-07 15:15\n");
        assert!(!out.contains("Result:"));
        assert_eq!(writes, 0);
    }

    #[test]
    fn help_and_unknown() {
        let (out, err, _) = run(":help\n:frobnicate\n");
        assert!(out.contains(":now"));
        assert!(err.contains("Unknown command :frobnicate"));
    }
}
