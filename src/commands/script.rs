//! Script subcommand handler
//!
//! Plays a text file through the terminal widget. When stdout is not a
//! terminal the same sequencer runs without the TUI and each line is printed
//! as it resolves.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use cyberquest::player::{Clock, MonotonicClock, Script, Sequencer};
use cyberquest::tui::{ScriptApp, TuiApp};
use cyberquest::Config;

/// Read script lines from `source`, or stdin when it is `-`.
pub fn read_lines(source: &Path) -> Result<Vec<String>> {
    let content = if source == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read script from stdin")?;
        buf
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("Failed to read script {}", source.display()))?
    };
    Ok(content.lines().map(str::to_string).collect())
}

/// Drive `sequencer` to completion without a TUI.
///
/// Resolved lines are written to `out`; `wait` is called with the time
/// until the next timer. At the prompt one line is read from `input`;
/// blank lines are rejected and read again. Returns false if `input` ran
/// out before the prompt was answered.
pub fn play_plain<C, W, R, F>(
    sequencer: &mut Sequencer<C>,
    out: &mut W,
    input: &mut R,
    mut wait: F,
) -> Result<bool>
where
    C: Clock,
    W: Write,
    R: BufRead,
    F: FnMut(Duration),
{
    let mut printed = 0;
    loop {
        sequencer.tick();
        for line in &sequencer.displayed()[printed..] {
            writeln!(out, "{}", line)?;
        }
        printed = sequencer.displayed().len();

        if sequencer.accepts_input() {
            write!(out, "> ")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                warn!("input closed before the prompt was answered");
                return Ok(false);
            }
            if sequencer.submit_text(line.trim_end_matches(['\r', '\n'])) {
                // The terminal already shows what was typed
                printed = sequencer.displayed().len();
            }
            continue;
        }
        if sequencer.is_finished() {
            return Ok(true);
        }
        match sequencer.time_until_next() {
            Some(delay) => wait(delay),
            None => return Ok(true),
        }
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, source: &Path, speed: Option<i64>, interactive: bool) -> Result<()> {
    let lines = read_lines(source)?;
    let speed = speed.unwrap_or(config.player.typing_speed_ms);
    info!(lines = lines.len(), speed, interactive, "playing script");
    let script = Script::new(lines).speed(speed).interactive(interactive);

    if atty::is(atty::Stream::Stdout) {
        let title = source.display().to_string();
        let mut app = ScriptApp::new(&config.player, script, title, config.ui.tick_rate())?;
        app.run()?;
        return Ok(());
    }

    let mut sequencer = Sequencer::new(MonotonicClock::new(), config.player.pacing());
    sequencer.play(script);
    let stdout = io::stdout();
    let stdin = io::stdin();
    play_plain(&mut sequencer, &mut stdout.lock(), &mut stdin.lock(), thread::sleep)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyberquest::player::{ManualClock, Pacing, Phase};
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn sequencer(lines: &[&str], interactive: bool) -> (ManualClock, Sequencer<ManualClock>) {
        let clock = ManualClock::new();
        let mut seq = Sequencer::new(clock.clone(), Pacing::default());
        seq.play(Script::new(lines.iter().copied()).speed(5).interactive(interactive));
        (clock, seq)
    }

    #[test]
    fn prints_non_blank_lines_in_order() {
        let (clock, mut seq) = sequencer(&["alpha", "", "beta"], false);
        let mut out = Vec::new();
        let done = play_plain(&mut seq, &mut out, &mut Cursor::new(""), |d| clock.advance(d)).unwrap();

        assert!(done);
        assert_eq!(String::from_utf8(out).unwrap(), "alpha\nbeta\n");
        assert_eq!(seq.phase(), Phase::Complete);
    }

    #[test]
    fn interactive_reads_until_non_blank_answer() {
        let (clock, mut seq) = sequencer(&["name?"], true);
        let mut out = Vec::new();
        let mut input = Cursor::new("   \nneo\n");
        let done = play_plain(&mut seq, &mut out, &mut input, |d| clock.advance(d)).unwrap();

        assert!(done);
        assert_eq!(String::from_utf8(out).unwrap(), "name?\n> > ");
        assert_eq!(seq.displayed(), ["name?", "> neo"]);
        assert!(seq.has_notified());
    }

    #[test]
    fn closed_input_leaves_prompt_open() {
        let (clock, mut seq) = sequencer(&["name?"], true);
        let mut out = Vec::new();
        let done = play_plain(&mut seq, &mut out, &mut Cursor::new(""), |d| clock.advance(d)).unwrap();

        assert!(!done);
        assert_eq!(seq.phase(), Phase::AwaitingInput);
    }

    #[test]
    fn reads_script_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "one\n\ntwo").unwrap();
        assert_eq!(read_lines(file.path()).unwrap(), ["one", "", "two"]);
    }

    #[test]
    fn missing_file_has_context() {
        let err = read_lines(Path::new("/nonexistent/script.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read script"));
    }
}
