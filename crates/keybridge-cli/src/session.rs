//! Drives a [`KeyboardInput`] from the line protocol in [`crate::command`].

use std::io::{BufRead, Write};

use keybridge_core::keymap::android::KEYCODE_UNKNOWN;
use keybridge_core::KeyboardInput;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::command::Command;
use crate::output::JsonLineSink;

/// Notice printed when the platform would have to handle an event itself.
#[derive(Debug, Serialize)]
struct Unhandled {
    unhandled: u16,
}

/// Counters reported when the input is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub lines: usize,
    pub rejected: usize,
    pub unhandled: usize,
}

/// A keyboard input bound to a JSON output stream.
pub struct Session<W: Write> {
    input: KeyboardInput<JsonLineSink<W>>,
    summary: SessionSummary,
}

impl<W: Write> Session<W> {
    /// Creates a session writing to `out`. An unknown `key_map` is logged and
    /// leaves the session inactive until a valid `:map` line arrives.
    pub fn new(out: W, key_map: &str, pretty: bool) -> Self {
        let mut input = KeyboardInput::new();
        input.set_sink(Some(JsonLineSink::new(out, pretty)));
        if let Err(e) = input.set_key_map(key_map) {
            warn!("starting without a character map: {e}");
        }
        Self {
            input,
            summary: SessionSummary::default(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    pub fn input(&self) -> &KeyboardInput<JsonLineSink<W>> {
        &self.input
    }

    /// Processes every line of `reader`.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error from reading input or writing actions.
    pub fn run<R: BufRead>(&mut self, reader: R) -> std::io::Result<SessionSummary> {
        for line in reader.lines() {
            let line = line?;
            self.handle_line(&line);
            if let Some(e) = self.input.sink_mut().and_then(JsonLineSink::take_error) {
                return Err(e);
            }
        }
        info!(
            lines = self.summary.lines,
            rejected = self.summary.rejected,
            unhandled = self.summary.unhandled,
            "input finished"
        );
        Ok(self.summary)
    }

    /// Releases keys still held when the input ended and returns how many.
    ///
    /// # Errors
    ///
    /// Returns the write error if the release actions could not be printed.
    pub fn finish(&mut self) -> std::io::Result<usize> {
        let released = self.input.release_held();
        if released > 0 {
            warn!(released, "input ended with keys held; released them");
        }
        match self.input.sink_mut().and_then(JsonLineSink::take_error) {
            Some(e) => Err(e),
            None => Ok(released),
        }
    }

    /// Processes a single protocol line.
    pub fn handle_line(&mut self, line: &str) {
        self.summary.lines += 1;
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                warn!(line, "ignoring line: {e}");
                self.summary.rejected += 1;
                return;
            }
        };
        debug!(?command, "command");

        match command {
            Command::KeyDown {
                key_code,
                character,
            } => {
                let unicode_char = character.map_or(0, u32::from);
                if !self.input.on_key_down(key_code, unicode_char) {
                    self.unhandled(key_code);
                }
            }
            Command::KeyUp { key_code } => {
                if !self.input.on_key_up(key_code, 0) {
                    self.unhandled(key_code);
                }
            }
            Command::Repeat { key_code, count } => {
                if !self.input.on_key_multiple(key_code, count, None) {
                    self.unhandled(key_code);
                }
            }
            Command::SetKeyMap(name) => {
                if let Err(e) = self.input.set_key_map(&name) {
                    warn!("{e}");
                    self.summary.rejected += 1;
                }
            }
            Command::Text(text) => match self.input.paste_text(&text) {
                Some(outcome) if !outcome.is_complete() => {
                    warn!(
                        skipped = outcome.unresolved.len(),
                        typed = outcome.reports_typed,
                        "text typed partially"
                    );
                }
                Some(_) => {}
                None => self.unhandled(KEYCODE_UNKNOWN),
            },
        }
    }

    fn unhandled(&mut self, key_code: u16) {
        self.summary.unhandled += 1;
        if let Some(sink) = self.input.sink_mut() {
            sink.emit(&Unhandled {
                unhandled: key_code,
            });
        }
    }

    /// Detaches the output, releasing held keys into it first.
    pub fn into_output(mut self) -> Option<W> {
        self.input.set_sink(None).map(JsonLineSink::into_inner)
    }
}
