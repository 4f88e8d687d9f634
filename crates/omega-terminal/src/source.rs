//! Where command lines come from.
//!
//! The session blocks on [`CommandSource::next_line`] and nothing else.
//! `Ok(None)` means the input is exhausted.

use std::collections::VecDeque;
use std::io::{self, BufRead};

pub trait CommandSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from any buffered reader, normally locked stdin.
pub struct ConsoleSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ConsoleSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ConsoleSource<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> CommandSource for ConsoleSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Deterministic stand-in that replays queued lines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl CommandSource for ScriptedSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
