//! Line input: a small raw-mode line editor for terminals and a plain
//! buffered reader for everything else.

use crate::error::{Result, ShellError};
use std::io::{self, BufRead, Write};
use termion::event::Key;
use termion::input::TermRead;
use termion::raw::IntoRawMode;
use tracing::trace;

/// What the editor wants the caller to do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    /// Keep reading keys.
    Pending,
    /// The user pressed enter; here is the line.
    Submit(String),
    /// Ctrl-C: drop the current line and prompt again.
    Cancel,
    /// Ctrl-D on an empty line: no more input.
    Eof,
}

/// Editing state for one line of interactive input.
#[derive(Debug, Default)]
pub struct LineEditor {
    buffer: String,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Applies one key press, echoing to `out` as a terminal would.
    ///
    /// `complete` maps the current buffer to candidate completions.
    pub fn handle_key<W, C>(&mut self, key: Key, complete: C, out: &mut W) -> Result<EditAction>
    where
        W: Write,
        C: FnOnce(&str) -> Vec<String>,
    {
        match key {
            Key::Ctrl('c') => {
                self.buffer.clear();
                write!(out, "\r\n")?;
                return Ok(EditAction::Cancel);
            }
            Key::Ctrl('d') => {
                if self.buffer.is_empty() {
                    return Ok(EditAction::Eof);
                }
            }
            Key::Char('\n') | Key::Char('\r') => {
                write!(out, "\r\n")?;
                return Ok(EditAction::Submit(std::mem::take(&mut self.buffer)));
            }
            Key::Char('\t') => {
                let candidates = complete(&self.buffer);
                trace!(prefix = %self.buffer, count = candidates.len(), "completion");
                if let [only] = candidates.as_slice()
                    && let Some(remainder) = only.strip_prefix(self.buffer.as_str())
                {
                    // Single match: complete it
                    let remainder = remainder.to_string();
                    write!(out, "{} ", remainder)?;
                    self.buffer.push_str(&remainder);
                    self.buffer.push(' ');
                } else {
                    write!(out, "\x07")?;
                }
                out.flush()?;
            }
            Key::Backspace => {
                if self.buffer.pop().is_some() {
                    // Move cursor back, erase char with space, move back again
                    write!(out, "\x08 \x08")?;
                    out.flush()?;
                }
            }
            Key::Char(c) => {
                self.buffer.push(c);
                write!(out, "{}", c)?;
                out.flush()?;
            }
            _ => {}
        }
        Ok(EditAction::Pending)
    }
}

/// Reads one line from the terminal in raw mode.
///
/// Returns `None` at end of input. A cancelled line comes back as an empty
/// string.
pub fn read_line_raw<C>(prompt: &str, complete: C) -> Result<Option<String>>
where
    C: Fn(&str) -> Vec<String>,
{
    print!("{}", prompt);
    io::stdout().flush()?;

    // Raw mode lasts only as long as this guard.
    let mut stdout = io::stdout().into_raw_mode()?;
    let mut editor = LineEditor::new();

    for key in io::stdin().keys() {
        let key = key.map_err(|e| ShellError::Input(e.to_string()))?;
        match editor.handle_key(key, &complete, &mut stdout)? {
            EditAction::Pending => {}
            EditAction::Submit(line) => return Ok(Some(line)),
            EditAction::Cancel => return Ok(Some(String::new())),
            EditAction::Eof => return Ok(None),
        }
    }
    Ok(None)
}

/// Reads one line from a non-interactive source, without its terminator.
pub fn read_line_buffered<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(crate::normalize::strip_line_terminator(&line).to_string()))
}
