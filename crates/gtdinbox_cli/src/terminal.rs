//! Standard-stream `Terminal` implementation.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use gtdinbox_core::Terminal;
use log::warn;
use std::io::{self, BufRead, IsTerminal, Stdin, Stdout, Write};

pub struct StdTerminal {
    stdin: Stdin,
    stdout: Stdout,
}

impl StdTerminal {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads one line, decoding invalid UTF-8 lossily.
///
/// Only end of input (or a failed read) yields `None`.
fn read_line_from(reader: &mut impl BufRead) -> Option<String> {
    let mut bytes = Vec::new();
    match reader.read_until(b'\n', &mut bytes) {
        Ok(0) => None,
        Ok(_) => {
            let line = String::from_utf8_lossy(&bytes);
            Some(line.trim_end_matches(['\r', '\n']).to_string())
        }
        Err(err) => {
            warn!("event=terminal_read module=cli status=error error={err}");
            None
        }
    }
}

impl Terminal for StdTerminal {
    fn read_line(&mut self) -> Option<String> {
        read_line_from(&mut self.stdin.lock())
    }

    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.stdout, "{line}");
    }

    fn clear(&mut self) {
        // Piped output gets no escape sequences.
        if !self.stdout.is_terminal() {
            return;
        }
        if let Err(err) = execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0)) {
            warn!("event=terminal_clear module=cli status=error error={err}");
        }
    }

    /// Prompts inline, like a shell `read -p`.
    fn prompt(&mut self, text: &str) -> Option<String> {
        if text.ends_with('?') {
            self.write_line(text);
        } else {
            let _ = write!(self.stdout, "{text}");
            let _ = self.stdout.flush();
        }
        self.read_line()
    }
}
