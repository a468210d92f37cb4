//! Terminal collaborator
//!
//! Output lines on stdout are the delivery targets: each retrieved value is
//! written as its own line and advancing moves to the next line. Password IDs
//! are read with an interactive prompt when stdin is a terminal, otherwise
//! from the first line of stdin.

use credtool_core::{Collaborator, RetrievalError};
use dialoguer::Input;
use std::io::{BufRead, IsTerminal, Stdout, Write};

/// Target for the first value written
pub const FIRST_LINE: usize = 0;

pub struct TerminalCollaborator<W: Write> {
    out: W,
    line: usize,
}

impl TerminalCollaborator<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalCollaborator<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: FIRST_LINE,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn read_piped_line(mut reader: impl BufRead) -> Result<String, RetrievalError> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| RetrievalError::Delivery(format!("failed to read stdin: {e}")))?;
    if read == 0 {
        return Err(RetrievalError::Delivery(
            "no password ID given and stdin is empty".to_string(),
        ));
    }
    Ok(line)
}

impl<W: Write> Collaborator for TerminalCollaborator<W> {
    type Target = usize;

    fn read_line(&mut self, prompt: &str) -> Result<String, RetrievalError> {
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            return read_piped_line(stdin.lock());
        }
        Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| RetrievalError::Delivery(format!("failed to read password ID: {e}")))
    }

    fn deliver_text(&mut self, target: &usize, text: &str) -> Result<(), RetrievalError> {
        if *target != self.line {
            return Err(RetrievalError::Delivery(format!(
                "output line {target} is not the current line {}",
                self.line
            )));
        }
        writeln!(self.out, "{text}")
            .and_then(|()| self.out.flush())
            .map_err(|e| RetrievalError::Delivery(format!("failed to write output: {e}")))
    }

    fn advance_target(&mut self, target: &usize) -> Result<usize, RetrievalError> {
        self.line = target + 1;
        Ok(self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_one_value_per_line() {
        let mut terminal = TerminalCollaborator::new(Vec::new());
        terminal.deliver_text(&FIRST_LINE, "alice").unwrap();
        let next = terminal.advance_target(&FIRST_LINE).unwrap();
        terminal.deliver_text(&next, "tokenA").unwrap();
        let written = String::from_utf8(terminal.into_inner()).unwrap();
        assert_eq!(written, "alice\ntokenA\n");
    }

    #[test]
    fn rejects_delivery_to_stale_line() {
        let mut terminal = TerminalCollaborator::new(Vec::new());
        terminal.advance_target(&FIRST_LINE).unwrap();
        assert!(matches!(
            terminal.deliver_text(&FIRST_LINE, "late"),
            Err(RetrievalError::Delivery(_))
        ));
    }

    #[test]
    fn piped_line_is_read() {
        let line = read_piped_line("example.com\nignored\n".as_bytes()).unwrap();
        assert_eq!(line, "example.com\n");
    }

    #[test]
    fn empty_stdin_is_an_error() {
        assert!(read_piped_line("".as_bytes()).is_err());
    }
}
