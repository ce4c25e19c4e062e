//! Text console implementation of [`UserInterface`].

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::{UserInterface, NO_MATCHES_MESSAGE};
use crate::error::{Error, Result};

/// Line-oriented console over any reader and writer.
#[derive(Debug)]
pub struct ConsoleUserInterface<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleUserInterface<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleUserInterface<R, W> {
    /// Create a console reading from `reader` and writing to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console, returning its reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> UserInterface for ConsoleUserInterface<R, W> {
    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.writer, "1. Add contact.")?;
        writeln!(self.writer, "2. Search contacts.")?;
        writeln!(self.writer, "3. Exit.")?;
        Ok(())
    }

    fn get_user_input(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn display_contacts(&mut self, contacts: &[(String, String)]) -> Result<()> {
        if contacts.is_empty() {
            writeln!(self.writer, "{NO_MATCHES_MESSAGE}")?;
            return Ok(());
        }

        writeln!(self.writer, "Result:")?;
        for (name, phone_number) in contacts {
            writeln!(self.writer, "Name: {name}, Phone number: {phone_number}")?;
        }
        Ok(())
    }

    fn display_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }
}
