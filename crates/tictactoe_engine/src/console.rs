//! Line-oriented console used by the game loop.

use crate::GameError;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Source of player answers and sink for game text.
pub trait Console {
    /// Reads one line of input without its line terminator.
    ///
    /// Returns [`GameError::InputClosed`] at end of input.
    fn read_line(&mut self) -> Result<String, GameError>;

    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<(), GameError>;
}

/// [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    /// Creates a console reading from `reader` and writing to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the writer, e.g. to inspect captured output.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the console and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    #[instrument(skip(self))]
    fn read_line(&mut self) -> Result<String, GameError> {
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("Reached end of input");
            return Err(GameError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn write_line(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_terminators() {
        let mut console = IoConsole::new(Cursor::new("one\ntwo\r\n three \n"), Vec::new());
        assert_eq!(console.read_line().unwrap(), "one");
        assert_eq!(console.read_line().unwrap(), "two");
        assert_eq!(console.read_line().unwrap(), " three ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut console = IoConsole::new(Cursor::new("y"), Vec::new());
        assert_eq!(console.read_line().unwrap(), "y");
        assert!(matches!(console.read_line(), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_write_line_appends_newline() {
        let mut console = IoConsole::new(Cursor::new(""), Vec::new());
        console.write_line("hello").unwrap();
        assert_eq!(console.into_writer(), b"hello\n");
    }
}
