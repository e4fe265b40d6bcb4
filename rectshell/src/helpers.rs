use crate::conf;
use anyhow::Result;
use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, Write},
};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Returned by every prompt once the input has been fully consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl Error for InputClosed {}

impl Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input stream has been closed")
    }
}

/// Line based terminal I/O over arbitrary reader and writer handles.
pub struct Console<R, W> {
    input: R,
    output: W,
    ui: conf::Ui,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, ui: conf::Ui) -> Self {
        Self { input, output, ui }
    }

    pub fn say<D: Display>(&mut self, msg: D) -> Result<()> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    /// Writes `msg` without a trailing line break and reads the answer.
    ///
    /// Asks again as long as the answer is not valid UTF-8.
    pub fn prompt(&mut self, msg: &str) -> Result<String> {
        let mut buf = Vec::new();
        loop {
            write!(self.output, "{msg}")?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(InputClosed.into());
            }

            match std::str::from_utf8(&buf) {
                Ok(line) => return Ok(line.trim().to_owned()),
                Err(_) => self.say("Illegal input! Input must be valid UTF-8.")?,
            }
        }
    }

    /// Prompts until the answer is an integer.
    pub fn prompt_int(&mut self, msg: &str) -> Result<i64> {
        loop {
            match self.prompt(msg)?.parse() {
                Ok(v) => return Ok(v),
                Err(_) => self.say("Illegal input! Input must be an integer.")?,
            }
        }
    }

    pub fn pause(&mut self) -> Result<()> {
        if !self.ui.pause {
            return Ok(());
        }

        self.prompt("Press enter to continue.")?;
        self.say("")
    }

    pub fn clear(&mut self) -> Result<()> {
        if self.ui.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
            self.output.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Cursor;

    pub(crate) fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        console_from_bytes(input.as_bytes())
    }

    fn console_from_bytes(input: &[u8]) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(
            Cursor::new(input.to_vec()),
            Vec::new(),
            conf::Ui {
                clear_screen: false,
                pause: false,
            },
        )
    }

    pub(crate) fn written<R>(console: &Console<R, Vec<u8>>) -> String {
        String::from_utf8_lossy(&console.output).into_owned()
    }

    #[test]
    fn test_prompt() {
        let mut c = console("  hello \nworld\n");
        assert_eq!(c.prompt("first: ").unwrap(), "hello");
        assert_eq!(c.prompt("second: ").unwrap(), "world");
        assert_eq!(written(&c), "first: second: ");

        let err = c.prompt("third: ").unwrap_err();
        assert!(err.is::<InputClosed>());
    }

    #[test]
    fn test_prompt_reprompts_invalid_utf8() {
        let mut c = console_from_bytes(b"\xff\xfe\nhello\n");
        assert_eq!(c.prompt("name: ").unwrap(), "hello");
        assert_eq!(
            written(&c),
            "name: Illegal input! Input must be valid UTF-8.\nname: "
        );
    }

    #[test]
    fn test_prompt_int_retries() {
        let mut c = console("abc\n4.5\n\n-12\n");
        assert_eq!(c.prompt_int("x: ").unwrap(), -12);
        assert_eq!(
            written(&c).matches("Illegal input! Input must be an integer.").count(),
            3
        );
    }

    #[test]
    fn test_pause_and_clear() {
        let mut c = console("");
        c.pause().unwrap();
        c.clear().unwrap();
        assert_eq!(written(&c), "");

        let mut c = Console::new(
            Cursor::new(b"\n".to_vec()),
            Vec::new(),
            conf::Ui {
                clear_screen: true,
                pause: true,
            },
        );
        c.pause().unwrap();
        c.clear().unwrap();
        assert_eq!(written(&c), format!("Press enter to continue.\n{CLEAR_SCREEN}"));
        assert!(c.pause().unwrap_err().is::<InputClosed>());
    }
}
