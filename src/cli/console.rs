use std::io::{BufRead, Write};

use crate::errors::AppError;

/// Prompt/answer channel between the phonebook and the user.
///
/// Integer answers are read the way a terminal stream extracts a number: skip
/// blank space, take the next token, then throw the rest of that line away so
/// the next free-text read starts on a fresh line.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // OUTPUT FUNCTIONS
    pub fn say(&mut self, text: &str) -> Result<(), AppError> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    pub fn prompt(&mut self, text: &str) -> Result<(), AppError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    // INPUT FUNCTIONS
    pub fn ask(&mut self, text: &str) -> Result<String, AppError> {
        self.prompt(text)?;
        self.read_line()
    }

    /// Next line of input without its line terminator. Nothing else is trimmed.
    pub fn read_line(&mut self) -> Result<String, AppError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(AppError::EndOfInput);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Reads one integer token, then discards the remainder of its line.
    ///
    /// Tokens without a leading number (or that overflow `i64`) read as 0.
    pub fn read_int(&mut self) -> Result<i64, AppError> {
        self.skip_whitespace()?;
        let token = self.read_token()?;
        self.discard_line()?;
        Ok(parse_leading_int(&token))
    }

    /// Drops everything up to and including the next newline.
    pub fn discard_line(&mut self) -> Result<(), AppError> {
        let mut sink = Vec::new();
        self.input.read_until(b'\n', &mut sink)?;
        Ok(())
    }

    fn skip_whitespace(&mut self) -> Result<(), AppError> {
        loop {
            let (skipped, available) = {
                let buf = self.input.fill_buf()?;
                if buf.is_empty() {
                    return Err(AppError::EndOfInput);
                }
                let skipped = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
                (skipped, buf.len())
            };
            self.input.consume(skipped);

            if skipped < available {
                return Ok(());
            }
        }
    }

    // Stops in front of the delimiting whitespace so `discard_line` sees the newline.
    fn read_token(&mut self) -> Result<String, AppError> {
        let mut token = Vec::new();
        loop {
            let (taken, available) = {
                let buf = self.input.fill_buf()?;
                if buf.is_empty() {
                    break;
                }
                let taken = buf.iter().take_while(|b| !b.is_ascii_whitespace()).count();
                token.extend_from_slice(&buf[..taken]);
                (taken, buf.len())
            };
            self.input.consume(taken);

            if taken < available {
                break;
            }
        }
        Ok(String::from_utf8_lossy(&token).into_owned())
    }
}

fn parse_leading_int(token: &str) -> i64 {
    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits_end = token[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(token.len(), |i| i + sign_len);

    if digits_end == sign_len {
        return 0;
    }
    token[..digits_end].parse::<i64>().unwrap_or(0)
}
