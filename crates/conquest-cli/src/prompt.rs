//! Line-oriented prompting over any reader/writer pair.
//!
//! Every `ask_*` method returns `Ok(None)` once input is exhausted so the
//! caller can decide whether end of input means "quit" or "abort".

use std::io::{self, BufRead, Write};

/// Prompts on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output stream, for free-form display.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter and returns the output stream.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// Reads the first line with visible content, without leading
    /// whitespace. Blank lines are skipped silently.
    pub fn ask_text(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        while let Some(line) = self.read_line()? {
            let text = line.trim_start();
            if !text.is_empty() {
                return Ok(Some(text.to_owned()));
            }
        }
        Ok(None)
    }

    /// Reads the first whitespace-delimited token on a non-blank line.
    pub fn ask_token(&mut self, prompt: &str) -> io::Result<Option<String>> {
        Ok(self
            .ask_text(prompt)?
            .and_then(|text| text.split_whitespace().next().map(str::to_owned)))
    }

    /// Reads an integer, asking again until one is typed.
    pub fn ask_number(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(text) = self.ask_text(prompt)? else {
                return Ok(None);
            };
            let token = text.split_whitespace().next().unwrap_or_default();
            match token.parse() {
                Ok(number) => return Ok(Some(number)),
                Err(_) => writeln!(self.output, "Please type a whole number.")?,
            }
        }
    }

    /// Reads an integer no smaller than `min`, printing `complaint` after
    /// each rejected value.
    pub fn ask_at_least(
        &mut self,
        prompt: &str,
        min: i64,
        complaint: &str,
    ) -> io::Result<Option<i64>> {
        loop {
            match self.ask_number(prompt)? {
                Some(number) if number >= min => return Ok(Some(number)),
                Some(_) => writeln!(self.output, "{complaint}")?,
                None => return Ok(None),
            }
        }
    }
}
