use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

/// Source of interactive answers.
pub trait Prompt {
    /// Show `message` and return the line the user entered.
    fn ask(&mut self, message: &str) -> Result<String>;
}

/// Terminal prompts backed by `inquire`.
#[derive(Debug, Default)]
pub struct InquirePrompt;

impl Prompt for InquirePrompt {
    fn ask(&mut self, message: &str) -> Result<String> {
        Ok(inquire::Text::new(message).prompt()?)
    }
}

/// Plain line-by-line prompts for piped or redirected input.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from standard input")?;
        if read == 0 {
            bail!("Input ended before answering '{}'", message.trim_end());
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}


#[cfg(test)]
pub mod scripted {
    use std::collections::VecDeque;

    use anyhow::{Result, anyhow};

    use super::Prompt;

    /// Replays canned answers and records every question asked.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompt {
        answers: VecDeque<String>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompt {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn ask(&mut self, message: &str) -> Result<String> {
            self.asked.push(message.to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| anyhow!("no scripted answer for '{message}'"))
        }
    }
}
