use std::io::{self, IsTerminal};

use crossterm::style::{StyledContent, Stylize};
use weather_core::{DisplayLine, LineStyle};

/// Turns output text into terminal strings, with or without ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colors only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn for_stdout() -> Self {
        Self::new(io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none())
    }

    pub fn line(&self, line: &DisplayLine) -> String {
        let text = line.text.as_str();
        match line.style {
            LineStyle::Heading => self.paint(text.red()),
            LineStyle::Value => self.paint(text.green()),
        }
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text.red().bold())
    }

    pub fn notice(&self, text: &str) -> String {
        self.paint(text.red())
    }

    pub fn banner(&self, text: &str) -> String {
        self.paint(text.white().bold())
    }

    pub fn plain(&self, text: &str) -> String {
        self.paint(text.white())
    }

    fn paint(&self, styled: StyledContent<&str>) -> String {
        if self.color {
            styled.to_string()
        } else {
            (*styled.content()).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading() -> DisplayLine {
        DisplayLine {
            text: "London, GB".to_string(),
            style: LineStyle::Heading,
        }
    }

    #[test]
    fn colored_output_wraps_text_in_escapes() {
        let out = Renderer::new(true).line(&heading());
        assert!(out.contains("London, GB"));
        assert!(out.contains('\u{1b}'));
    }

    #[test]
    fn plain_output_has_no_escapes() {
        let renderer = Renderer::new(false);
        assert_eq!(renderer.line(&heading()), "London, GB");
        assert_eq!(renderer.error("No info found"), "No info found");
        assert_eq!(renderer.banner("Hi"), "Hi");
    }
}
