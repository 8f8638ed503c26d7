//! Flyweight: text formatting
//!
//! A flag per character versus a few shared formatting ranges.

use crate::config::PatternsConfig;
use crate::error::{PatternError, Result};
use std::fmt;
use std::io::Write;

/// One flag per character, whether or not anything is formatted.
pub struct FormattedText {
    plain_text: Vec<char>,
    capitalize: Vec<bool>,
}

impl FormattedText {
    pub fn new(plain_text: &str) -> Self {
        let plain_text: Vec<char> = plain_text.chars().collect();
        let capitalize = vec![false; plain_text.len()];
        Self {
            plain_text,
            capitalize,
        }
    }

    /// Capitalizes the inclusive character range `start..=end`.
    pub fn capitalize(&mut self, start: usize, end: usize) -> Result<()> {
        if start > end || end >= self.plain_text.len() {
            return Err(PatternError::invalid_argument(
                "end",
                format!("range {start}..={end} is outside the text"),
            ));
        }
        self.capitalize[start..=end].fill(true);
        Ok(())
    }
}

impl fmt::Display for FormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c, upper) in self.plain_text.iter().zip(&self.capitalize) {
            if *upper {
                write!(f, "{}", c.to_uppercase())?;
            } else {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
    pub capitalize: bool,
    pub bold: bool,
    pub italic: bool,
}

impl TextRange {
    pub fn covers(&self, position: usize) -> bool {
        (self.start..=self.end).contains(&position)
    }
}

/// Keeps only the ranges that carry formatting.
pub struct BetterFormattedText {
    plain_text: String,
    formatting: Vec<TextRange>,
}

impl BetterFormattedText {
    pub fn new(plain_text: &str) -> Self {
        Self {
            plain_text: plain_text.to_string(),
            formatting: Vec::new(),
        }
    }

    pub fn range(&mut self, start: usize, end: usize) -> &mut TextRange {
        self.formatting.push(TextRange {
            start,
            end,
            ..TextRange::default()
        });
        let last = self.formatting.len() - 1;
        &mut self.formatting[last]
    }

    pub fn range_count(&self) -> usize {
        self.formatting.len()
    }
}

impl fmt::Display for BetterFormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.plain_text.chars().enumerate() {
            let upper = self
                .formatting
                .iter()
                .any(|range| range.capitalize && range.covers(i));
            if upper {
                write!(f, "{}", c.to_uppercase())?;
            } else {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let text = "This is a brave new world";

    let mut ft = FormattedText::new(text);
    ft.capitalize(10, 15)?;
    writeln!(out, "{ft}")?;

    let mut bft = BetterFormattedText::new(text);
    bft.range(10, 15).capitalize = true;
    writeln!(out, "{bft}")?;
    Ok(())
}
