use winnow::combinator::{opt, preceded};
use winnow::token::{any, take_while};
use winnow::{Parser, Result};

use super::parse_real::parse_real;

/// A single field of a command line: a letter and its numeric value.
///
/// For example, `C-0.5` is the word `Word { letter: 'C', value: -0.5 }`.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Word {
    /// Upper-case field letter.
    pub letter: char,
    /// Numeric value following the letter, or `0` if there was none.
    pub value: f32,
}
impl Word {
    /// Creates a new `Word`.
    pub fn new(letter: char, value: f32) -> Self {
        Self { letter, value }
    }

    /// Returns the integer part of the value, truncated toward zero.
    pub fn code(&self) -> i32 {
        self.value as i32
    }
}

/// Scans a command line into [Word]s.
///
/// The tokenizer accepts any letter; deciding what a letter means is left to
/// the command state. Line numbers (`N`) and program names (`O`) are consumed
/// and never produced. A `;` or `%` ends the scan for the rest of the line.
///
/// Every call to `next` consumes at least one character of the line, so
/// scanning always terminates, whatever the input.
#[derive(Debug, Clone)]
pub struct Tokenizer<'s> {
    input: &'s str,
}
impl<'s> Tokenizer<'s> {
    /// Creates a tokenizer over one command line.
    pub fn new(line: &'s str) -> Self {
        Self { input: line }
    }

    /// Returns the part of the line which has not been scanned yet.
    pub fn remaining(&self) -> &'s str {
        self.input
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        loop {
            let word = parse_word.parse_next(&mut self.input).ok()?;
            match word.letter {
                ';' | '%' => {
                    self.input = "";
                    return None;
                }
                'N' | 'O' => continue,
                _ => return Some(word),
            }
        }
    }
}

/// Parse one word, skipping any whitespace before it.
///
/// If the letter is not followed by a number, the value is zero and only the
/// letter is consumed.
fn parse_word<'s>(input: &mut &'s str) -> Result<Word> {
    skip_ws.parse_next(input)?;
    let letter = any
        .map(|c: char| c.to_ascii_uppercase())
        .parse_next(input)?;
    let value = opt(preceded(skip_ws, parse_real)).parse_next(input)?;
    Ok(Word::new(letter, value.unwrap_or(0.0)))
}

/// Skip whitespace when parsing.
fn skip_ws<'s>(input: &mut &'s str) -> Result<()> {
    take_while(0.., char::is_whitespace)
        .parse_next(input)
        .map(|_| ())
}
