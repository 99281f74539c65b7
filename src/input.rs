//! Reading and generating sets of bases
//!
//! Text input holds one base per line as two integers separated by
//! whitespace and/or a comma. Blank lines and anything after `#` are ignored.
//!
//! ```text
//! # x, y
//! 0 0
//! 0, 3
//! 4 0
//! ```

use crate::mst::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading bases
#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
    #[error("expected {expected} bases, input ended after {found}")]
    Truncated { expected: usize, found: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parses bases from line-oriented text
pub fn read_bases<R: BufRead>(reader: R) -> Result<Vec<Point>, InputError> {
    let mut bases = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        bases.push(parse_point(content).map_err(|message| InputError::Malformed {
            line: index + 1,
            message,
        })?);
    }
    Ok(bases)
}

fn parse_point(text: &str) -> Result<Point, String> {
    let mut fields = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty());

    let mut coordinate = |axis: &str| -> Result<i32, String> {
        let field = fields
            .next()
            .ok_or_else(|| format!("missing {axis} coordinate"))?;
        field
            .parse()
            .map_err(|e| format!("invalid {axis} coordinate `{field}`: {e}"))
    };
    let x = coordinate("x")?;
    let y = coordinate("y")?;

    match fields.next() {
        Some(extra) => Err(format!("unexpected trailing field `{extra}`")),
        None => Ok(Point::new(x, y)),
    }
}

/// Prompts for a base count and then each coordinate, one value per line
///
/// Prompts go to `prompt`; answers are read from `answers`.
///
/// The count is not trusted for pre-allocation; a count larger than the
/// answers available ends in [`InputError::Truncated`].
pub fn prompt_bases<R: BufRead, W: Write>(
    answers: R,
    prompt: W,
) -> Result<Vec<Point>, InputError> {
    let mut session = Prompter {
        answers,
        prompt,
        line: 0,
    };

    let count: usize = session.ask("Enter the number of bases: ")?;
    let mut bases = Vec::new();
    for i in 1..=count {
        let truncated = |e: InputError| match e {
            InputError::Io(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                InputError::Truncated {
                    expected: count,
                    found: i - 1,
                }
            }
            e => e,
        };
        let x = session
            .ask(&format!("Enter x-coordinate for base {i}: "))
            .map_err(truncated)?;
        let y = session
            .ask(&format!("Enter y-coordinate for base {i}: "))
            .map_err(truncated)?;
        bases.push(Point::new(x, y));
    }
    Ok(bases)
}

struct Prompter<R, W> {
    answers: R,
    prompt: W,
    line: usize,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn ask<T>(&mut self, question: &str) -> Result<T, InputError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        write!(self.prompt, "{question}")?;
        self.prompt.flush()?;

        let mut answer = String::new();
        if self.answers.read_line(&mut answer)? == 0 {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        self.line += 1;

        let answer = answer.trim();
        answer.parse().map_err(|e| InputError::Malformed {
            line: self.line,
            message: format!("`{answer}` is not valid here: {e}"),
        })
    }
}

/// Generates `count` bases with both coordinates drawn from `-range..=range`
pub fn random_bases(count: usize, range: i32, seed: u64) -> Vec<Point> {
    let range = range.saturating_abs();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.random_range(-range..=range), rng.random_range(-range..=range)))
        .collect()
}
