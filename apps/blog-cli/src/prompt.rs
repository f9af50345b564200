//! Line-oriented user input.

use std::io::{BufRead, Write};

use anyhow::{Context, anyhow};

/// Prompt the user for confirmation.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: bool,
) -> Result<bool, anyhow::Error> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    write!(output, "{question} {hint} ")?;
    output.flush()?;
    let answer = read_line(input)?;

    let r = match &*answer.trim().to_lowercase() {
        "y" | "yes" => true,
        "n" | "no" => false,
        "" => default,
        _ => false,
    };

    Ok(r)
}

/// Ask for a single line of free text; the trailing newline is dropped.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String, anyhow::Error> {
    write!(output, "{label}: ")?;
    output.flush()?;
    read_line(input)
}

/// Read one line, or `None` at end of input.
pub fn next_line<R: BufRead>(input: &mut R) -> Result<Option<String>, anyhow::Error> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Unable to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, anyhow::Error> {
    next_line(input)?.ok_or_else(|| anyhow!("No lines found from stdin"))
}
