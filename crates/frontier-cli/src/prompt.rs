//! Line-oriented prompts for values not given on the command line.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result, bail};

/// Print `label`, read one line from `input` and parse it.
///
/// # Errors
///
/// Fails on end of input, I/O errors, or a value that does not parse.
pub fn read_value<T, R, W>(input: &mut R, out: &mut W, label: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| format!("Failed to read input for \"{}\"", label.trim()))?;
    if read == 0 {
        bail!("unexpected end of input at \"{}\"", label.trim());
    }

    let raw = line.trim();
    raw.parse::<T>()
        .map_err(|e| anyhow::anyhow!("invalid value {raw:?}: {e}"))
}
