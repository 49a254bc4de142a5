//! Interactive URL prompt.

use std::io::{self, BufRead, Write};

/// Prompt shown before reading the target URL.
pub const URL_PROMPT: &str = "Enter a website URL (e.g., google.com or https://google.com): ";

/// Prompts on `out` and reads one line from `input`.
///
/// The returned string is trimmed. End of input yields an empty string, which
/// the caller treats like an empty answer.
///
/// # Errors
///
/// Returns an I/O error if writing the prompt or reading the line fails.
pub fn read_url<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<String> {
    write!(out, "\n{URL_PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        log::debug!("End of input reached before a URL was entered");
    }
    Ok(line.trim().to_string())
}
