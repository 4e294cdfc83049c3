//! Prompt plumbing
//!
//! Every prompt reads exactly one whitespace-delimited token, so a line
//! holding several tokens feeds several prompts in turn.

use std::io::{self, BufRead, Write};

/// Literal token that cancels the surrounding flow at any prompt.
pub const CANCEL_TOKEN: &str = "exit";

/// Outcome of a single prompt read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    Token(String),
    /// The cancel sentinel was typed, or the input stream ended.
    Cancelled,
}

/// Print the prompt label, flush, and read the next token. End of input
/// reads as `Cancelled` so a closed stream unwinds like a typed `exit`.
pub fn read_token<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<PromptInput> {
    write!(output, "{}", label)?;
    output.flush()?;

    match next_token(input)? {
        None => Ok(PromptInput::Cancelled),
        Some(token) if token == CANCEL_TOKEN => Ok(PromptInput::Cancelled),
        Some(token) => Ok(PromptInput::Token(token)),
    }
}

/// Read the next whitespace-delimited token from the stream, skipping any
/// leading whitespace. Returns `None` at end of input.
pub fn next_token<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut token: Vec<u8> = Vec::new();

    loop {
        let available = input.fill_buf()?;
        if available.is_empty() {
            break;
        }

        let mut used = 0;
        let mut done = false;
        for &byte in available {
            if byte.is_ascii_whitespace() {
                used += 1;
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(byte);
                used += 1;
            }
        }

        input.consume(used);
        if done {
            break;
        }
    }

    if token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }
}
