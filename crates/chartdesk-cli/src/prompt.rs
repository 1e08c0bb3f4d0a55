//! Minimal stdin prompting for interactive confirmations.

use anyhow::Result;
use std::io::{self, Write};

/// Prints a prompt and reads one trimmed line from stdin.
pub fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
