//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Block between the create and delete steps until the operator is ready.
//! - Keep prompts off stdout so command output stays machine-readable.

use anyhow::Result;
use std::io::{BufRead, Write};

/// Prompt on stderr and block until a line (or end of input) arrives on stdin.
pub fn wait_for_enter(prompt: &str) -> Result<()> {
    let stdin = std::io::stdin();
    wait_for_line(&mut stdin.lock(), &mut std::io::stderr(), prompt)
}

fn wait_for_line(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<()> {
    write!(output, "{} ", prompt)?;
    output.flush()?;

    // EOF counts as Enter so piped runs do not hang.
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
