//! Interactive query loop

use crate::search::IndexedDirectory;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::debug;

const PROMPT: &str =
    "\nWhat do you want to search for? Note that searches are case sensitive. Type 'quit' to quit.";

/// Typing this ends the session
pub const QUIT: &str = "quit";

/// Read queries from `input` until `quit` or end of input, printing every
/// matching line and a timing summary to `out`
pub fn run<R: BufRead, W: Write>(
    directory: &IndexedDirectory,
    mut input: R,
    mut out: W,
) -> Result<()> {
    while let Some(query) = read_query(&mut input, &mut out)? {
        let started = Instant::now();
        let matches = directory.query_case_sensitive(&query);
        let elapsed_ms = started.elapsed().as_millis();
        debug!(query = %query, matches = matches.len(), elapsed_ms = elapsed_ms as u64, "query");

        for m in &matches {
            let line = directory
                .line_for(m)
                .with_context(|| format!("Failed to read the line for {}", m))?;
            writeln!(out, "{}", line.trim())?;
        }
        writeln!(
            out,
            "Found {} matching lines in {}ms.",
            matches.len(),
            elapsed_ms
        )?;
    }
    Ok(())
}

/// Prompt until a non-blank line arrives. `None` means quit.
fn read_query<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<String>> {
    loop {
        writeln!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read query")? == 0 {
            return Ok(None);
        }

        let query = line.trim_end_matches(['\n', '\r']);
        if query.trim().is_empty() {
            continue;
        }
        if query == QUIT {
            return Ok(None);
        }
        return Ok(Some(query.to_string()));
    }
}
