//! Output formatting for query results

use crate::index::types::{IndexKind, QueryMatch};
use crate::search::IndexedDirectory;
use crate::utils::locate_line;
use std::collections::BTreeMap;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Terminal stream for stdout honouring the `color` flag
pub fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print each match as `path:offset:line`, highlighting the matched text
pub fn print_matches<W: WriteColor>(
    out: &mut W,
    directory: &IndexedDirectory,
    matches: &[QueryMatch],
    query_len: usize,
) -> io::Result<()> {
    for m in matches {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(out, "{}", m.path)?;
        out.reset()?;
        write!(out, ":")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", m.offset)?;
        out.reset()?;
        write!(out, ":")?;

        let located = directory
            .file(&m.path)
            .and_then(|f| f.text())
            .and_then(|text| locate_line(text, m.offset));

        match located {
            Some((line, column)) => print_highlighted(out, line, column, query_len)?,
            None => writeln!(out)?,
        }
    }
    Ok(())
}

/// Print `line` with `len` chars starting at char `column` highlighted
fn print_highlighted<W: WriteColor>(
    out: &mut W,
    line: &str,
    column: usize,
    len: usize,
) -> io::Result<()> {
    let byte_at = |chars: usize| {
        line.char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    };
    let start = byte_at(column);
    // A match may run past the end of its first line
    let end = byte_at(column + len);

    write!(out, "{}", &line[..start])?;
    if end > start {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", &line[start..end])?;
        out.reset()?;
    }
    writeln!(out, "{}", &line[end..])
}

/// Print matches as a JSON array
pub fn print_json<W: Write>(out: &mut W, matches: &[QueryMatch]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, matches)?;
    writeln!(out)
}

/// Print match count per file, sorted by path
pub fn print_match_counts<W: WriteColor>(out: &mut W, matches: &[QueryMatch]) -> io::Result<()> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for m in matches {
        *counts.entry(m.path.as_str()).or_insert(0) += 1;
    }

    for (path, count) in counts {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(out, "{}", path)?;
        out.reset()?;
        write!(out, ":")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "{}", count)?;
        out.reset()?;
    }
    Ok(())
}

/// Print a summary of how the directory was indexed
pub fn print_stats<W: Write>(out: &mut W, directory: &IndexedDirectory) -> io::Result<()> {
    let trees: Vec<_> = directory
        .files()
        .iter()
        .filter_map(|f| f.suffix_tree_index())
        .collect();
    let chars: usize = trees.iter().map(|t| t.len()).sum();
    let nodes: usize = trees.iter().map(|t| t.node_count()).sum();

    writeln!(out, "Files:          {}", directory.len())?;
    for kind in [IndexKind::SuffixTree, IndexKind::Naive, IndexKind::NotIndexed] {
        writeln!(
            out,
            "  {:<13} {}",
            format!("{}:", kind),
            directory.count_by_kind(kind)
        )?;
    }
    writeln!(out, "Tree chars:     {}", chars)?;
    writeln!(out, "Tree nodes:     {}", nodes)?;
    Ok(())
}
