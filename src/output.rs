//! Result rendering for the query surface.
//!
//! Results go to stdout; all diagnostics stay on stderr. Colors
//! auto-disable when stdout is not a terminal.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print the result list for `term`.
///
/// The trie makes no ordering promise, so paths are sorted here to
/// keep repeated runs identical.
pub fn print_results(term: &str, results: &[Arc<Path>]) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    if results.is_empty() {
        writeln!(stdout, "no results found for '{term}'")?;
        return Ok(());
    }

    let mut sorted: Vec<String> = results.iter().map(|p| p.display().to_string()).collect();
    sorted.sort();

    stdout.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(stdout, "found '{term}' in the following files:")?;
    stdout.reset()?;

    for path in sorted {
        write!(stdout, "- ")?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        writeln!(stdout, "{path}")?;
        stdout.reset()?;
    }

    Ok(())
}
