use std::io;
use std::io::{BufRead, Write};

use log::debug;

const DONE: &str = "done";

const BANNER: &str = "\
Write your logical expression, followed by its predicates.

\tFormatting examples:
Expression:\tP & ~(S ? Q)
Predicates:\tP
\t\tQ > ~P

And: &\t Or: ?\t Not: ~\t Iff: =\t If-Then: >
";

/// Asks for an expression, then for predicates until `done` or end of input.
///
/// Returns `None` when the input ends before an expression was given.
pub fn prompt<R, W>(input: R, out: &mut W) -> io::Result<Option<(String, Vec<String>)>>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    writeln!(out, "{BANNER}")?;
    write!(out, "Expression:\t")?;
    out.flush()?;
    let expression = match lines.next() {
        Some(line) => line?,
        None => return Ok(None),
    };
    debug!("expression = {expression:?}");

    writeln!(out, "Enter predicates (type '{DONE}' to finish):")?;
    let mut predicates = Vec::new();
    loop {
        write!(out, "P{}: ", predicates.len() + 1)?;
        out.flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.trim().eq_ignore_ascii_case(DONE) {
            break;
        }
        debug!("predicate = {line:?}");
        predicates.push(line);
    }
    writeln!(out)?;

    Ok(Some((expression, predicates)))
}
