//! Line-at-a-time driver for interactive (or piped) input.

use std::io::BufRead;

use calc_diagnostic::DiagnosticEmitter;

use crate::{CalcError, Session};

/// Prompt shown before each statement.
const PROMPT: &str = "> ";
/// Prompt shown while a backslash continuation is open.
const CONTINUATION_PROMPT: &str = "c> ";

/// Read `input` line by line, running each complete line in `session`.
///
/// A line ending in a backslash continues on the next one; the joined text
/// is run as a single chunk. Prompts go to the session's output when
/// `prompt` is set.
pub fn run_repl<E, R>(session: &mut Session<E>, mut input: R, prompt: bool) -> Result<(), CalcError>
where
    E: DiagnosticEmitter,
    R: BufRead,
{
    let mut chunk = String::new();
    loop {
        if prompt {
            let text = if chunk.is_empty() { PROMPT } else { CONTINUATION_PROMPT };
            session.output().print(text);
        }

        let read = input.read_line(&mut chunk)?;
        if read == 0 {
            if !chunk.is_empty() {
                session.run_source(&chunk)?;
            }
            if prompt {
                session.output().println("");
            }
            return Ok(());
        }

        if !ends_with_continuation(&chunk) {
            session.run_source(&chunk)?;
            chunk.clear();
        }
    }
}

/// Whether `text` ends with `\`, optional blanks, then a newline.
fn ends_with_continuation(text: &str) -> bool {
    text.strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| line.trim_end_matches([' ', '\t']))
        .is_some_and(|line| line.ends_with('\\'))
}
