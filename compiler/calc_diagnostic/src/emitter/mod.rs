//! Diagnostic emitters.
//!
//! - [`TerminalEmitter`]: one line per diagnostic on any `io::Write`
//!   (stderr for the CLI)
//! - [`BufferEmitter`]: keeps diagnostics for inspection (tests, embedding)
//! - [`SilentEmitter`]: discards everything

use std::io::{self, Write};

use crate::Diagnostic;

/// Sink for diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self) {}
}

impl<E: DiagnosticEmitter + ?Sized> DiagnosticEmitter for &mut E {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}

/// Writes rendered diagnostics to a writer.
pub struct TerminalEmitter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn new(writer: W) -> Self {
        TerminalEmitter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr() -> Self {
        TerminalEmitter::new(io::stderr())
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // A broken stderr is not itself reportable.
        let _ = writeln!(self.writer, "{diagnostic}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Collects diagnostics in memory.
#[derive(Default)]
pub struct BufferEmitter {
    diagnostics: Vec<Diagnostic>,
}

impl BufferEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, in order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Rendered diagnostics, one per line.
    pub fn rendered(&self) -> String {
        self.diagnostics
            .iter()
            .map(|d| format!("{d}\n"))
            .collect()
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl DiagnosticEmitter for BufferEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }
}

/// Discards all diagnostics.
#[derive(Copy, Clone, Debug, Default)]
pub struct SilentEmitter;

impl DiagnosticEmitter for SilentEmitter {
    fn emit(&mut self, _diagnostic: &Diagnostic) {}
}

#[cfg(test)]
mod tests;
