//! The Diagnostic Sink (spec §4.5, §7): a call-scoped collector of parse
//! and translation diagnostics operating in one of two modes.
//!
//! Fatal mode halts on the first diagnostic and hands it back to the
//! caller verbatim. Warning mode accumulates and keeps going, returning
//! the concatenated payload at the end if anything was recorded. Lexical
//! and end-of-input errors are always fatal, even under warning mode,
//! because the parser has no way to keep making progress once the token
//! stream is exhausted.

use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity is not modeled: every recorded event in this
/// translator is a single undifferentiated "something is wrong" entry,
/// since the source language never needs notes/help/multi-span output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Source line the offending token came from.
    pub line: usize,
    /// The offending line's tokens, rejoined with single spaces.
    pub text: String,
    /// Short message, e.g. `Unexpected TOK, expected EXPECT`.
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, text: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} (in: {})", self.line, self.message, self.text)
    }
}

/// The sink's operating discipline, chosen once per `translate` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Fatal,
    Warning,
}

/// Sentinel returned by [`Handler::report`] and [`Handler::report_fatal`]
/// when the sink has decided the current translation cannot continue.
/// Callers propagate it with `?`; it carries no data of its own because
/// the diagnostic that caused the halt is already recorded in the
/// handler and is retrieved via [`Handler::diagnostics`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Halt;

/// Collects diagnostics for a single translation. Not `Send`/`Sync`; one
/// is constructed per `translate` call and discarded on return (spec §5).
pub struct Handler {
    mode: Mode,
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Record a diagnostic whose fatality follows the handler's mode:
    /// `Err(Halt)` in fatal mode, `Ok(())` (keep parsing) in warning mode.
    pub fn report(
        &self,
        line: usize,
        text: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<(), Halt> {
        self.diagnostics
            .borrow_mut()
            .push(Diagnostic::new(line, text, message));
        match self.mode {
            Mode::Fatal => Err(Halt),
            Mode::Warning => Ok(()),
        }
    }

    /// Record a diagnostic that halts regardless of mode — lexical/EOF
    /// errors per spec §7, where there is no token stream left to recover
    /// with.
    pub fn report_fatal(
        &self,
        line: usize,
        text: impl Into<String>,
        message: impl Into<String>,
    ) -> Halt {
        self.diagnostics
            .borrow_mut()
            .push(Diagnostic::new(line, text, message));
        Halt
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// The first recorded diagnostic, if any — what fatal mode returns.
    pub fn first(&self) -> Option<Diagnostic> {
        self.diagnostics.borrow().first().cloned()
    }

    /// Every recorded diagnostic concatenated into one human-readable
    /// payload — what warning mode returns when diagnostics accumulated.
    pub fn render(&self) -> String {
        self.diagnostics
            .borrow()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
