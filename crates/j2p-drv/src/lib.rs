//! The Driver (spec §4.6): the single public entry point,
//! `translate(source, options) -> Result<String, TranslateError>`, plus
//! the `Session` it builds internally. Grounded on `faxc-drv`'s
//! `Session::compile` — phases run in a fixed order, diagnostics
//! accumulate in a handler owned by the session, and the verbose/`--emit`
//! story is phase-boundary logging rather than a Config hanging off the
//! session forever.

use serde::Deserialize;
use thiserror::Error;

use j2p_ir::Class;
use j2p_util::diagnostic::{Handler, Halt, Mode};

/// The two recognized option keys (spec §6). `Default` matches spec
/// §6's documented defaults: `fatal = true`, `private = false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    pub fatal: bool,
    pub private: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fatal: true,
            private: false,
        }
    }
}

/// Either of the two ways a `Handler` can conclude a failed run (spec §7,
/// §4.6): the first fatal diagnostic, or every accumulated warning
/// concatenated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("{0}")]
    Fatal(String),

    #[error("{0}")]
    Warnings(String),
}

/// One `translate` call's bundle of state: the diagnostic sink, the
/// parsed classes, and the resolved options (spec §4.6). Not shared
/// across calls — a fresh `Session` is built for every `translate`.
pub struct Session {
    pub handler: Handler,
    pub classes: Vec<Class>,
    pub options: Options,
}

impl Session {
    fn mode(options: Options) -> Mode {
        if options.fatal {
            Mode::Fatal
        } else {
            Mode::Warning
        }
    }

    /// Run the parse phase, building `classes` from `source`. Emission is
    /// deferred to [`Session::emit`] so callers wanting `--emit ast`/
    /// `tokens` can stop here (spec §4.7).
    pub fn parse(source: &str, options: Options) -> Result<Self, TranslateError> {
        let handler = Handler::new(Self::mode(options));
        tracing::debug!(fatal = options.fatal, "parsing");

        let parsed = j2p_par::parse(source, &handler);
        let classes = match parsed {
            Ok(classes) => classes,
            Err(Halt) => {
                let message = handler
                    .first()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "parse halted with no recorded diagnostic".to_string());
                tracing::debug!(%message, "parse halted fatally");
                return Err(TranslateError::Fatal(message));
            }
        };

        if handler.has_diagnostics() && options.fatal {
            let message = handler.first().map(ToString::to_string).unwrap_or_default();
            return Err(TranslateError::Fatal(message));
        }

        tracing::trace!(classes = classes.len(), "parse complete");
        Ok(Self {
            handler,
            classes,
            options,
        })
    }

    /// Run the emit phase over the already-parsed classes, returning the
    /// accumulated warning payload as an error if any were recorded in
    /// warning mode (spec §7: syntactic/semantic diagnostics are fatal or
    /// warning per option, never silently dropped).
    pub fn emit(&self) -> Result<String, TranslateError> {
        tracing::trace!("emitting");
        let text = j2p_gen::emit(&self.classes, self.options.private);

        if self.handler.has_diagnostics() {
            return Err(TranslateError::Warnings(self.handler.render()));
        }
        Ok(text)
    }
}

/// Run the full pipeline once: parse `source` under `options`, then emit.
/// The excluded HTTP front end and this crate's own CLI both go through
/// this one function (spec §1, §6).
pub fn translate(source: &str, options: Options) -> Result<String, TranslateError> {
    let session = Session::parse(source, options)?;
    session.emit()
}
