//! Shared primitives used across the translation pipeline: the diagnostic
//! sink and the identifier/number validators. Kept dependency-free of the
//! lexer, parser, and emitter crates so that all of them can depend on it
//! without a cycle.

pub mod diagnostic;
pub mod ident;

pub use diagnostic::{Diagnostic, Handler, Halt, Mode};
pub use ident::{is_datatype_keyword, is_keyword, validate_identifier, validate_number, DATATYPE_KEYWORDS};
