//! The Class Model: the translation unit's in-memory intermediate
//! representation (spec §3, §4.2). Built monotonically by the parser,
//! read-only during emission.

mod class;
mod expr;
mod member;
mod modifiers;

pub use class::{Class, ROOT_SUPERCLASS};
pub use expr::{BinOp, DeclaredVar, Expr, IdentifierChain, Literal, New, Segment, Stmt, UnaryOp};
pub use member::{Method, Variable, CONSTRUCTOR_NAME};
pub use modifiers::{ModifierFilter, Modifiers};
