//! The Emitter (spec §4.4): walks the Class Model read-only and emits *P*
//! source text. Takes no diagnostic sink — by the time classes reach here
//! the parse has already succeeded, and emission itself never fails.

mod class_emit;
mod context;
mod entrypoint;
mod expr_emit;
mod stmt_emit;

use j2p_ir::Class;

use class_emit::emit_class;
use entrypoint::emit_entrypoint;

/// Emit every top-level class, in declaration order, followed by the
/// synthesized entry-point block if any class declares `main`.
///
/// `private` mirrors `Options::private` (spec §6): when set, variables
/// whose source modifier was `private` are emitted with a leading
/// underscore, both at their declaration and at every reference.
pub fn emit(classes: &[Class], private: bool) -> String {
    let mut blocks: Vec<String> = classes
        .iter()
        .map(|c| emit_class(c, private, 0).join("\n"))
        .collect();

    let entrypoint = emit_entrypoint(classes);
    if !entrypoint.is_empty() {
        blocks.push(entrypoint.join("\n"));
    }

    let mut text = blocks.join("\n\n");
    text.push('\n');
    text
}
