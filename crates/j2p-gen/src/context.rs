use std::collections::HashSet;

use j2p_ir::Class;

/// Per-method emission state: the enclosing class (for member
/// resolution) and the locals set the identifier-rewriting rule
/// consults first (spec §4.4, §9).
pub(crate) struct EmitCtx<'a> {
    pub class: &'a Class,
    pub private: bool,
    pub locals: HashSet<String>,
}

impl<'a> EmitCtx<'a> {
    pub fn new(class: &'a Class, private: bool, locals: impl IntoIterator<Item = String>) -> Self {
        Self {
            class,
            private,
            locals: locals.into_iter().collect(),
        }
    }
}
