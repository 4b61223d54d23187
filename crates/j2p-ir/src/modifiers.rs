/// Access/storage modifiers for a variable or method (spec §3). `static`
/// is spelled `is_static` here since `static` is a Rust keyword.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub public: bool,
    pub is_static: bool,
}

impl Modifiers {
    pub const fn new(public: bool, is_static: bool) -> Self {
        Self { public, is_static }
    }
}

/// Narrows a `get`/`get_all` query to entities whose modifiers match
/// every field given (spec §4.2: "entities whose modifiers do not match
/// every provided key/value are hidden").
#[derive(Clone, Copy, Debug, Default)]
pub struct ModifierFilter {
    pub public: Option<bool>,
    pub is_static: Option<bool>,
}

impl ModifierFilter {
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        self.public.map_or(true, |p| p == modifiers.public)
            && self.is_static.map_or(true, |s| s == modifiers.is_static)
    }
}
