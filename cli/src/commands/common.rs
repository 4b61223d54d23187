//! Shared helpers for command output. Plain text, no decoration — unlike
//! `faxt::commands::common`'s emoji-prefixed message constants.

pub mod messages {
    pub const WROTE_FILE: &str = "wrote";
    pub const NO_DIAGNOSTICS: &str = "no diagnostics";
}
