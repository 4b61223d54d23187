//! Command modules for the `j2pc` CLI, grounded on `faxt::commands`'
//! one-module-per-subcommand layout.

pub mod common;
pub mod traits;

pub mod check;
pub mod init;
pub mod translate;

#[allow(unused_imports)]
pub use check::{run_check, CheckArgs};
#[allow(unused_imports)]
pub use init::{run_init, InitArgs};
#[allow(unused_imports)]
pub use translate::{run_translate, TranslateArgs};
