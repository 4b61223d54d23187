//! Command trait shared by every `j2pc` subcommand, grounded on
//! `faxt::commands::traits::Command`.

use crate::error::Result;

pub trait Command {
    type Args;
    type Output;

    fn new(args: Self::Args) -> Self;
    fn execute(&self) -> Result<Self::Output>;
    fn name() -> &'static str;
}
