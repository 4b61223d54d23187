//! `j2pc check`: run only the parse phase and report diagnostics, without
//! emitting target text. Grounded on `faxt::commands::init`'s role as the
//! CLI's other non-`translate` verb, reshaped around this pipeline's own
//! phase boundary (parse vs emit, spec §4.6) rather than faxt's directory
//! scaffolding — a pure source-to-text translator has no project to
//! initialize.

use std::path::PathBuf;

use j2p_drv::{Options, Session};

use crate::commands::traits::Command;
use crate::error::{CliError, Result};

#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub input: PathBuf,
    pub options: Options,
}

pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let source = std::fs::read_to_string(&self.args.input)?;
        tracing::debug!(input = %self.args.input.display(), "checking");

        match Session::parse(&source, self.args.options) {
            Ok(session) => {
                if session.handler.has_diagnostics() {
                    let rendered = session.handler.render();
                    println!("{rendered}");
                    // Non-fatal mode still reports a clean parse as a
                    // failure exit code (spec: "exit code 0 if no
                    // errors") — diagnostics were accumulated here, so
                    // this run did not come back clean even though
                    // `Session::parse` didn't halt on them.
                    Err(CliError::Diagnostics(rendered))
                } else {
                    println!("{}", crate::commands::common::messages::NO_DIAGNOSTICS);
                    Ok(())
                }
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

pub fn run_check(args: CheckArgs) -> Result<()> {
    CheckCommand::new(args).run()
}
