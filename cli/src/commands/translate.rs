//! `j2pc translate` (spec §4.7): run the pipeline on one file, writing the
//! requested representation to stdout or `-o`.

use std::path::PathBuf;

use j2p_drv::{translate, Options};
use j2p_lex::TokenBuffer;
use j2p_util::diagnostic::{Handler, Mode};

use crate::commands::traits::Command;
use crate::config::EmitKind;
use crate::error::{CliError, Result};

#[derive(Debug, Clone)]
pub struct TranslateArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub options: Options,
    pub emit: EmitKind,
}

pub struct TranslateCommand {
    args: TranslateArgs,
}

impl TranslateCommand {
    pub fn run(&self) -> Result<()> {
        let source = std::fs::read_to_string(&self.args.input)?;
        tracing::debug!(input = %self.args.input.display(), "reading source");

        let text = match self.args.emit {
            EmitKind::Tokens => self.render_tokens(&source),
            EmitKind::Ast => self.render_ast(&source)?,
            EmitKind::Source => translate(&source, self.args.options)?,
        };

        match &self.args.output {
            Some(path) => {
                std::fs::write(path, &text)?;
                tracing::info!(output = %path.display(), "{}", crate::commands::common::messages::WROTE_FILE);
            }
            None => print!("{text}"),
        }
        Ok(())
    }

    fn render_tokens(&self, source: &str) -> String {
        let buffer = TokenBuffer::lex(source);
        let mut out = String::new();
        let mut remaining = buffer;
        while let Some(tok) = remaining.peek().cloned() {
            out.push_str(&format!("{}:{}\n", tok.line, tok.as_str()));
            let handler = Handler::new(Mode::Warning);
            let _ = remaining.shift(&handler, None);
        }
        out
    }

    fn render_ast(&self, source: &str) -> Result<String> {
        let handler = Handler::new(if self.args.options.fatal { Mode::Fatal } else { Mode::Warning });
        let classes = j2p_par::parse(source, &handler)
            .map_err(|_| CliError::Validation(handler.render()))?;
        Ok(format!("{classes:#?}\n"))
    }
}

impl Command for TranslateCommand {
    type Args = TranslateArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "translate"
    }
}

pub fn run_translate(args: TranslateArgs) -> Result<()> {
    TranslateCommand::new(args).run()
}
