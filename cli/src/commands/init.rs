//! `j2pc init` (spec §4.7): scaffold a minimal project directory holding
//! one example `.j` source file and a `j2pc.toml` config. Grounded on
//! `faxt::commands::init::InitCommand`'s validate-then-create shape,
//! scaled down from faxt's `input`/`output`/`build`/`.faxt` directory
//! tree to the one file this translator actually reads.

use std::path::{Path, PathBuf};

use crate::commands::traits::Command;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{CliError, Result};

const EXAMPLE_FILE_NAME: &str = "hello.j";

const EXAMPLE_SOURCE: &str = "\
public class HelloWorld {
    static int greeted = 0;

    public void main() {
        System.out.println(\"hello, world\");
    }
}
";

#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the current directory).
    pub path: Option<PathBuf>,
    /// Overwrite an existing `j2pc.toml`/example file instead of
    /// leaving it in place.
    pub force: bool,
}

pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let target = self.args.path.clone().unwrap_or_else(|| PathBuf::from("."));
        self.validate_directory(&target)?;
        self.write_example_source(&target)?;
        self.write_config(&target)?;
        tracing::info!(path = %target.display(), "initialized j2pc project");
        Ok(())
    }

    fn validate_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
            return Ok(());
        }
        if !path.is_dir() {
            return Err(CliError::Validation(format!("{} is not a directory", path.display())));
        }
        Ok(())
    }

    fn write_example_source(&self, path: &Path) -> Result<()> {
        let example_path = path.join(EXAMPLE_FILE_NAME);
        if example_path.exists() && !self.args.force {
            return Ok(());
        }
        std::fs::write(example_path, EXAMPLE_SOURCE)?;
        Ok(())
    }

    fn write_config(&self, path: &Path) -> Result<()> {
        let config_path = path.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            return Ok(());
        }
        let toml = toml::to_string_pretty(&Config::default())
            .map_err(|e| CliError::Config(format!("failed to render default config: {e}")))?;
        std::fs::write(config_path, toml)?;
        Ok(())
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

pub fn run_init(args: InitArgs) -> Result<()> {
    InitCommand::new(args).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn scaffolds_example_source_and_config() {
        let dir = TempDir::new().unwrap();
        let args = InitArgs {
            path: Some(dir.path().to_path_buf()),
            force: false,
        };
        run_init(args).unwrap();
        assert!(dir.path().join(EXAMPLE_FILE_NAME).exists());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn leaves_an_existing_config_untouched_without_force() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "fatal = false\n").unwrap();
        run_init(InitArgs {
            path: Some(dir.path().to_path_buf()),
            force: false,
        })
        .unwrap();
        let contents = std::fs::read_to_string(&config_path).unwrap();
        assert_eq!(contents, "fatal = false\n");
    }

    #[test]
    fn force_overwrites_an_existing_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "fatal = false\n").unwrap();
        run_init(InitArgs {
            path: Some(dir.path().to_path_buf()),
            force: true,
        })
        .unwrap();
        let contents = std::fs::read_to_string(&config_path).unwrap();
        assert_ne!(contents, "fatal = false\n");
    }

    #[test]
    fn rejects_a_target_path_that_is_a_plain_file() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("not-a-dir");
        std::fs::write(&file_path, "x").unwrap();
        let err = run_init(InitArgs {
            path: Some(file_path),
            force: false,
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }
}
