//! Error handling for the `j2pc` CLI, following `faxt`'s `FaxtError`/
//! `Result<T>` convention: one `thiserror` enum wrapping every failure
//! mode `main` can see, with a blanket alias so command modules don't
//! repeat the error type.

use thiserror::Error;

use j2p_drv::TranslateError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Translate(#[from] TranslateError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Diagnostics(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
