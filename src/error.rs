//! Error types for the javac adapter

use std::io;
use thiserror::Error;

/// Errors raised while preparing or launching the compiler
#[derive(Error, Debug)]
pub enum AdapterError {
    /// No line of `<runtime> -version` matched a known banner
    #[error("Can't determine java version from `{runtime} -version`")]
    VersionUndetermined { runtime: String },

    #[error("Failed to run `{runtime} -version`: {source}")]
    VersionQuery {
        runtime: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to exec {program}: {source}")]
    Exec {
        program: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AdapterError>;
