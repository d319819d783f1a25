//! External command port interface

use async_trait::async_trait;
use thiserror::Error;

/// Command execution errors
#[derive(Debug, Clone, Error)]
pub enum CommandError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("failed to spawn {program}: {reason}")]
    SpawnFailed { program: String, reason: String },

    #[error("{program} exited with status: {status}")]
    ExitStatus { program: String, status: String },
}

/// Port for running external programs
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and wait for it to exit.
    ///
    /// # Returns
    /// Ok(()) when the program exits successfully, error otherwise
    async fn run(&self, program: &str, args: &[String]) -> Result<(), CommandError>;
}
