//! Command runner backed by tokio::process

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{CommandError, CommandRunner};

/// Spawns real processes and waits for them to exit
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<(), CommandError> {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CommandError::NotFound(program.to_string())
                } else {
                    CommandError::SpawnFailed {
                        program: program.to_string(),
                        reason: e.to_string(),
                    }
                }
            })?;

        if !status.success() {
            return Err(CommandError::ExitStatus {
                program: program.to_string(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}
