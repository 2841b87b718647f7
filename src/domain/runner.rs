//! Shell command runner.

use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};

use tracing::{error, info};

use crate::domain::{CommandResult, WatchError};

/// Runs hook commands through `<shell> -c`.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    shell: String,
}

impl CommandRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    /// Run `command`, logging it and its combined output.
    ///
    /// Failures are logged and reported through `CommandResult::success`.
    pub fn run(&self, command: &str) -> CommandResult {
        info!("> {}", command);

        let (output, failure) = match self.execute(command) {
            Ok((output, status)) if status.success() => (output, None),
            Ok((output, status)) => {
                error!("Command `{}` failed: {}", command, status);
                (output, Some(status.to_string()))
            }
            Err(e) => {
                error!("Failed to run `{}`: {}", command, e);
                (String::new(), Some(e.to_string()))
            }
        };

        info!("{}", output);

        CommandResult {
            command: command.to_string(),
            output,
            failure,
        }
    }

    /// Spawn the shell with stdout and stderr sharing one pipe.
    fn execute(&self, command: &str) -> Result<(String, ExitStatus), WatchError> {
        let (mut reader, writer) = std::io::pipe()?;

        // The Command owns our write ends; drop it before reading so EOF arrives
        // once the child exits.
        let mut child = {
            let mut cmd = Command::new(&self.shell);
            cmd.arg("-c")
                .arg(command)
                .stdin(Stdio::null())
                .stdout(writer.try_clone()?)
                .stderr(writer);
            cmd.spawn()?
        };

        let mut buf = Vec::new();
        let read = reader.read_to_end(&mut buf);
        let status = child.wait()?;
        read?;

        Ok((String::from_utf8_lossy(&buf).into_owned(), status))
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new("sh")
    }
}
