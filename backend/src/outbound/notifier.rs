//! Process-backed delivery partner notifier.
//!
//! Runs a configured program with the partner name appended as its final
//! argument. No shell is involved, so the partner name is never interpreted.

use std::ffi::OsString;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::domain::ports::{DeliveryNotifier, DeliveryNotifierError};

/// Notifier that shells out to an external command.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    command: Vec<OsString>,
}

impl CommandNotifier {
    /// Build a notifier from a program and its leading arguments.
    pub fn new(
        program: impl Into<OsString>,
        args: impl IntoIterator<Item = impl Into<OsString>>,
    ) -> Self {
        let mut command = vec![program.into()];
        command.extend(args.into_iter().map(Into::into));
        Self { command }
    }

    /// Build a notifier from a whitespace-separated command line.
    ///
    /// The line is split on whitespace only; quoting is not interpreted.
    pub fn from_command_line(line: &str) -> Self {
        Self {
            command: line.split_whitespace().map(OsString::from).collect(),
        }
    }

    fn command_label(&self) -> String {
        self.command
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for CommandNotifier {
    fn default() -> Self {
        Self::new("notify", Vec::<OsString>::new())
    }
}

#[async_trait]
impl DeliveryNotifier for CommandNotifier {
    async fn notify(&self, partner: &str) -> Result<String, DeliveryNotifierError> {
        let Some(program) = self.command.first() else {
            return Err(DeliveryNotifierError::spawn("notifier command is empty"));
        };

        let output = Command::new(program)
            .args(self.command.iter().skip(1))
            .arg(partner)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|error| {
                warn!(command = %self.command_label(), %error, "notifier failed to start");
                DeliveryNotifierError::spawn(error.to_string())
            })?;

        if output.status.success() {
            debug!(command = %self.command_label(), partner, "delivery partner notified");
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
        Err(DeliveryNotifierError::failed(output.status.to_string(), stderr))
    }
}
