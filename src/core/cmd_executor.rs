use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::Cmd,
    core::msg::{granules::GranuleMsg, Msg},
    infrastructure::source::GranuleSource,
};

/// Command executor that bridges Elm commands to the granule source.
///
/// `Cmd::FetchPage` is executed on a spawned task whose only output is a
/// `PageLoaded`/`PageFailed` message tagged with the owning session, sent
/// back over the message channel. The executor never touches state; the
/// update function decides what each completion means (including dropping
/// it as stale).
#[derive(Clone)]
pub struct CmdExecutor {
    msg_sender: mpsc::UnboundedSender<Msg>,
    source: Option<Arc<dyn GranuleSource>>,
}

impl CmdExecutor {
    /// Create a new command executor without a granule source
    pub fn new(msg_sender: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            msg_sender,
            source: None,
        }
    }

    /// Create a new command executor backed by a granule source
    pub fn new_with_source(
        msg_sender: mpsc::UnboundedSender<Msg>,
        source: Arc<dyn GranuleSource>,
    ) -> Self {
        Self {
            msg_sender,
            source: Some(source),
        }
    }

    /// Attach a granule source to an existing executor
    pub fn set_source(&mut self, source: Arc<dyn GranuleSource>) {
        self.source = Some(source);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {
                // No-op command, nothing to execute
            }

            Cmd::FetchPage { session, request } => {
                let Some(source) = &self.source else {
                    log::warn!("FetchPage ignored: granule source not available");
                    return Ok(());
                };

                let source = Arc::clone(source);
                let sender = self.msg_sender.clone();
                let session = *session;
                let request = request.clone();

                tokio::spawn(async move {
                    let msg = match source.fetch_page(request).await {
                        Ok(response) => Msg::Granule(GranuleMsg::PageLoaded { session, response }),
                        Err(e) => Msg::Granule(GranuleMsg::PageFailed {
                            session,
                            message: e.to_string(),
                        }),
                    };
                    // The receiver may be gone during shutdown
                    if sender.send(msg).is_err() {
                        log::debug!("Dropping page completion: message channel closed");
                    }
                });
            }

            Cmd::LogError { message } => {
                log::error!("Command error: {message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("Command info: {message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            is_msg_sender_closed: self.msg_sender.is_closed(),
            has_source: self.source.is_some(),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub is_msg_sender_closed: bool,
    pub has_source: bool,
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::None => "None".to_string(),
            Cmd::FetchPage { .. } => "FetchPage".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
        }
    }
}
