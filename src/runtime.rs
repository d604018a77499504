use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::{
    core::cmd::Cmd, core::msg::Msg, core::state::AppState, core::update::update,
};

/// Integration point between the Elm-style core and a host environment.
///
/// The host delivers messages (scroll samples, filter changes, page
/// completions) either synchronously via `send_msg` or over the channel
/// handed out by `get_sender`; the runtime applies them through the update
/// function and queues the resulting commands for the host (or a
/// `CmdExecutor`) to carry out.
pub struct BrowserRuntime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
}

impl BrowserRuntime {
    /// Create a new runtime around an initial state
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
        }
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Queue a message directly (for hosts driving the runtime in-process)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Drain pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;

        for cmd in &commands {
            self.cmd_queue.push_back(cmd.clone());
        }

        commands
    }

    /// Process all queued messages, including those arriving over the
    /// channel, in delivery order
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> BrowserRuntimeStats {
        BrowserRuntimeStats {
            queued_msgs: self.msg_queue.len(),
            queued_cmds: self.cmd_queue.len(),
            granule_count: self.state.granules.len(),
            status: self.state.status().to_string(),
        }
    }
}

impl Default for BrowserRuntime {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct BrowserRuntimeStats {
    pub queued_msgs: usize,
    pub queued_cmds: usize,
    pub granule_count: usize,
    pub status: String,
}
