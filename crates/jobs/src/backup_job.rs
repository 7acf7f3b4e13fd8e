use std::fmt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::error;

/// Which backup flow a job runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupFlow {
    Export,
    Import,
}

impl BackupFlow {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackupFlow::Export => "export",
            BackupFlow::Import => "import",
        }
    }
}

impl fmt::Display for BackupFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle of one flow invocation: `Idle → Running → Succeeded | Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Running,
    Succeeded,
    Failed,
}

impl FlowState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::Succeeded | FlowState::Failed)
    }
}

/// Handle on a spawned backup flow.
///
/// Dropping the handle does not stop the flow.
pub struct BackupHandle {
    flow: BackupFlow,
    state: watch::Receiver<FlowState>,
    task: JoinHandle<bool>,
}

impl BackupHandle {
    pub(crate) fn new(
        flow: BackupFlow,
        state: watch::Receiver<FlowState>,
        task: JoinHandle<bool>,
    ) -> Self {
        Self { flow, state, task }
    }

    pub fn flow(&self) -> BackupFlow {
        self.flow
    }

    pub fn state(&self) -> FlowState {
        *self.state.borrow()
    }

    /// Receiver notified on every state transition
    pub fn subscribe(&self) -> watch::Receiver<FlowState> {
        self.state.clone()
    }

    /// Waits for the flow to finish and returns whether it succeeded.
    pub async fn wait(self) -> bool {
        match self.task.await {
            Ok(succeeded) => succeeded,
            Err(e) => {
                error!(flow = %self.flow, error = %e, "Backup task aborted");
                false
            }
        }
    }
}
