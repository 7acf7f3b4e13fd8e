use hostkeep_application::use_cases::{ExportBackupUseCase, ImportBackupUseCase};
use hostkeep_domain::{BackupError, BackupSummary};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::backup_job::{BackupFlow, BackupHandle, FlowState};

/// Runs backup flows on dedicated background tasks.
///
/// Each call spawns exactly one task running one flow to completion; flows
/// cannot be cancelled once started. The outcome is reduced to a boolean and
/// handed to the completion callback, unless the caller's token was cancelled
/// meanwhile, in which case the outcome is only logged.
///
/// # Example
///
/// ```rust,ignore
/// let handle = runner.spawn_export(CancellationToken::new(), |ok| {
///     println!("export {}", if ok { "done" } else { "failed" });
/// });
/// handle.wait().await;
/// ```
pub struct BackupRunner {
    export: Arc<ExportBackupUseCase>,
    import: Arc<ImportBackupUseCase>,
}

impl BackupRunner {
    pub fn new(export: Arc<ExportBackupUseCase>, import: Arc<ImportBackupUseCase>) -> Self {
        Self { export, import }
    }

    pub fn spawn_export<F>(&self, caller: CancellationToken, on_complete: F) -> BackupHandle
    where
        F: FnOnce(bool) + Send + 'static,
    {
        let export = Arc::clone(&self.export);
        Self::spawn(BackupFlow::Export, caller, on_complete, async move {
            export.execute().await
        })
    }

    pub fn spawn_import<F>(
        &self,
        location: impl Into<String>,
        caller: CancellationToken,
        on_complete: F,
    ) -> BackupHandle
    where
        F: FnOnce(bool) + Send + 'static,
    {
        let import = Arc::clone(&self.import);
        let location = location.into();
        Self::spawn(BackupFlow::Import, caller, on_complete, async move {
            import.execute(&location).await
        })
    }

    fn spawn<F, Fut>(
        flow: BackupFlow,
        caller: CancellationToken,
        on_complete: F,
        run: Fut,
    ) -> BackupHandle
    where
        F: FnOnce(bool) + Send + 'static,
        Fut: Future<Output = Result<BackupSummary, BackupError>> + Send + 'static,
    {
        let (state_tx, state_rx) = watch::channel(FlowState::Idle);

        let task = tokio::spawn(async move {
            let mut completion = Completion {
                flow,
                state: state_tx,
                caller,
                on_complete: Some(on_complete),
            };
            completion.state.send_replace(FlowState::Running);
            info!(flow = %flow, "Backup flow started");

            let succeeded = match run.await {
                Ok(summary) => {
                    info!(
                        flow = %flow,
                        sources = summary.sources,
                        items = summary.total_items(),
                        "Backup flow succeeded"
                    );
                    true
                }
                Err(e) => {
                    error!(flow = %flow, error = %e, "Backup flow failed");
                    false
                }
            };

            completion.finish(succeeded);
            succeeded
        });

        BackupHandle::new(flow, state_rx, task)
    }
}

/// Terminal state and completion signal of one flow task.
///
/// If the task unwinds before `finish`, dropping this publishes `Failed` and
/// signals `false`, so a panicking flow still reaches a terminal state.
struct Completion<F: FnOnce(bool)> {
    flow: BackupFlow,
    state: watch::Sender<FlowState>,
    caller: CancellationToken,
    on_complete: Option<F>,
}

impl<F: FnOnce(bool)> Completion<F> {
    fn finish(&mut self, succeeded: bool) {
        let Some(on_complete) = self.on_complete.take() else {
            return;
        };

        self.state.send_replace(if succeeded {
            FlowState::Succeeded
        } else {
            FlowState::Failed
        });

        if self.caller.is_cancelled() {
            debug!(flow = %self.flow, succeeded, "Caller gone, completion signal dropped");
        } else {
            on_complete(succeeded);
        }
    }
}

impl<F: FnOnce(bool)> Drop for Completion<F> {
    fn drop(&mut self) {
        if self.on_complete.is_some() {
            error!(flow = %self.flow, "Backup flow aborted");
            self.finish(false);
        }
    }
}
