use hostkeep_jobs::{BackupHandle, BackupRunner};
use tokio_util::sync::CancellationToken;
use tracing::warn;

pub async fn run_export(runner: &BackupRunner, destination: &str) -> bool {
    let destination = destination.to_string();
    let handle = runner.spawn_export(interrupt_token(), move |ok| {
        if ok {
            println!("Backup exported to {}", destination);
        } else {
            eprintln!("Backup export failed");
        }
    });
    finish(handle).await
}

pub async fn run_import(runner: &BackupRunner, path: &str) -> bool {
    let location = path.to_string();
    let handle = runner.spawn_import(path, interrupt_token(), move |ok| {
        if ok {
            println!("Backup imported from {}", location);
        } else {
            eprintln!("Backup import failed");
        }
    });
    finish(handle).await
}

async fn finish(handle: BackupHandle) -> bool {
    let flow = handle.flow();
    let ok = handle.wait().await;
    if !ok {
        warn!(flow = %flow, "Backup flow did not succeed");
    }
    ok
}

/// Token cancelled on Ctrl+C. A running flow still completes, but its
/// completion message is no longer printed.
fn interrupt_token() -> CancellationToken {
    let token = CancellationToken::new();
    let interrupted = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, waiting for the running backup flow to finish");
            interrupted.cancel();
        }
    });
    token
}
