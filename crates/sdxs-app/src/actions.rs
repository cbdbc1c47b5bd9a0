//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use sdxs_backend::Backend;
use sdxs_core::{panic_message, NoiseFilter};

use crate::handler::Task;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action, spawning background work where needed.
///
/// Task results come back wrapped in [`Message::Completed`] tagged with
/// `epoch`.
pub fn handle_action<B>(
    action: UpdateAction,
    epoch: u64,
    backend: &B,
    msg_tx: mpsc::Sender<Message>,
    noise: &NoiseFilter,
) where
    B: Backend + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::SpawnTask(task) => {
            spawn_supervised(task, epoch, backend.clone(), msg_tx, noise.clone());
        }

        UpdateAction::OpenUrl { url } => {
            if let Err(e) = open_url_in_browser(&url) {
                warn!("Failed to open {}: {}", url, e);
                let _ = msg_tx.try_send(Message::OpenUrlFailed {
                    error: e.to_string(),
                });
            }
        }
    }
}

/// Spawn `task` and watch it.
///
/// A task that panics never reports its result, so the supervisor reports a
/// `TaskFailed` in its place. Panics matching `noise` are reported without
/// an error text and are not logged.
fn spawn_supervised<B>(
    task: Task,
    epoch: u64,
    backend: B,
    msg_tx: mpsc::Sender<Message>,
    noise: NoiseFilter,
) where
    B: Backend + Send + Sync + 'static,
{
    let kind = task.kind();
    let worker_tx = msg_tx.clone();
    let handle = tokio::spawn(async move {
        execute_task(task, epoch, &backend, worker_tx).await;
    });

    tokio::spawn(async move {
        let Err(join_error) = handle.await else {
            return;
        };
        if !join_error.is_panic() {
            debug!("{:?} task cancelled", kind);
            return;
        }

        let message = panic_message(join_error.into_panic().as_ref());
        let error = if noise.is_benign(&message) {
            None
        } else {
            error!("{:?} task panicked: {}", kind, message);
            Some(message)
        };
        let failed = Message::TaskFailed { task: kind, error };
        let _ = msg_tx.send(completed(epoch, failed)).await;
    });
}

fn completed(epoch: u64, message: Message) -> Message {
    Message::Completed {
        epoch,
        message: Box::new(message),
    }
}

/// Run one backend call and report its outcome as a message
async fn execute_task<B: Backend + Sync>(
    task: Task,
    epoch: u64,
    backend: &B,
    msg_tx: mpsc::Sender<Message>,
) {
    let msg = match task {
        Task::PrepareModel(request) => match backend.prepare_model(request).await {
            Ok(prepared) => Message::ModelLoaded {
                message: prepared.message,
            },
            Err(failure) => Message::ModelLoadFailed {
                error: failure.detail,
            },
        },

        Task::Generate(request) => match backend.generate(request).await {
            Ok(generated) => Message::ImageGenerated {
                image_path: generated.image_path,
                filename: generated.filename,
            },
            Err(failure) => Message::GenerateFailed {
                error: failure.detail,
            },
        },

        Task::PrepareRefiner(request) => {
            let kind = request.model_type;
            match backend.prepare_refiner(request).await {
                Ok(prepared) => Message::RefinerLoaded {
                    kind,
                    message: prepared.message,
                },
                Err(failure) => Message::RefinerLoadFailed {
                    kind,
                    error: failure.detail,
                },
            }
        }

        Task::Refine(request) => match backend.refine(request).await {
            Ok(refined) => Message::ImageRefined {
                refined_image_path: refined.refined_image_path,
                filename: refined.filename,
            },
            Err(failure) => Message::RefineFailed {
                error: failure.detail,
            },
        },

        Task::Probe => match backend.probe().await {
            Ok(info) => Message::BackendOnline {
                message: info.message,
            },
            Err(failure) => Message::BackendOffline {
                error: failure.detail,
            },
        },
    };

    if msg_tx.send(completed(epoch, msg)).await.is_err() {
        debug!("Message channel closed before task result was delivered");
    }
}

/// Open a URL in the platform-default browser.
fn open_url_in_browser(url: &str) -> std::io::Result<()> {
    use std::process::Command;

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}
