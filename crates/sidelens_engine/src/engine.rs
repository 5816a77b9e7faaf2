use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use client_logging::{client_debug, client_info};
use tokio_util::sync::CancellationToken;

use crate::client::{AnalysisBackend, ClientSettings, HttpAnalysisClient};
use crate::types::{AnalysisJob, ClientError, EngineEvent, JobInput};

enum EngineCommand {
    Begin { job: AnalysisJob },
    CancelPending,
}

/// Handle to the background analysis loop.
///
/// Commands are processed strictly in order by one dedicated thread, so at
/// most one request is live and the current cancellation token is only ever
/// touched from that thread. Beginning a job cancels whatever was still in
/// flight before a new token is created.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let backend = Arc::new(HttpAnalysisClient::new(settings)?);
        Ok(Self::with_backend(backend))
    }

    /// Builds a handle around any backend implementation.
    pub fn with_backend(backend: Arc<dyn AnalysisBackend>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut current: Option<CancellationToken> = None;
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Begin { job } => {
                        if let Some(previous) = current.take() {
                            previous.cancel();
                        }
                        let token = CancellationToken::new();
                        current = Some(token.clone());
                        client_info!(
                            "Begin request_id={} kind={} model={}",
                            job.request_id,
                            match job.input {
                                JobInput::Text(_) => "text",
                                JobInput::ImageFile(_) => "image",
                            },
                            job.model
                        );
                        let backend = backend.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = backend.analyze(&job, &token).await;
                            let _ = event_tx.send(EngineEvent::AnalysisCompleted {
                                request_id: job.request_id,
                                result,
                            });
                        });
                    }
                    EngineCommand::CancelPending => {
                        if let Some(token) = current.take() {
                            client_debug!("CancelPending: aborting live request");
                            token.cancel();
                        }
                    }
                }
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn begin(&self, job: AnalysisJob) {
        let _ = self.cmd_tx.send(EngineCommand::Begin { job });
    }

    /// No-op when nothing is in flight.
    pub fn cancel_pending(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelPending);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|rx| rx.try_recv().ok())
    }
}
