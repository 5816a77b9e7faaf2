use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::{client_debug, client_info, client_warn};
use sidelens_core::{AnalysisInput, AnalysisOutcome, AnalysisRequest, Effect, Msg, Verdict};
use sidelens_engine::{
    AnalysisJob, AnalysisReply, ClientError, ClientSettings, EngineEvent, EngineHandle, JobInput,
};

use crate::app::AppMsg;

/// What the user sees when the backend could not be reached at all.
const BACKEND_UNREACHABLE: &str = "Could not connect to the backend.";

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<AppMsg>, settings: ClientSettings) -> Result<Self, ClientError> {
        let engine = EngineHandle::new(settings)?;
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::CancelPending => {
                    self.engine.cancel_pending();
                }
                Effect::BeginAnalysis { request } => {
                    client_info!(
                        "BeginAnalysis request_id={} model={}",
                        request.id,
                        request.model
                    );
                    self.engine.begin(map_request(request));
                }
                Effect::NotifyNoInput => {
                    // Surfaced by the panel, nothing for the engine to do.
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<AppMsg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let EngineEvent::AnalysisCompleted { request_id, result } = event;
                let msg = Msg::AnalysisDone {
                    request_id,
                    outcome: map_result(result),
                };
                if msg_tx.send(AppMsg::Core(msg)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_request(request: AnalysisRequest) -> AnalysisJob {
    AnalysisJob {
        request_id: request.id,
        input: match request.input {
            AnalysisInput::Text(text) => JobInput::Text(text),
            AnalysisInput::ImageFile(path) => JobInput::ImageFile(path),
        },
        reference_url: request.reference_url,
        model: request.model,
    }
}

fn map_result(result: Result<AnalysisReply, ClientError>) -> AnalysisOutcome {
    match result {
        Ok(AnalysisReply::Verdict(payload)) => AnalysisOutcome::Verdict(Verdict {
            heading: payload.heading,
            percentage: payload.percentage,
            brief_info: payload.brief_info,
            reasoning: payload.reasoning,
            sources: payload.sources,
        }),
        Ok(AnalysisReply::BackendError(message)) => AnalysisOutcome::Failure { message },
        Ok(AnalysisReply::Malformed) => AnalysisOutcome::Malformed,
        Err(ClientError::Cancelled) => {
            client_debug!("request aborted by a newer submission");
            AnalysisOutcome::Cancelled
        }
        Err(err @ ClientError::Network(_)) => {
            client_warn!("backend unreachable: {err}");
            AnalysisOutcome::Failure {
                message: BACKEND_UNREACHABLE.to_string(),
            }
        }
        Err(err) => AnalysisOutcome::Failure {
            message: err.to_string(),
        },
    }
}
