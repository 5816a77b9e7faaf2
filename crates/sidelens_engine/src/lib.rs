//! Sidelens engine: backend round trips and request cancellation.
mod client;
mod data_uri;
mod engine;
mod protocol;
mod types;

pub use client::{AnalysisBackend, ClientSettings, HttpAnalysisClient};
pub use data_uri::read_as_data_uri;
pub use engine::EngineHandle;
pub use protocol::{classify_response, ImageAnalysisBody, TextAnalysisBody};
pub use types::{
    AnalysisJob, AnalysisReply, ClientError, EngineEvent, JobInput, RequestId, VerdictPayload,
};
