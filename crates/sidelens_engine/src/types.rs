pub type RequestId = u64;

/// What the user is asking the backend to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobInput {
    Text(String),
    /// Path to an image file; encoded as a data URI before transmission.
    ImageFile(String),
}

/// One submission, handed over from the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisJob {
    pub request_id: RequestId,
    pub input: JobInput,
    pub reference_url: String,
    pub model: String,
}

/// Verdict fields of a well-formed backend response.
#[derive(Debug, Clone, PartialEq)]
pub struct VerdictPayload {
    pub heading: String,
    pub percentage: f64,
    pub brief_info: String,
    pub reasoning: String,
    pub sources: Vec<String>,
}

/// Classified backend response body.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisReply {
    Verdict(VerdictPayload),
    /// The backend reported an explicit error; shown verbatim.
    BackendError(String),
    /// Parsed as JSON but matched no recognized shape.
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("analysis request cancelled")]
    Cancelled,
    #[error("could not reach the backend: {0}")]
    Network(String),
    #[error("could not read image file {path}: {message}")]
    ImageRead { path: String, message: String },
    #[error("invalid backend base url: {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    AnalysisCompleted {
        request_id: RequestId,
        result: Result<AnalysisReply, ClientError>,
    },
}
