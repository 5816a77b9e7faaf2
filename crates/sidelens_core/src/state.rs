use crate::view_model::PanelViewModel;

pub type RequestId = u64;

/// Model identifier sent when the user has not picked one.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Structured verdict of a well-formed backend response.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub heading: String,
    pub percentage: f64,
    pub brief_info: String,
    pub reasoning: String,
    pub sources: Vec<String>,
}

/// Resolution of a request, as delivered by `Msg::AnalysisDone`.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Verdict(Verdict),
    /// Backend reported an error, or the transport failed.
    Failure { message: String },
    /// Payload parsed as JSON but matched no recognized shape.
    Malformed,
    /// Aborted by a newer submission; produces no render.
    Cancelled,
}

/// What gets sent to the backend. Text wins when both inputs are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    Text(String),
    ImageFile(String),
}

/// One submission. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub id: RequestId,
    pub input: AnalysisInput,
    pub reference_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Displayed,
    ErrorDisplayed,
    MalformedDisplayed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    text_input: String,
    image_file: Option<String>,
    reference_url: String,
    model: String,
    phase: Phase,
    verdict: Option<Verdict>,
    error_message: Option<String>,
    /// Generation counter; each submission gets the next id.
    issued_requests: RequestId,
    /// Only a resolution carrying this id may change displayed state.
    current_request: Option<RequestId>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            text_input: String::new(),
            image_file: None,
            reference_url: String::new(),
            model: DEFAULT_MODEL.to_string(),
            phase: Phase::Idle,
            verdict: None,
            error_message: None,
            issued_requests: 0,
            current_request: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PanelViewModel {
        PanelViewModel {
            phase: self.phase,
            verdict: self.verdict.clone(),
            error_message: self.error_message.clone(),
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_request(&self) -> Option<RequestId> {
        self.current_request
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text_input = text;
    }

    pub(crate) fn set_image(&mut self, path: Option<String>) {
        self.image_file = path;
    }

    pub(crate) fn set_reference_url(&mut self, url: String) {
        self.reference_url = url;
    }

    pub(crate) fn set_model(&mut self, model: String) {
        self.model = model;
    }

    /// Input for the next submission, or `None` when there is nothing to send.
    /// A non-empty text field takes priority over a selected image.
    pub(crate) fn submission_input(&self) -> Option<AnalysisInput> {
        if !self.text_input.is_empty() {
            return Some(AnalysisInput::Text(self.text_input.clone()));
        }
        self.image_file.clone().map(AnalysisInput::ImageFile)
    }

    /// Allocates the next request id and moves the panel into Loading.
    pub(crate) fn begin_request(&mut self, input: AnalysisInput) -> AnalysisRequest {
        self.issued_requests += 1;
        let id = self.issued_requests;
        self.current_request = Some(id);
        self.phase = Phase::Loading;
        self.dirty = true;
        AnalysisRequest {
            id,
            input,
            reference_url: self.reference_url.clone(),
            model: self.model.clone(),
        }
    }

    /// Applies a request resolution. Resolutions for any id other than the
    /// current one are discarded, so a superseded request can never overwrite
    /// fresher panel state.
    pub(crate) fn apply_outcome(&mut self, request_id: RequestId, outcome: AnalysisOutcome) {
        if self.current_request != Some(request_id) {
            return;
        }
        match outcome {
            AnalysisOutcome::Cancelled => {}
            AnalysisOutcome::Verdict(verdict) => {
                self.phase = Phase::Displayed;
                self.verdict = Some(verdict);
                self.error_message = None;
                self.current_request = None;
                self.dirty = true;
            }
            AnalysisOutcome::Failure { message } => {
                self.phase = Phase::ErrorDisplayed;
                self.verdict = None;
                self.error_message = Some(message);
                self.current_request = None;
                self.dirty = true;
            }
            AnalysisOutcome::Malformed => {
                self.phase = Phase::MalformedDisplayed;
                self.verdict = None;
                self.error_message = None;
                self.current_request = None;
                self.dirty = true;
            }
        }
    }
}
