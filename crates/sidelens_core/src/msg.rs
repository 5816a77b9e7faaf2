use crate::state::{AnalysisOutcome, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the analysis text box.
    TextChanged(String),
    /// User picked an image file in the file selector.
    ImageSelected(String),
    /// User cleared the image selection.
    ImageCleared,
    /// User edited the reference URL field.
    UrlChanged(String),
    /// User chose a model identifier.
    ModelSelected(String),
    /// User triggered a submission.
    AnalyzeClicked,
    /// User asked to abandon the in-flight request, if any.
    CancelRequested,
    /// Engine resolution for a request.
    AnalysisDone {
        request_id: RequestId,
        outcome: AnalysisOutcome,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
