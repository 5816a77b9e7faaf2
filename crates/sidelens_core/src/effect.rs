use crate::state::AnalysisRequest;

/// Blocking notice shown when a submission has neither text nor an image.
pub const NO_INPUT_NOTICE: &str = "Please enter text or select an image to analyze.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Abort the in-flight request, if any. Idempotent.
    CancelPending,
    /// Issue a new backend analysis for this request.
    BeginAnalysis { request: AnalysisRequest },
    /// Surface the no-input notice outside the result regions.
    NotifyNoInput,
}
