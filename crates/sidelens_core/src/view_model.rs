use crate::state::{Phase, Verdict};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelViewModel {
    pub phase: Phase,
    pub verdict: Option<Verdict>,
    pub error_message: Option<String>,
    pub dirty: bool,
}
