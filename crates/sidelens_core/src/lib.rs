//! Sidelens core: pure state machine and render-command mapping.
mod effect;
mod msg;
mod render;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, NO_INPUT_NOTICE};
pub use msg::Msg;
pub use render::{render, RenderCommand, MALFORMED_NOTICE, NO_SOURCES_PLACEHOLDER};
pub use state::{
    AnalysisInput, AnalysisOutcome, AnalysisRequest, AppState, Phase, RequestId, Verdict,
    DEFAULT_MODEL,
};
pub use update::update;
pub use view_model::PanelViewModel;
