use crate::state::Phase;
use crate::view_model::PanelViewModel;

/// Literal shown in the sources region when the verdict cites nothing.
pub const NO_SOURCES_PLACEHOLDER: &str = "No specific sources found.";

/// Literal shown when the payload matched no recognized shape.
pub const MALFORMED_NOTICE: &str = "Unexpected analysis format.";

/// One command per fixed display region. A front end applies these in order;
/// it never decides content on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    SetLoadingVisible(bool),
    SetResultsVisible(bool),
    /// Empty every content region before repopulating.
    ClearRegions,
    SetHeading(String),
    SetPercentage(String),
    SetBriefInfo(String),
    SetReasoning(String),
    /// Ordered source links; each opens in a new viewing context.
    SetSourceLinks(Vec<String>),
    /// Prose shown in the sources region instead of links.
    SetSourcesMessage(String),
    /// Single line in the generic results/error region.
    SetErrorLine(String),
}

/// Pure mapping from the view model to display-region commands.
pub fn render(view: &PanelViewModel) -> Vec<RenderCommand> {
    let mut cmds = Vec::new();
    match view.phase {
        Phase::Idle => {
            cmds.push(RenderCommand::SetLoadingVisible(false));
            cmds.push(RenderCommand::SetResultsVisible(false));
        }
        Phase::Loading => {
            cmds.push(RenderCommand::SetLoadingVisible(true));
            cmds.push(RenderCommand::SetResultsVisible(false));
        }
        Phase::Displayed => {
            cmds.push(RenderCommand::ClearRegions);
            cmds.push(RenderCommand::SetLoadingVisible(false));
            cmds.push(RenderCommand::SetResultsVisible(true));
            if let Some(verdict) = &view.verdict {
                cmds.push(RenderCommand::SetHeading(verdict.heading.clone()));
                // Integral values render without a decimal point: 82 -> "82%".
                cmds.push(RenderCommand::SetPercentage(format!(
                    "{}%",
                    verdict.percentage
                )));
                cmds.push(RenderCommand::SetBriefInfo(verdict.brief_info.clone()));
                cmds.push(RenderCommand::SetReasoning(verdict.reasoning.clone()));
                if verdict.sources.is_empty() {
                    cmds.push(RenderCommand::SetSourcesMessage(
                        NO_SOURCES_PLACEHOLDER.to_string(),
                    ));
                } else {
                    cmds.push(RenderCommand::SetSourceLinks(verdict.sources.clone()));
                }
            }
        }
        Phase::ErrorDisplayed => {
            cmds.push(RenderCommand::ClearRegions);
            cmds.push(RenderCommand::SetLoadingVisible(false));
            cmds.push(RenderCommand::SetResultsVisible(false));
            let message = view.error_message.as_deref().unwrap_or("");
            cmds.push(RenderCommand::SetErrorLine(format!("Error: {message}")));
        }
        Phase::MalformedDisplayed => {
            cmds.push(RenderCommand::ClearRegions);
            cmds.push(RenderCommand::SetLoadingVisible(false));
            cmds.push(RenderCommand::SetResultsVisible(false));
            cmds.push(RenderCommand::SetErrorLine(MALFORMED_NOTICE.to_string()));
        }
    }
    cmds
}
