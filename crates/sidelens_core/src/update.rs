use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TextChanged(text) => {
            state.set_text(text);
            Vec::new()
        }
        Msg::ImageSelected(path) => {
            state.set_image(Some(path));
            Vec::new()
        }
        Msg::ImageCleared => {
            state.set_image(None);
            Vec::new()
        }
        Msg::UrlChanged(url) => {
            state.set_reference_url(url);
            Vec::new()
        }
        Msg::ModelSelected(model) => {
            state.set_model(model);
            Vec::new()
        }
        Msg::AnalyzeClicked => match state.submission_input() {
            Some(input) => {
                let request = state.begin_request(input);
                vec![Effect::CancelPending, Effect::BeginAnalysis { request }]
            }
            None => vec![Effect::NotifyNoInput],
        },
        Msg::CancelRequested => {
            // No state transition: the loading overlay stays up until a newer
            // submission decides what replaces it.
            vec![Effect::CancelPending]
        }
        Msg::AnalysisDone {
            request_id,
            outcome,
        } => {
            state.apply_outcome(request_id, outcome);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
