use sidelens_core::{
    update, AnalysisInput, AppState, Effect, Msg, Phase, DEFAULT_MODEL,
};

fn with_text(state: AppState, text: &str) -> AppState {
    let (state, _) = update(state, Msg::TextChanged(text.to_string()));
    state
}

fn with_image(state: AppState, path: &str) -> AppState {
    let (state, _) = update(state, Msg::ImageSelected(path.to_string()));
    state
}

fn submit(state: AppState) -> (AppState, Vec<Effect>) {
    update(state, Msg::AnalyzeClicked)
}

#[test]
fn submit_without_input_raises_notice_only() {
    let state = AppState::new();
    let (mut next, effects) = submit(state);

    assert_eq!(effects, vec![Effect::NotifyNoInput]);
    assert_eq!(next.phase(), Phase::Idle);
    assert_eq!(next.current_request(), None);
    assert!(!next.consume_dirty());
}

#[test]
fn text_submission_begins_loading() {
    let state = with_text(AppState::new(), "hello");
    let (mut next, effects) = submit(state);

    assert_eq!(next.phase(), Phase::Loading);
    assert_eq!(next.current_request(), Some(1));
    assert!(next.consume_dirty());

    assert_eq!(effects.len(), 2);
    assert_eq!(effects[0], Effect::CancelPending);
    let Effect::BeginAnalysis { request } = &effects[1] else {
        panic!("expected BeginAnalysis, got {:?}", effects[1]);
    };
    assert_eq!(request.id, 1);
    assert_eq!(request.input, AnalysisInput::Text("hello".to_string()));
    assert_eq!(request.reference_url, "");
    assert_eq!(request.model, DEFAULT_MODEL);
}

#[test]
fn text_takes_priority_over_selected_image() {
    let state = with_image(with_text(AppState::new(), "hello"), "/tmp/shot.png");
    let (_, effects) = submit(state);

    let Effect::BeginAnalysis { request } = &effects[1] else {
        panic!("expected BeginAnalysis, got {:?}", effects[1]);
    };
    assert_eq!(request.input, AnalysisInput::Text("hello".to_string()));
}

#[test]
fn image_submission_uses_selected_file() {
    let state = with_image(AppState::new(), "/tmp/shot.png");
    let (state, _) = update(state, Msg::UrlChanged("https://example.com/article".to_string()));
    let (state, _) = update(state, Msg::ModelSelected("gemini-1.5-pro".to_string()));
    let (_, effects) = submit(state);

    let Effect::BeginAnalysis { request } = &effects[1] else {
        panic!("expected BeginAnalysis, got {:?}", effects[1]);
    };
    assert_eq!(
        request.input,
        AnalysisInput::ImageFile("/tmp/shot.png".to_string())
    );
    assert_eq!(request.reference_url, "https://example.com/article");
    assert_eq!(request.model, "gemini-1.5-pro");
}

#[test]
fn cleared_image_no_longer_counts_as_input() {
    let state = with_image(AppState::new(), "/tmp/shot.png");
    let (state, _) = update(state, Msg::ImageCleared);
    let (_, effects) = submit(state);

    assert_eq!(effects, vec![Effect::NotifyNoInput]);
}

#[test]
fn request_ids_increase_per_submission() {
    let state = with_text(AppState::new(), "first");
    let (state, effects_a) = submit(state);
    let (state, effects_b) = submit(state);

    let Effect::BeginAnalysis { request: a } = &effects_a[1] else {
        panic!("expected BeginAnalysis");
    };
    let Effect::BeginAnalysis { request: b } = &effects_b[1] else {
        panic!("expected BeginAnalysis");
    };
    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);
    assert_eq!(state.current_request(), Some(2));
}

#[test]
fn cancel_request_changes_nothing_visible() {
    let state = with_text(AppState::new(), "hello");
    let (mut state, _) = submit(state);
    let _ = state.consume_dirty();

    let before = state.clone();
    let (mut next, effects) = update(state, Msg::CancelRequested);

    assert_eq!(effects, vec![Effect::CancelPending]);
    assert_eq!(next, before);
    assert!(!next.consume_dirty());
}
