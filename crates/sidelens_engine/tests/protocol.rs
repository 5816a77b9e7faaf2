use pretty_assertions::assert_eq;
use serde_json::json;
use sidelens_engine::{classify_response, AnalysisReply, VerdictPayload};

#[test]
fn well_formed_body_classifies_as_verdict() {
    let body = json!({
        "heading": "Likely Human",
        "percentage": 82,
        "brief_info": "According to my research, this checks out.",
        "reasoning": "Corroborated by the cited outlets.",
        "sources": ["https://a.example", "https://b.example"],
    });

    assert_eq!(
        classify_response(&body),
        AnalysisReply::Verdict(VerdictPayload {
            heading: "Likely Human".to_string(),
            percentage: 82.0,
            brief_info: "According to my research, this checks out.".to_string(),
            reasoning: "Corroborated by the cited outlets.".to_string(),
            sources: vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ],
        })
    );
}

#[test]
fn missing_reasoning_defaults_to_empty() {
    let body = json!({
        "heading": "Ambiguous Search Query Result",
        "percentage": 0,
        "brief_info": "The selected text is not a statement.",
        "sources": [],
    });

    let AnalysisReply::Verdict(verdict) = classify_response(&body) else {
        panic!("expected a verdict");
    };
    assert_eq!(verdict.reasoning, "");
    assert!(verdict.sources.is_empty());
}

#[test]
fn error_field_wins_over_verdict_fields() {
    let body = json!({
        "error": "Gemini API key not configured.",
        "heading": "Likely Human",
        "percentage": 82,
        "brief_info": "x",
        "sources": [],
    });

    assert_eq!(
        classify_response(&body),
        AnalysisReply::BackendError("Gemini API key not configured.".to_string())
    );
}

#[test]
fn empty_heading_is_malformed() {
    let body = json!({
        "heading": "",
        "percentage": 82,
        "brief_info": "x",
        "sources": [],
    });
    assert_eq!(classify_response(&body), AnalysisReply::Malformed);
}

#[test]
fn non_numeric_percentage_is_malformed() {
    let body = json!({
        "heading": "Likely Human",
        "percentage": "eighty-two",
        "brief_info": "x",
        "sources": [],
    });
    assert_eq!(classify_response(&body), AnalysisReply::Malformed);
}

#[test]
fn missing_sources_is_malformed() {
    let body = json!({
        "heading": "Likely Human",
        "percentage": 82,
        "brief_info": "x",
    });
    assert_eq!(classify_response(&body), AnalysisReply::Malformed);
}

#[test]
fn empty_object_is_malformed() {
    assert_eq!(classify_response(&json!({})), AnalysisReply::Malformed);
}

#[test]
fn non_string_source_entries_are_stringified() {
    let body = json!({
        "heading": "Likely Human",
        "percentage": 82,
        "brief_info": "x",
        "sources": ["https://a.example", 42],
    });

    let AnalysisReply::Verdict(verdict) = classify_response(&body) else {
        panic!("expected a verdict");
    };
    assert_eq!(verdict.sources, vec!["https://a.example", "42"]);
}
