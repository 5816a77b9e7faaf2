use client_logging::client_warn;
use serde::Serialize;
use serde_json::Value;

use crate::types::{AnalysisReply, VerdictPayload};

/// JSON body for `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextAnalysisBody<'a> {
    pub text: &'a str,
    pub url: &'a str,
    pub model: &'a str,
}

/// JSON body for `POST /api/analyze_image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageAnalysisBody<'a> {
    /// Base64 data URI of the selected file.
    pub image: &'a str,
    pub url: &'a str,
    pub model: &'a str,
}

/// Sorts a response body into verdict / reported error / malformed.
///
/// A verdict needs a non-empty `heading`, a numeric `percentage`, a string
/// `brief_info` and an array of `sources`; `reasoning` defaults to empty.
/// An `error` field wins over everything else. Anything else is malformed
/// and gets logged for diagnostics.
pub fn classify_response(value: &Value) -> AnalysisReply {
    if let Some(error) = value.get("error").filter(|v| !v.is_null()) {
        return AnalysisReply::BackendError(field_text(error));
    }

    let heading = value
        .get("heading")
        .and_then(Value::as_str)
        .filter(|heading| !heading.is_empty());
    let percentage = value.get("percentage").and_then(Value::as_f64);
    let brief_info = value.get("brief_info").and_then(Value::as_str);
    let sources = value.get("sources").and_then(Value::as_array);

    match (heading, percentage, brief_info, sources) {
        (Some(heading), Some(percentage), Some(brief_info), Some(sources)) => {
            AnalysisReply::Verdict(VerdictPayload {
                heading: heading.to_string(),
                percentage,
                brief_info: brief_info.to_string(),
                reasoning: value
                    .get("reasoning")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                sources: sources.iter().map(field_text).collect(),
            })
        }
        _ => {
            client_warn!("Unexpected analysis payload: {value}");
            AnalysisReply::Malformed
        }
    }
}

fn field_text(value: &Value) -> String {
    match value.as_str() {
        Some(text) => text.to_string(),
        None => value.to_string(),
    }
}
