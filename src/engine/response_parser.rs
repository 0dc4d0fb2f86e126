use crate::engine::prompt_builder::{INTERPRETATION_HEADER, STORY_MARKER};

pub const PARSE_FALLBACK_NOTICE: &str = "Could not parse properly. Full response:\n\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    pub interpretation: String,
    pub story: String,
}

/// Splits a model response at the first story marker.
///
/// Without a marker the whole response goes to the interpretation,
/// behind [`PARSE_FALLBACK_NOTICE`], and the story is empty.
pub fn split_response(raw: &str) -> ParsedResponse {
    let Some((before, after)) = raw.split_once(STORY_MARKER) else {
        return ParsedResponse {
            interpretation: format!("{PARSE_FALLBACK_NOTICE}{raw}"),
            story: String::new(),
        };
    };

    let before = before.trim_start();
    let interpretation = before.strip_prefix(INTERPRETATION_HEADER).unwrap_or(before);

    ParsedResponse {
        interpretation: interpretation.trim().to_string(),
        story: after.trim().to_string(),
    }
}
