//! Parsing of the text model's reply.
//!
//! Models asked for JSON frequently wrap it in a Markdown code fence, with or
//! without a language tag. The fence is stripped before parsing.

use serde::Deserialize;

/// The three fields the content prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoContent {
    #[serde(rename = "videoTitle")]
    pub video_title: String,
    #[serde(rename = "videoScript")]
    pub video_script: String,
    #[serde(rename = "thumbnailPrompt")]
    pub thumbnail_prompt: String,
}

const FENCE: &str = "```";

/// Remove a surrounding code fence, if the whole (trimmed) text is one.
///
/// Accepts an optional word-character language tag after the opening fence.
/// Text that is not a complete fenced block is returned trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(after_open) = trimmed.strip_prefix(FENCE) else {
        return trimmed;
    };
    let Some(inner) = after_open.strip_suffix(FENCE) else {
        return trimmed;
    };

    let body = inner.trim_start_matches(|c: char| c.is_alphanumeric() || c == '_');
    let body = body.trim();
    if body.is_empty() {
        return trimmed;
    }
    body
}

/// Strip any fence and parse the reply into `VideoContent`.
pub fn parse_video_content(text: &str) -> Result<VideoContent, serde_json::Error> {
    serde_json::from_str(strip_code_fence(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const OBJECT: &str = r#"{"videoTitle":"T","videoScript":"S","thumbnailPrompt":"P"}"#;

    #[test]
    fn test_strip_json_fence_yields_inner_object() {
        let fenced = format!("```json\n{}\n```", OBJECT);
        assert_eq!(strip_code_fence(&fenced), OBJECT);
    }

    #[test]
    fn test_strip_fence_without_tag() {
        let fenced = format!("```\n{}\n```", OBJECT);
        assert_eq!(strip_code_fence(&fenced), OBJECT);
    }

    #[test]
    fn test_strip_fence_on_one_line() {
        let fenced = format!("```{}```", OBJECT);
        assert_eq!(strip_code_fence(&fenced), OBJECT);
    }

    #[test]
    fn test_unfenced_text_is_trimmed() {
        let padded = format!("  \n{}\n\t", OBJECT);
        assert_eq!(strip_code_fence(&padded), OBJECT);
    }

    #[test]
    fn test_unterminated_fence_left_alone() {
        let text = format!("```json\n{}", OBJECT);
        assert_eq!(strip_code_fence(&text), text);
    }

    #[test]
    fn test_parse_fenced_reply() {
        let content = parse_video_content(&format!("```json\n{}\n```", OBJECT)).unwrap();
        assert_eq!(
            content,
            VideoContent {
                video_title: "T".to_string(),
                video_script: "S".to_string(),
                thumbnail_prompt: "P".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_garbage_and_missing_keys() {
        assert!(parse_video_content("Sorry, I can't help with that.").is_err());
        assert!(parse_video_content(r#"{"videoTitle":"T"}"#).is_err());
        assert!(parse_video_content("```json\n```").is_err());
    }
}
