/// Maximum title length requested from the model
pub const MAX_TITLE_CHARS: usize = 70;

/// Requested script length range, in words
pub const SCRIPT_WORDS_MIN: usize = 150;
pub const SCRIPT_WORDS_MAX: usize = 200;

/// Build the single prompt asking for title, script, and thumbnail prompt
/// as one JSON object.
pub fn content_prompt(topic: &str) -> String {
    format!(
        r#"You are an AI assistant for a YouTube content creator. Your task is to generate content for a short video based on the topic: "{topic}".

Please generate the following three items and return them in a single JSON object with the keys "videoTitle", "videoScript", and "thumbnailPrompt":

1. "videoTitle": A catchy, SEO-friendly YouTube title for this story. Keep it under {max_title} characters.
2. "videoScript": A {min_words}-{max_words} word script for the video. It should have a clear introduction, body, and conclusion. Start the script with a hook to grab the viewer's attention. Write in a conversational, engaging tone suitable for a YouTube audience. Use paragraph breaks (\n) for readability.
3. "thumbnailPrompt": A descriptive, dynamic, and visually interesting prompt for an AI image generator to create a thumbnail for this video. Focus on strong imagery, vibrant colors, and clear subjects. Do not include any text in the prompt. For example: "Dramatic shot of a futuristic robot assembly line, sparks flying, with a glowing blue CPU at the center, cinematic lighting, hyper-realistic."

Return ONLY the JSON object."#,
        topic = topic,
        max_title = MAX_TITLE_CHARS,
        min_words = SCRIPT_WORDS_MIN,
        max_words = SCRIPT_WORDS_MAX,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_topic_and_keys() {
        let prompt = content_prompt("deep sea creatures");
        assert!(prompt.contains("based on the topic: \"deep sea creatures\"."));
        for key in ["\"videoTitle\"", "\"videoScript\"", "\"thumbnailPrompt\""] {
            assert!(prompt.contains(key), "missing {}", key);
        }
        assert!(prompt.contains("under 70 characters"));
        assert!(prompt.contains("150-200 word script"));
        assert!(prompt.ends_with("Return ONLY the JSON object."));
    }

    #[test]
    fn test_prompt_keeps_literal_newline_escape() {
        // The model is told to use the two-character sequence \n
        assert!(content_prompt("x").contains(r"paragraph breaks (\n)"));
    }
}
