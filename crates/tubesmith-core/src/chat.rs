//! Scripted conversation around video generation.
//!
//! The conversation is a two-state machine owned by the shell:
//! `AwaitingTopic -> Generating -> AwaitingTopic`. It only tracks the
//! transcript and whether a request is outstanding; the shell performs the
//! actual `generate_artifact` call between `submit` and `complete`.

use std::fmt;

use crate::generator::GenerationError;
use crate::models::Video;
use crate::utils::next_stamp;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the AI Video Automator! What topic would you like to create a video about today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatStep {
    AwaitingTopic,
    Generating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "You"),
            Sender::Bot => write!(f, "Bot"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub is_loading: bool,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>, is_loading: bool) -> Self {
        Self {
            id: next_stamp().id,
            sender,
            text: text.into(),
            is_loading,
        }
    }
}

#[derive(Debug)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    step: ChatStep,
}

impl Conversation {
    /// Start a conversation with the welcome message
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(Sender::Bot, WELCOME_MESSAGE, false)],
            step: ChatStep::AwaitingTopic,
        }
    }

    pub fn step(&self) -> ChatStep {
        self.step
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Accept a topic from the user.
    ///
    /// Returns the trimmed topic to generate for, or `None` when the input is
    /// blank or a generation is already in flight.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let topic = input.trim();
        if topic.is_empty() || self.step == ChatStep::Generating {
            return None;
        }

        self.messages.push(ChatMessage::new(Sender::User, topic, false));
        self.messages.push(ChatMessage::new(
            Sender::Bot,
            format!(
                "Excellent! Generating a video about \"{}\". This might take a moment...",
                topic
            ),
            true,
        ));
        self.step = ChatStep::Generating;
        Some(topic.to_string())
    }

    /// Record the outcome of the outstanding generation and wait for the
    /// next topic. Does nothing unless a generation is in flight.
    pub fn complete(&mut self, result: Result<&Video, &GenerationError>) {
        if self.step != ChatStep::Generating {
            return;
        }

        let text = match result {
            Ok(video) => format!(
                "All done! I've created a video titled \"{}\". You can find it in your videos list.",
                video.title
            ),
            Err(e) => format!(
                "Oops! Something went wrong: {} Please try another topic.",
                e
            ),
        };

        match self.messages.last_mut() {
            Some(last) if last.sender == Sender::Bot => {
                last.text = text;
                last.is_loading = false;
            }
            _ => self.messages.push(ChatMessage::new(Sender::Bot, text, false)),
        }
        self.step = ChatStep::AwaitingTopic;
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn video() -> Video {
        Video {
            id: "1".to_string(),
            title: "Bees Are Amazing".to_string(),
            script: "S".to_string(),
            thumbnail_url: "data:image/jpeg;base64,".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_starts_with_welcome() {
        let chat = Conversation::new();
        assert_eq!(chat.step(), ChatStep::AwaitingTopic);
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].text, WELCOME_MESSAGE);
        assert_eq!(chat.messages()[0].sender, Sender::Bot);
    }

    #[test]
    fn test_submit_moves_to_generating() {
        let mut chat = Conversation::new();
        assert_eq!(chat.submit("  bees  "), Some("bees".to_string()));
        assert_eq!(chat.step(), ChatStep::Generating);

        let last = chat.last_message().unwrap();
        assert!(last.is_loading);
        assert!(last.text.contains("\"bees\""));
        assert_eq!(chat.messages()[1].sender, Sender::User);
    }

    #[test]
    fn test_blank_and_reentrant_submissions_ignored() {
        let mut chat = Conversation::new();
        assert_eq!(chat.submit("   "), None);
        assert_eq!(chat.messages().len(), 1);

        chat.submit("bees");
        let before = chat.messages().len();
        assert_eq!(chat.submit("wasps"), None);
        assert_eq!(chat.messages().len(), before);
    }

    #[test]
    fn test_complete_success_returns_to_awaiting() {
        let mut chat = Conversation::new();
        chat.submit("bees");
        chat.complete(Ok(&video()));

        assert_eq!(chat.step(), ChatStep::AwaitingTopic);
        let last = chat.last_message().unwrap();
        assert!(!last.is_loading);
        assert!(last.text.contains("Bees Are Amazing"));
        assert_eq!(chat.messages().len(), 3);
    }

    #[test]
    fn test_complete_failure_returns_to_awaiting() {
        let mut chat = Conversation::new();
        chat.submit("bees");
        chat.complete(Err(&GenerationError::MalformedResponse));

        assert_eq!(chat.step(), ChatStep::AwaitingTopic);
        let last = chat.last_message().unwrap();
        assert!(last.text.starts_with("Oops! Something went wrong: The AI returned"));
        assert!(last.text.ends_with("Please try another topic."));

        assert_eq!(chat.submit("wasps"), Some("wasps".to_string()));
    }

    #[test]
    fn test_complete_without_submission_is_ignored() {
        let mut chat = Conversation::new();
        chat.complete(Ok(&video()));
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].text, WELCOME_MESSAGE);
    }
}
