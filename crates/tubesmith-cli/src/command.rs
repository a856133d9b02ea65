//! Parsing of lines typed at the chat prompt.

/// A line entered at the chat prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything that is not a slash command is a topic
    Topic(String),
    Videos,
    Show(String),
    Profile,
    Help,
    Logout,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('/') else {
            return Command::Topic(line.to_string());
        };

        let mut parts = rest.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next().map(str::trim).unwrap_or_default();

        match name.as_str() {
            "videos" | "v" => Command::Videos,
            "show" | "s" if !arg.is_empty() => Command::Show(arg.to_string()),
            "profile" | "p" => Command::Profile,
            "help" | "h" | "?" => Command::Help,
            "logout" => Command::Logout,
            "quit" | "q" | "exit" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

pub const HELP_TEXT: &str = "\
Type a topic to generate a video about it, or one of:
  /videos        list videos generated this session
  /show <id>     show a video's title, script, and thumbnail size
  /profile       show your account and video count
  /logout        sign out and clear this session's videos
  /quit          exit";
