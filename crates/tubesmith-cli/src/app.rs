use std::io::{self, Write};

use anyhow::Result;
use tracing::{info, warn};

use tubesmith_core::auth::AuthError;
use tubesmith_core::chat::Sender;
use tubesmith_core::utils::word_count;
use tubesmith_core::{ArtifactGenerator, Config, Conversation, CredentialStore, Session};

use crate::command::{Command, HELP_TEXT};

/// What the main loop should do after handling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    SigningIn,
    Chatting,
    Quitting,
}

pub struct App {
    config: Config,
    store: CredentialStore,
    generator: ArtifactGenerator,
    session: Session,
    conversation: Conversation,
    pub state: AppState,
}

impl App {
    pub fn new(config: Config, store: CredentialStore, generator: ArtifactGenerator) -> Self {
        Self {
            config,
            store,
            generator,
            session: Session::new(),
            conversation: Conversation::new(),
            state: AppState::SigningIn,
        }
    }

    // =========================================================================
    // Sign-in
    // =========================================================================

    /// Prompt until the user signs in, signs up, or quits
    pub fn sign_in_interactive(&mut self) -> Result<()> {
        println!("\n=== Tubesmith ===\n");

        loop {
            let choice = prompt_line("[l]og in, [s]ign up, or [q]uit: ")?;
            let result = match choice.to_lowercase().as_str() {
                "l" | "login" | "" => self.login_interactive(),
                "s" | "signup" => self.sign_up_interactive(),
                "q" | "quit" => {
                    self.state = AppState::Quitting;
                    return Ok(());
                }
                _ => continue,
            };

            match result {
                Ok(()) => return Ok(()),
                Err(e) => println!("{}\n", sign_in_failure_message(e)?),
            }
        }
    }

    fn login_interactive(&mut self) -> Result<()> {
        let email = match self.config.last_email.clone() {
            Some(last) => {
                let input = prompt_line(&format!("Email [{}]: ", last))?;
                if input.is_empty() {
                    last
                } else {
                    input
                }
            }
            None => prompt_line("Email: ")?,
        };
        let password = prompt_password()?;

        let user = self.store.authenticate(&email, &password)?;
        self.finish_sign_in(user);
        Ok(())
    }

    fn sign_up_interactive(&mut self) -> Result<()> {
        let name = prompt_line("Name: ")?;
        let email = prompt_line("Email: ")?;
        let password = prompt_password()?;

        let user = self.store.register(&name, &email, &password)?;
        self.finish_sign_in(user);
        Ok(())
    }

    fn finish_sign_in(&mut self, user: tubesmith_core::User) {
        println!("\nWelcome, {}!\n", user.name);

        self.config.last_email = Some(user.email.clone());
        if let Err(e) = self.config.save() {
            warn!(error = %e, "Failed to save config");
        }

        info!(user_id = %user.id, "Signed in");
        self.session.sign_in(user);
        self.conversation = Conversation::new();
        self.state = AppState::Chatting;
    }

    // =========================================================================
    // Chat
    // =========================================================================

    pub fn print_transcript_tail(&self) {
        if let Some(message) = self.conversation.last_message() {
            print_message(message.sender, &message.text);
        }
    }

    /// Read one line from the user and act on it
    pub async fn chat_turn(&mut self) -> Result<()> {
        let line = prompt_line("> ")?;
        self.handle(Command::parse(&line)).await;
        Ok(())
    }

    async fn handle(&mut self, command: Command) {
        match command {
            Command::Topic(topic) => self.generate(&topic).await,
            Command::Videos => self.list_videos(),
            Command::Show(id) => self.show_video(&id),
            Command::Profile => self.show_profile(),
            Command::Help => println!("{}", HELP_TEXT),
            Command::Logout => {
                self.session.sign_out();
                println!("Signed out.");
                self.state = AppState::SigningIn;
            }
            Command::Quit => self.state = AppState::Quitting,
            Command::Unknown(line) => println!("Unknown command: {} (try /help)", line),
        }
    }

    async fn generate(&mut self, input: &str) {
        let Some(topic) = self.conversation.submit(input) else {
            return;
        };
        self.print_transcript_tail();

        let result = self.generator.generate_artifact(&topic).await;
        self.conversation.complete(result.as_ref());
        if let Ok(video) = result {
            self.session.add_video(video);
        }

        self.print_transcript_tail();
    }

    fn list_videos(&self) {
        let videos = self.session.videos();
        if videos.is_empty() {
            println!("No videos yet. Type a topic to create one.");
            return;
        }
        for video in videos {
            println!("  {}  {}  {}", video.id, video.display_created_at(), video.display_title());
        }
    }

    fn show_video(&self, id: &str) {
        let Some(video) = self.session.find_video(id) else {
            println!("No video with id {}", id);
            return;
        };

        println!("\n{}\n{}\n", video.title, "=".repeat(video.title.chars().count()));
        for paragraph in video.paragraphs() {
            println!("{}\n", paragraph);
        }
        println!(
            "({} words, created {}, thumbnail {} bytes as data URI)\n",
            word_count(&video.script),
            video.display_created_at(),
            video.thumbnail_url.len()
        );
    }

    fn show_profile(&self) {
        let Some(user) = self.session.current_user() else {
            return;
        };
        println!("[{}] {} <{}>", user.initial(), user.name, user.email);
        if let Some(at) = self.session.signed_in_at() {
            println!("Signed in {}", tubesmith_core::utils::format_timestamp(&at));
        }
        println!("{} video(s) this session", self.session.videos().len());
    }
}

/// Message to show for a failed sign-in or sign-up attempt.
/// Only account errors are shown; input failures (closed stdin, unreadable
/// terminal) are returned so the caller stops prompting.
fn sign_in_failure_message(e: anyhow::Error) -> Result<String> {
    match e.downcast_ref::<AuthError>() {
        Some(auth) => {
            if let AuthError::Storage(inner) = auth {
                warn!(error = %inner, "Account storage failure");
            }
            Ok(auth.to_string())
        }
        None => Err(e),
    }
}

fn print_message(sender: Sender, text: &str) {
    println!("{}: {}", sender, text);
}

fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(input.trim().to_string())
}

fn prompt_password() -> io::Result<String> {
    rpassword::prompt_password("Password: ")
}

#[cfg(test)]
mod tests {
    use tubesmith_core::auth::{Argon2SecretHasher, MemoryAccountRepository};
    use tubesmith_core::config::ProviderKind;
    use tubesmith_core::ChatStep;

    use super::*;

    fn app() -> App {
        let config = Config {
            provider: ProviderKind::Mock,
            ..Config::default()
        };
        let hasher = Argon2SecretHasher::with_params(argon2::Params::MIN_M_COST, 1, 1).unwrap();
        let store = CredentialStore::new(Box::new(MemoryAccountRepository::new()), Box::new(hasher));
        let generator = config.artifact_generator(None).unwrap();
        App::new(config, store, generator)
    }

    #[tokio::test]
    async fn test_topic_generates_and_records_video() {
        let mut app = app();
        app.handle(Command::Topic("tide pools".to_string())).await;
        app.handle(Command::Topic("coral reefs".to_string())).await;

        let videos = app.session.videos();
        assert_eq!(videos.len(), 2);
        assert!(videos[0].title.contains("coral reefs"));
        assert_eq!(app.conversation.step(), ChatStep::AwaitingTopic);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let mut app = app();
        app.state = AppState::Chatting;
        app.handle(Command::Topic("tide pools".to_string())).await;

        app.handle(Command::Logout).await;
        assert_eq!(app.state, AppState::SigningIn);
        assert!(app.session.videos().is_empty());
    }

    #[test]
    fn test_account_errors_are_shown_to_user() {
        let message = sign_in_failure_message(AuthError::InvalidCredentials.into()).unwrap();
        assert_eq!(message, "Invalid email or password.");

        let message = sign_in_failure_message(AuthError::WeakCredential { min: 8 }.into()).unwrap();
        assert_eq!(message, "Password must be at least 8 characters long.");
    }

    #[test]
    fn test_input_errors_are_propagated() {
        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "input closed");
        let err = sign_in_failure_message(eof.into()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<io::Error>().map(|e| e.kind()),
            Some(io::ErrorKind::UnexpectedEof)
        );
    }

    #[tokio::test]
    async fn test_quit_sets_state() {
        let mut app = app();
        app.handle(Command::Quit).await;
        assert_eq!(app.state, AppState::Quitting);
    }
}
