use chrono::{DateTime, Utc};

use crate::models::{User, Video};

/// Page-lifetime state: the signed-in user and the videos generated so far.
///
/// Nothing here is persisted; signing out or exiting discards it.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
    signed_in_at: Option<DateTime<Utc>>,
    videos: Vec<Video>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.signed_in_at = Some(Utc::now());
    }

    /// Drop the user along with every video generated in this session, so a
    /// later sign-in starts with an empty list
    pub fn sign_out(&mut self) {
        self.user = None;
        self.signed_in_at = None;
        self.videos.clear();
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        self.signed_in_at
    }

    /// Record a freshly generated video; newest first
    pub fn add_video(&mut self, video: Video) {
        self.videos.insert(0, video);
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn find_video(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "1".to_string(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
        }
    }

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            title: format!("Video {}", id),
            script: "S".to_string(),
            thumbnail_url: "data:image/jpeg;base64,".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut session = Session::new();
        assert!(!session.is_authenticated());

        session.sign_in(user());
        assert!(session.is_authenticated());
        assert_eq!(session.current_user().unwrap().email, "a@x.com");
        assert!(session.signed_in_at().is_some());

        session.add_video(video("1"));
        session.sign_out();
        assert!(!session.is_authenticated());
        assert!(session.videos().is_empty());
        assert!(session.signed_in_at().is_none());
    }

    #[test]
    fn test_videos_newest_first() {
        let mut session = Session::new();
        session.add_video(video("1"));
        session.add_video(video("2"));

        let ids: Vec<&str> = session.videos().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_find_video() {
        let mut session = Session::new();
        session.add_video(video("1"));
        assert_eq!(session.find_video("1").unwrap().title, "Video 1");
        assert!(session.find_video("2").is_none());
    }
}
