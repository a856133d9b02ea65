use serde::{Deserialize, Serialize};

/// A registered account as it is persisted in the account store.
///
/// `password_hash` holds an Argon2id PHC string. It never leaves the
/// credential store; callers only ever see the `User` projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "passwordHash")]
    pub password_hash: String,
}

impl Account {
    /// Case-insensitive match on the account's natural key
    pub fn matches_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }

    /// Project the account into a session user, dropping the secret
    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// The signed-in user held by a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// First letter of the name, for compact profile display
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            id: "1700000000000".to_string(),
            name: "Ada".to_string(),
            email: "Ada@Example.com".to_string(),
            password_hash: "$argon2id$v=19$stub".to_string(),
        }
    }

    #[test]
    fn test_matches_email_ignores_case() {
        let account = account();
        assert!(account.matches_email("ada@example.com"));
        assert!(account.matches_email("ADA@EXAMPLE.COM"));
        assert!(!account.matches_email("ada@example.org"));
    }

    #[test]
    fn test_to_user_drops_secret() {
        let user = account().to_user();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], "1700000000000");
        assert_eq!(json["email"], "Ada@Example.com");
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn test_account_serializes_hash_field_name() {
        let json = serde_json::to_value(account()).unwrap();
        assert_eq!(json["passwordHash"], "$argon2id$v=19$stub");
    }

    #[test]
    fn test_user_initial() {
        assert_eq!(account().to_user().initial(), 'A');
        let nameless = User {
            id: "1".to_string(),
            name: String::new(),
            email: "x@y.z".to_string(),
        };
        assert_eq!(nameless.initial(), '?');
    }
}
