use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("An account with this email already exists.")]
    DuplicateAccount,

    #[error("Password must be at least {min} characters long.")]
    WeakCredential { min: usize },

    /// Returned for both unknown emails and wrong passwords.
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            AuthError::DuplicateAccount.to_string(),
            "An account with this email already exists."
        );
        assert_eq!(
            AuthError::WeakCredential { min: 8 }.to_string(),
            "Password must be at least 8 characters long."
        );
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password."
        );
    }

    #[test]
    fn test_storage_wraps_anyhow() {
        let err: AuthError = anyhow::anyhow!("disk full").into();
        assert!(matches!(err, AuthError::Storage(_)));
        assert_eq!(err.to_string(), "disk full");
    }
}
