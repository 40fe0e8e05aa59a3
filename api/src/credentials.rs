use std::cell::RefCell;

use crate::models::{AuthResponse, AuthUser};
use crate::ApiError;

/// Persisted session credentials. Requests read the token at send time, so
/// a login or logout takes effect on the next call without rebuilding the client.
pub trait CredentialStore {
    fn token(&self) -> Option<String>;
    fn user(&self) -> Option<AuthUser>;
    fn save(&self, auth: &AuthResponse) -> Result<(), ApiError>;
    fn clear(&self);
}

/// In-process store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    token: RefCell<Option<String>>,
    user: RefCell<Option<AuthUser>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
            user: RefCell::new(None),
        }
    }
}

impl CredentialStore for MemoryCredentials {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn user(&self) -> Option<AuthUser> {
        self.user.borrow().clone()
    }

    fn save(&self, auth: &AuthResponse) -> Result<(), ApiError> {
        self.token.replace(Some(auth.token.clone()));
        self.user.replace(Some(auth.user.clone()));
        Ok(())
    }

    fn clear(&self) {
        self.token.replace(None);
        self.user.replace(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn save_then_clear() {
        let store = MemoryCredentials::new();
        assert!(store.token().is_none());

        store
            .save(&AuthResponse {
                token: "tok".into(),
                user: AuthUser {
                    id: "u1".into(),
                    email: "a@b.c".into(),
                    name: "Ana".into(),
                    role: Role::Student,
                },
            })
            .unwrap();
        assert_eq!(store.token().as_deref(), Some("tok"));
        assert_eq!(store.user().map(|u| u.name), Some("Ana".to_string()));

        store.clear();
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }
}
