//! Signed-in user and token, mirrored from the credential store.
//!
//! Role checks here only decide what the UI shows; the API enforces access.

use std::rc::Rc;

use api::models::{AuthResponse, AuthUser, Role};
use api::{ApiError, AuthApi, CredentialStore};
use tracing::{info, warn};

use crate::core::shared::{ObserverId, Shared};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }
}

#[derive(Clone)]
pub struct AuthSession {
    api: Rc<dyn AuthApi>,
    store: Rc<dyn CredentialStore>,
    state: Shared<AuthState>,
}

impl PartialEq for AuthSession {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl AuthSession {
    /// Starts from whatever the store persisted in an earlier run.
    pub fn new(api: Rc<dyn AuthApi>, store: Rc<dyn CredentialStore>) -> Self {
        let state = AuthState {
            user: store.user(),
            token: store.token(),
            loading: false,
        };
        Self {
            api,
            store,
            state: Shared::new(state),
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    pub fn subscribe(&self, observer: impl Fn(&AuthState) + 'static) -> ObserverId {
        self.state.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: ObserverId) {
        self.state.unsubscribe(id);
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        self.state.update(|s| s.loading = true);
        let pending = self.state.pending(clear_loading);
        let outcome = self.api.login(email, password).await;
        pending.disarm();
        self.finish(outcome)
    }

    /// Self-service sign-up; pass [`Role::default()`] for a student account.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<(), ApiError> {
        self.state.update(|s| s.loading = true);
        let pending = self.state.pending(clear_loading);
        let outcome = self.api.register(name, email, password, role).await;
        pending.disarm();
        self.finish(outcome)
    }

    pub fn logout(&self) {
        self.store.clear();
        self.state.replace(AuthState::default());
        info!("signed out");
    }

    fn finish(&self, outcome: Result<AuthResponse, ApiError>) -> Result<(), ApiError> {
        let auth = match outcome.and_then(|auth| self.store.save(&auth).map(|()| auth)) {
            Ok(auth) => auth,
            Err(err) => {
                warn!(%err, "authentication failed");
                self.state.update(|s| s.loading = false);
                return Err(err);
            }
        };

        info!(user = %auth.user.email, role = auth.user.role.as_str(), "signed in");
        self.state.replace(AuthState {
            user: Some(auth.user),
            token: Some(auth.token),
            loading: false,
        });
        Ok(())
    }
}

fn clear_loading(state: &mut AuthState) {
    state.loading = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::MemoryCredentials;
    use async_trait::async_trait;
    use futures::executor::block_on;

    struct FakeAuth {
        role: Role,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl AuthApi for FakeAuth {
        async fn login(&self, email: &str, _password: &str) -> Result<AuthResponse, ApiError> {
            self.respond("Ana", email, self.role)
        }

        async fn register(
            &self,
            name: &str,
            email: &str,
            _password: &str,
            role: Role,
        ) -> Result<AuthResponse, ApiError> {
            self.respond(name, email, role)
        }
    }

    impl FakeAuth {
        fn respond(&self, name: &str, email: &str, role: Role) -> Result<AuthResponse, ApiError> {
            if self.fail {
                return Err(ApiError::Status {
                    status: 401,
                    message: Some("Invalid credentials".into()),
                });
            }
            Ok(AuthResponse {
                token: "tok-1".into(),
                user: AuthUser {
                    id: "u1".into(),
                    email: email.into(),
                    name: name.into(),
                    role,
                },
            })
        }
    }

    fn session(role: Role, fail: bool) -> (Rc<MemoryCredentials>, AuthSession) {
        let store = Rc::new(MemoryCredentials::new());
        let session = AuthSession::new(Rc::new(FakeAuth { role, fail }), store.clone());
        (store, session)
    }

    #[test]
    fn login_persists_and_updates_state() {
        let (store, session) = session(Role::Admin, false);
        block_on(session.login("ana@example.com", "pw")).unwrap();

        let state = session.state();
        assert!(state.is_signed_in());
        assert!(state.is_admin());
        assert!(!state.loading);
        assert_eq!(store.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn failed_login_clears_loading_and_keeps_store_empty() {
        let (store, session) = session(Role::Student, true);
        let err = block_on(session.login("x@example.com", "bad")).unwrap_err();

        assert_eq!(err.user_message("Failed"), "Invalid credentials");
        assert_eq!(session.state(), AuthState::default());
        assert!(store.token().is_none());
    }

    #[test]
    fn register_defaults_to_student() {
        let (_, session) = session(Role::Admin, false);
        block_on(session.register("Bo", "bo@example.com", "pw", Role::default())).unwrap();
        let state = session.state();
        assert_eq!(state.user.map(|u| u.role), Some(Role::Student));
    }

    struct StalledAuth;

    #[async_trait(?Send)]
    impl AuthApi for StalledAuth {
        async fn login(&self, _email: &str, _password: &str) -> Result<AuthResponse, ApiError> {
            futures::future::pending().await
        }

        async fn register(
            &self,
            _name: &str,
            _email: &str,
            _password: &str,
            _role: Role,
        ) -> Result<AuthResponse, ApiError> {
            futures::future::pending().await
        }
    }

    #[test]
    fn abandoned_login_does_not_leave_loading_set() {
        use futures::executor::LocalPool;
        use futures::task::LocalSpawnExt;

        let session = AuthSession::new(Rc::new(StalledAuth), Rc::new(MemoryCredentials::new()));
        let mut pool = LocalPool::new();
        let task = session.clone();
        pool.spawner()
            .spawn_local(async move {
                let _ = task.login("ana@example.com", "pw").await;
            })
            .unwrap();

        pool.run_until_stalled();
        assert!(session.state().loading);

        drop(pool);
        assert!(!session.state().loading);
        assert!(!session.state().is_signed_in());
    }

    #[test]
    fn hydrates_from_store_and_logout_clears_it() {
        let store = Rc::new(MemoryCredentials::with_token("persisted"));
        let session = AuthSession::new(
            Rc::new(FakeAuth {
                role: Role::Student,
                fail: false,
            }),
            store.clone(),
        );
        assert_eq!(session.state().token.as_deref(), Some("persisted"));
        assert!(!session.state().is_signed_in());

        session.logout();
        assert!(store.token().is_none());
        assert_eq!(session.state(), AuthState::default());
    }
}
