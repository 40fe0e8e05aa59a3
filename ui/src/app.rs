//! Application services shared through Dioxus context, plus hooks that
//! mirror session state into signals.

use std::rc::Rc;

use api::ApiClient;
use dioxus::prelude::*;

use crate::auth::{AuthSession, AuthState};
use crate::core::{platform, storage};
use crate::quiz::{QuizSession, QuizState};

/// One per running app. Every clone talks to the same sessions.
#[derive(Clone)]
pub struct AppServices {
    pub client: ApiClient,
    pub auth: AuthSession,
    pub quiz: QuizSession,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        self.auth == other.auth && self.quiz == other.quiz
    }
}

impl AppServices {
    pub fn new(client: ApiClient) -> Self {
        let api = Rc::new(client.clone());
        Self {
            auth: AuthSession::new(api.clone(), client.credentials()),
            quiz: QuizSession::new(api),
            client,
        }
    }

    /// Client configured for the running platform, with its persisted credentials.
    pub fn from_platform() -> Self {
        Self::new(ApiClient::new(
            platform::api_config(),
            storage::platform_credentials(),
        ))
    }
}

/// Call once near the root, before any view asks for services.
pub fn use_app_services() -> AppServices {
    use_context_provider(AppServices::from_platform)
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

/// Quiz state as a signal, refreshed on every session transition.
pub fn use_quiz_state() -> Signal<QuizState> {
    let quiz = use_services().quiz;
    let state = use_signal(|| quiz.state());

    let id = use_hook({
        let quiz = quiz.clone();
        move || quiz.subscribe(move |next| set_if_alive(state, next.clone()))
    });
    use_drop(move || quiz.unsubscribe(id));

    state
}

pub fn use_auth_state() -> Signal<AuthState> {
    let auth = use_services().auth;
    let state = use_signal(|| auth.state());

    let id = use_hook({
        let auth = auth.clone();
        move || auth.subscribe(move |next| set_if_alive(state, next.clone()))
    });
    use_drop(move || auth.unsubscribe(id));

    state
}

/// Write to a component's signal if that component is still mounted.
pub(crate) fn set_if_alive<T: 'static>(mut signal: Signal<T>, next: T) {
    if let Ok(mut slot) = signal.try_write() {
        *slot = next;
    }
}
