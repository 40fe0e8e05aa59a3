use std::rc::Rc;

use api::{ApiError, QuizApi};
use tracing::{debug, warn};

use super::state::QuizState;
use crate::core::shared::{ObserverId, Shared};

/// Owns the active attempt and routes every mutation through the quiz
/// transitions. Clones share the same attempt.
///
/// Requests are not serialized: two overlapping `start` (or `submit`) calls
/// both run, and whichever response lands last decides the state. A
/// transition whose future is dropped mid-request clears `loading`.
#[derive(Clone)]
pub struct QuizSession {
    api: Rc<dyn QuizApi>,
    state: Shared<QuizState>,
}

impl PartialEq for QuizSession {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl QuizSession {
    pub fn new(api: Rc<dyn QuizApi>) -> Self {
        Self {
            api,
            state: Shared::default(),
        }
    }

    pub fn state(&self) -> QuizState {
        self.state.get()
    }

    pub fn subscribe(&self, observer: impl Fn(&QuizState) + 'static) -> ObserverId {
        self.state.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: ObserverId) {
        self.state.unsubscribe(id);
    }

    /// Fetch a fresh attempt. On success the previous attempt is discarded
    /// wholesale; on failure only the loading flag is cleared.
    pub async fn start(&self, category: Option<&str>) -> Result<(), ApiError> {
        self.state.update(|s| s.loading = true);
        let pending = self.state.pending(clear_loading);

        match self.api.start_quiz(category).await {
            Ok(started) => {
                pending.disarm();
                debug!(
                    attempt = %started.attempt_id,
                    questions = started.questions.len(),
                    "quiz started"
                );
                self.state.replace(QuizState::from_attempt(started));
                Ok(())
            }
            Err(err) => {
                warn!(%err, "failed to start quiz");
                drop(pending);
                Err(err)
            }
        }
    }

    pub fn select(&self, question_id: &str, key: &str) {
        self.state.update(|s| s.select(question_id, key));
    }

    pub fn next(&self) {
        self.state.update(QuizState::next);
    }

    pub fn prev(&self) {
        self.state.update(QuizState::prev);
    }

    /// Grade the current answers. Without an attempt, or once a result is
    /// stored, this returns `Ok(())` without calling the API.
    pub async fn submit(&self) -> Result<(), ApiError> {
        let snapshot = self.state.with(|s| match (&s.attempt_id, &s.result) {
            (Some(id), None) => Some((id.clone(), s.submission())),
            _ => None,
        });
        let Some((attempt_id, answers)) = snapshot else {
            return Ok(());
        };

        self.state.update(|s| s.loading = true);
        let pending = self.state.pending(clear_loading);

        match self.api.submit_quiz(&attempt_id, &answers).await {
            Ok(result) => {
                pending.disarm();
                debug!(
                    attempt = %attempt_id,
                    score = result.score,
                    total = result.total,
                    "quiz graded"
                );
                self.state.update(|s| {
                    s.loading = false;
                    s.result = Some(result);
                });
                Ok(())
            }
            Err(err) => {
                warn!(%err, attempt = %attempt_id, "failed to submit quiz");
                drop(pending);
                Err(err)
            }
        }
    }

    pub fn reset(&self) {
        self.state.replace(QuizState::default());
    }
}

fn clear_loading(state: &mut QuizState) {
    state.loading = false;
}
