use std::collections::BTreeMap;

use api::models::{AnswerSubmission, GradeResult, Question, StartedQuiz};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    Active,
    Submitted,
}

/// One attempt as seen by the client. `Default` is the canonical empty state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    /// Set while a start or submit request is in flight.
    pub loading: bool,
    pub attempt_id: Option<String>,
    pub questions: Vec<Question>,
    pub current_index: usize,
    /// Question id -> selected option key.
    pub answers: BTreeMap<String, String>,
    pub result: Option<GradeResult>,
}

impl QuizState {
    pub fn from_attempt(started: StartedQuiz) -> Self {
        Self {
            attempt_id: Some(started.attempt_id),
            questions: started.questions,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> QuizPhase {
        match (&self.attempt_id, &self.result) {
            (_, Some(_)) => QuizPhase::Submitted,
            (Some(_), None) => QuizPhase::Active,
            (None, None) => QuizPhase::Idle,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn selected_key(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn select(&mut self, question_id: &str, key: &str) {
        self.answers.insert(question_id.to_string(), key.to_string());
    }

    pub fn next(&mut self) {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        }
    }

    pub fn prev(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Answers in question-id order; unanswered questions are omitted.
    pub fn submission(&self) -> Vec<AnswerSubmission> {
        self.answers
            .iter()
            .map(|(question_id, key)| AnswerSubmission {
                question_id: question_id.clone(),
                selected_key: key.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::OptionChoice;

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            category: "Shaving".to_string(),
            text: format!("Question {id}?"),
            options: ["A", "B"]
                .iter()
                .map(|k| OptionChoice {
                    key: k.to_string(),
                    text: format!("Option {k}"),
                })
                .collect(),
        }
    }

    fn active(n: usize) -> QuizState {
        QuizState::from_attempt(StartedQuiz {
            attempt_id: "att-1".into(),
            questions: (1..=n).map(|i| question(&format!("q{i}"))).collect(),
        })
    }

    #[test]
    fn phases_follow_attempt_and_result() {
        let mut state = QuizState::default();
        assert_eq!(state.phase(), QuizPhase::Idle);

        state = active(1);
        assert_eq!(state.phase(), QuizPhase::Active);

        state.result = Some(GradeResult {
            score: 0,
            total: 1,
            feedback: Vec::new(),
        });
        assert_eq!(state.phase(), QuizPhase::Submitted);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut state = active(3);
        state.prev();
        assert_eq!(state.current_index, 0);
        assert!(state.is_first());

        for _ in 0..5 {
            state.next();
        }
        assert_eq!(state.current_index, 2);
        assert!(state.is_last());

        state.prev();
        assert_eq!(state.current_index, 1);
    }

    #[test]
    fn navigation_on_empty_state_stays_at_zero() {
        let mut state = QuizState::default();
        state.next();
        state.prev();
        assert_eq!(state.current_index, 0);
        assert!(state.current_question().is_none());
    }

    #[test]
    fn reselecting_same_key_is_idempotent() {
        let mut once = active(2);
        once.select("q1", "B");

        let mut twice = active(2);
        twice.select("q1", "B");
        twice.select("q1", "B");

        assert_eq!(once, twice);
        assert_eq!(twice.answered_count(), 1);
    }

    #[test]
    fn reselecting_overwrites() {
        let mut state = active(2);
        state.select("q1", "A");
        state.select("q1", "B");
        assert_eq!(state.selected_key("q1"), Some("B"));
    }

    #[test]
    fn submission_skips_unanswered() {
        let mut state = active(3);
        state.select("q3", "A");
        state.select("q1", "B");

        let answers = state.submission();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].question_id, "q1");
        assert_eq!(answers[0].selected_key, "B");
        assert_eq!(answers[1].question_id, "q3");
    }
}
