//! Question bank editor form state.

use api::models::{BankQuestion, OptionChoice, QuestionPayload};

use crate::core::categories::CATEGORIES;

pub const OPTION_KEYS: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    /// Set while editing an existing question.
    pub editing_id: Option<String>,
    pub category: String,
    pub text: String,
    /// Option texts in `OPTION_KEYS` order.
    pub options: [String; 4],
    pub correct_key: String,
    pub explanation: String,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self {
            editing_id: None,
            category: CATEGORIES.first().copied().unwrap_or_default().to_string(),
            text: String::new(),
            options: Default::default(),
            correct_key: OPTION_KEYS[0].to_string(),
            explanation: String::new(),
        }
    }
}

impl QuestionDraft {
    /// Load an existing question; options are re-keyed into A-D order and
    /// keys outside A-D are dropped.
    pub fn from_question(question: &BankQuestion) -> Self {
        let mut options: [String; 4] = Default::default();
        for (slot, key) in options.iter_mut().zip(OPTION_KEYS) {
            if let Some(option) = question.options.iter().find(|o| o.key == key) {
                slot.clone_from(&option.text);
            }
        }

        Self {
            editing_id: Some(question.id.clone()),
            category: question.category.clone(),
            text: question.text.clone(),
            options,
            correct_key: question.correct_key.clone(),
            explanation: question.explanation.clone().unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn can_save(&self) -> bool {
        self.text.trim().chars().count() > 3 && self.options.iter().all(|o| !o.trim().is_empty())
    }

    pub fn set_option(&mut self, index: usize, text: String) {
        if let Some(slot) = self.options.get_mut(index) {
            *slot = text;
        }
    }

    /// Blank form for the next question. The category is kept so a run of
    /// questions in one category needs no re-selection.
    pub fn reset(&mut self) {
        *self = Self {
            category: std::mem::take(&mut self.category),
            ..Self::default()
        };
    }

    pub fn payload(&self) -> QuestionPayload {
        QuestionPayload {
            category: self.category.clone(),
            text: self.text.clone(),
            options: OPTION_KEYS
                .iter()
                .zip(&self.options)
                .map(|(key, text)| OptionChoice {
                    key: key.to_string(),
                    text: text.clone(),
                })
                .collect(),
            correct_key: self.correct_key.clone(),
            explanation: (!self.explanation.is_empty()).then(|| self.explanation.clone()),
        }
    }
}
