//! Client-side quiz attempt: pure state plus the session driving it against
//! the quiz API.

mod session;
mod state;

pub use session::QuizSession;
pub use state::{QuizPhase, QuizState};
