use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use api::models::{
    AnswerSubmission, AttemptDetail, AttemptSummary, FeedbackItem, GradeResult, OptionChoice,
    Question, StartedQuiz,
};
use api::{ApiError, QuizApi};
use async_trait::async_trait;
use futures::executor::{block_on, LocalPool};
use futures::task::LocalSpawnExt;
use futures_channel::oneshot;
use ui::quiz::{QuizPhase, QuizSession, QuizState};

type Reply<T> = oneshot::Receiver<Result<T, ApiError>>;

/// Quiz API whose responses are handed out by the test, one channel per call.
#[derive(Default)]
struct ScriptedApi {
    starts: RefCell<HashMap<Option<String>, VecDeque<Reply<StartedQuiz>>>>,
    submits: RefCell<VecDeque<Reply<GradeResult>>>,
    submitted: RefCell<Vec<(String, Vec<AnswerSubmission>)>>,
}

impl ScriptedApi {
    fn script_start(&self, category: Option<&str>, reply: Reply<StartedQuiz>) {
        self.starts
            .borrow_mut()
            .entry(category.map(str::to_string))
            .or_default()
            .push_back(reply);
    }

    fn script_submit(&self, reply: Reply<GradeResult>) {
        self.submits.borrow_mut().push_back(reply);
    }
}

fn canceled() -> ApiError {
    ApiError::Storage("reply channel dropped".into())
}

#[async_trait(?Send)]
impl QuizApi for ScriptedApi {
    async fn start_quiz(&self, category: Option<&str>) -> Result<StartedQuiz, ApiError> {
        let reply = self
            .starts
            .borrow_mut()
            .get_mut(&category.map(str::to_string))
            .and_then(VecDeque::pop_front)
            .expect("unscripted start_quiz call");
        reply.await.unwrap_or_else(|_| Err(canceled()))
    }

    async fn submit_quiz(
        &self,
        attempt_id: &str,
        answers: &[AnswerSubmission],
    ) -> Result<GradeResult, ApiError> {
        self.submitted
            .borrow_mut()
            .push((attempt_id.to_string(), answers.to_vec()));
        let reply = self
            .submits
            .borrow_mut()
            .pop_front()
            .expect("unscripted submit_quiz call");
        reply.await.unwrap_or_else(|_| Err(canceled()))
    }

    async fn history(&self) -> Result<Vec<AttemptSummary>, ApiError> {
        unimplemented!("not used by the session")
    }

    async fn attempt_detail(&self, _: &str, _: bool) -> Result<AttemptDetail, ApiError> {
        unimplemented!("not used by the session")
    }
}

fn ready<T>(value: Result<T, ApiError>) -> Reply<T> {
    let (tx, rx) = oneshot::channel();
    let _ = tx.send(value);
    rx
}

fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        message: Some("boom".into()),
    }
}

fn question(id: &str) -> Question {
    Question {
        id: id.into(),
        category: "Infection Control".into(),
        text: format!("Prompt for {id}"),
        options: ["A", "B", "C", "D"]
            .iter()
            .map(|k| OptionChoice {
                key: k.to_string(),
                text: format!("choice {k}"),
            })
            .collect(),
    }
}

fn started(attempt_id: &str, ids: &[&str]) -> StartedQuiz {
    StartedQuiz {
        attempt_id: attempt_id.into(),
        questions: ids.iter().map(|id| question(id)).collect(),
    }
}

fn graded(score: u32, total: u32) -> GradeResult {
    GradeResult {
        score,
        total,
        feedback: vec![FeedbackItem {
            question_id: "q1".into(),
            category: "Infection Control".into(),
            text: "Prompt for q1".into(),
            options: Vec::new(),
            selected_key: "B".into(),
            correct_key: "B".into(),
            explanation: None,
            is_correct: true,
        }],
    }
}

fn session() -> (Rc<ScriptedApi>, QuizSession) {
    let api = Rc::new(ScriptedApi::default());
    let session = QuizSession::new(api.clone());
    (api, session)
}

#[test]
fn two_question_attempt_ends_submitted_with_result() {
    let (api, session) = session();
    api.script_start(None, ready(Ok(started("att-1", &["q1", "q2"]))));
    api.script_submit(ready(Ok(graded(1, 2))));

    block_on(session.start(None)).unwrap();
    session.select("q1", "B");
    session.next();
    session.select("q2", "A");
    block_on(session.submit()).unwrap();

    let state = session.state();
    assert_eq!(state.phase(), QuizPhase::Submitted);
    assert_eq!(state.result, Some(graded(1, 2)));
    assert!(!state.loading);

    let submitted = api.submitted.borrow();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].0, "att-1");
    let mut pairs: Vec<_> = submitted[0]
        .1
        .iter()
        .map(|a| (a.question_id.as_str(), a.selected_key.as_str()))
        .collect();
    pairs.sort();
    assert_eq!(pairs, [("q1", "B"), ("q2", "A")]);
}

#[test]
fn start_passes_category_and_resets_progress() {
    let (api, session) = session();
    api.script_start(None, ready(Ok(started("att-1", &["q1", "q2"]))));
    api.script_start(Some("Shaving"), ready(Ok(started("att-2", &["q9"]))));

    block_on(session.start(None)).unwrap();
    session.select("q1", "A");
    session.next();

    block_on(session.start(Some("Shaving"))).unwrap();
    let state = session.state();
    assert_eq!(state.attempt_id.as_deref(), Some("att-2"));
    assert_eq!(state.current_index, 0);
    assert!(state.answers.is_empty());
    assert_eq!(state.questions.len(), 1);
}

#[test]
fn failed_start_keeps_previous_attempt_and_can_be_retried() {
    let (api, session) = session();
    api.script_start(None, ready(Ok(started("att-1", &["q1"]))));
    api.script_start(None, ready(Err(server_error())));
    api.script_start(None, ready(Ok(started("att-2", &["q2"]))));

    block_on(session.start(None)).unwrap();
    session.select("q1", "C");
    let before = session.state();

    let err = block_on(session.start(None)).unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert_eq!(session.state(), before);

    block_on(session.start(None)).unwrap();
    assert_eq!(session.state().attempt_id.as_deref(), Some("att-2"));
}

#[test]
fn failed_submit_stays_active_and_retry_succeeds() {
    let (api, session) = session();
    api.script_start(None, ready(Ok(started("att-1", &["q1", "q2"]))));
    api.script_submit(ready(Err(server_error())));
    api.script_submit(ready(Ok(graded(2, 2))));

    block_on(session.start(None)).unwrap();
    session.select("q1", "B");

    assert!(block_on(session.submit()).is_err());
    let state = session.state();
    assert_eq!(state.phase(), QuizPhase::Active);
    assert!(!state.loading);
    assert_eq!(state.selected_key("q1"), Some("B"));

    block_on(session.submit()).unwrap();
    assert_eq!(session.state().result, Some(graded(2, 2)));
    assert_eq!(api.submitted.borrow().len(), 2);
}

#[test]
fn submit_without_attempt_is_a_no_op() {
    let (api, session) = session();
    block_on(session.submit()).unwrap();
    assert!(api.submitted.borrow().is_empty());
    assert_eq!(session.state(), QuizState::default());
}

#[test]
fn submit_after_result_does_not_regrade() {
    let (api, session) = session();
    api.script_start(None, ready(Ok(started("att-1", &["q1"]))));
    api.script_submit(ready(Ok(graded(0, 1))));

    block_on(session.start(None)).unwrap();
    block_on(session.submit()).unwrap();
    block_on(session.submit()).unwrap();

    assert_eq!(api.submitted.borrow().len(), 1);
}

#[test]
fn unanswered_questions_are_left_out_of_submission() {
    let (api, session) = session();
    api.script_start(None, ready(Ok(started("att-1", &["q1", "q2", "q3"]))));
    api.script_submit(ready(Ok(graded(0, 3))));

    block_on(session.start(None)).unwrap();
    session.select("q2", "D");
    block_on(session.submit()).unwrap();

    let submitted = api.submitted.borrow();
    assert_eq!(submitted[0].1.len(), 1);
    assert_eq!(submitted[0].1[0].question_id, "q2");
}

#[test]
fn navigation_never_leaves_question_range() {
    let (api, session) = session();
    api.script_start(None, ready(Ok(started("att-1", &["q1", "q2"]))));
    block_on(session.start(None)).unwrap();

    session.prev();
    assert_eq!(session.state().current_index, 0);
    session.next();
    session.next();
    session.next();
    assert_eq!(session.state().current_index, 1);
}

#[test]
fn reset_returns_canonical_empty_state_from_any_phase() {
    let (api, session) = session();
    session.reset();
    assert_eq!(session.state(), QuizState::default());

    api.script_start(None, ready(Ok(started("att-1", &["q1", "q2"]))));
    api.script_submit(ready(Ok(graded(1, 2))));
    block_on(session.start(None)).unwrap();
    session.select("q1", "A");
    session.next();
    session.reset();
    assert_eq!(session.state(), QuizState::default());

    api.script_start(None, ready(Ok(started("att-2", &["q1"]))));
    block_on(session.start(None)).unwrap();
    block_on(session.submit()).unwrap();
    session.reset();

    let state = session.state();
    assert_eq!(state, QuizState::default());
    assert_eq!(state.phase(), QuizPhase::Idle);
    assert!(state.attempt_id.is_none());
    assert!(state.questions.is_empty());
    assert_eq!(state.current_index, 0);
    assert!(state.answers.is_empty());
}

#[test]
fn loading_flag_is_visible_while_start_is_in_flight() {
    let (api, session) = session();
    let (tx, rx) = oneshot::channel();
    api.script_start(None, rx);

    let mut pool = LocalPool::new();
    let task = session.clone();
    pool.spawner()
        .spawn_local(async move {
            task.start(None).await.unwrap();
        })
        .unwrap();

    pool.run_until_stalled();
    assert!(session.state().loading);
    assert_eq!(session.state().phase(), QuizPhase::Idle);

    tx.send(Ok(started("att-1", &["q1"]))).unwrap();
    pool.run_until_stalled();
    assert!(!session.state().loading);
    assert_eq!(session.state().phase(), QuizPhase::Active);
}

#[test]
fn overlapping_starts_are_last_write_wins() {
    let (api, session) = session();
    let (first_tx, first_rx) = oneshot::channel();
    let (second_tx, second_rx) = oneshot::channel();
    api.script_start(Some("Shaving"), first_rx);
    api.script_start(Some("Hair Cutting"), second_rx);

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    for category in ["Shaving", "Hair Cutting"] {
        let task = session.clone();
        spawner
            .spawn_local(async move {
                task.start(Some(category)).await.unwrap();
            })
            .unwrap();
    }
    pool.run_until_stalled();
    assert!(session.state().loading);

    // The later request answers first...
    second_tx.send(Ok(started("second", &["h1"]))).unwrap();
    pool.run_until_stalled();
    assert_eq!(session.state().attempt_id.as_deref(), Some("second"));
    assert!(!session.state().loading);

    // ...and is then overwritten by the slower one.
    first_tx.send(Ok(started("first", &["s1", "s2"]))).unwrap();
    pool.run_until_stalled();
    let state = session.state();
    assert_eq!(state.attempt_id.as_deref(), Some("first"));
    assert_eq!(state.questions.len(), 2);
}

#[test]
fn observers_are_notified_of_transitions() {
    let (api, session) = session();
    api.script_start(None, ready(Ok(started("att-1", &["q1"]))));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = session.subscribe(move |state| sink.borrow_mut().push(state.phase()));

    block_on(session.start(None)).unwrap();
    session.unsubscribe(id);
    session.reset();

    // loading=true (still idle), then the fresh attempt.
    assert_eq!(*seen.borrow(), vec![QuizPhase::Idle, QuizPhase::Active]);
}

#[test]
fn abandoned_start_clears_loading_and_allows_retry() {
    let (api, session) = session();
    let (_tx, rx) = oneshot::channel();
    api.script_start(None, rx);

    let mut pool = LocalPool::new();
    let task = session.clone();
    pool.spawner()
        .spawn_local(async move {
            let _ = task.start(None).await;
        })
        .unwrap();
    pool.run_until_stalled();
    assert!(session.state().loading);

    // The page that spawned the request went away.
    drop(pool);
    let state = session.state();
    assert!(!state.loading);
    assert_eq!(state.phase(), QuizPhase::Idle);

    api.script_start(None, ready(Ok(started("att-2", &["q1"]))));
    block_on(session.start(None)).unwrap();
    assert_eq!(session.state().phase(), QuizPhase::Active);
}

#[test]
fn abandoned_submit_clears_loading_and_keeps_answers() {
    let (api, session) = session();
    api.script_start(None, ready(Ok(started("att-1", &["q1"]))));
    block_on(session.start(None)).unwrap();
    session.select("q1", "A");

    let (_tx, rx) = oneshot::channel();
    api.script_submit(rx);
    let mut pool = LocalPool::new();
    let task = session.clone();
    pool.spawner()
        .spawn_local(async move {
            let _ = task.submit().await;
        })
        .unwrap();
    pool.run_until_stalled();
    assert!(session.state().loading);

    drop(pool);
    let state = session.state();
    assert!(!state.loading);
    assert_eq!(state.phase(), QuizPhase::Active);
    assert_eq!(state.selected_key("q1"), Some("A"));
}

#[test]
fn overlapping_submits_are_last_write_wins() {
    let (api, session) = session();
    api.script_start(None, ready(Ok(started("att-1", &["q1", "q2"]))));
    block_on(session.start(None)).unwrap();
    session.select("q1", "B");

    let (first_tx, first_rx) = oneshot::channel();
    let (second_tx, second_rx) = oneshot::channel();
    api.script_submit(first_rx);
    api.script_submit(second_rx);

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    for _ in 0..2 {
        let task = session.clone();
        spawner
            .spawn_local(async move {
                task.submit().await.unwrap();
            })
            .unwrap();
    }
    pool.run_until_stalled();

    // Both requests went out; nothing was deduplicated while in flight.
    assert_eq!(api.submitted.borrow().len(), 2);
    assert!(session.state().loading);

    second_tx.send(Ok(graded(2, 2))).unwrap();
    pool.run_until_stalled();
    assert_eq!(session.state().result, Some(graded(2, 2)));

    first_tx.send(Ok(graded(1, 2))).unwrap();
    pool.run_until_stalled();
    let state = session.state();
    assert_eq!(state.result, Some(graded(1, 2)));
    assert_eq!(state.phase(), QuizPhase::Submitted);
    assert!(!state.loading);
}
