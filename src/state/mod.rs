//! The normalized state core: one slice reducer per entity mapping, a root
//! reducer fanning each action across them, and the store that owns the
//! current snapshot.

pub mod models;

mod options;
mod questions;
mod response;
mod signin;
mod surveys;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::action::Action;

use models::{AnswerMap, OptionGroups, QuestionMap, Session, SurveyMap};

/// One immutable snapshot of the application state. Each slice sits behind
/// an `Arc`, so a slice untouched by a transition is the same allocation
/// afterwards and cloning a snapshot is cheap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub surveys: Arc<SurveyMap>,
    pub questions: Arc<QuestionMap>,
    pub options: Arc<OptionGroups>,
    pub response: Arc<AnswerMap>,
    pub responses: Arc<AnswerMap>,
    pub aggregates: Arc<AnswerMap>,
    pub signin: Arc<Session>,
}

/// Applies one action. Every slice reducer sees every action and returns its
/// input allocation unchanged for actions it does not recognize, so an
/// unhandled action leaves the whole state reference-identical.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    AppState {
        surveys: surveys::reduce(&state.surveys, action),
        questions: questions::reduce(&state.questions, action),
        options: options::reduce(&state.options, action),
        response: response::reduce(&state.response, action),
        responses: response::reduce_responses(&state.responses, action),
        aggregates: response::reduce_aggregates(&state.aggregates, action),
        signin: signin::reduce(&state.signin, action),
    }
}

/// The explicit state container. Actions apply serially through `&mut self`,
/// so the single-writer discipline is a compile-time property; readers only
/// ever get immutable snapshots.
pub struct Store {
    tx: watch::Sender<AppState>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        let (tx, _) = watch::channel(initial);
        Store { tx }
    }

    /// Applies the action, publishes the new snapshot to all subscribers and
    /// returns it.
    pub fn dispatch(&mut self, action: &Action) -> AppState {
        let next = reduce(&self.state(), action);
        self.tx.send_replace(next.clone());
        next
    }

    /// The current snapshot.
    pub fn state(&self) -> AppState {
        self.tx.borrow().clone()
    }

    /// A notification stream; receivers wake on every dispatch and observe
    /// snapshots, never internals.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.tx.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new(AppState::default())
    }
}
