use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use eframe::egui;
use snake_common::engine::session::SessionOutcome;
use snake_common::games::snake::GameSnapshot;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Hand-off point between the session thread and the UI thread.
#[derive(Clone, Default)]
pub struct SharedState {
    snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    outcome: Arc<Mutex<Option<SessionOutcome>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_context(&self, context: egui::Context) {
        *lock(&self.context) = Some(context);
    }

    pub fn request_repaint(&self) {
        if let Some(context) = lock(&self.context).as_ref() {
            context.request_repaint();
        }
    }

    pub fn update_snapshot(&self, snapshot: GameSnapshot) {
        *lock(&self.snapshot) = Some(snapshot);
    }

    pub fn latest_snapshot(&self) -> Option<GameSnapshot> {
        lock(&self.snapshot).clone()
    }

    pub fn set_outcome(&self, outcome: SessionOutcome) {
        *lock(&self.outcome) = Some(outcome);
    }

    /// Each finished round is handed to the UI exactly once.
    pub fn take_outcome(&self) -> Option<SessionOutcome> {
        lock(&self.outcome).take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::games::snake::GameEndReason;

    #[test]
    fn test_outcome_is_taken_once() {
        let state = SharedState::new();
        let other = state.clone();
        other.set_outcome(SessionOutcome {
            score: 40,
            is_new_high_score: true,
            reason: GameEndReason::SelfCollision,
        });

        assert_eq!(state.take_outcome().map(|o| o.score), Some(40));
        assert_eq!(state.take_outcome(), None);
    }

    #[test]
    fn test_repaint_without_context_is_noop() {
        let state = SharedState::new();
        state.request_repaint();
        assert!(state.latest_snapshot().is_none());
    }
}
