//! Signal owner for the review session
//!
//! The session lives in a signal created at the app root. Deferred commits are
//! spawned from the root scope too, so closing the overlay that scheduled one
//! does not drop its timer.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use super::session::{CardRect, PendingCommit, ReviewSession, TimerToken};
use crate::deck::CardId;

/// Copyable handle shared through context
#[derive(Clone, Copy, PartialEq)]
pub struct ReviewHandle {
    session: Signal<ReviewSession>,
}

/// Create the session signal, watch for pending commits and provide the handle
pub fn use_review_provider(delay: Duration) -> ReviewHandle {
    let session = use_signal(ReviewSession::default);
    let pending = use_memo(move || session.read().pending_commits());
    // Highest token that already has a timer
    let scheduled = use_hook(|| Rc::new(Cell::new(None::<TimerToken>)));

    use_effect(move || {
        for commit in pending() {
            if scheduled.get().is_some_and(|last| commit.token <= last) {
                continue;
            }
            scheduled.set(Some(commit.token));
            spawn(fire_after(session, commit, delay));
        }
    });

    use_context_provider(|| ReviewHandle { session })
}

async fn fire_after(mut session: Signal<ReviewSession>, commit: PendingCommit, delay: Duration) {
    tokio::time::sleep(delay).await;

    let fired = session.peek().fire(commit.token);
    match fired {
        Some(next) => session.set(next),
        None => tracing::debug!(?commit, "pending commit was superseded"),
    }
}

impl ReviewHandle {
    /// Current snapshot; subscribes the calling component
    pub fn snapshot(&self) -> ReviewSession {
        self.session.read().clone()
    }

    /// Current snapshot without subscribing
    pub fn peek(&self) -> ReviewSession {
        self.session.peek().clone()
    }

    pub fn remembered_count(&self) -> usize {
        self.session.read().remembered_count()
    }

    pub fn toggle(&self, id: CardId) {
        self.apply(|s| s.toggle_card(id));
    }

    pub fn open(&self, id: CardId, origin: Option<CardRect>) {
        self.apply(|s| s.open_card(id, origin));
    }

    pub fn close(&self) {
        self.apply(ReviewSession::close_card);
    }

    pub fn remember(&self, id: CardId) {
        self.apply(|s| s.mark_remembered(id));
    }

    pub fn forget(&self, id: CardId) {
        self.apply(|s| s.mark_forgotten(id));
    }

    fn apply(&self, transition: impl FnOnce(&ReviewSession) -> ReviewSession) {
        let mut session = self.session;
        let next = transition(&session.peek());
        session.set(next);
    }
}
