//! Review session state machine
//!
//! Every transition borrows the current snapshot and returns a new one, so the
//! signal holding it is always replaced wholesale. Deferred work (closing the
//! zoomed card, committing a removal) is described by a [`PendingCommit`] per
//! card, whose token must still match when its timer fires.

use std::collections::{BTreeMap, BTreeSet};

use crate::deck::{Card, CardId, Deck};

/// Screen rectangle of a tile at the moment it was opened
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Identifies one scheduled commit; later commits get larger tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

/// What happens when a pending commit fires
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingAction {
    /// Move the card into `remembered` and close it
    Remember,
    /// Close the card
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingCommit {
    pub token: TimerToken,
    pub card: CardId,
    pub action: PendingAction,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewSession {
    flipped: BTreeSet<CardId>,
    selected: Option<CardId>,
    remembered: BTreeSet<CardId>,
    forgotten: BTreeSet<CardId>,
    /// Cards whose removal is scheduled but not yet committed
    removing: BTreeSet<CardId>,
    shaking_key: u64,
    origin: Option<CardRect>,
    /// At most one commit per card
    pending: BTreeMap<CardId, PendingCommit>,
    next_token: u64,
}

impl ReviewSession {
    /// Flip a card without opening it
    pub fn toggle_card(&self, id: CardId) -> Self {
        let mut next = self.clone();
        if !next.flipped.remove(&id) {
            next.flipped.insert(id);
        }
        next
    }

    /// Select a card and show its back face.
    ///
    /// Cancels whatever was pending for this card.
    pub fn open_card(&self, id: CardId, origin: Option<CardRect>) -> Self {
        if self.is_remembered(id) {
            tracing::debug!(card = id, "ignoring open of remembered card");
            return self.clone();
        }

        let mut next = self.clone();
        next.cancel(id);
        next.selected = Some(id);
        next.origin = origin;
        next.flipped.insert(id);
        tracing::debug!(card = id, "opened card");
        next
    }

    /// Clear the selection. Flip state is kept.
    ///
    /// A delayed close of the same card becomes moot; a scheduled removal still lands.
    pub fn close_card(&self) -> Self {
        let mut next = self.clone();
        if let Some(id) = next.selected.take() {
            if matches!(next.pending.get(&id), Some(p) if p.action == PendingAction::Close) {
                next.pending.remove(&id);
            }
        }
        next.origin = None;
        next
    }

    /// Start removing a card; the removal lands when its pending commit fires
    pub fn mark_remembered(&self, id: CardId) -> Self {
        if self.is_remembered(id) {
            return self.clone();
        }

        let mut next = self.clone();
        next.removing.insert(id);
        next.schedule(id, PendingAction::Remember);
        tracing::debug!(card = id, "marked remembered");
        next
    }

    /// Mark a card as not known yet; it stays in the grid and closes after the delay
    pub fn mark_forgotten(&self, id: CardId) -> Self {
        let mut next = self.clone();
        next.forgotten.insert(id);
        next.remembered.remove(&id);
        next.removing.remove(&id);
        next.schedule(id, PendingAction::Close);
        tracing::debug!(card = id, "marked forgotten");
        next
    }

    /// Apply the pending commit holding `token`.
    ///
    /// Returns `None` when that commit was cancelled or replaced.
    pub fn fire(&self, token: TimerToken) -> Option<Self> {
        let commit = self.pending.values().find(|p| p.token == token).copied()?;

        let mut next = self.clone();
        next.pending.remove(&commit.card);
        if next.selected == Some(commit.card) {
            next.selected = None;
            next.origin = None;
        }

        match commit.action {
            PendingAction::Remember => {
                next.remembered.insert(commit.card);
                next.forgotten.remove(&commit.card);
                next.removing.remove(&commit.card);
                next.shaking_key += 1;
                tracing::debug!(card = commit.card, shaking_key = next.shaking_key, "removed card");
            }
            PendingAction::Close => {
                tracing::debug!(card = commit.card, "closed card after delay");
            }
        }
        Some(next)
    }

    fn schedule(&mut self, card: CardId, action: PendingAction) {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        if let Some(previous) = self.pending.insert(card, PendingCommit { token, card, action }) {
            tracing::debug!(?previous, "replaced pending commit");
        }
    }

    fn cancel(&mut self, card: CardId) {
        if let Some(previous) = self.pending.remove(&card) {
            if previous.action == PendingAction::Remember {
                self.removing.remove(&card);
            }
            tracing::debug!(?previous, "cancelled pending commit");
        }
    }

    /// Cards still under review, in deck order
    pub fn visible<'a>(&self, deck: &'a Deck) -> Vec<&'a Card> {
        deck.cards()
            .iter()
            .filter(|card| !self.remembered.contains(&card.id))
            .collect()
    }

    pub fn selected_card<'a>(&self, deck: &'a Deck) -> Option<&'a Card> {
        self.selected.and_then(|id| deck.get(id))
    }

    pub fn selected(&self) -> Option<CardId> {
        self.selected
    }

    pub fn is_flipped(&self, id: CardId) -> bool {
        self.flipped.contains(&id)
    }

    pub fn is_remembered(&self, id: CardId) -> bool {
        self.remembered.contains(&id)
    }

    pub fn is_forgotten(&self, id: CardId) -> bool {
        self.forgotten.contains(&id)
    }

    pub fn remembered_count(&self) -> usize {
        self.remembered.len()
    }

    pub fn is_removing(&self, id: CardId) -> bool {
        self.removing.contains(&id)
    }

    pub fn shaking_key(&self) -> u64 {
        self.shaking_key
    }

    pub fn origin(&self) -> Option<CardRect> {
        self.origin
    }

    pub fn pending_for(&self, id: CardId) -> Option<PendingCommit> {
        self.pending.get(&id).copied()
    }

    /// Every outstanding commit, oldest token first
    pub fn pending_commits(&self) -> Vec<PendingCommit> {
        let mut commits: Vec<PendingCommit> = self.pending.values().copied().collect();
        commits.sort_by_key(|p| p.token);
        commits
    }
}
