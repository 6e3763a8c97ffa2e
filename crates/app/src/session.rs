//! Create/edit form session: the current draft plus its lifecycle state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use inventory_core::DomainError;
use inventory_items::{Draft, Item};
use inventory_store::StoreError;

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A required navigation argument was absent; the screen cannot be built.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The session already reached `Submitted` or `Discarded`.
    #[error("session is closed")]
    Closed,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Lifecycle of a form session.
///
/// `Valid` and `Invalid` are the two sub-states of "editing"; they are
/// recomputed after every change. `Submitted` and `Discarded` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Empty,
    Valid,
    Invalid,
    Submitted,
    Discarded,
}

impl SessionState {
    fn for_draft(draft: &Draft) -> Self {
        if draft.is_valid() {
            SessionState::Valid
        } else {
            SessionState::Invalid
        }
    }

    pub fn is_editing(self) -> bool {
        matches!(self, SessionState::Valid | SessionState::Invalid)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Submitted | SessionState::Discarded)
    }
}

/// Owns one draft for the lifetime of a create/edit interaction.
///
/// The draft is only ever replaced wholesale through [`FormSession::update`],
/// so every transition is a single observable step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    draft: Draft,
    state: SessionState,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// A fresh session over an empty draft.
    pub fn new() -> Self {
        Self {
            draft: Draft::default(),
            state: SessionState::Empty,
        }
    }

    /// A session that starts from existing data (e.g. a loaded item).
    pub fn from_draft(draft: Draft) -> Self {
        let state = SessionState::for_draft(&draft);
        Self { draft, state }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the submit action should be enabled.
    pub fn is_entry_valid(&self) -> bool {
        self.state == SessionState::Valid
    }

    /// Replace the draft and recompute validity.
    pub fn update(&mut self, draft: Draft) -> SessionResult<SessionState> {
        self.ensure_open()?;
        self.state = SessionState::for_draft(&draft);
        self.draft = draft;
        tracing::debug!(state = ?self.state, "form session updated");
        Ok(self.state)
    }

    /// Abandon the session. Does nothing once the session is terminal.
    pub fn discard(&mut self) {
        if !self.state.is_terminal() {
            self.state = SessionState::Discarded;
            tracing::debug!("form session discarded");
        }
    }

    /// The item to hand to storage. Only a `Valid` session yields one.
    pub fn take_for_submit(&self) -> SessionResult<Item> {
        self.ensure_open()?;
        if self.state != SessionState::Valid {
            self.draft.ensure_valid()?;
            return Err(DomainError::validation("form is not valid").into());
        }
        Ok(self.draft.to_item())
    }

    /// Record that storage accepted the submitted item.
    pub(crate) fn mark_submitted(&mut self) {
        self.state = SessionState::Submitted;
        tracing::debug!("form session submitted");
    }

    fn ensure_open(&self) -> SessionResult<()> {
        if self.state.is_terminal() {
            Err(SessionError::Closed)
        } else {
            Ok(())
        }
    }
}
