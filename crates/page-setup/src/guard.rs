//! Re-entrancy guard for edits that trigger cross-field recomputation
//!
//! An edit to one field (font size, top margin, ...) recomputes a partner
//! field, and writing the partner would normally recompute the first field
//! again. The guard lets the outermost edit run and suppresses the nested
//! ones until it finishes.

use std::cell::Cell;
use std::rc::Rc;

/// Whether a top-level edit is currently settling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Updating,
}

/// Shared `Idle -> Updating -> Idle` state for one editor
#[derive(Debug, Default)]
pub struct UpdateGuard {
    state: Rc<Cell<EditState>>,
}

impl UpdateGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditState {
        self.state.get()
    }

    /// Enter `Updating`. Returns `None` if an edit is already in progress.
    ///
    /// The token does not borrow the guard, so the caller stays free to
    /// mutate the editor that owns it while the token is alive.
    pub fn try_begin(&self) -> Option<UpdateToken> {
        if self.state.get() == EditState::Updating {
            log::trace!("nested update suppressed");
            return None;
        }
        self.state.set(EditState::Updating);
        Some(UpdateToken {
            state: Rc::clone(&self.state),
        })
    }
}

/// Proof that an update is running. Dropping it returns the guard to `Idle`.
#[derive(Debug)]
#[must_use = "the update ends as soon as the token is dropped"]
pub struct UpdateToken {
    state: Rc<Cell<EditState>>,
}

impl Drop for UpdateToken {
    fn drop(&mut self) {
        self.state.set(EditState::Idle);
    }
}
