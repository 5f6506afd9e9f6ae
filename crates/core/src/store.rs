//! Hold the state of a menu and apply actions to it.
use crate::item::Descriptor;
use crate::state::{self, Action, State};

/// The owner of the canonical [`State`] of a menu.
///
/// Every [`Action`] goes through the pure [`state::transition`]. The only
/// side effect happens right after a focus action: the native element of the
/// newly active item receives input focus.
#[derive(Debug, Default)]
pub struct Store {
    state: State,
}

impl Store {
    /// Creates a new [`Store`] with the given initial [`State`].
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// Returns the current [`State`].
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Applies the given [`Action`] and forwards input focus to the newly
    /// active item, if the action was a focus request.
    pub fn dispatch(&mut self, action: Action) {
        if let Some(item) = self.apply(action) {
            forward_focus(&item);
        }
    }

    /// Applies the given [`Action`] without touching any native element.
    ///
    /// Returns the item that must receive input focus as a consequence of
    /// the action. Callers that hold the [`Store`] behind a lock can release
    /// it before calling [`forward_focus`].
    #[must_use]
    pub fn apply(&mut self, action: Action) -> Option<Descriptor> {
        log::trace!("Menu action: {action:?}");

        let forwards_focus = matches!(action, Action::Focus { .. });

        self.state = state::transition(&self.state, action);

        if forwards_focus {
            self.state.active().cloned()
        } else {
            None
        }
    }
}

/// Moves input focus to the native element of the given item.
pub fn forward_focus(item: &Descriptor) {
    if item.focus() {
        log::debug!("Menu focus forwarded to {}", item.id);
    }
}
