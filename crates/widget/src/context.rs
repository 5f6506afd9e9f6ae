//! Share the state of a menu with its descendants.
use crate::Settings;
use crate::controller::Controller;
use crate::core::store;
use crate::core::{Action, Error, State};
use crate::monitor::Interaction;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// The `(state, dispatch)` pair of a menu.
///
/// Every descendant of a menu root (its trigger, its panel and its items)
/// receives a clone of the [`Context`] of that root. Separate roots never
/// share anything.
#[derive(Clone)]
pub struct Context {
    inner: Rc<Inner>,
}

struct Inner {
    controller: RefCell<Controller>,
    queue: RefCell<VecDeque<Action>>,
    draining: Cell<bool>,
}

impl Context {
    pub(crate) fn new(controller: Controller) -> Self {
        Self {
            inner: Rc::new(Inner {
                controller: RefCell::new(controller),
                queue: RefCell::new(VecDeque::new()),
                draining: Cell::new(false),
            }),
        }
    }

    /// Returns a snapshot of the current [`State`].
    pub fn state(&self) -> State {
        self.inner.controller.borrow().state().clone()
    }

    /// Returns the [`Settings`] of the menu.
    pub fn settings(&self) -> Settings {
        self.inner.controller.borrow().settings()
    }

    /// Dispatches an [`Action`] to the menu.
    ///
    /// Actions dispatched while another one is being processed, e.g. from a
    /// focus callback of the host, are queued and processed in order once
    /// the current one has settled.
    pub fn dispatch(&self, action: Action) {
        self.inner.queue.borrow_mut().push_back(action);

        if self.inner.draining.replace(true) {
            return;
        }

        let _draining = Draining(&self.inner);

        let limit = self.settings().settle_limit;
        let mut follow_ups = 0;

        while let Some(action) = self.next_action() {
            let target = self.inner.controller.borrow_mut().apply(action);

            if let Some(item) = target {
                store::forward_focus(&item);
            }

            let Some(follow_up) = self.inner.controller.borrow_mut().settle() else {
                continue;
            };

            if follow_ups < limit {
                follow_ups += 1;
                self.inner.queue.borrow_mut().push_back(follow_up);
            } else {
                log::warn!("{}", Error::SettleLimit(limit));
            }
        }
    }

    /// Moves input focus back to the trigger of the menu.
    pub fn focus_trigger(&self) {
        let trigger = self.state().trigger.and_then(|trigger| trigger.upgrade());

        if let Some(trigger) = trigger {
            trigger.focus();
        }
    }

    pub(crate) fn is_outside(&self, interaction: Interaction) -> bool {
        self.inner.controller.borrow().is_outside(interaction)
    }

    pub(crate) fn is_monitoring(&self) -> bool {
        self.inner.controller.borrow().is_monitoring()
    }

    pub(crate) fn teardown(&self) {
        self.inner.queue.borrow_mut().clear();
        self.inner.controller.borrow_mut().teardown();
    }

    fn next_action(&self) -> Option<Action> {
        self.inner.queue.borrow_mut().pop_front()
    }
}

/// Clears the draining flag when a dispatch ends, even by unwinding.
///
/// Actions still queued by a dispatch that panicked are discarded.
struct Draining<'a>(&'a Inner);

impl Drop for Draining<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.0.queue.borrow_mut().clear();
        }

        self.0.draining.set(false);
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
