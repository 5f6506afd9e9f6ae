//! Register items with a menu for as long as they are mounted.
//!
//! An [`Item`] owns its capability cell. Mounting it registers the cell with a
//! menu [`Context`] and yields a [`Registration`]; dropping the registration
//! unregisters the item again. Changes to the item, like disabling it, are
//! seen by the menu right away without registering again.
use crate::context::Context;
use crate::core::item::{self, Data};
use crate::core::{Action, Focus, Handle, Trigger};

use std::cell::RefCell;
use std::rc::Rc;

/// An item of a menu.
#[derive(Debug, Default)]
pub struct Item {
    data: item::Cell,
}

impl Item {
    /// Creates a new enabled [`Item`] without a value.
    pub fn new() -> Self {
        Self {
            data: Rc::new(RefCell::new(Data::default())),
        }
    }

    /// Sets the value of the [`Item`].
    pub fn value(self, value: impl Into<String>) -> Self {
        self.set_value(Some(value.into()));
        self
    }

    /// Sets whether the [`Item`] is disabled.
    pub fn disabled(self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Sets the focusable element of the [`Item`].
    pub fn handle<H>(self, handle: Rc<H>) -> Self
    where
        H: Handle + 'static,
    {
        self.set_handle(Some(handle));
        self
    }

    /// Replaces the value of the [`Item`].
    pub fn set_value(&self, value: Option<String>) {
        self.data.borrow_mut().value = value;
    }

    /// Enables or disables the [`Item`].
    pub fn set_disabled(&self, disabled: bool) {
        self.data.borrow_mut().disabled = disabled;
    }

    /// Replaces the focusable element of the [`Item`].
    pub fn set_handle(&self, handle: Option<Rc<dyn Handle>>) {
        self.data.borrow_mut().handle = handle;
    }

    /// Returns whether the [`Item`] is disabled.
    pub fn is_disabled(&self) -> bool {
        self.data.borrow().disabled
    }

    /// Returns the capability cell of the [`Item`].
    pub fn cell(&self) -> &item::Cell {
        &self.data
    }

    /// Registers the [`Item`] with the menu under a new unique id.
    #[must_use = "the item is unregistered as soon as the registration is dropped"]
    pub fn mount(&self, context: &Context) -> Registration {
        self.mount_with_id(context, item::Id::unique())
    }

    /// Registers the [`Item`] with the menu under the given id.
    ///
    /// # Panics
    ///
    /// Panics if another item with the same id is registered.
    #[must_use = "the item is unregistered as soon as the registration is dropped"]
    pub fn mount_with_id(&self, context: &Context, id: item::Id) -> Registration {
        context.dispatch(Action::register(id.clone(), &self.data));

        Registration {
            id,
            data: Rc::clone(&self.data),
            context: context.clone(),
        }
    }
}

/// The item that was selected in a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The id of the item.
    pub id: item::Id,
    /// The value of the item at the time it was selected.
    pub value: Option<String>,
}

/// A mounted [`Item`].
///
/// Dropping it unregisters the item from its menu.
#[derive(Debug)]
pub struct Registration {
    id: item::Id,
    data: item::Cell,
    context: Context,
}

impl Registration {
    /// Returns the id the item was registered with.
    pub fn id(&self) -> &item::Id {
        &self.id
    }

    /// Returns whether the item is the active item of the menu.
    pub fn is_active(&self) -> bool {
        self.context
            .state()
            .active()
            .is_some_and(|active| active.id == self.id)
    }

    /// Makes the item active because the pointer moved over it.
    pub fn pointer_enter(&self) {
        if self.data.borrow().disabled || self.is_active() {
            return;
        }

        self.context.dispatch(Action::focus_with(
            Focus::Specific(self.id.clone()),
            Trigger::Pointer,
        ));
    }

    /// Clears the active item because the pointer left it.
    pub fn pointer_leave(&self) {
        if self.data.borrow().disabled || !self.is_active() {
            return;
        }

        self.context
            .dispatch(Action::focus_with(Focus::Nothing, Trigger::Pointer));
    }

    /// Selects the item, e.g. because it was clicked.
    ///
    /// Returns `None` if the item is disabled.
    pub fn activate(&self) -> Option<Selection> {
        if self.data.borrow().disabled {
            return None;
        }

        let selection = Selection {
            id: self.id.clone(),
            value: self.data.borrow().value.clone(),
        };

        select(&self.context);

        Some(selection)
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.context.dispatch(Action::Unregister(self.id.clone()));
    }
}

/// Closes the menu after a selection, according to its settings.
pub(crate) fn select(context: &Context) {
    let settings = context.settings();

    if !settings.close_on_select {
        return;
    }

    context.dispatch(Action::CloseMenu);

    if settings.restore_focus {
        context.focus_trigger();
    }
}
