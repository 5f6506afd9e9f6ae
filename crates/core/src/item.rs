//! Menu items as seen by the registry.
//!
//! An item owns its capability [`Cell`] and mutates it in place, e.g. when it
//! becomes disabled. The registry only holds a [`Descriptor`]: the item id plus
//! a [`Weak`] reference to that cell. It never copies the cell or extends its
//! lifetime.
use crate::handle::Handle;

use smol_str::{SmolStr, format_smolstr};

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{self, AtomicU64};

/// The unique id of a registered item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(SmolStr);

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

impl Id {
    /// Creates an [`Id`] from a stable, caller provided string.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id))
    }

    /// Creates a new unique [`Id`].
    pub fn unique() -> Self {
        let n = NEXT_ID.fetch_add(1, atomic::Ordering::Relaxed);

        Self(format_smolstr!("icy_menu.item.{n}"))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The capabilities an item exposes to the menu.
#[derive(Default)]
pub struct Data {
    /// The value of the item, if any.
    pub value: Option<String>,
    /// Whether the item is disabled. Disabled items are never focused.
    pub disabled: bool,
    /// The focusable element of the item, once it has been mounted.
    pub handle: Option<Rc<dyn Handle>>,
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Data")
            .field("value", &self.value)
            .field("disabled", &self.disabled)
            .field("handle", &self.handle.as_ref().map(|handle| handle.id()))
            .finish()
    }
}

/// The shared, mutable capability cell owned by an item.
pub type Cell = Rc<RefCell<Data>>;

/// A registered menu entry.
#[derive(Clone)]
pub struct Descriptor {
    /// The id the item was registered with.
    pub id: Id,
    /// A non-owning reference to the capability cell of the item.
    pub data: Weak<RefCell<Data>>,
}

impl Descriptor {
    /// Creates a [`Descriptor`] for the given [`Cell`].
    pub fn new(id: Id, data: &Cell) -> Self {
        Self {
            id,
            data: Rc::downgrade(data),
        }
    }

    /// Returns whether the item is disabled.
    ///
    /// An item whose cell has already been dropped can't be focused, so it
    /// counts as disabled.
    pub fn is_disabled(&self) -> bool {
        match self.data.upgrade() {
            Some(data) => data.borrow().disabled,
            None => {
                log::warn!("Menu item {} outlived its data, treating it as disabled", self.id);
                true
            }
        }
    }

    /// Returns the current value of the item.
    pub fn value(&self) -> Option<String> {
        self.data.upgrade()?.borrow().value.clone()
    }

    /// Requests input focus for the native element of the item.
    ///
    /// Returns `false` if the item has no live handle.
    pub fn focus(&self) -> bool {
        let Some(data) = self.data.upgrade() else {
            return false;
        };

        // Release the borrow before calling into the host.
        let handle = data.borrow().handle.clone();

        match handle {
            Some(handle) => {
                handle.focus();
                true
            }
            None => false,
        }
    }

    /// Returns whether both descriptors reference the same item.
    pub fn same_as(&self, other: &Self) -> bool {
        self.id == other.id && Weak::ptr_eq(&self.data, &other.data)
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("id", &self.id)
            .field("alive", &(self.data.strong_count() > 0))
            .finish()
    }
}
