//! The state of a menu and its transition function.
use crate::error::Error;
use crate::focus::{self, Focus, Trigger};
use crate::handle::{self, Handle};
use crate::item::{self, Descriptor};

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use std::fmt;
use std::rc::{Rc, Weak};

/// Whether the popup of a menu is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuState {
    /// The popup is shown.
    Open,
    /// The popup is hidden.
    #[default]
    Closed,
}

/// The complete state of a menu.
///
/// A [`State`] is never mutated. Every [`Action`] produces a new one through
/// [`transition`], so older snapshots stay valid for comparison.
#[derive(Clone, Default)]
pub struct State {
    /// Whether the popup is shown.
    pub menu_state: MenuState,
    /// The element that toggles the menu.
    pub trigger: Option<Weak<dyn Handle>>,
    /// A stable id of the trigger element, if any.
    pub trigger_id: Option<SmolStr>,
    /// The element that contains the items.
    pub list: Option<Weak<dyn Handle>>,
    /// The registered items, in registration order.
    pub items: Rc<[Descriptor]>,
    /// The index of the active item in `items`, if any.
    pub active_item: Option<usize>,
    /// Why the active item became active.
    pub activation_trigger: Trigger,
}

impl State {
    /// Creates the initial [`State`] of a menu: closed, without items.
    pub fn new(trigger_id: Option<&str>) -> Self {
        Self {
            trigger_id: trigger_id.map(SmolStr::new),
            ..Self::default()
        }
    }

    /// Returns whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.menu_state == MenuState::Open
    }

    /// Returns the [`Descriptor`] of the active item, if any.
    pub fn active(&self) -> Option<&Descriptor> {
        self.items.get(self.active_item?)
    }

    /// Returns the position of the item with the given id.
    pub fn position(&self, id: &item::Id) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Checks whether the given [`Action`] honors the contract of the menu.
    pub fn check(&self, action: &Action) -> Result<(), Error> {
        match action {
            Action::Register(descriptor) if self.position(&descriptor.id).is_some() => {
                Err(Error::DuplicateItem(descriptor.id.clone()))
            }
            _ => Ok(()),
        }
    }

    /// Returns whether both states are equal in all observable fields.
    pub fn same_as(&self, other: &Self) -> bool {
        self.menu_state == other.menu_state
            && self.active_item == other.active_item
            && self.activation_trigger == other.activation_trigger
            && self.trigger_id == other.trigger_id
            && same_handle(self.trigger.as_ref(), other.trigger.as_ref())
            && same_handle(self.list.as_ref(), other.list.as_ref())
            && self.items.len() == other.items.len()
            && self.items.iter().zip(other.items.iter()).all(|(a, b)| a.same_as(b))
    }

    /// Returns whether the items of both states are the same snapshot.
    pub fn same_items(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }

    /// Verifies the invariants of the [`State`]:
    ///
    /// - item ids are unique,
    /// - the active index points into `items`,
    /// - a closed menu has no active item.
    pub fn is_consistent(&self) -> bool {
        let mut ids = FxHashSet::default();

        self.items.iter().all(|item| ids.insert(&item.id))
            && self.active_item.is_none_or(|index| index < self.items.len())
            && (self.is_open() || self.active_item.is_none())
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("menu_state", &self.menu_state)
            .field("trigger_id", &self.trigger_id)
            .field("items", &self.items)
            .field("active_item", &self.active_item)
            .field("activation_trigger", &self.activation_trigger)
            .finish_non_exhaustive()
    }
}

fn same_handle(a: Option<&Weak<dyn Handle>>, b: Option<&Weak<dyn Handle>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => handle::same(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// A request to change the [`State`] of a menu.
#[derive(Debug, Clone)]
pub enum Action {
    /// Shows the popup.
    OpenMenu,
    /// Hides the popup and clears the active item.
    CloseMenu,
    /// Appends an item to the registry.
    Register(Descriptor),
    /// Removes the item with the given id from the registry.
    Unregister(item::Id),
    /// Moves the active item.
    ///
    /// While the menu is closed, only the activation trigger is updated.
    Focus {
        /// Where to move.
        focus: Focus,
        /// Why; [`Trigger::Other`] when absent.
        trigger: Option<Trigger>,
    },
    /// Attaches the element that toggles the menu.
    SetTrigger(Option<Weak<dyn Handle>>),
    /// Attaches the element that contains the items.
    SetList(Option<Weak<dyn Handle>>),
}

impl Action {
    /// Creates an [`Action::Register`] for the given item cell.
    pub fn register(id: item::Id, data: &item::Cell) -> Self {
        Self::Register(Descriptor::new(id, data))
    }

    /// Creates an [`Action::Focus`] without a trigger.
    pub fn focus(focus: Focus) -> Self {
        Self::Focus {
            focus,
            trigger: None,
        }
    }

    /// Creates an [`Action::Focus`] caused by the given [`Trigger`].
    pub fn focus_with(focus: Focus, trigger: Trigger) -> Self {
        Self::Focus {
            focus,
            trigger: Some(trigger),
        }
    }
}

/// Produces the next [`State`] of a menu.
///
/// # Panics
///
/// Panics if the [`Action`] violates the contract of the menu, i.e. when an
/// item id is registered twice.
pub fn transition(state: &State, action: Action) -> State {
    if let Err(error) = state.check(&action) {
        panic!("{error}");
    }

    let next = match action {
        Action::OpenMenu => {
            if state.is_open() {
                return state.clone();
            }

            State {
                menu_state: MenuState::Open,
                ..state.clone()
            }
        }
        Action::CloseMenu => {
            if !state.is_open() {
                return state.clone();
            }

            State {
                menu_state: MenuState::Closed,
                active_item: None,
                ..state.clone()
            }
        }
        Action::Register(descriptor) => State {
            items: state
                .items
                .iter()
                .cloned()
                .chain(std::iter::once(descriptor))
                .collect(),
            ..state.clone()
        },
        Action::Unregister(id) => {
            let Some(removed) = state.position(&id) else {
                return state.clone();
            };

            State {
                items: state
                    .items
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| *index != removed)
                    .map(|(_, item)| item.clone())
                    .collect(),
                active_item: reconcile(state.active_item, removed),
                ..state.clone()
            }
        }
        Action::Focus { focus, trigger } => {
            // A closed menu never has an active item.
            let active_item = if state.is_open() {
                focus::resolve(&state.items, state.active_item, &focus).apply(state.active_item)
            } else {
                None
            };

            State {
                active_item,
                activation_trigger: trigger.unwrap_or_default(),
                ..state.clone()
            }
        }
        Action::SetTrigger(trigger) => State {
            trigger,
            ..state.clone()
        },
        Action::SetList(list) => State {
            list,
            ..state.clone()
        },
    };

    debug_assert!(next.is_consistent(), "inconsistent menu state: {next:?}");

    next
}

/// Keeps the active index on the same item after the item at `removed` is
/// gone. If the active item itself is removed, nothing is active anymore.
fn reconcile(active: Option<usize>, removed: usize) -> Option<usize> {
    let active = active?;

    match active.cmp(&removed) {
        std::cmp::Ordering::Less => Some(active),
        std::cmp::Ordering::Equal => {
            log::debug!("Active menu item at {removed} was unregistered");
            None
        }
        std::cmp::Ordering::Greater => Some(active - 1),
    }
}
