//! Resolve navigation requests into the index of the next active item.
use crate::item::{self, Descriptor};

/// A navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    /// The first enabled item.
    First,
    /// The nearest enabled item before the active one.
    Previous,
    /// The nearest enabled item after the active one.
    Next,
    /// The last enabled item.
    Last,
    /// The item with the given id, disabled or not.
    Specific(item::Id),
    /// No item at all.
    Nothing,
}

/// Why the active item became active.
///
/// Renderers use it to only show a focus ring for keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Trigger {
    /// A pointer hovered the item.
    Pointer,
    /// Anything else, usually the keyboard.
    #[default]
    Other,
}

/// The outcome of resolving a [`Focus`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The item at the given index becomes active.
    Index(usize),
    /// No item is active anymore.
    Clear,
    /// There is no candidate; the active item stays as it is.
    Unchanged,
}

impl Resolution {
    /// Applies the [`Resolution`] to the current active index.
    pub fn apply(self, active: Option<usize>) -> Option<usize> {
        match self {
            Resolution::Index(index) => Some(index),
            Resolution::Clear => None,
            Resolution::Unchanged => active,
        }
    }
}

/// Resolves the given [`Focus`] request against the ordered `items`.
///
/// Disabled items keep their position in the sequence but are never chosen
/// by positional requests. Navigation does not wrap around: asking for the
/// next item while the last enabled one is active leaves it active. The same
/// holds for every positional request without a candidate, `First` and `Last`
/// included.
pub fn resolve(items: &[Descriptor], active: Option<usize>, focus: &Focus) -> Resolution {
    let enabled = |(_, item): &(usize, &Descriptor)| !item.is_disabled();

    let found = match focus {
        Focus::First => items.iter().enumerate().find(enabled),
        Focus::Last => items.iter().enumerate().rev().find(enabled),
        Focus::Next => {
            let start = active.map_or(0, |active| active + 1);

            items.iter().enumerate().skip(start).find(enabled)
        }
        Focus::Previous => {
            // Without an active item, there is no upper bound.
            let end = active.unwrap_or(items.len()).min(items.len());

            items[..end].iter().enumerate().rev().find(enabled)
        }
        Focus::Specific(id) => items.iter().enumerate().find(|(_, item)| &item.id == id),
        Focus::Nothing => return Resolution::Clear,
    };

    found.map_or(Resolution::Unchanged, |(index, _)| Resolution::Index(index))
}
