//! Keys the menu reacts to.
use smol_str::SmolStr;

/// A key press, as far as the menu is concerned.
///
/// Hosts translate their native key events into a [`Key`] before handing
/// them to the [`button`](crate::button) or the [`panel`](crate::panel).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// The up arrow.
    ArrowUp,
    /// The down arrow.
    ArrowDown,
    /// The home key.
    Home,
    /// The end key.
    End,
    /// The page up key.
    PageUp,
    /// The page down key.
    PageDown,
    /// The enter key.
    Enter,
    /// The space bar.
    Space,
    /// The escape key.
    Escape,
    /// The tab key.
    Tab,
    /// Any other key producing text.
    Character(SmolStr),
}

impl Key {
    /// Creates a [`Key`] from the text it produces.
    ///
    /// A single space maps to [`Key::Space`].
    pub fn character(text: &str) -> Self {
        match text {
            " " => Key::Space,
            _ => Key::Character(SmolStr::new(text)),
        }
    }
}
