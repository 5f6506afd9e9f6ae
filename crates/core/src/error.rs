use crate::item;

/// A contract violation by a user of the menu.
///
/// These are programming defects, not recoverable conditions. The transition
/// function panics with their message instead of ignoring them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An item was registered while another item with the same id exists.
    #[error("menu item `{0}` is already registered")]
    DuplicateItem(item::Id),

    /// The controller kept dispatching actions while settling.
    #[error("menu did not settle after {0} follow-up actions")]
    SettleLimit(usize),
}
