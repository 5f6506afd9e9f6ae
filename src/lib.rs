//! A headless menu and dropdown controller.
//!
//! `icy_menu` implements the interaction model of a menu button without
//! rendering anything: opening and closing, keyboard navigation over an
//! ordered list of items, pointer hover, closing on outside interaction and
//! focusing the first item when the menu opens.
//!
//! The presentation layer describes its elements through [`Handle`]s and
//! reports input to a [`Root`]. In return, it receives the open state of the
//! menu through [`RenderArgs`] and input focus requests through
//! [`Handle::focus`].
//!
//! ```
//! use icy_menu::{Interaction, Item, Key, Root, button, handle, panel};
//!
//! let root = Root::new(None);
//!
//! let copy = Item::new().value("copy");
//! let paste = Item::new().value("paste").disabled(true);
//! let cut = Item::new().value("cut");
//!
//! let _copy = copy.mount(&root.context());
//! let _paste = paste.mount(&root.context());
//! let _cut = cut.mount(&root.context());
//!
//! let _ = button::key_pressed(&root.context(), &Key::ArrowDown);
//! assert_eq!(root.active_value().as_deref(), Some("copy"));
//!
//! let _ = panel::key_pressed(&root.context(), &Key::ArrowDown);
//! assert_eq!(root.active_value().as_deref(), Some("cut"));
//!
//! let _ = root.interaction(Interaction::Pointer(handle::Id::unique()));
//! assert!(!root.is_open());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_menu_core as core;
pub use icy_menu_widget as widget;

pub use crate::core::focus;
pub use crate::core::handle;
pub use crate::core::item;
pub use crate::core::state;
pub use crate::core::{
    Action, Error, Focus, Handle, MenuState, State, Store, Trigger, transition,
};
pub use crate::widget::event;
pub use crate::widget::keyboard;
pub use crate::widget::{button, panel};
pub use crate::widget::{
    AutoFocus, Children, Context, Interaction, Item, Key, Registration, RenderArgs,
    Root, Selection, Settings,
};
