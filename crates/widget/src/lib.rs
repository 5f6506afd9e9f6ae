//! The interactive layer of `icy_menu`.
//!
//! A [`Root`] owns the state of a single menu and hands a [`Context`] down to
//! its descendants. Items register themselves through that context while they
//! are mounted ([`Item::mount`]), and the trigger and the panel translate key
//! presses into menu actions ([`button`] and [`panel`]).
//!
//! The root also runs the effects of the menu: it closes the menu when the
//! host reports an [`Interaction`] outside of it, and it moves focus to the
//! first item when the menu opens.
//!
//! ```
//! use icy_menu_widget::{Item, Root};
//! use icy_menu_widget::core::Action;
//!
//! let root = Root::new(Some("file-menu"));
//!
//! let open = Item::new().value("open");
//! let save = Item::new().value("save");
//!
//! let _open = open.mount(&root.context());
//! let _save = save.mount(&root.context());
//!
//! root.dispatch(Action::OpenMenu);
//!
//! assert_eq!(root.active_value().as_deref(), Some("open"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_menu_core as core;

pub mod button;
pub mod children;
pub mod context;
pub mod event;
pub mod item;
pub mod keyboard;
pub mod monitor;
pub mod panel;
pub mod settings;

mod controller;

pub use children::{Children, RenderArgs};
pub use context::Context;
pub use controller::Root;
pub use item::{Item, Registration, Selection};
pub use keyboard::Key;
pub use monitor::Interaction;
pub use settings::{AutoFocus, Settings};
