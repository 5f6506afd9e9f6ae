//! The headless core of `icy_menu`.
//!
//! A menu is a small state machine: it is either [`Open`] or [`Closed`], it
//! keeps an ordered registry of items, and it tracks which of them is active.
//! Navigation requests ([`Focus`]) are resolved against that registry, skipping
//! disabled items without wrapping around.
//!
//! Nothing in this crate renders anything. The presentation layer provides
//! [`Handle`]s for its native elements and the [`Store`] moves input focus to
//! them.
//!
//! [`Open`]: MenuState::Open
//! [`Closed`]: MenuState::Closed
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod focus;
pub mod handle;
pub mod item;
pub mod state;
pub mod store;

mod error;

pub use error::Error;
pub use focus::{Focus, Resolution, Trigger};
pub use handle::Handle;
pub use state::{Action, MenuState, State, transition};
pub use store::Store;
