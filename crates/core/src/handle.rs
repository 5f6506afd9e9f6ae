//! References to native, focusable elements owned by the presentation layer.
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{self, AtomicU64};

/// The id of a native element.
///
/// Hosts hand these out for every element that may be the target of an
/// interaction, so the core can ask a [`Handle`] whether a target lies
/// inside of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(u64);

static COUNT: AtomicU64 = AtomicU64::new(1);

impl Id {
    /// Creates a new unique [`Id`].
    pub fn unique() -> Id {
        Id(COUNT.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A native element that can receive input focus.
///
/// The menu never owns a [`Handle`]. It only keeps a [`Weak`] reference to
/// it, so a handle that was dropped by the presentation layer is skipped.
pub trait Handle {
    /// Returns the [`Id`] of the element.
    fn id(&self) -> Id;

    /// Moves input focus to the element.
    fn focus(&self);

    /// Returns whether the given target is this element or one of its
    /// descendants.
    fn contains(&self, target: Id) -> bool {
        self.id() == target
    }
}

/// Creates a non-owning reference to the given [`Handle`].
pub fn downgrade<H>(handle: &Rc<H>) -> Weak<dyn Handle>
where
    H: Handle + 'static,
{
    let handle: Rc<dyn Handle> = Rc::<H>::clone(handle);

    Rc::downgrade(&handle)
}

/// Returns whether two non-owning references point to the same [`Handle`].
pub(crate) fn same(a: &Weak<dyn Handle>, b: &Weak<dyn Handle>) -> bool {
    std::ptr::addr_eq(a.as_ptr(), b.as_ptr())
}
