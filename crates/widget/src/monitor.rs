//! Detect interactions that happen outside of an open menu.
use crate::core::handle::{self, Handle};

use std::rc::Weak;

/// A pointer or focus event reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// A pointer was pressed on the given element.
    Pointer(handle::Id),
    /// The given element received input focus.
    Focus(handle::Id),
}

impl Interaction {
    /// Returns the element the interaction targets.
    pub fn target(self) -> handle::Id {
        match self {
            Interaction::Pointer(target) | Interaction::Focus(target) => target,
        }
    }
}

/// A live subscription of a [`Monitor`].
pub struct Subscription {
    excluded: Vec<Weak<dyn Handle>>,
}

impl Subscription {
    /// Returns whether the [`Interaction`] happened outside of every excluded
    /// element.
    pub fn is_outside(&self, interaction: Interaction) -> bool {
        let target = interaction.target();

        !self
            .excluded
            .iter()
            .filter_map(Weak::upgrade)
            .any(|handle| handle.contains(target))
    }

    fn excludes(&self, handles: &[Weak<dyn Handle>]) -> bool {
        self.excluded.len() == handles.len()
            && self
                .excluded
                .iter()
                .zip(handles)
                .all(|(a, b)| std::ptr::addr_eq(a.as_ptr(), b.as_ptr()))
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("excluded", &self.excluded.len())
            .finish()
    }
}

/// Watches for interactions outside of a set of elements.
///
/// The monitor only reports anything while it holds a [`Subscription`]. The
/// controller acquires one when the menu opens and releases it when the menu
/// closes or goes away.
#[derive(Debug, Default)]
pub struct Monitor {
    subscription: Option<Subscription>,
}

impl Monitor {
    /// Subscribes or unsubscribes the [`Monitor`].
    ///
    /// While `active`, interactions outside of the `excluded` elements are
    /// reported. Subscribing again with the same elements keeps the current
    /// subscription.
    pub fn sync(&mut self, active: bool, excluded: Vec<Weak<dyn Handle>>) {
        if !active {
            self.release();
            return;
        }

        if self
            .subscription
            .as_ref()
            .is_some_and(|subscription| subscription.excludes(&excluded))
        {
            return;
        }

        log::debug!(
            "Menu monitor subscribed, excluding {} element(s)",
            excluded.len()
        );

        self.subscription = Some(Subscription { excluded });
    }

    /// Drops the current [`Subscription`], if any.
    pub fn release(&mut self) {
        if self.subscription.take().is_some() {
            log::debug!("Menu monitor released");
        }
    }

    /// Returns whether the [`Monitor`] is subscribed.
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Returns whether the [`Interaction`] must close the menu.
    ///
    /// Always `false` while unsubscribed.
    pub fn is_outside(&self, interaction: Interaction) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(|subscription| subscription.is_outside(interaction))
    }
}
