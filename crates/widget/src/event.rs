//! Report whether the menu handled an input event.

/// The status of an input event after being processed by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The event was **NOT** handled by the menu.
    Ignored,

    /// The event was handled and should not reach anything else.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use icy_menu_widget::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// ```
    #[must_use]
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }

    /// Returns whether the event was captured.
    pub fn is_captured(self) -> bool {
        self == Status::Captured
    }
}
