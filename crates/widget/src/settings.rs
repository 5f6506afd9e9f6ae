//! Configure the behavior of a menu.

/// When the controller moves focus to the first item on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoFocus {
    /// Whenever the registry or the open state changes while the menu is
    /// open and has items.
    ///
    /// Items registering while the menu is open reset the active item to the
    /// first one, even if the user already navigated.
    #[default]
    EveryChange,

    /// Only when the menu opens, or when the first item registers while the
    /// menu is open.
    OnOpen,

    /// Never. Hosts dispatch focus requests themselves.
    Never,
}

/// The settings of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// When to focus the first item automatically.
    pub auto_focus: AutoFocus,

    /// Whether the escape key closes the menu.
    pub close_on_escape: bool,

    /// Whether selecting an item closes the menu.
    pub close_on_select: bool,

    /// Whether the trigger receives input focus again when the menu is closed
    /// from the keyboard or by selecting an item.
    pub restore_focus: bool,

    /// The maximum amount of automatic focus requests processed while
    /// settling a single dispatch.
    pub settle_limit: usize,
}

impl Settings {
    /// The default amount of automatic focus requests per dispatch.
    pub const DEFAULT_SETTLE_LIMIT: usize = 32;

    /// Sets the [`AutoFocus`] strategy.
    pub fn auto_focus(mut self, auto_focus: AutoFocus) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    /// Sets whether the escape key closes the menu.
    pub fn close_on_escape(mut self, close_on_escape: bool) -> Self {
        self.close_on_escape = close_on_escape;
        self
    }

    /// Sets whether selecting an item closes the menu.
    pub fn close_on_select(mut self, close_on_select: bool) -> Self {
        self.close_on_select = close_on_select;
        self
    }

    /// Sets whether focus returns to the trigger after closing.
    pub fn restore_focus(mut self, restore_focus: bool) -> Self {
        self.restore_focus = restore_focus;
        self
    }

    /// Sets the maximum amount of automatic focus requests per dispatch.
    pub fn settle_limit(mut self, settle_limit: usize) -> Self {
        self.settle_limit = settle_limit;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_focus: AutoFocus::default(),
            close_on_escape: true,
            close_on_select: true,
            restore_focus: true,
            settle_limit: Self::DEFAULT_SETTLE_LIMIT,
        }
    }
}
