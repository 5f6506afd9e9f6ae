//! Produce the content of a menu.

/// The arguments handed to the content of a menu when it is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderArgs {
    /// Whether the menu is open.
    pub open: bool,
}

/// The content of a menu.
///
/// Either fixed content, or a function of the [`RenderArgs`].
pub enum Children<'a, T> {
    /// Content that does not depend on the state of the menu.
    Fixed(T),
    /// Content produced from the state of the menu.
    Render(Box<dyn Fn(RenderArgs) -> T + 'a>),
}

impl<'a, T> Children<'a, T> {
    /// Creates [`Children`] produced by the given function.
    pub fn from_fn(f: impl Fn(RenderArgs) -> T + 'a) -> Self {
        Self::Render(Box::new(f))
    }

    /// Produces the content for the given [`RenderArgs`].
    pub fn render(&self, args: RenderArgs) -> T
    where
        T: Clone,
    {
        match self {
            Children::Fixed(content) => content.clone(),
            Children::Render(render) => render(args),
        }
    }
}

impl<T> From<T> for Children<'_, T> {
    fn from(content: T) -> Self {
        Self::Fixed(content)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Children<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Children::Fixed(content) => f.debug_tuple("Fixed").field(content).finish(),
            Children::Render(_) => f.write_str("Render(..)"),
        }
    }
}
