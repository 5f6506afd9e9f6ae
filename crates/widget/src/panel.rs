//! Navigate the items of an open menu with the keyboard.
use crate::context::Context;
use crate::core::{Action, Focus};
use crate::event::Status;
use crate::item::{self, Selection};
use crate::keyboard::Key;

/// The outcome of a key press in the panel of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The key was not handled.
    Ignored,
    /// The key was handled.
    Captured,
    /// The active item was selected.
    Selected(Selection),
}

impl Response {
    /// Returns the event [`Status`] of the [`Response`].
    pub fn status(&self) -> Status {
        match self {
            Response::Ignored => Status::Ignored,
            Response::Captured | Response::Selected(_) => Status::Captured,
        }
    }
}

/// Processes a key press received by the panel of a menu.
///
/// Nothing happens while the menu is closed.
pub fn key_pressed(context: &Context, key: &Key) -> Response {
    let state = context.state();

    if !state.is_open() {
        return Response::Ignored;
    }

    let focus = match key {
        Key::ArrowDown => Focus::Next,
        Key::ArrowUp => Focus::Previous,
        Key::Home | Key::PageUp => Focus::First,
        Key::End | Key::PageDown => Focus::Last,
        Key::Escape => {
            let settings = context.settings();

            if !settings.close_on_escape {
                return Response::Ignored;
            }

            context.dispatch(Action::CloseMenu);

            if settings.restore_focus {
                context.focus_trigger();
            }

            return Response::Captured;
        }
        Key::Enter | Key::Space => {
            let Some(active) = state.active() else {
                return Response::Captured;
            };

            if active.is_disabled() {
                return Response::Captured;
            }

            let selection = Selection {
                id: active.id.clone(),
                value: active.value(),
            };

            item::select(context);

            return Response::Selected(selection);
        }
        Key::Tab => {
            context.dispatch(Action::CloseMenu);

            return Response::Captured;
        }
        Key::Character(_) => return Response::Ignored,
    };

    context.dispatch(Action::focus(focus));

    Response::Captured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Root;
    use crate::Settings;
    use crate::item::{Item, Registration};

    fn menu(root: &Root, items: &[(&str, bool)]) -> Vec<(Item, Registration)> {
        items
            .iter()
            .map(|(value, disabled)| {
                let item = Item::new().value(*value).disabled(*disabled);
                let registration = item.mount(&root.context());

                (item, registration)
            })
            .collect()
    }

    fn press(root: &Root, key: Key) -> Response {
        key_pressed(&root.context(), &key)
    }

    #[test]
    fn closed_menu_ignores_keys() {
        let root = Root::new(None);
        let _items = menu(&root, &[("a", false)]);

        assert_eq!(press(&root, Key::ArrowDown), Response::Ignored);
        assert_eq!(root.state().active_item, None);
    }

    #[test]
    fn arrows_skip_disabled_items_without_wrapping() {
        let root = Root::new(None);
        let _items = menu(&root, &[("a", true), ("b", false), ("c", true), ("d", false)]);
        root.dispatch(Action::OpenMenu);

        assert_eq!(root.active_value().as_deref(), Some("b"));

        assert_eq!(press(&root, Key::ArrowDown), Response::Captured);
        assert_eq!(root.active_value().as_deref(), Some("d"));

        assert_eq!(press(&root, Key::ArrowDown), Response::Captured);
        assert_eq!(root.active_value().as_deref(), Some("d"));

        assert_eq!(press(&root, Key::ArrowUp), Response::Captured);
        assert_eq!(root.active_value().as_deref(), Some("b"));

        assert_eq!(press(&root, Key::ArrowUp), Response::Captured);
        assert_eq!(root.active_value().as_deref(), Some("b"));
    }

    #[test]
    fn home_and_end_jump_to_either_end() {
        let root = Root::new(None);
        let _items = menu(&root, &[("a", false), ("b", false), ("c", false)]);
        root.dispatch(Action::OpenMenu);

        let _ = press(&root, Key::End);
        assert_eq!(root.active_value().as_deref(), Some("c"));

        let _ = press(&root, Key::PageUp);
        assert_eq!(root.active_value().as_deref(), Some("a"));

        let _ = press(&root, Key::PageDown);
        assert_eq!(root.active_value().as_deref(), Some("c"));

        let _ = press(&root, Key::Home);
        assert_eq!(root.active_value().as_deref(), Some("a"));
    }

    #[test]
    fn escape_closes_unless_disabled() {
        let root = Root::new(None);
        root.dispatch(Action::OpenMenu);

        assert_eq!(press(&root, Key::Escape), Response::Captured);
        assert!(!root.is_open());

        let root = Root::with_settings(None, Settings::default().close_on_escape(false));
        root.dispatch(Action::OpenMenu);

        assert_eq!(press(&root, Key::Escape), Response::Ignored);
        assert!(root.is_open());
    }

    #[test]
    fn enter_selects_the_active_item() {
        let root = Root::new(None);
        let items = menu(&root, &[("a", false), ("b", false)]);
        root.dispatch(Action::OpenMenu);
        let _ = press(&root, Key::ArrowDown);

        let response = press(&root, Key::Enter);

        assert_eq!(
            response,
            Response::Selected(Selection {
                id: items[1].1.id().clone(),
                value: Some("b".to_owned()),
            })
        );
        assert_eq!(response.status(), Status::Captured);
        assert!(!root.is_open());
    }

    #[test]
    fn enter_without_active_item_keeps_the_menu_open() {
        let root = Root::new(None);
        let _items = menu(&root, &[("a", true)]);
        root.dispatch(Action::OpenMenu);

        assert_eq!(press(&root, Key::Enter), Response::Captured);
        assert!(root.is_open());
    }

    #[test]
    fn tab_closes_and_characters_are_ignored() {
        let root = Root::new(None);
        root.dispatch(Action::OpenMenu);

        assert_eq!(press(&root, Key::character("x")), Response::Ignored);
        assert!(root.is_open());

        assert_eq!(press(&root, Key::Tab), Response::Captured);
        assert!(!root.is_open());
    }
}
