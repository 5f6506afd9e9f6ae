//! Toggle a menu from its trigger.
use crate::context::Context;
use crate::core::{Action, Focus};
use crate::event::Status::{self, Captured, Ignored};
use crate::keyboard::Key;

/// Toggles the menu because its trigger was clicked.
///
/// Closing the menu this way gives input focus back to the trigger if the
/// menu [`Settings`](crate::Settings) ask for it.
pub fn click(context: &Context) -> Status {
    if context.state().is_open() {
        context.dispatch(Action::CloseMenu);

        if context.settings().restore_focus {
            context.focus_trigger();
        }
    } else {
        context.dispatch(Action::OpenMenu);
    }

    Captured
}

/// Processes a key press received by the trigger of the menu.
///
/// - Enter, space and the down arrow open the menu on its first item.
/// - The up arrow opens the menu on its last item.
pub fn key_pressed(context: &Context, key: &Key) -> Status {
    let focus = match key {
        Key::Enter | Key::Space | Key::ArrowDown => Focus::First,
        Key::ArrowUp => Focus::Last,
        _ => return Ignored,
    };

    context.dispatch(Action::OpenMenu);
    context.dispatch(Action::focus(focus));

    Captured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Root;
    use crate::core::handle::{self, Handle};
    use crate::item::Item;

    use std::cell::Cell;
    use std::rc::Rc;

    struct Trigger {
        id: handle::Id,
        focused: Cell<usize>,
    }

    impl Handle for Trigger {
        fn id(&self) -> handle::Id {
            self.id
        }

        fn focus(&self) {
            self.focused.set(self.focused.get() + 1);
        }
    }

    #[test]
    fn click_toggles_and_restores_focus() {
        let root = Root::new(None);
        let trigger = Rc::new(Trigger {
            id: handle::Id::unique(),
            focused: Cell::new(0),
        });
        root.attach_trigger(&trigger);

        assert_eq!(click(&root.context()), Captured);
        assert!(root.is_open());
        assert_eq!(trigger.focused.get(), 0);

        assert_eq!(click(&root.context()), Captured);
        assert!(!root.is_open());
        assert_eq!(trigger.focused.get(), 1);
    }

    #[test]
    fn arrows_open_on_either_end() {
        let root = Root::new(None);
        let (a, b, c) = (
            Item::new().value("a"),
            Item::new().value("b"),
            Item::new().value("c").disabled(true),
        );
        let _a = a.mount(&root.context());
        let _b = b.mount(&root.context());
        let _c = c.mount(&root.context());

        assert_eq!(key_pressed(&root.context(), &Key::ArrowUp), Captured);
        assert!(root.is_open());
        assert_eq!(root.active_value().as_deref(), Some("b"));

        root.dispatch(Action::CloseMenu);

        assert_eq!(key_pressed(&root.context(), &Key::ArrowDown), Captured);
        assert_eq!(root.active_value().as_deref(), Some("a"));
    }

    #[test]
    fn other_keys_are_ignored() {
        let root = Root::new(None);

        assert_eq!(key_pressed(&root.context(), &Key::Escape), Ignored);
        assert_eq!(key_pressed(&root.context(), &Key::character("x")), Ignored);
        assert!(!root.is_open());
    }

    #[test]
    fn space_opens_the_menu() {
        let root = Root::new(None);

        assert_eq!(key_pressed(&root.context(), &Key::character(" ")), Captured);
        assert!(root.is_open());
    }
}
